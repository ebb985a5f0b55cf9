use serde::Deserialize;

use crate::domain::request::AlimtalkButtonType;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    pub request_id: String,
    pub request_time: String,
    pub status_code: String,
    pub status_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    pub file_id: String,
    pub create_time: String,
    pub expire_time: String,
}

/// Messages accepted under a single `requestId`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessageList {
    pub status_code: String,
    pub status_name: String,
    #[serde(default)]
    pub messages: Vec<SmsMessageResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessageResult {
    pub request_id: String,
    pub message_id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub status: String,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub status_name: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub complete_time: Option<String>,
    #[serde(default)]
    pub telco_code: Option<String>,
    pub request_time: String,
}

/// State of a scheduled (reserved) send; shared by SMS and AlimTalk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveStatus {
    pub reserve_id: String,
    pub reserve_time: String,
    pub reserve_time_zone: String,
    pub reserve_status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAlimtalkResponse {
    pub request_id: String,
    pub request_time: String,
    pub status_code: String,
    pub status_name: String,
    #[serde(default)]
    pub messages: Vec<AlimtalkSendResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkSendResult {
    pub message_id: String,
    #[serde(default)]
    pub country_code: Option<String>,
    pub to: String,
    pub content: String,
    pub request_status_code: String,
    pub request_status_name: String,
    pub request_status_desc: String,
    #[serde(default)]
    pub use_sms_failover: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkMessageList {
    pub status_code: String,
    pub status_name: String,
    #[serde(default)]
    pub messages: Vec<AlimtalkMessageResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkMessageResult {
    pub request_id: String,
    pub message_id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    pub plus_friend_id: String,
    pub template_code: String,
    #[serde(default)]
    pub country_code: Option<String>,
    pub to: String,
    pub content: String,
    pub request_time: String,
    pub status: String,
    #[serde(default)]
    pub status_code: Option<String>,
    #[serde(default)]
    pub status_name: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub complete_time: Option<String>,
    #[serde(default)]
    pub use_sms_failover: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkChannel {
    pub channel_id: String,
    pub channel_name: String,
    pub category_code: String,
    pub create_time: String,
    #[serde(default)]
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateButton {
    #[serde(rename = "type")]
    pub kind: AlimtalkButtonType,
    pub name: String,
    #[serde(default)]
    pub link_mobile: Option<String>,
    #[serde(default)]
    pub link_pc: Option<String>,
    #[serde(default)]
    pub scheme_ios: Option<String>,
    #[serde(default)]
    pub scheme_android: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateComment {
    pub id: String,
    pub content: String,
    pub user_name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkTemplate {
    pub template_code: String,
    pub template_name: String,
    pub template_content: String,
    #[serde(default)]
    pub template_title: Option<String>,
    #[serde(default)]
    pub template_subtitle: Option<String>,
    #[serde(default)]
    pub template_extra: Option<String>,
    #[serde(default)]
    pub template_ad: Option<String>,
    pub template_message_type: String,
    #[serde(default)]
    pub template_emphasize_type: Option<String>,
    #[serde(default)]
    pub template_image_name: Option<String>,
    #[serde(default)]
    pub template_image_url: Option<String>,
    #[serde(default)]
    pub buttons: Vec<TemplateButton>,
    #[serde(default)]
    pub comments: Vec<TemplateComment>,
    pub status: String,
    pub status_name: String,
    pub create_time: String,
    #[serde(default)]
    pub update_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailResponse {
    pub request_id: String,
    pub count: u32,
}
