use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::value::{ChannelId, TemplateCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SmsType {
    #[default]
    Sms,
    Lms,
    Mms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    /// General message.
    #[default]
    Comm,
    /// Advertisement.
    Ad,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
    #[serde(rename = "type")]
    pub kind: SmsType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub content: String,
    pub messages: Vec<SmsMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_time_zone: Option<String>,
}

impl SendSmsRequest {
    pub fn new(
        kind: SmsType,
        from: impl Into<String>,
        content: impl Into<String>,
        messages: Vec<SmsMessage>,
    ) -> Self {
        Self {
            kind,
            from: from.into(),
            content: content.into(),
            messages,
            ..Default::default()
        }
    }
}

/// One recipient of an SMS send; `subject`/`content` override the request defaults.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsMessage {
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SmsMessage {
    pub fn to(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub file_id: String,
}

/// MMS attachment upload. `file_body` is the base64-encoded file content.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadRequest {
    pub file_name: String,
    pub file_body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlimtalkButtonType {
    /// Delivery tracking.
    #[serde(rename = "DS")]
    DeliverySearch,
    /// Web link.
    #[serde(rename = "WL")]
    WebLink,
    /// App link.
    #[serde(rename = "AL")]
    AppLink,
    /// Bot keyword.
    #[serde(rename = "BK")]
    BotKeyword,
    /// Message delivery.
    #[serde(rename = "MD")]
    MessageDelivery,
    /// Channel add.
    #[serde(rename = "AC")]
    AddChannel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkButton {
    #[serde(rename = "type")]
    pub kind: AlimtalkButtonType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_pc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_ios: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme_android: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAlimtalkRequest {
    pub plus_friend_id: String,
    pub template_code: String,
    pub messages: Vec<AlimtalkMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_time_zone: Option<String>,
}

impl SendAlimtalkRequest {
    pub fn new(
        plus_friend_id: impl Into<String>,
        template_code: impl Into<String>,
        messages: Vec<AlimtalkMessage>,
    ) -> Self {
        Self {
            plus_friend_id: plus_friend_id.into(),
            template_code: template_code.into(),
            messages,
            reserve_time: None,
            reserve_time_zone: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitledText {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkItem {
    pub list: Vec<TitledText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<TitledText>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FailoverType {
    Sms,
    Lms,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailoverConfig {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<FailoverType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlimtalkMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_highlight: Option<TitledText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<AlimtalkItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<AlimtalkButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_sms_failover: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failover_config: Option<FailoverConfig>,
}

impl AlimtalkMessage {
    pub fn new(to: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            content: content.into(),
            ..Default::default()
        }
    }
}

/// Filter for the AlimTalk template listing.
#[derive(Debug, Clone)]
pub struct TemplateQuery {
    pub channel_id: ChannelId,
    pub template_code: Option<TemplateCode>,
}

impl TemplateQuery {
    pub fn channel(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            template_code: None,
        }
    }

    pub fn with_template_code(mut self, template_code: TemplateCode) -> Self {
        self.template_code = Some(template_code);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RecipientType {
    /// Primary recipient.
    #[default]
    #[serde(rename = "R")]
    To,
    /// Carbon copy.
    #[serde(rename = "C")]
    Cc,
    /// Blind carbon copy.
    #[serde(rename = "B")]
    Bcc,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MailRecipient {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: RecipientType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
}

impl MailRecipient {
    pub fn to(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMailRequest {
    pub sender_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_sid: Option<u64>,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_and_send: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertising: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_utc: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attach_file_ids: Option<Vec<String>>,
    pub recipients: Vec<MailRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_basic_unsubscribe_msg: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsubscribe_message: Option<String>,
}

impl SendMailRequest {
    pub fn new(
        sender_address: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        recipients: Vec<MailRecipient>,
    ) -> Self {
        Self {
            sender_address: sender_address.into(),
            title: title.into(),
            body: body.into(),
            recipients,
            ..Default::default()
        }
    }
}
