//! Typed Rust client for the NAVER Cloud Platform messaging APIs: SENS SMS,
//! SENS KakaoTalk AlimTalk and Cloud Outbound Mailer.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format details (request signing, base URLs, error bodies), and a
//! small client layer that signs and dispatches calls.
//!
//! ```rust,no_run
//! use ncpsend::{Credentials, NcpSend, SendSmsRequest, ServiceId, SmsMessage, SmsType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ncpsend::NcpError> {
//!     let client = NcpSend::builder(Credentials::new("access", "secret")?)
//!         .sms_service_id(ServiceId::new("ncp:sms:kr:123456789012:my-service")?)
//!         .build()?;
//!     let request = SendSmsRequest::new(
//!         SmsType::Sms,
//!         "01012345678",
//!         "hello",
//!         vec![SmsMessage::to("01098765432")],
//!     );
//!     let _resp = client.sms().send(request).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    AlimtalkClient, Credentials, HttpMethod, MailClient, NcpError, NcpSend, NcpSendBuilder,
    SmsClient,
};
pub use domain::{
    AccessKey, AlimtalkMessage, ChannelId, Domain, Environment, FileUploadRequest, MailRecipient,
    MessageId, RequestId, ReserveId, SecretKey, SendAlimtalkRequest, SendMailRequest,
    SendSmsRequest, ServiceId, SmsMessage, SmsType, TemplateCode, TemplateQuery, ValidationError,
};
pub use transport::sign;
