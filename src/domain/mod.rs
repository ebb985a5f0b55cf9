//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    AlimtalkButton, AlimtalkButtonType, AlimtalkItem, AlimtalkMessage, ContentType,
    FailoverConfig, FailoverType, FileRef, FileUploadRequest, MailRecipient, RecipientType,
    SendAlimtalkRequest, SendMailRequest, SendSmsRequest, SmsMessage, SmsType, TemplateQuery,
    TitledText,
};
pub use response::{
    AlimtalkChannel, AlimtalkMessageList, AlimtalkMessageResult, AlimtalkSendResult,
    AlimtalkTemplate, FileUploadResponse, ReserveStatus, SendAlimtalkResponse, SendMailResponse,
    SendSmsResponse, SmsMessageList, SmsMessageResult, TemplateButton, TemplateComment,
};
pub use validation::ValidationError;
pub use value::{
    AccessKey, ChannelId, Domain, Environment, MessageId, RequestId, ReserveId, SecretKey,
    ServiceId, TemplateCode,
};
