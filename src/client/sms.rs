use super::NcpError;
use super::dispatch::Dispatcher;
use crate::domain::{
    Domain, FileUploadRequest, FileUploadResponse, MessageId, RequestId, ReserveId, ReserveStatus,
    SendSmsRequest, SendSmsResponse, ServiceId, SmsMessageList, SmsMessageResult,
};
use crate::transport::{SMS_PREFIX, service_path, with_query};

const SERVICE: &str = "smsServiceId";

/// SENS SMS/LMS/MMS operations. Obtained from [`super::NcpSend::sms`].
///
/// Every operation requires the SMS service id and fails with
/// [`NcpError::MissingServiceId`] before touching the network when it is absent.
#[derive(Debug, Clone, Copy)]
pub struct SmsClient<'a> {
    dispatcher: &'a Dispatcher,
    service_id: Option<&'a ServiceId>,
}

impl<'a> SmsClient<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher, service_id: Option<&'a ServiceId>) -> Self {
        Self {
            dispatcher,
            service_id,
        }
    }

    fn base_path(&self) -> Result<String, NcpError> {
        let service_id = self
            .service_id
            .ok_or(NcpError::MissingServiceId { service: SERVICE })?;
        Ok(service_path(SMS_PREFIX, service_id))
    }

    /// Send a message to one or more recipients.
    pub async fn send(&self, request: SendSmsRequest) -> Result<SendSmsResponse, NcpError> {
        let path = format!("{}/messages", self.base_path()?);
        self.dispatcher.post(Domain::Sens, &path, &request).await
    }

    /// List the messages accepted under `request_id`.
    pub async fn get_request(&self, request_id: &RequestId) -> Result<SmsMessageList, NcpError> {
        let path = with_query(
            format!("{}/messages", self.base_path()?),
            &[(RequestId::FIELD, Some(request_id.as_str()))],
        );
        self.dispatcher.get(Domain::Sens, &path).await
    }

    /// Fetch the delivery result of a single message.
    pub async fn get_message(&self, message_id: &MessageId) -> Result<SmsMessageResult, NcpError> {
        let path = format!("{}/messages/{}", self.base_path()?, message_id.as_str());
        self.dispatcher.get(Domain::Sens, &path).await
    }

    pub async fn get_reserve_status(
        &self,
        reserve_id: &ReserveId,
    ) -> Result<ReserveStatus, NcpError> {
        let path = format!(
            "{}/reservations/{}/reserve-status",
            self.base_path()?,
            reserve_id.as_str()
        );
        self.dispatcher.get(Domain::Sens, &path).await
    }

    /// Cancel a scheduled send.
    pub async fn cancel_reserve(&self, reserve_id: &ReserveId) -> Result<(), NcpError> {
        let path = format!("{}/reservations/{}", self.base_path()?, reserve_id.as_str());
        self.dispatcher.delete(Domain::Sens, &path).await
    }

    /// Upload an MMS attachment; reference the returned `file_id` in
    /// [`SendSmsRequest::files`].
    pub async fn upload_file(
        &self,
        request: FileUploadRequest,
    ) -> Result<FileUploadResponse, NcpError> {
        let path = format!("{}/files", self.base_path()?);
        self.dispatcher.post(Domain::Sens, &path, &request).await
    }
}
