use super::NcpError;
use super::dispatch::Dispatcher;
use crate::domain::{
    AlimtalkChannel, AlimtalkMessageList, AlimtalkMessageResult, AlimtalkTemplate, ChannelId,
    Domain, MessageId, RequestId, ReserveId, ReserveStatus, SendAlimtalkRequest,
    SendAlimtalkResponse, ServiceId, TemplateCode, TemplateQuery,
};
use crate::transport::{ALIMTALK_PREFIX, service_path, with_query};

const SERVICE: &str = "alimtalkServiceId";

/// SENS KakaoTalk AlimTalk operations. Obtained from [`super::NcpSend::alimtalk`].
///
/// Like [`super::SmsClient`], every call needs the AlimTalk service id.
#[derive(Debug, Clone, Copy)]
pub struct AlimtalkClient<'a> {
    dispatcher: &'a Dispatcher,
    service_id: Option<&'a ServiceId>,
}

impl<'a> AlimtalkClient<'a> {
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
        Ok(service_path(ALIMTALK_PREFIX, service_id))
    }

    /// Send a templated message to one or more recipients.
    pub async fn send(
        &self,
        request: SendAlimtalkRequest,
    ) -> Result<SendAlimtalkResponse, NcpError> {
        let path = format!("{}/messages", self.base_path()?);
        self.dispatcher.post(Domain::Sens, &path, &request).await
    }

    pub async fn get_request(
        &self,
        request_id: &RequestId,
    ) -> Result<AlimtalkMessageList, NcpError> {
        let path = with_query(
            format!("{}/messages", self.base_path()?),
            &[(RequestId::FIELD, Some(request_id.as_str()))],
        );
        self.dispatcher.get(Domain::Sens, &path).await
    }

    pub async fn get_message(
        &self,
        message_id: &MessageId,
    ) -> Result<AlimtalkMessageResult, NcpError> {
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

    pub async fn cancel_reserve(&self, reserve_id: &ReserveId) -> Result<(), NcpError> {
        let path = format!("{}/reservations/{}", self.base_path()?, reserve_id.as_str());
        self.dispatcher.delete(Domain::Sens, &path).await
    }

    /// KakaoTalk channels linked to the service.
    pub async fn get_channels(&self) -> Result<Vec<AlimtalkChannel>, NcpError> {
        let path = format!("{}/channels", self.base_path()?);
        self.dispatcher.get(Domain::Sens, &path).await
    }

    /// Templates registered for a channel, optionally narrowed to one template code.
    pub async fn get_templates(
        &self,
        query: &TemplateQuery,
    ) -> Result<Vec<AlimtalkTemplate>, NcpError> {
        let path = with_query(
            format!("{}/templates", self.base_path()?),
            &[
                (ChannelId::FIELD, Some(query.channel_id.as_str())),
                (
                    TemplateCode::FIELD,
                    query.template_code.as_ref().map(TemplateCode::as_str),
                ),
            ],
        );
        self.dispatcher.get(Domain::Sens, &path).await
    }
}
