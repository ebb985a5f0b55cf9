use super::NcpError;
use super::dispatch::Dispatcher;
use crate::domain::{Domain, SendMailRequest, SendMailResponse};
use crate::transport::MAIL_PREFIX;

/// Cloud Outbound Mailer operations. Obtained from [`super::NcpSend::mail`].
///
/// No service id is needed.
#[derive(Debug, Clone, Copy)]
pub struct MailClient<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MailClient<'a> {
    pub(crate) fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Queue a mail for one or more recipients.
    pub async fn send(&self, request: SendMailRequest) -> Result<SendMailResponse, NcpError> {
        let path = format!("{MAIL_PREFIX}/mails");
        self.dispatcher.post(Domain::Mail, &path, &request).await
    }
}
