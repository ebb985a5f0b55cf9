//! Client layer: signed dispatch, service facades and configuration.

mod alimtalk;
mod dispatch;
#[cfg(test)]
mod fake;
mod mail;
mod sms;

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{AccessKey, Domain, Environment, SecretKey, ServiceId, ValidationError};
use crate::transport::BaseUrls;

pub use alimtalk::AlimtalkClient;
pub use dispatch::HttpMethod;
pub use mail::MailClient;
pub use sms::SmsClient;

use dispatch::{Dispatcher, HttpTransport, ReqwestTransport};

const ENV_ACCESS_KEY: &str = "NCP_ACCESS_KEY";
const ENV_SECRET_KEY: &str = "NCP_SECRET_KEY";
const ENV_SMS_SERVICE_ID: &str = "NCP_SMS_SERVICE_ID";
const ENV_ALIMTALK_SERVICE_ID: &str = "NCP_ALIMTALK_SERVICE_ID";
const ENV_GOV: &str = "NCP_GOV";

#[derive(Debug, Clone)]
/// API key pair used to sign every request.
///
/// Immutable once built; the secret key is redacted in `Debug` output.
pub struct Credentials {
    access_key: AccessKey,
    secret_key: SecretKey,
}

impl Credentials {
    /// Validate that both keys are non-empty. Keys are kept byte-for-byte.
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            access_key: AccessKey::new(access_key)?,
            secret_key: SecretKey::new(secret_key)?,
        })
    }

    pub fn access_key(&self) -> &AccessKey {
        &self.access_key
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NcpSend`] and its service facades.
///
/// This error preserves:
/// - local precondition failures (missing service id, invalid values),
/// - upstream failures (any non-2xx status, normalized into [`NcpError::Api`]),
/// - transport and (de)serialization failures.
pub enum NcpError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc). Never retried.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status, with whatever code/message the body carried.
    #[error("API error: HTTP {status} (code: {code:?}, message: {message:?})")]
    Api {
        status: u16,
        code: Option<String>,
        message: Option<String>,
    },

    /// A 2xx body could not be parsed as the expected type.
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// The request body could not be encoded as JSON.
    #[error("cannot serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The facade needs a service id that was not configured. Raised before any
    /// network call.
    #[error("{service} is required; set it on the client builder")]
    MissingServiceId { service: &'static str },

    /// A response value was expected but the server answered without content.
    #[error("expected a response body, got HTTP {status} with no content")]
    EmptyResponse { status: u16 },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl NcpError {
    /// HTTP status of an upstream error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::EmptyResponse { status } => Some(*status),
            _ => None,
        }
    }

    /// Upstream error code (`errorCode` or `error`), if the body carried one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Upstream message, or the raw body when it was not JSON.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`NcpSend`].
///
/// Use this to pick the environment, configure service ids, or customize
/// endpoints, timeout and user-agent.
pub struct NcpSendBuilder {
    credentials: Credentials,
    environment: Environment,
    sms_service_id: Option<ServiceId>,
    alimtalk_service_id: Option<ServiceId>,
    sens_endpoint: Option<String>,
    mail_endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NcpSendBuilder {
    /// Create a builder for the standard environment with no service ids.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::Standard,
            sms_service_id: None,
            alimtalk_service_id: None,
            sens_endpoint: None,
            mail_endpoint: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Read configuration from the process environment.
    ///
    /// - `NCP_ACCESS_KEY`, `NCP_SECRET_KEY` (required)
    /// - `NCP_SMS_SERVICE_ID`, `NCP_ALIMTALK_SERVICE_ID` (optional)
    /// - `NCP_GOV`: `1`/`true`/`yes` selects [`Environment::Government`]
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ValidationError> {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let access_key = value(ENV_ACCESS_KEY).ok_or(ValidationError::Empty {
            field: ENV_ACCESS_KEY,
        })?;
        let secret_key = value(ENV_SECRET_KEY).ok_or(ValidationError::Empty {
            field: ENV_SECRET_KEY,
        })?;

        let mut builder = Self::new(Credentials::new(access_key, secret_key)?);
        if let Some(id) = value(ENV_SMS_SERVICE_ID) {
            builder = builder.sms_service_id(ServiceId::new(id)?);
        }
        if let Some(id) = value(ENV_ALIMTALK_SERVICE_ID) {
            builder = builder.alimtalk_service_id(ServiceId::new(id)?);
        }
        if let Some(flag) = value(ENV_GOV) {
            builder = builder.environment(Environment::from_gov_flag(parse_flag(ENV_GOV, &flag)?));
        }
        Ok(builder)
    }

    /// Select the standard or government URL family.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Service id required by [`SmsClient`] operations.
    pub fn sms_service_id(mut self, service_id: ServiceId) -> Self {
        self.sms_service_id = Some(service_id);
        self
    }

    /// Service id required by [`AlimtalkClient`] operations.
    pub fn alimtalk_service_id(mut self, service_id: ServiceId) -> Self {
        self.alimtalk_service_id = Some(service_id);
        self
    }

    /// Override the SENS base URL (e.g. a local mock server).
    pub fn sens_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sens_endpoint = Some(endpoint.into());
        self
    }

    /// Override the mail base URL.
    pub fn mail_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.mail_endpoint = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// An elapsed timeout surfaces as [`NcpError::Transport`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NcpSend`].
    pub fn build(self) -> Result<NcpSend, NcpError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent.as_deref() {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NcpError::Transport(Box::new(err)))?;

        Ok(self.build_with_transport(Arc::new(ReqwestTransport { client })))
    }

    fn build_with_transport(self, http: Arc<dyn HttpTransport>) -> NcpSend {
        let mut base_urls = BaseUrls::for_environment(self.environment);
        if let Some(endpoint) = self.sens_endpoint {
            base_urls = base_urls.with_sens(endpoint);
        }
        if let Some(endpoint) = self.mail_endpoint {
            base_urls = base_urls.with_mail(endpoint);
        }

        NcpSend {
            environment: self.environment,
            sms_service_id: self.sms_service_id,
            alimtalk_service_id: self.alimtalk_service_id,
            dispatcher: Dispatcher::new(self.credentials, base_urls, http),
        }
    }
}

fn parse_flag(field: &'static str, input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ValidationError::InvalidFlag {
            field,
            input: input.to_owned(),
        }),
    }
}

#[derive(Debug, Clone)]
/// High-level NCP messaging client.
///
/// One instance holds the credentials, the environment and the optional
/// service ids; it is cheap to clone and safe to share across tasks. Every call
/// is signed with a fresh timestamp.
///
/// - [`NcpSend::sms`]: SENS SMS/LMS/MMS
/// - [`NcpSend::alimtalk`]: SENS KakaoTalk AlimTalk
/// - [`NcpSend::mail`]: Cloud Outbound Mailer
pub struct NcpSend {
    environment: Environment,
    sms_service_id: Option<ServiceId>,
    alimtalk_service_id: Option<ServiceId>,
    dispatcher: Dispatcher,
}

impl NcpSend {
    /// Create a standard-environment client without service ids.
    ///
    /// For more customization, use [`NcpSend::builder`].
    pub fn new(credentials: Credentials) -> Self {
        NcpSendBuilder::new(credentials).build_with_transport(Arc::new(ReqwestTransport {
            client: reqwest::Client::new(),
        }))
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NcpSendBuilder {
        NcpSendBuilder::new(credentials)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Base URL requests for `domain` are sent to.
    pub fn base_url(&self, domain: Domain) -> &str {
        self.dispatcher.base_urls().get(domain)
    }

    pub fn sms(&self) -> SmsClient<'_> {
        SmsClient::new(&self.dispatcher, self.sms_service_id.as_ref())
    }

    pub fn alimtalk(&self) -> AlimtalkClient<'_> {
        AlimtalkClient::new(&self.dispatcher, self.alimtalk_service_id.as_ref())
    }

    pub fn mail(&self) -> MailClient<'_> {
        MailClient::new(&self.dispatcher)
    }

    /// Send a signed request to an endpoint the facades do not cover.
    ///
    /// `path` must already contain the query string; it is signed verbatim.
    /// Returns `Ok(None)` when the server answers `204 No Content`.
    pub async fn request<T, B>(
        &self,
        method: HttpMethod,
        domain: Domain,
        path: &str,
        body: Option<&B>,
    ) -> Result<Option<T>, NcpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.dispatcher.request(method, domain, path, body).await
    }
}
