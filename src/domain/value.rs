use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// NCP API access key (`x-ncp-iam-access-key`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct AccessKey(String);

impl AccessKey {
    /// Configuration field name (`accessKey`).
    pub const FIELD: &'static str = "accessKey";

    /// Create a validated [`AccessKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
/// NCP API secret key used to sign every request.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The
/// value is redacted in `Debug` output.
pub struct SecretKey(String);

impl SecretKey {
    /// Configuration field name (`secretKey`).
    pub const FIELD: &'static str = "secretKey";

    /// Create a validated [`SecretKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the secret. Only the signer should need this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SENS service identifier, e.g. `ncp:sms:kr:123456789012:my-service`.
///
/// Invariant: non-empty after trimming.
pub struct ServiceId(String);

impl ServiceId {
    /// Configuration field name (`serviceId`).
    pub const FIELD: &'static str = "serviceId";

    /// Create a validated [`ServiceId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated service id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Request id (`requestId`) returned by a send call.
///
/// Invariant: non-empty after trimming.
pub struct RequestId(String);

impl RequestId {
    /// Query parameter name used by SENS (`requestId`).
    pub const FIELD: &'static str = "requestId";

    /// Create a validated [`RequestId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated request id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Per-recipient message id (`messageId`).
///
/// Invariant: non-empty after trimming.
pub struct MessageId(String);

impl MessageId {
    pub const FIELD: &'static str = "messageId";

    /// Create a validated [`MessageId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Reservation id (`reserveId`) of a scheduled send.
///
/// Invariant: non-empty after trimming.
pub struct ReserveId(String);

impl ReserveId {
    pub const FIELD: &'static str = "reserveId";

    /// Create a validated [`ReserveId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// KakaoTalk channel id (`channelId`).
///
/// Invariant: non-empty after trimming.
pub struct ChannelId(String);

impl ChannelId {
    /// Query parameter name used by SENS (`channelId`).
    pub const FIELD: &'static str = "channelId";

    /// Create a validated [`ChannelId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// AlimTalk template code (`templateCode`).
///
/// Invariant: non-empty after trimming.
pub struct TemplateCode(String);

impl TemplateCode {
    /// Query parameter name used by SENS (`templateCode`).
    pub const FIELD: &'static str = "templateCode";

    /// Create a validated [`TemplateCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// NCP deployment a client talks to.
pub enum Environment {
    /// Public cloud (`*.apigw.ntruss.com`).
    #[default]
    Standard,
    /// Government cloud (`*.apigw.gov-ntruss.com`).
    Government,
}

impl Environment {
    /// Map the `isGov` style flag onto an environment.
    pub fn from_gov_flag(is_gov: bool) -> Self {
        if is_gov {
            Self::Government
        } else {
            Self::Standard
        }
    }

    pub fn is_gov(self) -> bool {
        matches!(self, Self::Government)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Upstream API family; each has its own base URL per [`Environment`].
pub enum Domain {
    /// SENS messaging gateway (SMS, AlimTalk).
    Sens,
    /// Cloud Outbound Mailer.
    Mail,
}

impl Domain {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sens => "sens",
            Self::Mail => "mail",
        }
    }
}
