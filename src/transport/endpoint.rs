use crate::domain::{Domain, Environment, ServiceId};

pub const SMS_PREFIX: &str = "/sms/v2";
pub const ALIMTALK_PREFIX: &str = "/alimtalk/v2";
pub const MAIL_PREFIX: &str = "/api/v1";

const STANDARD_SENS: &str = "https://sens.apigw.ntruss.com";
const STANDARD_MAIL: &str = "https://mail.apigw.ntruss.com";
const GOV_SENS: &str = "https://sens.apigw.gov-ntruss.com";
const GOV_MAIL: &str = "https://mail.apigw.gov-ntruss.com";

/// Base URL per [`Domain`], fixed once a client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    sens: String,
    mail: String,
}

impl BaseUrls {
    pub fn for_environment(environment: Environment) -> Self {
        let (sens, mail) = match environment {
            Environment::Standard => (STANDARD_SENS, STANDARD_MAIL),
            Environment::Government => (GOV_SENS, GOV_MAIL),
        };
        Self {
            sens: sens.to_owned(),
            mail: mail.to_owned(),
        }
    }

    pub fn with_sens(mut self, base: impl Into<String>) -> Self {
        self.sens = trim_trailing_slash(base.into());
        self
    }

    pub fn with_mail(mut self, base: impl Into<String>) -> Self {
        self.mail = trim_trailing_slash(base.into());
        self
    }

    pub fn get(&self, domain: Domain) -> &str {
        match domain {
            Domain::Sens => &self.sens,
            Domain::Mail => &self.mail,
        }
    }

    /// Absolute URL for an already formed `path` (query string included).
    pub fn resolve(&self, domain: Domain, path: &str) -> String {
        format!("{}{}", self.get(domain), path)
    }
}

fn trim_trailing_slash(mut base: String) -> String {
    while base.ends_with('/') {
        base.pop();
    }
    base
}

/// `{prefix}/services/{serviceId}`
pub fn service_path(prefix: &str, service_id: &ServiceId) -> String {
    format!("{prefix}/services/{}", service_id.as_str())
}

/// Append form-urlencoded query parameters; `None` values are skipped.
pub fn with_query(path: String, params: &[(&str, Option<&str>)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in params {
        if let Some(value) = value {
            serializer.append_pair(key, value);
            any = true;
        }
    }
    if !any {
        return path;
    }
    format!("{path}?{}", serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environments_select_their_url_family() {
        let standard = BaseUrls::for_environment(Environment::Standard);
        assert_eq!(standard.get(Domain::Sens), "https://sens.apigw.ntruss.com");
        assert_eq!(standard.get(Domain::Mail), "https://mail.apigw.ntruss.com");

        let gov = BaseUrls::for_environment(Environment::Government);
        assert_eq!(gov.get(Domain::Sens), "https://sens.apigw.gov-ntruss.com");
        assert_eq!(gov.get(Domain::Mail), "https://mail.apigw.gov-ntruss.com");
    }

    #[test]
    fn overrides_drop_trailing_slashes() {
        let urls = BaseUrls::for_environment(Environment::Standard)
            .with_sens("http://127.0.0.1:8080/")
            .with_mail("http://127.0.0.1:9090");
        assert_eq!(
            urls.resolve(Domain::Sens, "/sms/v2/services/x/messages"),
            "http://127.0.0.1:8080/sms/v2/services/x/messages"
        );
        assert_eq!(
            urls.resolve(Domain::Mail, "/api/v1/mails"),
            "http://127.0.0.1:9090/api/v1/mails"
        );
    }

    #[test]
    fn service_path_embeds_id_verbatim() {
        let id = ServiceId::new("ncp:sms:kr:123456:test").unwrap();
        assert_eq!(
            service_path(SMS_PREFIX, &id),
            "/sms/v2/services/ncp:sms:kr:123456:test"
        );
    }

    #[test]
    fn with_query_encodes_values_and_skips_missing() {
        assert_eq!(
            with_query("/t".to_owned(), &[("channelId", Some("ch-1"))]),
            "/t?channelId=ch-1"
        );
        assert_eq!(
            with_query(
                "/t".to_owned(),
                &[("channelId", Some("ch 1&x")), ("templateCode", None)]
            ),
            "/t?channelId=ch+1%26x"
        );
        assert_eq!(with_query("/t".to_owned(), &[("a", None)]), "/t");
    }
}
