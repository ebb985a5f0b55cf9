//! Signed request dispatch: sign, route, send, normalize.

use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Credentials, NcpError};
use crate::domain::Domain;
use crate::transport::{
    ACCESS_KEY_HEADER, BaseUrls, SIGNATURE_HEADER, TIMESTAMP_HEADER, UpstreamErrorBody,
    decode_error_body, sign,
};

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub(crate) const CONTENT_TYPE_HEADER: &str = "content-type";
const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP verbs used by the gateway APIs.
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Uppercase verb, as it appears in the signed message.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method.into(), &request.url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, value);
            }
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Issues signed calls on behalf of the service facades.
///
/// Holds only immutable state, so one instance can serve concurrent calls.
#[derive(Clone)]
pub(crate) struct Dispatcher {
    credentials: Credentials,
    base_urls: BaseUrls,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("credentials", &self.credentials)
            .field("base_urls", &self.base_urls)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub(crate) fn new(
        credentials: Credentials,
        base_urls: BaseUrls,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            credentials,
            base_urls,
            http,
        }
    }

    pub(crate) fn base_urls(&self) -> &BaseUrls {
        &self.base_urls
    }

    /// Sign and send one call.
    ///
    /// Returns `Ok(None)` for 204, `Ok(Some(body))` for any other 2xx, and
    /// [`NcpError::Api`] for everything else.
    pub(crate) async fn execute(
        &self,
        method: HttpMethod,
        domain: Domain,
        path: &str,
        body: Option<String>,
    ) -> Result<Option<String>, NcpError> {
        let timestamp = now_millis().to_string();
        let signature = sign(
            method.as_str(),
            path,
            &timestamp,
            self.credentials.access_key().as_str(),
            self.credentials.secret_key().expose(),
        );

        let headers = vec![
            (CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.to_owned()),
            (TIMESTAMP_HEADER, timestamp),
            (
                ACCESS_KEY_HEADER,
                self.credentials.access_key().as_str().to_owned(),
            ),
            (SIGNATURE_HEADER, signature),
        ];
        let url = self.base_urls.resolve(domain, path);

        tracing::debug!(
            method = method.as_str(),
            domain = domain.as_str(),
            path,
            "dispatching signed request"
        );

        let response = self
            .http
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await
            .map_err(NcpError::Transport)?;

        if response.status == 204 {
            return Ok(None);
        }
        if (200..=299).contains(&response.status) {
            return Ok(Some(response.body));
        }

        let UpstreamErrorBody { code, message } = decode_error_body(&response.body);
        tracing::debug!(
            status = response.status,
            code = code.as_deref(),
            "upstream returned an error"
        );
        Err(NcpError::Api {
            status: response.status,
            code,
            message,
        })
    }

    /// Typed variant of [`Dispatcher::execute`]: serializes `body` and parses the
    /// success body as `T`.
    pub(crate) async fn request<T, B>(
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
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(NcpError::Serialize)?;

        match self.execute(method, domain, path, body).await? {
            Some(text) => serde_json::from_str(&text)
                .map(Some)
                .map_err(NcpError::Parse),
            None => Ok(None),
        }
    }

    pub(crate) async fn get<T>(&self, domain: Domain, path: &str) -> Result<T, NcpError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(HttpMethod::Get, domain, path, None)
            .await?
            .ok_or(NcpError::EmptyResponse { status: 204 })
    }

    pub(crate) async fn post<T, B>(
        &self,
        domain: Domain,
        path: &str,
        body: &B,
    ) -> Result<T, NcpError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request::<T, B>(HttpMethod::Post, domain, path, Some(body))
            .await?
            .ok_or(NcpError::EmptyResponse { status: 204 })
    }

    /// DELETE whose success body, if any, is ignored.
    pub(crate) async fn delete(&self, domain: Domain, path: &str) -> Result<(), NcpError> {
        self.execute(HttpMethod::Delete, domain, path, None)
            .await
            .map(|_| ())
    }
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::client::fake::{FakeTransport, header};
    use crate::domain::Environment;

    fn dispatcher(environment: Environment, transport: FakeTransport) -> Dispatcher {
        Dispatcher::new(
            Credentials::new("testAccessKey", "testSecretKey").unwrap(),
            BaseUrls::for_environment(environment),
            Arc::new(transport),
        )
    }

    #[tokio::test]
    async fn returns_json_body_unchanged_on_200() {
        let transport = FakeTransport::new(200, r#"{"requestId":"req-123","count":1}"#);
        let dispatcher = dispatcher(Environment::Standard, transport.clone());

        let result: Option<Value> = dispatcher
            .request(
                HttpMethod::Post,
                Domain::Mail,
                "/api/v1/mails",
                Some(&json!({ "test": true })),
            )
            .await
            .unwrap();

        assert_eq!(result, Some(json!({ "requestId": "req-123", "count": 1 })));
        let request = transport.last_request().unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"test":true}"#));
    }

    #[tokio::test]
    async fn returns_none_on_204_without_parsing_the_body() {
        let transport = FakeTransport::new(204, "this is not json");
        let dispatcher = dispatcher(Environment::Standard, transport);

        let result: Option<Value> = dispatcher
            .request::<Value, ()>(
                HttpMethod::Delete,
                Domain::Sens,
                "/sms/v2/services/test/reservations/res1",
                None,
            )
            .await
            .unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn sends_all_signing_headers_on_bodyless_calls() {
        let transport = FakeTransport::new(200, "{}");
        let dispatcher = dispatcher(Environment::Standard, transport.clone());
        let path = "/sms/v2/services/test/messages?requestId=abc";

        let _: Value = dispatcher.get(Domain::Sens, path).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.body, None);
        assert_eq!(
            header(&request, CONTENT_TYPE_HEADER),
            Some("application/json")
        );
        assert_eq!(header(&request, ACCESS_KEY_HEADER), Some("testAccessKey"));

        let timestamp = header(&request, TIMESTAMP_HEADER).unwrap();
        assert!(timestamp.parse::<u64>().is_ok());
        let expected = sign("GET", path, timestamp, "testAccessKey", "testSecretKey");
        assert_eq!(header(&request, SIGNATURE_HEADER), Some(expected.as_str()));
    }

    #[tokio::test]
    async fn signs_with_keys_exactly_as_given() {
        let transport = FakeTransport::new(200, "{}");
        let dispatcher = Dispatcher::new(
            Credentials::new(" ak ", " sk ").unwrap(),
            BaseUrls::for_environment(Environment::Standard),
            Arc::new(transport.clone()),
        );

        let _: Value = dispatcher.get(Domain::Sens, "/p").await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(header(&request, ACCESS_KEY_HEADER), Some(" ak "));
        let timestamp = header(&request, TIMESTAMP_HEADER).unwrap();
        let expected = sign("GET", "/p", timestamp, " ak ", " sk ");
        assert_eq!(header(&request, SIGNATURE_HEADER), Some(expected.as_str()));
        assert_ne!(
            header(&request, SIGNATURE_HEADER),
            Some(sign("GET", "/p", timestamp, "ak", "sk").as_str())
        );
    }

    #[tokio::test]
    async fn each_call_is_signed_with_its_own_timestamp() {
        let transport = FakeTransport::new(200, "{}");
        let dispatcher = dispatcher(Environment::Standard, transport.clone());

        let _: Value = dispatcher.get(Domain::Sens, "/a").await.unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let _: Value = dispatcher.get(Domain::Sens, "/a").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_ne!(
            header(&requests[0], TIMESTAMP_HEADER),
            header(&requests[1], TIMESTAMP_HEADER)
        );
        assert_ne!(
            header(&requests[0], SIGNATURE_HEADER),
            header(&requests[1], SIGNATURE_HEADER)
        );
    }

    #[tokio::test]
    async fn maps_sens_error_shape() {
        let transport = FakeTransport::new(
            403,
            r#"{"status":403,"error":"Forbidden","message":"Authentication failed"}"#,
        );
        let dispatcher = dispatcher(Environment::Standard, transport);

        let err = dispatcher
            .request::<Value, ()>(
                HttpMethod::Post,
                Domain::Sens,
                "/sms/v2/services/test/messages",
                None,
            )
            .await
            .unwrap_err();

        match err {
            NcpError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 403);
                assert_eq!(code.as_deref(), Some("Forbidden"));
                assert_eq!(message.as_deref(), Some("Authentication failed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn maps_mail_error_shape() {
        let transport =
            FakeTransport::new(400, r#"{"errorCode":"77102","message":"Invalid parameter"}"#);
        let dispatcher = dispatcher(Environment::Standard, transport);

        let err = dispatcher
            .request::<Value, ()>(HttpMethod::Post, Domain::Mail, "/api/v1/mails", None)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            NcpError::Api { status: 400, ref code, ref message }
                if code.as_deref() == Some("77102")
                    && message.as_deref() == Some("Invalid parameter")
        ));
    }

    #[tokio::test]
    async fn maps_5xx_json_error() {
        let transport = FakeTransport::new(
            500,
            r#"{"status":500,"error":"Internal Server Error","message":"Something went wrong"}"#,
        );
        let dispatcher = dispatcher(Environment::Standard, transport);

        let err = dispatcher
            .get::<Value>(Domain::Sens, "/sms/v2/services/test/messages/m1")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.code(), Some("Internal Server Error"));
    }

    #[tokio::test]
    async fn keeps_raw_text_for_non_json_errors() {
        let html = "<html><body>502 Bad Gateway</body></html>";
        let transport = FakeTransport::new(502, html);
        let dispatcher = dispatcher(Environment::Standard, transport);

        let err = dispatcher
            .get::<Value>(Domain::Sens, "/sms/v2/services/test/messages/m1")
            .await
            .unwrap_err();

        match err {
            NcpError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 502);
                assert_eq!(code, None);
                assert_eq!(message.as_deref(), Some(html));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn keeps_raw_text_for_null_error_body() {
        let transport = FakeTransport::new(500, "null");
        let dispatcher = dispatcher(Environment::Standard, transport);

        let err = dispatcher
            .get::<Value>(Domain::Sens, "/sms/v2/services/test/messages/m1")
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), Some("null"));
    }

    #[tokio::test]
    async fn invalid_success_body_is_a_parse_error() {
        let transport = FakeTransport::new(200, "{ not json }");
        let dispatcher = dispatcher(Environment::Standard, transport);

        let err = dispatcher
            .get::<Value>(Domain::Mail, "/api/v1/mails")
            .await
            .unwrap_err();
        assert!(matches!(err, NcpError::Parse(_)));
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let transport = FakeTransport::failing("connection refused");
        let dispatcher = dispatcher(Environment::Standard, transport.clone());

        let err = dispatcher
            .get::<Value>(Domain::Sens, "/sms/v2/services/test/messages/m1")
            .await
            .unwrap_err();
        match err {
            NcpError::Transport(source) => assert_eq!(source.to_string(), "connection refused"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn delete_ignores_success_body() {
        let transport = FakeTransport::new(200, "");
        let dispatcher = dispatcher(Environment::Standard, transport.clone());

        dispatcher
            .delete(Domain::Sens, "/sms/v2/services/test/reservations/r1")
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().unwrap().method,
            HttpMethod::Delete
        );
    }

    #[tokio::test]
    async fn unexpected_204_for_a_value_is_reported() {
        let transport = FakeTransport::new(204, "");
        let dispatcher = dispatcher(Environment::Standard, transport);

        let err = dispatcher
            .get::<Value>(Domain::Sens, "/sms/v2/services/test/messages/m1")
            .await
            .unwrap_err();
        assert!(matches!(err, NcpError::EmptyResponse { status: 204 }));
    }

    #[tokio::test]
    async fn routes_by_environment_and_domain() {
        let transport = FakeTransport::new(200, "{}");
        let gov = dispatcher(Environment::Government, transport.clone());
        let _: Value = gov.get(Domain::Sens, "/x").await.unwrap();
        let _: Value = gov.get(Domain::Mail, "/y").await.unwrap();

        let standard = dispatcher(Environment::Standard, transport.clone());
        let _: Value = standard.get(Domain::Sens, "/x").await.unwrap();

        let urls = transport
            .requests()
            .into_iter()
            .map(|request| request.url)
            .collect::<Vec<_>>();
        assert_eq!(
            urls,
            vec![
                "https://sens.apigw.gov-ntruss.com/x",
                "https://mail.apigw.gov-ntruss.com/y",
                "https://sens.apigw.ntruss.com/x",
            ]
        );
    }

    #[test]
    fn http_methods_render_uppercase() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.as_str(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert_eq!(reqwest::Method::from(HttpMethod::Delete), reqwest::Method::DELETE);
    }
}
