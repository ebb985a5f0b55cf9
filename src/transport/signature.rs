use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub const TIMESTAMP_HEADER: &str = "x-ncp-apigw-timestamp";
pub const ACCESS_KEY_HEADER: &str = "x-ncp-iam-access-key";
pub const SIGNATURE_HEADER: &str = "x-ncp-apigw-signature-v2";

/// Compute the API Gateway v2 signature.
///
/// The signed message is `"{method} {path}\n{timestamp}\n{access_key}"`, where
/// `path` includes the query string but no scheme or host. The result is the
/// HMAC-SHA256 of that message keyed by `secret_key`, in padded standard base64.
pub fn sign(
    method: &str,
    path: &str,
    timestamp: &str,
    access_key: &str,
    secret_key: &str,
) -> String {
    let message = canonical_message(method, path, timestamp, access_key);

    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC-SHA256 accepts any key length"));
    mac.update(message.as_bytes());
    B64.encode(mac.finalize().into_bytes())
}

fn canonical_message(method: &str, path: &str, timestamp: &str, access_key: &str) -> String {
    format!("{method} {path}\n{timestamp}\n{access_key}")
}
