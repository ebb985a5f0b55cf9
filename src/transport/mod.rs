//! Transport layer: wire-format details (signing, URLs, error bodies). No I/O.

mod endpoint;
mod error_body;
mod signature;

pub use endpoint::{
    ALIMTALK_PREFIX, BaseUrls, MAIL_PREFIX, SMS_PREFIX, service_path, with_query,
};
pub use error_body::{UpstreamErrorBody, decode_error_body};
pub use signature::{ACCESS_KEY_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER, sign};
