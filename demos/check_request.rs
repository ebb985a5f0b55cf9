use std::io;

use ncpsend::{NcpError, NcpSendBuilder, RequestId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let request_id = std::env::var("NCP_SMS_REQUEST_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NCP_SMS_REQUEST_ID environment variable is required",
        )
    })?;

    let client = NcpSendBuilder::from_env()?.build()?;
    match client.sms().get_request(&RequestId::new(request_id)?).await {
        Ok(list) => {
            for message in list.messages {
                println!("{} {} {}", message.message_id, message.to, message.status);
            }
        }
        Err(NcpError::Api {
            status,
            code,
            message,
        }) => {
            eprintln!("upstream error {status}: code={code:?} message={message:?}");
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
