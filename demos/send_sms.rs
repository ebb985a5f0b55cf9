use std::io;

use ncpsend::{NcpSendBuilder, SendSmsRequest, SmsMessage, SmsType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let from = std::env::var("NCP_SMS_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NCP_SMS_FROM environment variable is required",
        )
    })?;
    let to = std::env::var("NCP_SMS_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NCP_SMS_TO environment variable is required",
        )
    })?;
    let message = std::env::var("NCP_SMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the ncpsend demo.".to_owned());

    let client = NcpSendBuilder::from_env()?.build()?;
    let request = SendSmsRequest::new(SmsType::Sms, from, message, vec![SmsMessage::to(to)]);

    let response = client.sms().send(request).await?;
    println!(
        "request_id: {}, status: {} {}",
        response.request_id, response.status_code, response.status_name
    );

    Ok(())
}
