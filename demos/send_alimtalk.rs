use std::io;

use ncpsend::{AlimtalkMessage, NcpSendBuilder, SendAlimtalkRequest};

fn required(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let channel = required("NCP_ALIMTALK_CHANNEL")?;
    let template = required("NCP_ALIMTALK_TEMPLATE")?;
    let to = required("NCP_ALIMTALK_TO")?;
    let content = required("NCP_ALIMTALK_CONTENT")?;

    let client = NcpSendBuilder::from_env()?.build()?;
    let request =
        SendAlimtalkRequest::new(channel, template, vec![AlimtalkMessage::new(to, content)]);

    let response = client.alimtalk().send(request).await?;
    for message in response.messages {
        println!(
            "{} -> {}: {}",
            message.message_id, message.to, message.request_status_desc
        );
    }

    Ok(())
}
