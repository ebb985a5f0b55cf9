use std::io;

use ncpsend::{MailRecipient, NcpSendBuilder, SendMailRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sender = std::env::var("NCP_MAIL_FROM").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NCP_MAIL_FROM environment variable is required",
        )
    })?;
    let recipient = std::env::var("NCP_MAIL_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "NCP_MAIL_TO environment variable is required",
        )
    })?;

    let client = NcpSendBuilder::from_env()?.build()?;
    let request = SendMailRequest::new(
        sender,
        "ncpsend demo",
        "<p>Hello from the ncpsend demo.</p>",
        vec![MailRecipient::to(recipient)],
    );

    let response = client.mail().send(request).await?;
    println!("request_id: {}, count: {}", response.request_id, response.count);

    Ok(())
}
