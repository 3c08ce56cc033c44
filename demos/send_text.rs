use std::io;

use devino::{Address, Credentials, DevinoClient, MessageText, SendOptions, Subject};
use tracing_subscriber::EnvFilter;

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let login = required_env("DEVINO_LOGIN")?;
    let password = required_env("DEVINO_PASSWORD")?;
    let address = required_env("DEVINO_ADDRESS")?;
    let subject = required_env("DEVINO_SUBJECT")?;
    let message = std::env::var("DEVINO_MESSAGE")
        .unwrap_or_else(|_| "Hello from the devino demo.".to_owned());

    let client = DevinoClient::new(Credentials::new(login, password)?);
    let result = client.send_text(
        Address::new(address)?,
        Subject::new(subject)?,
        MessageText::new(message)?,
        SendOptions::default(),
    )?;

    println!(
        "status: {:?}, provider ids: {:?}",
        result.status,
        result.provider_ids()
    );
    Ok(())
}
