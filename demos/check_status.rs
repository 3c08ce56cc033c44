use std::io;

use devino::{CheckStatus, Credentials, DevinoClient, DevinoError, MessageId};
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
    // Comma-separated provider ids, e.g. `3158021375,3158021376`.
    let ids_raw = required_env("DEVINO_MESSAGE_IDS")?;

    let ids = ids_raw
        .split(',')
        .map(|id| match id.trim().parse::<u64>() {
            Ok(numeric) => Ok(MessageId::from(numeric)),
            Err(_) => MessageId::token(id),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let client = DevinoClient::new(Credentials::new(login, password)?);
    match client.check_status(CheckStatus::new(ids)?) {
        Ok(result) => {
            for record in &result.result {
                println!("{record}");
            }
        }
        Err(err @ DevinoError::Rejected { .. }) => {
            eprintln!(
                "rejected with HTTP {:?}: {:?}",
                err.http_status(),
                err.gateway_error()
            );
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
