//! Typed Rust client for the Devino Telecom Viber gateway.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! the gateway's JSON wire format, and a small blocking client that runs requests
//! and turns error answers into [`DevinoError`].
//!
//! ```rust,no_run
//! use devino::{Address, Credentials, DevinoClient, MessageText, SendOptions, Subject};
//!
//! fn main() -> Result<(), devino::DevinoError> {
//!     let client = DevinoClient::new(Credentials::new("login", "password")?);
//!     let result = client.send_text(
//!         Address::new("79251234567")?,
//!         Subject::new("my-shop")?,
//!         MessageText::new("hello")?,
//!         SendOptions::default(),
//!     )?;
//!     println!("sent: {:?}", result.provider_ids());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, DEFAULT_BASE_URL, DevinoClient, DevinoClientBuilder, DevinoError, SEND_PATH,
    STATUS_PATH,
};
pub use domain::{
    Address, ApiResult, Button, ButtonAction, ButtonCaption, CheckStatus, ContentType,
    GatewayError, ImageUrl, Login, MessageId, MessageText, Password, Priority, SendOptions,
    SendViber, SmsFallback, SmsSenderAddress, Subject, ValidationError, ValidityPeriod,
    ViberContent,
};
