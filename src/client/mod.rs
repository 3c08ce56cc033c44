//! Client layer: authenticates requests, runs them and classifies the answers.

use std::error::Error as StdError;
use std::ops::RangeInclusive;
use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;

use crate::domain::{
    Address, ApiResult, Button, CheckStatus, GatewayError, ImageUrl, Login, MessageText, Password,
    SendOptions, SendViber, Subject, ValidationError, ViberContent,
};

pub const DEFAULT_BASE_URL: &str = "https://viber.devinotele.com:444";
pub const SEND_PATH: &str = "/send";
pub const STATUS_PATH: &str = "/status";

/// Statuses answered with a `Code`/`Description` body. Anything outside the
/// range, including 501 and above, is parsed as a regular answer.
const REJECTION_STATUSES: RangeInclusive<u16> = 400..=500;

const BASE_URL_FIELD: &str = "base_url";

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: &Value,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        authorization: &str,
        body: &Value,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, authorization)
            .json(body)
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone)]
/// Login/password pair used for HTTP Basic authentication.
pub struct Credentials {
    login: Login,
    password: Password,
}

impl Credentials {
    /// Validate both parts: the login must be non-empty after trimming, the
    /// password must be non-empty.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    /// `Authorization` header value: `Basic base64(login:password)`.
    pub fn authorization_header(&self) -> String {
        let pair = format!("{}:{}", self.login.as_str(), self.password.as_str());
        format!("Basic {}", BASE64.encode(pair))
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DevinoClient`].
///
/// Use [`DevinoError::http_status`] and [`DevinoError::gateway_error`] to inspect
/// a rejection without matching on the variants.
pub enum DevinoError {
    /// The request did not complete (DNS, connect, TLS, reading the body).
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn StdError + Send + Sync>),

    /// The gateway answered with a status in `400..=500`.
    #[error("request rejected with HTTP status {status}: {error}")]
    Rejected { status: u16, error: GatewayError },

    /// A successful answer was not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl DevinoError {
    /// HTTP status of a rejected request.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured `Code`/`Description` of a rejected request.
    pub fn gateway_error(&self) -> Option<&GatewayError> {
        match self {
            Self::Rejected { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`DevinoClient`].
pub struct DevinoClientBuilder {
    credentials: Credentials,
    base_url: String,
    user_agent: Option<String>,
}

impl DevinoClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            user_agent: None,
        }
    }

    /// Override the gateway base URL; `/send` and `/status` are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`DevinoClient`].
    ///
    /// Fails with [`DevinoError::Validation`] if the base URL does not parse.
    pub fn build(self) -> Result<DevinoClient, DevinoError> {
        let base_url = normalize_base_url(self.base_url)?;

        let mut builder = reqwest::blocking::Client::builder();
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| DevinoError::Connection(Box::new(err)))?;

        Ok(DevinoClient {
            credentials: self.credentials,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn normalize_base_url(base_url: String) -> Result<String, ValidationError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ValidationError::Empty {
            field: BASE_URL_FIELD,
        });
    }
    if url::Url::parse(trimmed).is_err() {
        return Err(ValidationError::InvalidUrl {
            field: BASE_URL_FIELD,
            input: base_url,
        });
    }
    Ok(trimmed.to_owned())
}

#[derive(Clone)]
/// Blocking client for the Devino Viber gateway.
///
/// A client holds only its credentials, base URL and HTTP connection pool, so one
/// instance can be cloned or shared between threads freely. Every call is a single
/// POST: there are no retries and no timeout beyond the HTTP client's own default.
pub struct DevinoClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl DevinoClient {
    /// Create a client for [`DEFAULT_BASE_URL`].
    ///
    /// For more customization, use [`DevinoClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
            }),
        }
    }

    pub fn builder(credentials: Credentials) -> DevinoClientBuilder {
        DevinoClientBuilder::new(credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one Viber message.
    ///
    /// Errors:
    /// - [`DevinoError::Connection`] when the gateway cannot be reached,
    /// - [`DevinoError::Rejected`] for HTTP statuses `400..=500`,
    /// - [`DevinoError::Parse`] when any other answer is not JSON.
    pub fn send(&self, request: SendViber) -> Result<ApiResult, DevinoError> {
        let body = crate::transport::encode_send_json(&request);
        tracing::debug!(
            address = request.address().as_str(),
            content_type = %request.content_type(),
            priority = %request.options().priority,
            "sending viber message"
        );
        let answer = self.execute(SEND_PATH, &body)?;
        Ok(crate::transport::api_result_from_answer(&answer, body))
    }

    pub fn send_text(
        &self,
        address: Address,
        subject: Subject,
        text: MessageText,
        options: SendOptions,
    ) -> Result<ApiResult, DevinoError> {
        self.send(SendViber::new(
            address,
            subject,
            ViberContent::Text(text),
            options,
        ))
    }

    pub fn send_image(
        &self,
        address: Address,
        subject: Subject,
        image: ImageUrl,
        options: SendOptions,
    ) -> Result<ApiResult, DevinoError> {
        self.send(SendViber::new(
            address,
            subject,
            ViberContent::Image(image),
            options,
        ))
    }

    /// Send text with a button. `button.image` is optional and omitted from the
    /// body when `None`.
    pub fn send_text_and_button(
        &self,
        address: Address,
        subject: Subject,
        button: Button,
        options: SendOptions,
    ) -> Result<ApiResult, DevinoError> {
        self.send(SendViber::new(
            address,
            subject,
            ViberContent::Button(button),
            options,
        ))
    }

    /// Query delivery status for messages returned by earlier sends.
    pub fn check_status(&self, request: CheckStatus) -> Result<ApiResult, DevinoError> {
        let body =
            crate::transport::encode_check_status_json(&request).map_err(DevinoError::Encode)?;
        tracing::debug!(
            count = request.message_ids().len(),
            "checking message status"
        );
        let answer = self.execute(STATUS_PATH, &body)?;
        Ok(crate::transport::api_result_from_answer(&answer, body))
    }

    fn execute(&self, path: &str, body: &Value) -> Result<Value, DevinoError> {
        let url = format!("{}{path}", self.base_url);
        let authorization = self.credentials.authorization_header();

        let response = self
            .http
            .post_json(&url, &authorization, body)
            .map_err(DevinoError::Connection)?;
        tracing::debug!(path, status = response.status, "gateway answered");

        if REJECTION_STATUSES.contains(&response.status) {
            let error = crate::transport::decode_gateway_error(&response.body);
            tracing::warn!(
                path,
                status = response.status,
                code = error.code.as_deref(),
                "gateway rejected request"
            );
            return Err(DevinoError::Rejected {
                status: response.status,
                error,
            });
        }

        crate::transport::decode_json_answer(&response.body)
            .map_err(|err| DevinoError::Parse(Box::new(err)))
    }
}
