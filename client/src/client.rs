use crate::{Error, Result};
use doubleup_types::api::{
    LoginRequest, LoginResponse, ResponseBody, UserResponse, LOGIN_PATH, USER_PATH,
};
use doubleup_types::progression::{Configuration, Session};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the account service.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for `base_url` (must be http or https).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        match base_url.scheme() {
            "http" | "https" => {}
            scheme => return Err(Error::InvalidScheme(scheme.to_string())),
        }
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchange credentials for an access token.
    pub async fn login(&self, user_id: &str, password: &str) -> Result<LoginResponse> {
        let url = self.base_url.join(LOGIN_PATH)?;
        debug!(%url, user_id, "logging in");
        let response = self
            .http
            .post(url)
            .json(&LoginRequest {
                user_id: user_id.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;
        Self::first_record(response).await
    }

    /// Look up a user record.
    pub async fn user(&self, user_id: &str) -> Result<UserResponse> {
        let mut url = self.base_url.join(USER_PATH)?;
        url.path_segments_mut()
            .map_err(|_| Error::UnexpectedResponse)?
            .push(user_id);
        debug!(%url, "fetching user");
        let response = self.http.get(url).send().await?;
        Self::first_record(response).await
    }

    /// Start a session whose balance is the user's account balance.
    pub async fn open_session(&self, user_id: &str, config: Configuration) -> Result<Session> {
        let user = self.user(user_id).await?;
        debug!(user_id = %user.user_id, balance = user.balance, "seeding session");
        Ok(Session::with_config(user.balance, config))
    }

    async fn first_record<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        let envelope: ResponseBody<T> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if status != StatusCode::OK => {
                return Err(Error::FailedWithBody { status, body })
            }
            Err(err) => return Err(Error::InvalidBody(err)),
        };
        if !envelope.is_succeed || status != StatusCode::OK {
            let (code, message) = envelope
                .error
                .map(|error| (error.code, error.message))
                .unwrap_or_else(|| (status.as_u16().to_string(), String::new()));
            return Err(Error::Api {
                status,
                code,
                message,
            });
        }
        envelope.into_first().ok_or(Error::UnexpectedResponse)
    }
}
