//! Wire types for the account service.
//!
//! Every endpoint answers with a [`ResponseBody`] envelope. Field names are camelCase on the
//! wire; optional fields are omitted when absent.

use serde::{Deserialize, Serialize};

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/api/v1/login";

/// Path prefix of the user lookup endpoint (`/api/v1/user/:userId`).
pub const USER_PATH: &str = "/api/v1/user";

/// Structured error carried by a failed envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: String,
    pub name: String,
}

impl ApiError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "401".to_string(),
            name: "UnauthorizedException".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: "404".to_string(),
            name: "NotFoundException".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody<T> {
    pub data: Vec<T>,
    pub current_size: usize,
    pub total_size: usize,
    pub is_succeed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_layout_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

impl<T> ResponseBody<T> {
    pub fn success(data: Vec<T>) -> Self {
        let size = data.len();
        Self {
            data,
            current_size: size,
            total_size: size,
            is_succeed: true,
            error: None,
            info_layout_message: None,
            redirect_url: None,
        }
    }

    /// Failed envelope; the error message doubles as the layout message.
    pub fn failure(error: ApiError) -> Self {
        Self {
            data: Vec::new(),
            current_size: 0,
            total_size: 0,
            is_succeed: false,
            info_layout_message: Some(error.message.clone()),
            error: Some(error),
            redirect_url: None,
        }
    }

    pub fn with_redirect(mut self, url: impl Into<String>) -> Self {
        self.redirect_url = Some(url.into());
        self
    }

    /// First record of a successful envelope.
    pub fn into_first(self) -> Option<T> {
        if !self.is_succeed {
            return None;
        }
        self.data.into_iter().next()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_id: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user_id: String,
    pub access_token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub user_name: String,
    pub balance: f64,
}
