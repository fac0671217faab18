use axum::{
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use doubleup_types::api::{
    ApiError, LoginRequest, LoginResponse, ResponseBody, UserResponse,
};
use serde::Serialize;
use std::sync::Arc;

use crate::Simulator;

const LOGIN_FAILED: &str = "Login Failed.";
const DATA_NOT_FOUND: &str = "Data not found.";

/// Where a failed login sends the browser.
const LOGIN_REDIRECT: &str = "/";

/// Simple health response for basic liveness checks
#[derive(Serialize)]
struct HealthzResponse {
    ok: bool,
}

pub(super) async fn healthz() -> Response {
    Json(HealthzResponse { ok: true }).into_response()
}

pub(super) async fn login(
    AxumState(simulator): AxumState<Arc<Simulator>>,
    Json(request): Json<LoginRequest>,
) -> Response {
    match simulator.login(&request.user_id, &request.password) {
        Some(access_token) => {
            tracing::info!(user_id = %request.user_id, "login succeeded");
            Json(ResponseBody::success(vec![LoginResponse {
                user_id: request.user_id,
                access_token,
            }]))
            .into_response()
        }
        None => {
            tracing::info!(user_id = %request.user_id, "login rejected");
            let body: ResponseBody<LoginResponse> =
                ResponseBody::failure(ApiError::unauthorized(LOGIN_FAILED))
                    .with_redirect(LOGIN_REDIRECT);
            (StatusCode::UNAUTHORIZED, Json(body)).into_response()
        }
    }
}

pub(super) async fn get_user(
    AxumState(simulator): AxumState<Arc<Simulator>>,
    Path(user_id): Path<String>,
) -> Response {
    match simulator.user(&user_id) {
        Some(record) => {
            Json(ResponseBody::success(vec![UserResponse::from(record)])).into_response()
        }
        None => {
            tracing::debug!(%user_id, "user not found");
            let body: ResponseBody<UserResponse> =
                ResponseBody::failure(ApiError::not_found(DATA_NOT_FOUND));
            (StatusCode::NOT_FOUND, Json(body)).into_response()
        }
    }
}
