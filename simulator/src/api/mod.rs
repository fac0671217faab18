use axum::{
    extract::Request,
    http::header,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use doubleup_types::api::{LOGIN_PATH, USER_PATH};

use crate::Simulator;

mod http;

pub struct Api {
    simulator: Arc<Simulator>,
}

impl Api {
    pub fn new(simulator: Arc<Simulator>) -> Self {
        Self { simulator }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/healthz", get(http::healthz))
            .route(LOGIN_PATH, post(http::login))
            .route(&format!("{USER_PATH}/:user_id"), get(http::get_user))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(self.simulator.clone())
    }
}

async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(header::HeaderName::from_static("x-request-id"))
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    let mut response = next.run(req).await;
    tracing::info!(
        request_id = %request_id,
        %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "handled request"
    );
    if let Ok(value) = header::HeaderValue::from_str(&request_id) {
        response
            .headers_mut()
            .insert(header::HeaderName::from_static("x-request-id"), value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use doubleup_types::api::{LoginResponse, ResponseBody, UserResponse};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    fn router() -> Router {
        Api::new(Arc::new(Simulator::with_default_users())).router()
    }

    async fn send<T: DeserializeOwned>(
        router: Router,
        request: Request<Body>,
    ) -> (StatusCode, ResponseBody<T>) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn login_request(user_id: &str, password: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(LOGIN_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::json!({"userId": user_id, "password": password}).to_string(),
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_login_success() {
        let (status, body) =
            send::<LoginResponse>(router(), login_request("userId1", "userId1_password")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_succeed);
        assert_eq!(body.current_size, 1);
        assert_eq!(body.total_size, 1);
        let login = body.into_first().unwrap();
        assert_eq!(login.user_id, "userId1");
        assert!(!login.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_failure() {
        let (status, body) =
            send::<LoginResponse>(router(), login_request("userId1", "nope")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(!body.is_succeed);
        assert!(body.data.is_empty());
        let error = body.error.unwrap();
        assert_eq!(error.code, "401");
        assert_eq!(error.name, "UnauthorizedException");
        assert_eq!(error.message, "Login Failed.");
        assert_eq!(body.info_layout_message.as_deref(), Some("Login Failed."));
        assert_eq!(body.redirect_url.as_deref(), Some("/"));
    }

    #[tokio::test]
    async fn test_get_user() {
        let request = Request::builder()
            .uri(format!("{USER_PATH}/userId1"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send::<UserResponse>(router(), request).await;
        assert_eq!(status, StatusCode::OK);
        let user = body.into_first().unwrap();
        assert_eq!(user.user_id, "userId1");
        assert_eq!(user.user_name, "userName1");
        assert_eq!(user.balance, 2_000.0);
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let request = Request::builder()
            .uri(format!("{USER_PATH}/ghost"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send::<UserResponse>(router(), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error = body.error.unwrap();
        assert_eq!(error.code, "404");
        assert_eq!(error.name, "NotFoundException");
        assert_eq!(body.info_layout_message.as_deref(), Some("Data not found."));
        assert!(body.redirect_url.is_none());
    }

    #[tokio::test]
    async fn test_request_id_echoed() {
        let request = Request::builder()
            .uri("/healthz")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-request-id").unwrap(),
            "abc-123"
        );
    }
}
