use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures_util::future::LocalBoxFuture;
use serde::Serialize;
use sqlx::{Pool, Postgres};

use crate::api::auth::token::verify_token;
use crate::api::error::ApiError;
use crate::config::Config;
use crate::db::user_repository::UserRepository;

/// Identity attached to a request once the session token checks out.
///
/// Extracting this type is the auth gate: handlers that take an `AuthUser`
/// never run for unauthenticated requests.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

/// Secondary gate on top of [`AuthUser`]: the identity must carry the
/// admin flag.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

/// Token from the session cookie, or from `Authorization: Bearer`
fn extract_token(req: &HttpRequest) -> Option<String> {
    if let Some(cookie) = req.cookie("token") {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, ApiError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let token = extract_token(&req)
                .ok_or_else(|| ApiError::unauthorized("Access denied. No token provided."))?;

            let config = req
                .app_data::<web::Data<Config>>()
                .ok_or_else(|| ApiError::internal("Server configuration missing"))?;

            let claims = verify_token(&token, &config.jwt_secret)
                .map_err(|_| ApiError::unauthorized("Invalid token."))?;

            let user_id: i32 = claims
                .sub
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token."))?;

            let pool = req
                .app_data::<web::Data<Pool<Postgres>>>()
                .ok_or_else(|| ApiError::internal("Database pool missing"))?;

            let user = UserRepository::find_by_id(pool, user_id)
                .await?
                .ok_or_else(|| ApiError::unauthorized("User not found."))?;

            Ok(AuthUser {
                id: user.id,
                email: user.email,
                name: user.name,
                is_admin: user.is_admin,
            })
        })
    }
}

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, ApiError>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = AuthUser::from_request(req, payload);
        Box::pin(async move {
            let user = auth.await?;
            if !user.is_admin {
                return Err(ApiError::forbidden(
                    "Access denied. Admin privileges required.",
                ));
            }
            Ok(AdminUser(user))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, Responder, get, test, web::Data};

    #[get("/protected")]
    async fn protected(user: AuthUser) -> impl Responder {
        HttpResponse::Ok().body(user.email)
    }

    fn test_config() -> Config {
        Config {
            database_url: String::new(),
            bind_addr: "127.0.0.1:0".to_string(),
            max_db_connections: 1,
            max_payload_size: 1024,
            max_upload_size: 1024,
            upload_dir: "uploads".into(),
            log_dir: "logs".to_string(),
            jwt_secret: "test-secret".to_string(),
            google_client_id: None,
            cors_origins: vec![],
            smtp_server: None,
            smtp_user: None,
            smtp_pass: None,
            from_email: None,
        }
    }

    #[actix_web::test]
    async fn missing_token_is_rejected_before_handler_runs() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(test_config()))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get().uri("/protected").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Access denied. No token provided.");
    }

    #[actix_web::test]
    async fn garbage_bearer_token_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(test_config()))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Invalid token.");
    }
}
