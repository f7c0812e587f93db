use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{
    HttpResponse, get, post,
    web::{Data, Path, ServiceConfig},
};
use serde::Serialize;

use crate::api::application::service::{ApplicationInput, ApplicationService};
use crate::api::auth::AuthUser;
use crate::api::error::ApiError;
use crate::db::models::ApplicationRow;

/// Multipart apply form: applicant fields plus an optional resume file
#[derive(Debug, MultipartForm)]
pub struct ApplyForm {
    pub name: Text<String>,
    pub email: Text<String>,
    pub phone: Text<String>,
    pub comments: Option<Text<String>>,
    #[multipart(limit = "5MB")]
    pub resume: Option<TempFile>,
}

#[derive(Serialize)]
struct ApplyResponse {
    application: ApplicationRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<&'static str>,
}

#[post("/api/jobs/{id}/apply")]
async fn apply(
    service: Data<ApplicationService>,
    user: AuthUser,
    path: Path<i32>,
    MultipartForm(form): MultipartForm<ApplyForm>,
) -> Result<HttpResponse, ApiError> {
    let input = ApplicationInput {
        name: form.name.into_inner(),
        email: form.email.into_inner(),
        phone: form.phone.into_inner(),
        comments: form.comments.map(Text::into_inner),
        resume: form.resume,
    };

    let (application, warning) = service.apply(&user, path.into_inner(), input).await?;

    Ok(HttpResponse::Created().json(ApplyResponse {
        application,
        warning,
    }))
}

#[get("/api/jobs/{id}/applications")]
async fn list_applications(
    service: Data<ApplicationService>,
    user: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let applications = service.list_for_job(&user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(applications))
}

// Registered before the /api/jobs scope so these two-segment paths are
// matched ahead of the scope's prefix
pub fn application_config(config: &mut ServiceConfig) {
    config.service(apply).service(list_applications);
}
