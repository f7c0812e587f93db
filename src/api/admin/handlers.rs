use actix_web::{
    HttpResponse, get, patch,
    web::{Data, Path, ServiceConfig, scope},
};
use sqlx::{Pool, Postgres};
use tracing::info;

use crate::api::auth::AdminUser;
use crate::api::error::ApiError;
use crate::api::job::dto::to_dtos;
use crate::db::job_repository::JobRepository;

/// Moderation listing: every job, approved or pending
#[get("/jobs")]
async fn list_all_jobs(
    pool: Data<Pool<Postgres>>,
    _admin: AdminUser,
) -> Result<HttpResponse, ApiError> {
    let jobs = JobRepository::list_all(&pool).await?;
    Ok(HttpResponse::Ok().json(to_dtos(jobs)))
}

#[patch("/jobs/{id}/approve")]
async fn approve_job(
    pool: Data<Pool<Postgres>>,
    admin: AdminUser,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let job = JobRepository::approve(&pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    info!("Admin {} approved job {}", admin.0.id, id);
    Ok(HttpResponse::Ok().json(job))
}

pub fn admin_config(config: &mut ServiceConfig) {
    config.service(scope("/api/admin").service(list_all_jobs).service(approve_job));
}
