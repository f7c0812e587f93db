use actix_web::{
    HttpResponse, delete, get, patch, post,
    web::{Data, Path, Query, ServiceConfig, scope},
};
use actix_web_validator::Json;
use serde::Deserialize;
use std::str::FromStr;

use crate::api::MessageResponse;
use crate::api::auth::AuthUser;
use crate::api::error::ApiError;
use crate::api::job::JobService;
use crate::api::job::dto::{JobDto, to_dtos};
use crate::api::job::models::{CreateJobRequest, JobCategory, UpdateJobRequest};

#[get("")]
async fn list_jobs(service: Data<JobService>) -> Result<HttpResponse, ApiError> {
    let jobs = service.list_public().await?;
    Ok(HttpResponse::Ok().json(to_dtos(jobs)))
}

// Registered before `/{id}` so the literal segment wins
#[get("/my-postings")]
async fn my_postings(
    service: Data<JobService>,
    user: AuthUser,
) -> Result<HttpResponse, ApiError> {
    let jobs = service.list_mine(user.id).await?;
    Ok(HttpResponse::Ok().json(to_dtos(jobs)))
}

#[get("/category/{category}")]
async fn jobs_by_category(
    service: Data<JobService>,
    path: Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category = JobCategory::from_str(&path.into_inner())
        .map_err(|_| ApiError::validation("Invalid job category"))?;

    let jobs = service.list_category(category).await?;
    Ok(HttpResponse::Ok().json(to_dtos(jobs)))
}

#[get("/{id}")]
async fn get_job(service: Data<JobService>, path: Path<i32>) -> Result<HttpResponse, ApiError> {
    let job = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(JobDto::from(job)))
}

#[post("")]
async fn create_job(
    service: Data<JobService>,
    user: AuthUser,
    body: Json<CreateJobRequest>,
) -> Result<HttpResponse, ApiError> {
    let job = service.create(&user, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(job))
}

#[patch("/{id}")]
async fn update_job(
    service: Data<JobService>,
    user: AuthUser,
    path: Path<i32>,
    body: Json<UpdateJobRequest>,
) -> Result<HttpResponse, ApiError> {
    let job = service.update(&user, path.into_inner(), body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(job))
}

#[delete("/{id}")]
async fn delete_job(
    service: Data<JobService>,
    user: AuthUser,
    path: Path<i32>,
) -> Result<HttpResponse, ApiError> {
    service.delete(&user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Job deleted successfully")))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    query: String,
}

#[get("/api/search")]
async fn search_jobs(
    service: Data<JobService>,
    query: Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let jobs = service.search(&query.query).await?;
    Ok(HttpResponse::Ok().json(to_dtos(jobs)))
}

pub fn job_config(config: &mut ServiceConfig) {
    config.service(search_jobs).service(
        scope("/api/jobs")
            .service(list_jobs)
            .service(my_postings)
            .service(jobs_by_category)
            .service(create_job)
            .service(get_job)
            .service(update_job)
            .service(delete_job),
    );
}
