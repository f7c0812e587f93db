use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::application::models::NewApplication;
use crate::db::models::ApplicationRow;

const APPLICATION_COLUMNS: &str =
    "id, job_id, user_id, name, email, phone, resume_url, comments, created_at";

/// Repository for JobApplication database operations
pub struct ApplicationRepository;

impl ApplicationRepository {
    pub async fn create(
        pool: &Pool<Postgres>,
        application: &NewApplication,
    ) -> Result<ApplicationRow, sqlx::Error> {
        debug!(
            "Creating application: job_id={}, user_id={}",
            application.job_id, application.user_id
        );

        let row = sqlx::query_as::<_, ApplicationRow>(&format!(
            "INSERT INTO job_applications (job_id, user_id, name, email, phone, resume_url, comments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {APPLICATION_COLUMNS}"
        ))
        .bind(application.job_id)
        .bind(application.user_id)
        .bind(&application.name)
        .bind(&application.email)
        .bind(&application.phone)
        .bind(&application.resume_url)
        .bind(&application.comments)
        .fetch_one(pool)
        .await?;

        debug!("Application created with id={}", row.id);
        Ok(row)
    }

    /// Applications for one job, newest first
    pub async fn list_for_job(
        pool: &Pool<Postgres>,
        job_id: i32,
    ) -> Result<Vec<ApplicationRow>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationRow>(&format!(
            "SELECT {APPLICATION_COLUMNS} FROM job_applications \
             WHERE job_id = $1 ORDER BY created_at DESC"
        ))
        .bind(job_id)
        .fetch_all(pool)
        .await
    }
}
