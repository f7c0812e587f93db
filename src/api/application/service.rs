use actix_multipart::form::tempfile::TempFile;
use sqlx::{Pool, Postgres};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::api::application::models::NewApplication;
use crate::api::application::upload::store_resume;
use crate::api::auth::AuthUser;
use crate::api::error::ApiError;
use crate::api::validation::{format_phone, is_valid_email, is_valid_phone};
use crate::db::application_repository::ApplicationRepository;
use crate::db::job_repository::JobRepository;
use crate::db::models::ApplicationRow;
use crate::email::Mailer;

const EMAIL_WARNING: &str = "Confirmation email could not be sent";

/// Applicant-supplied fields for one apply action
#[derive(Debug)]
pub struct ApplicationInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub comments: Option<String>,
    pub resume: Option<TempFile>,
}

/// Job application submission and retrieval
pub struct ApplicationService {
    pool: Pool<Postgres>,
    mailer: Option<Mailer>,
    upload_dir: PathBuf,
}

impl ApplicationService {
    pub fn new(pool: Pool<Postgres>, mailer: Option<Mailer>, upload_dir: PathBuf) -> Self {
        Self {
            pool,
            mailer,
            upload_dir,
        }
    }

    /// Submit an application against an approved job.
    ///
    /// The confirmation email is best-effort: a send failure comes back as
    /// a warning string alongside the created application, never as an
    /// error.
    pub async fn apply(
        &self,
        user: &AuthUser,
        job_id: i32,
        input: ApplicationInput,
    ) -> Result<(ApplicationRow, Option<&'static str>), ApiError> {
        if !is_valid_email(&input.email) {
            return Err(ApiError::validation("Invalid email format"));
        }
        if !is_valid_phone(&input.phone) {
            return Err(ApiError::validation("Invalid phone number format"));
        }

        let job = JobRepository::find_row(&self.pool, job_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job not found"))?;

        if !job.is_approved {
            return Err(ApiError::validation("Cannot apply to unapproved jobs"));
        }
        if job.user_id == user.id {
            return Err(ApiError::validation("Cannot apply to your own job posting"));
        }

        let resume_url = match input.resume {
            Some(file) => Some(store_resume(&self.upload_dir, file)?),
            None => None,
        };

        let application = ApplicationRepository::create(
            &self.pool,
            &NewApplication {
                job_id,
                user_id: user.id,
                name: input.name.clone(),
                email: input.email.clone(),
                phone: format_phone(&input.phone),
                resume_url,
                comments: input.comments,
            },
        )
        .await?;

        info!(
            "User {} applied to job {} (application {})",
            user.id, job_id, application.id
        );

        let warning = match &self.mailer {
            Some(mailer) => {
                match mailer
                    .send_application_receipt(&input.email, &input.name, &job.name)
                    .await
                {
                    Ok(()) => None,
                    Err(e) => {
                        warn!("Failed to send confirmation email: {}", e);
                        Some(EMAIL_WARNING)
                    }
                }
            }
            None => {
                warn!("Mailer not configured, skipping confirmation email");
                Some(EMAIL_WARNING)
            }
        };

        Ok((application, warning))
    }

    /// Applications for a job, visible to the job's owner or an admin
    pub async fn list_for_job(
        &self,
        user: &AuthUser,
        job_id: i32,
    ) -> Result<Vec<ApplicationRow>, ApiError> {
        let job = JobRepository::find_row(&self.pool, job_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job not found"))?;

        if job.user_id != user.id && !user.is_admin {
            return Err(ApiError::forbidden("Not authorized to view applications"));
        }

        Ok(ApplicationRepository::list_for_job(&self.pool, job_id).await?)
    }
}
