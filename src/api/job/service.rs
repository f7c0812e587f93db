use sqlx::{Pool, Postgres};
use tracing::{debug, info};

use crate::api::auth::AuthUser;
use crate::api::error::ApiError;
use crate::api::job::models::{CreateJobRequest, JobCategory, NewJob, UpdateJob, UpdateJobRequest};
use crate::api::job::salary::format_salary_display;
use crate::api::job::search::{salary_matches, salary_target};
use crate::db::job_repository::JobRepository;
use crate::db::models::{JobRow, JobWithPoster};

const FALLBACK_LOGO: &str = "https://cdn-icons-png.flaticon.com/512/3061/3061341.png";

/// Job service containing the listing, search and mutation logic
pub struct JobService {
    pool: Pool<Postgres>,
    http: reqwest::Client,
}

impl JobService {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            pool,
            http: reqwest::Client::new(),
        }
    }

    pub async fn list_public(&self) -> Result<Vec<JobWithPoster>, ApiError> {
        Ok(JobRepository::list_approved(&self.pool).await?)
    }

    pub async fn list_mine(&self, user_id: i32) -> Result<Vec<JobWithPoster>, ApiError> {
        Ok(JobRepository::list_by_owner(&self.pool, user_id).await?)
    }

    pub async fn list_category(&self, category: JobCategory) -> Result<Vec<JobWithPoster>, ApiError> {
        Ok(JobRepository::list_by_category(&self.pool, category).await?)
    }

    pub async fn get(&self, id: i32) -> Result<JobWithPoster, ApiError> {
        JobRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job not found"))
    }

    /// Search approved jobs by keyword, or by salary proximity when the
    /// query reads as a positive salary value.
    ///
    /// An empty query is the plain public listing. A query that parses to
    /// a salary target replaces the text candidates entirely: the approved
    /// set (without the text filter) is narrowed to jobs within 15% of the
    /// target. Ordering is always post date descending, preserved from the
    /// repository query.
    pub async fn search(&self, query: &str) -> Result<Vec<JobWithPoster>, ApiError> {
        let query = query.trim();
        if query.is_empty() {
            return self.list_public().await;
        }

        if let Some(target) = salary_target(query) {
            debug!("Salary-proximity search: target={}", target);
            let mut jobs = JobRepository::list_approved(&self.pool).await?;
            jobs.retain(|job| salary_matches(&job.salary, target));
            return Ok(jobs);
        }

        Ok(JobRepository::search_text(&self.pool, query).await?)
    }

    /// Create a posting for the authenticated user.
    ///
    /// The salary is normalized for display, the company logo is probed
    /// from Clearbit with a fixed fallback, and the job starts unapproved
    /// pending moderation.
    pub async fn create(&self, user: &AuthUser, req: CreateJobRequest) -> Result<JobRow, ApiError> {
        let logo = self.fetch_company_logo(&req.company).await;
        let salary = format_salary_display(&req.salary);

        let job = JobRepository::create(
            &self.pool,
            &NewJob {
                name: req.title,
                company: req.company,
                description: req.description,
                location: req.location,
                category: req.category,
                salary,
                logo,
                is_approved: false,
                user_id: user.id,
            },
        )
        .await?;

        info!("User {} created job {} (pending approval)", user.id, job.id);
        Ok(job)
    }

    pub async fn update(
        &self,
        user: &AuthUser,
        id: i32,
        req: UpdateJobRequest,
    ) -> Result<JobRow, ApiError> {
        let job = JobRepository::find_row(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job not found"))?;

        if job.user_id != user.id && !user.is_admin {
            return Err(ApiError::forbidden("Not authorized to update this job"));
        }

        let changes = UpdateJob {
            name: req.title,
            company: req.company,
            description: req.description,
            location: req.location,
            category: req.category,
            salary: req.salary.map(|s| format_salary_display(&s)),
        };

        let updated = JobRepository::update(&self.pool, id, &changes)
            .await?
            .ok_or_else(|| ApiError::not_found("Job not found"))?;

        info!("User {} updated job {}", user.id, id);
        Ok(updated)
    }

    pub async fn delete(&self, user: &AuthUser, id: i32) -> Result<(), ApiError> {
        let job = JobRepository::find_row(&self.pool, id)
            .await?
            .ok_or_else(|| ApiError::not_found("Job not found"))?;

        if job.user_id != user.id && !user.is_admin {
            return Err(ApiError::forbidden("Not authorized to delete this job"));
        }

        JobRepository::delete(&self.pool, id).await?;
        info!("User {} deleted job {}", user.id, id);
        Ok(())
    }

    /// Probe Clearbit for a company logo, falling back to a generic icon.
    /// Logo lookup failures never fail job creation.
    async fn fetch_company_logo(&self, company: &str) -> String {
        let slug: String = company
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let url = format!("https://logo.clearbit.com/{slug}.com");

        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => url,
            _ => {
                debug!("No Clearbit logo for {}, using fallback", company);
                FALLBACK_LOGO.to_string()
            }
        }
    }
}
