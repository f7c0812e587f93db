use sqlx::{Pool, Postgres};
use tracing::debug;

use crate::api::job::models::{JobCategory, NewJob, UpdateJob};
use crate::db::models::{JobRow, JobWithPoster};

const JOB_COLUMNS: &str = "id, name, company, description, location, category, salary, \
                           logo, is_approved, user_id, post_date";

const JOINED_COLUMNS: &str = "j.id, j.name, j.company, j.description, j.location, j.category, \
                              j.salary, j.logo, j.is_approved, j.user_id, j.post_date, \
                              u.name AS poster_name, u.email AS poster_email";

/// Repository for Job database operations
pub struct JobRepository;

impl JobRepository {
    /// Publicly listed jobs: approved only, newest first
    pub async fn list_approved(pool: &Pool<Postgres>) -> Result<Vec<JobWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, JobWithPoster>(&format!(
            "SELECT {JOINED_COLUMNS} FROM jobs j JOIN users u ON u.id = j.user_id \
             WHERE j.is_approved = TRUE ORDER BY j.post_date DESC"
        ))
        .fetch_all(pool)
        .await
    }

    /// All jobs regardless of approval, newest first (moderation listing)
    pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<JobWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, JobWithPoster>(&format!(
            "SELECT {JOINED_COLUMNS} FROM jobs j JOIN users u ON u.id = j.user_id \
             ORDER BY j.post_date DESC"
        ))
        .fetch_all(pool)
        .await
    }

    pub async fn list_by_category(
        pool: &Pool<Postgres>,
        category: JobCategory,
    ) -> Result<Vec<JobWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, JobWithPoster>(&format!(
            "SELECT {JOINED_COLUMNS} FROM jobs j JOIN users u ON u.id = j.user_id \
             WHERE j.category = $1 AND j.is_approved = TRUE ORDER BY j.post_date DESC"
        ))
        .bind(category.as_str())
        .fetch_all(pool)
        .await
    }

    pub async fn list_by_owner(
        pool: &Pool<Postgres>,
        user_id: i32,
    ) -> Result<Vec<JobWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, JobWithPoster>(&format!(
            "SELECT {JOINED_COLUMNS} FROM jobs j JOIN users u ON u.id = j.user_id \
             WHERE j.user_id = $1 ORDER BY j.post_date DESC"
        ))
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Case-insensitive substring match across the searchable job fields,
    /// approved jobs only. `query` is the raw user query; LIKE wildcards in
    /// it are escaped.
    pub async fn search_text(
        pool: &Pool<Postgres>,
        query: &str,
    ) -> Result<Vec<JobWithPoster>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(query));
        sqlx::query_as::<_, JobWithPoster>(&format!(
            "SELECT {JOINED_COLUMNS} FROM jobs j JOIN users u ON u.id = j.user_id \
             WHERE j.is_approved = TRUE AND (j.name ILIKE $1 OR j.company ILIKE $1 \
                OR j.description ILIKE $1 OR j.location ILIKE $1 OR j.salary ILIKE $1) \
             ORDER BY j.post_date DESC"
        ))
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &Pool<Postgres>,
        id: i32,
    ) -> Result<Option<JobWithPoster>, sqlx::Error> {
        sqlx::query_as::<_, JobWithPoster>(&format!(
            "SELECT {JOINED_COLUMNS} FROM jobs j JOIN users u ON u.id = j.user_id \
             WHERE j.id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Bare job row without the poster join, for ownership/approval checks
    pub async fn find_row(pool: &Pool<Postgres>, id: i32) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &Pool<Postgres>, job: &NewJob) -> Result<JobRow, sqlx::Error> {
        debug!("Creating job: name={}, company={}", job.name, job.company);

        let row = sqlx::query_as::<_, JobRow>(&format!(
            "INSERT INTO jobs (name, company, description, location, category, salary, logo, \
                               is_approved, user_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {JOB_COLUMNS}"
        ))
        .bind(&job.name)
        .bind(&job.company)
        .bind(&job.description)
        .bind(&job.location)
        .bind(job.category.as_str())
        .bind(&job.salary)
        .bind(&job.logo)
        .bind(job.is_approved)
        .bind(job.user_id)
        .fetch_one(pool)
        .await?;

        debug!("Job created with id={}", row.id);
        Ok(row)
    }

    pub async fn update(
        pool: &Pool<Postgres>,
        id: i32,
        changes: &UpdateJob,
    ) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(&format!(
            "UPDATE jobs SET \
                name = COALESCE($2, name), \
                company = COALESCE($3, company), \
                description = COALESCE($4, description), \
                location = COALESCE($5, location), \
                category = COALESCE($6, category), \
                salary = COALESCE($7, salary) \
             WHERE id = $1 RETURNING {JOB_COLUMNS}"
        ))
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.company)
        .bind(&changes.description)
        .bind(&changes.location)
        .bind(changes.category.map(|c| c.as_str()))
        .bind(&changes.salary)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &Pool<Postgres>, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn approve(pool: &Pool<Postgres>, id: i32) -> Result<Option<JobRow>, sqlx::Error> {
        sqlx::query_as::<_, JobRow>(&format!(
            "UPDATE jobs SET is_approved = TRUE WHERE id = $1 RETURNING {JOB_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await
    }
}

/// Escape LIKE/ILIKE wildcards so user input matches literally
fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::escape_like;

    #[test]
    fn escapes_like_wildcards() {
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("plain"), "plain");
    }
}
