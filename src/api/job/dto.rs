use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::db::models::JobWithPoster;

/// Poster fields exposed on public job listings
#[derive(Debug, Serialize)]
pub struct PosterDto {
    pub name: String,
    pub email: String,
}

/// Job as returned by the listing/detail endpoints, with the poster nested
#[derive(Debug, Serialize)]
pub struct JobDto {
    pub id: i32,
    pub name: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub salary: String,
    pub logo: String,
    pub is_approved: bool,
    pub user_id: i32,
    pub post_date: DateTime<Utc>,
    pub user: PosterDto,
}

impl From<JobWithPoster> for JobDto {
    fn from(job: JobWithPoster) -> Self {
        Self {
            id: job.id,
            name: job.name,
            company: job.company,
            description: job.description,
            location: job.location,
            category: job.category,
            salary: job.salary,
            logo: job.logo,
            is_approved: job.is_approved,
            user_id: job.user_id,
            post_date: job.post_date,
            user: PosterDto {
                name: job.poster_name,
                email: job.poster_email,
            },
        }
    }
}

pub fn to_dtos(jobs: Vec<JobWithPoster>) -> Vec<JobDto> {
    jobs.into_iter().map(JobDto::from).collect()
}
