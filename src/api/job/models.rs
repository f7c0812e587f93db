use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Job category enum gating the category listing endpoint
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobCategory {
    Tech,
    Education,
    Trade,
    Marketing,
    Other,
}

impl JobCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCategory::Tech => "TECH",
            JobCategory::Education => "EDUCATION",
            JobCategory::Trade => "TRADE",
            JobCategory::Marketing => "MARKETING",
            JobCategory::Other => "OTHER",
        }
    }
}

impl FromStr for JobCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TECH" => Ok(JobCategory::Tech),
            "EDUCATION" => Ok(JobCategory::Education),
            "TRADE" => Ok(JobCategory::Trade),
            "MARKETING" => Ok(JobCategory::Marketing),
            "OTHER" => Ok(JobCategory::Other),
            _ => Err(()),
        }
    }
}

/// Payload for creating a job posting
#[derive(Debug, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, max = 120, message = "Job title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 120, message = "Company name is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Job description is required"))]
    pub description: String,
    #[validate(length(min = 1, max = 120, message = "Location is required"))]
    pub location: String,
    pub category: JobCategory,
    #[serde(default)]
    pub salary: String,
}

/// Partial update for an existing job posting
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateJobRequest {
    #[validate(length(min = 1, max = 120, message = "Job title cannot be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 120, message = "Company name cannot be empty"))]
    pub company: Option<String>,
    #[validate(length(min = 1, message = "Job description cannot be empty"))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 120, message = "Location cannot be empty"))]
    pub location: Option<String>,
    pub category: Option<JobCategory>,
    pub salary: Option<String>,
}

/// Fully resolved job ready for insertion
#[derive(Debug)]
pub struct NewJob {
    pub name: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub category: JobCategory,
    pub salary: String,
    pub logo: String,
    pub is_approved: bool,
    pub user_id: i32,
}

/// Column changes for a job update; None leaves the column untouched
#[derive(Debug)]
pub struct UpdateJob {
    pub name: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub category: Option<JobCategory>,
    pub salary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("tech".parse::<JobCategory>(), Ok(JobCategory::Tech));
        assert_eq!("MARKETING".parse::<JobCategory>(), Ok(JobCategory::Marketing));
        assert_eq!("Education".parse::<JobCategory>(), Ok(JobCategory::Education));
        assert!("gardening".parse::<JobCategory>().is_err());
    }

    #[test]
    fn category_round_trips_through_str() {
        for category in [
            JobCategory::Tech,
            JobCategory::Education,
            JobCategory::Trade,
            JobCategory::Marketing,
            JobCategory::Other,
        ] {
            assert_eq!(category.as_str().parse::<JobCategory>(), Ok(category));
        }
    }
}
