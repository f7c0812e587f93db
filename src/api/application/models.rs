/// Fully resolved application ready for insertion
#[derive(Debug)]
pub struct NewApplication {
    pub job_id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub resume_url: Option<String>,
    pub comments: Option<String>,
}
