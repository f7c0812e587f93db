use actix_multipart::form::tempfile::TempFile;
use chrono::Utc;
use std::path::Path;
use tracing::debug;

use crate::api::error::ApiError;

/// Resume formats accepted for upload
const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

fn extension_allowed(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Keep the original name recognizable but safe as a path segment
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Persist an uploaded resume under the upload directory and return its
/// public `/uploads/...` path. The size cap is enforced by the multipart
/// form limits before this runs.
pub fn store_resume(upload_dir: &Path, file: TempFile) -> Result<String, ApiError> {
    let original_name = file.file_name.clone().unwrap_or_default();
    if !extension_allowed(&original_name) {
        return Err(ApiError::validation(
            "Only PDF and Word documents are allowed",
        ));
    }

    let stored_name = format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        sanitize_file_name(&original_name)
    );
    let destination = upload_dir.join(&stored_name);

    // persist() fails across filesystems; fall back to a copy
    if let Err(persist_err) = file.file.persist(&destination) {
        std::fs::copy(persist_err.file.path(), &destination).map_err(|e| {
            ApiError::internal(format!("Failed to store resume: {}", e))
        })?;
    }

    debug!("Stored resume as {}", stored_name);
    Ok(format!("/uploads/{}", stored_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_document_extensions() {
        assert!(extension_allowed("resume.pdf"));
        assert!(extension_allowed("resume.DOC"));
        assert!(extension_allowed("my resume.docx"));
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!extension_allowed("resume.exe"));
        assert!(!extension_allowed("resume.pdf.sh"));
        assert!(!extension_allowed("resume"));
        assert!(!extension_allowed(""));
    }

    #[test]
    fn sanitizes_path_hostile_names() {
        assert_eq!(sanitize_file_name("my resume.pdf"), "my_resume.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name("cv-final_v2.docx"), "cv-final_v2.docx");
    }
}
