use actix_multipart::form::MultipartFormConfig;
use actix_web::{HttpResponse, web};
use regex::Regex;
use std::sync::LazyLock;

use crate::api::error::ErrorResponse;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?([0-9]{3})\)?[-. ]?([0-9]{3})[-. ]?([0-9]{4})$").expect("phone regex")
});

/// Basic email shape check: something@something.something, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least 8 characters with one lowercase, one uppercase and one digit
pub fn is_valid_password(password: &str) -> bool {
    password.len() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// North-American phone formats: (NNN) NNN-NNNN, NNN-NNN-NNNN,
/// NNN.NNN.NNNN or NNNNNNNNNN
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Canonicalize an already-validated phone number to `(NNN) NNN-NNNN`
pub fn format_phone(phone: &str) -> String {
    match PHONE_RE.captures(phone) {
        Some(caps) => format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]),
        None => phone.to_string(),
    }
}

/// JsonConfig with project-wide error handling for validated JSON bodies.
///
/// Both deserialization and validator failures come back as the standard
/// `{"error": ...}` shape with a 400 status.
pub fn json_config() -> actix_web_validator::JsonConfig {
    actix_web_validator::JsonConfig::default().error_handler(|err, _req| {
        let message = match err {
            actix_web_validator::Error::Validate(validation_errors) => {
                let mut messages: Vec<String> = validation_errors
                    .field_errors()
                    .values()
                    .flat_map(|errors| {
                        errors.iter().map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| "Validation error".to_string())
                        })
                    })
                    .collect();
                messages.sort();
                messages.join("; ")
            }
            actix_web_validator::Error::Deserialize(de_err) => {
                let err_string = de_err.to_string();
                if err_string.contains("EOF while parsing") {
                    "Request body is empty. Expected JSON payload".to_string()
                } else if err_string.contains("unknown variant") {
                    "Invalid enum value. Check allowed values for this field".to_string()
                } else {
                    "Invalid JSON format".to_string()
                }
            }
            _ => "Validation error".to_string(),
        };

        actix_web::error::InternalError::from_response(
            "",
            HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        )
        .into()
    })
}

/// JsonConfig for the plain `web::Json` extractors (auth endpoints), so
/// their deserialization failures use the same `{"error": ...}` shape.
pub fn web_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            actix_web::error::JsonPayloadError::ContentType => {
                "Content-Type must be application/json".to_string()
            }
            actix_web::error::JsonPayloadError::Deserialize(_) => {
                "Invalid JSON format".to_string()
            }
            _ => "Invalid request body".to_string(),
        };
        actix_web::error::InternalError::from_response(
            "",
            HttpResponse::BadRequest().json(ErrorResponse::new(message)),
        )
        .into()
    })
}

/// MultipartFormConfig with the upload size cap and the standard error
/// shape for form/limit violations.
pub fn multipart_config(total_limit: usize) -> MultipartFormConfig {
    MultipartFormConfig::default()
        .total_limit(total_limit)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse::new(message)),
            )
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn password_requires_all_three_classes_and_length() {
        assert!(is_valid_password("Abcdefg1"));
        assert!(is_valid_password("longerPassw0rd"));
        // length 8 but no uppercase
        assert!(!is_valid_password("abcdefg1"));
        assert!(!is_valid_password("ABCDEFG1"));
        assert!(!is_valid_password("Abcdefgh"));
        // all classes but too short
        assert!(!is_valid_password("Abc1"));
    }

    #[test]
    fn accepts_common_phone_formats() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("555.123.4567"));
        assert!(is_valid_phone("5551234567"));
    }

    #[test]
    fn rejects_bad_phones() {
        assert!(!is_valid_phone("123-456"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("55512345678"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn formats_phone_to_canonical_shape() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("555.123.4567"), "(555) 123-4567");
        assert_eq!(format_phone("(555) 123-4567"), "(555) 123-4567");
    }
}
