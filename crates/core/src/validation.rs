//! Field validation shared by every create/update DTO.
//!
//! DTOs derive [`validator::Validate`]; handlers call [`validate_input`] so a
//! failing payload becomes a single [`CoreError::Validation`] listing the
//! offending fields before any SQL runs.

use validator::{Validate, ValidateUrl, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Maximum length of `VARCHAR(255)` name/title columns.
pub const NAME_MAX_LEN: u64 = 255;

/// Maximum length of `VARCHAR(100)` columns.
pub const SHORT_MAX_LEN: u64 = 100;

/// Maximum length of `sagas.zero_event_abbreviature`.
pub const ABBREVIATURE_MAX_LEN: u64 = 50;

/// Maximum length of `accounts.username`.
pub const USERNAME_MAX_LEN: u64 = 150;

/// Validate a DTO and fold its errors into a [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Render validation errors as `field: reason` pairs sorted by field name.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// A `TEXT NOT NULL DEFAULT ''` link column: blank or a valid URL.
pub fn url_or_blank(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_url() {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

/// Required text must contain something other than whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, max = 5), custom(function = "not_blank"))]
        name: String,
        #[validate(custom(function = "url_or_blank"))]
        link: String,
        #[validate(range(min = -1.0, max = 1.0))]
        weight: f64,
    }

    #[test]
    fn valid_input_passes() {
        let s = Sample {
            name: "ok".into(),
            link: String::new(),
            weight: 0.5,
        };
        assert!(validate_input(&s).is_ok());
    }

    #[test]
    fn errors_are_listed_by_field() {
        let s = Sample {
            name: "toolong".into(),
            link: "not a url".into(),
            weight: 2.0,
        };
        let err = validate_input(&s).unwrap_err();
        assert_matches!(err, CoreError::Validation(ref msg)
            if msg == "link: url; name: length; weight: range");
    }

    #[test]
    fn whitespace_name_is_blank() {
        let s = Sample {
            name: "   ".into(),
            link: "https://example.org/wiki".into(),
            weight: -1.0,
        };
        assert_matches!(validate_input(&s), Err(CoreError::Validation(ref msg)) if msg == "name: blank");
    }
}
