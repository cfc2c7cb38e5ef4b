// ── Input validation ──
//
// Field-level checks at the form boundary. Failures are returned to
// the caller as per-field errors and never move the pipeline's status
// machine — invalid input does not exist past this point.

use std::fmt;

use crate::model::{RsvpForm, RsvpInput};

/// Maximum name length, counted in characters (Thai names are
/// multi-byte; byte length would be wrong).
pub const NAME_MAX_CHARS: usize = 50;
pub const PEOPLE_MIN: u8 = 1;
pub const PEOPLE_MAX: u8 = 10;

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl FieldError {
    fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Validate raw form values into an [`RsvpInput`].
///
/// All fields are checked so the caller can surface every problem at
/// once rather than one error per round trip.
pub fn validate(form: &RsvpForm) -> Result<RsvpInput, Vec<FieldError>> {
    let mut errors = Vec::new();

    check_name("first_name", &form.first_name, &mut errors);
    check_name("last_name", &form.last_name, &mut errors);

    match form.people_amount {
        None => errors.push(FieldError::new("people_amount", "required")),
        Some(n) if !(PEOPLE_MIN..=PEOPLE_MAX).contains(&n) => errors.push(FieldError::new(
            "people_amount",
            format!("must be between {PEOPLE_MIN} and {PEOPLE_MAX} guests"),
        )),
        Some(_) => {}
    }

    if form.attendance.is_none() {
        errors.push(FieldError::new("attendance", "required"));
    }

    match (form.people_amount, form.attendance) {
        (Some(people_amount), Some(attendance)) if errors.is_empty() => Ok(RsvpInput {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            people_amount,
            attendance,
        }),
        _ => Err(errors),
    }
}

fn check_name(field: &'static str, value: &str, errors: &mut Vec<FieldError>) {
    if value.is_empty() {
        errors.push(FieldError::new(field, "required"));
        return;
    }
    if value.chars().count() > NAME_MAX_CHARS {
        errors.push(FieldError::new(
            field,
            format!("must be at most {NAME_MAX_CHARS} characters"),
        ));
    }
    if !value.chars().all(is_name_char) {
        errors.push(FieldError::new(field, "contains invalid characters"));
    }
}

/// Latin letters, Thai script (U+0E01–U+0E59), and whitespace.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{0E01}'..='\u{0E59}').contains(&c) || c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Attendance;

    fn valid_form() -> RsvpForm {
        RsvpForm {
            first_name: "Anna".into(),
            last_name: "Lee".into(),
            people_amount: Some(2),
            attendance: Some(Attendance::Accepted),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        let input = validate(&valid_form()).unwrap();
        assert_eq!(input.first_name, "Anna");
        assert_eq!(input.people_amount, 2);
        assert!(input.attendance.is_accepted());
    }

    #[test]
    fn empty_first_name_is_required_error() {
        let form = RsvpForm {
            first_name: String::new(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "first_name" && e.reason == "required")
        );
    }

    #[test]
    fn thai_names_are_accepted() {
        let form = RsvpForm {
            first_name: "สมชาย".into(),
            last_name: "ใจดี".into(),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn digits_and_punctuation_are_rejected() {
        for bad in ["Anna3", "Anna!", "O'Brien", "a@b"] {
            let form = RsvpForm {
                first_name: bad.into(),
                ..valid_form()
            };
            let errors = validate(&form).unwrap_err();
            assert!(
                errors
                    .iter()
                    .any(|e| e.field == "first_name" && e.reason.contains("invalid")),
                "expected charset error for {bad:?}"
            );
        }
    }

    #[test]
    fn name_length_boundary_in_chars() {
        let fifty: String = "ก".repeat(50);
        let form = RsvpForm {
            first_name: fifty,
            ..valid_form()
        };
        assert!(validate(&form).is_ok(), "50 chars must pass");

        let fifty_one: String = "a".repeat(51);
        let form = RsvpForm {
            first_name: fifty_one,
            ..valid_form()
        };
        assert!(validate(&form).is_err(), "51 chars must fail");
    }

    #[test]
    fn people_amount_boundaries() {
        let form = RsvpForm {
            people_amount: Some(10),
            ..valid_form()
        };
        assert!(validate(&form).is_ok(), "10 guests must pass");

        let form = RsvpForm {
            people_amount: Some(11),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert!(errors.iter().any(|e| e.field == "people_amount"));

        let form = RsvpForm {
            people_amount: Some(0),
            ..valid_form()
        };
        assert!(validate(&form).is_err(), "0 guests must fail");
    }

    #[test]
    fn attendance_must_be_chosen() {
        let form = RsvpForm {
            attendance: None,
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "attendance" && e.reason == "required")
        );
    }

    #[test]
    fn all_failures_reported_at_once() {
        let form = RsvpForm::default();
        let errors = validate(&form).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert!(fields.contains(&"first_name"));
        assert!(fields.contains(&"last_name"));
        assert!(fields.contains(&"people_amount"));
        assert!(fields.contains(&"attendance"));
    }
}
