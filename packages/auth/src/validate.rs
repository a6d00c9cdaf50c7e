//! Pure per-field validation rules.
//!
//! Validators are plain functions of the current value; the form recomputes
//! them on every change rather than caching results, so an error can never go
//! stale.

/// Why a single field is currently invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyField,
    InvalidFormat,
    TooShort,
    WrongAnswer,
}

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

pub fn validate_email(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::EmptyField);
    }
    if !is_email_shaped(value) {
        return Some(ValidationError::InvalidFormat);
    }
    None
}

pub fn validate_password(value: &str) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::EmptyField);
    }
    if value.len() < MIN_PASSWORD_LEN {
        return Some(ValidationError::TooShort);
    }
    None
}

/// Check a typed challenge answer against the expected sum.
pub fn validate_challenge_answer(value: &str, expected: i32) -> Option<ValidationError> {
    if value.is_empty() {
        return Some(ValidationError::EmptyField);
    }
    match value.trim().parse::<i32>() {
        Ok(answer) if answer == expected => None,
        _ => Some(ValidationError::WrongAnswer),
    }
}

/// Simple `local@domain.tld` shape: non-empty local part, a single `@`, a
/// dotted domain with non-empty segments, no whitespace anywhere. Not RFC
/// 5321 — the backend owns real address checking.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_empty_field() {
        assert_eq!(validate_email(""), Some(ValidationError::EmptyField));
    }

    #[test]
    fn strings_without_at_sign_are_invalid_format() {
        for value in ["plainword", "no-at.example.com", "a.b.c", "12345", "über"] {
            assert_eq!(
                validate_email(value),
                Some(ValidationError::InvalidFormat),
                "expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn malformed_addresses_are_invalid_format() {
        for value in [
            "@example.com",
            "user@",
            "user@nodot",
            "user@.com",
            "user@example.",
            "user@exa mple.com",
            "us er@example.com",
            "user@@example.com",
        ] {
            assert_eq!(
                validate_email(value),
                Some(ValidationError::InvalidFormat),
                "expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn well_shaped_addresses_pass() {
        for value in ["a@b.c", "admin@example.com", "first.last@sub.example.co.uk"] {
            assert_eq!(validate_email(value), None, "expected {value:?} to pass");
        }
    }

    #[test]
    fn blank_password_is_empty_field() {
        assert_eq!(validate_password(""), Some(ValidationError::EmptyField));
    }

    #[test]
    fn short_passwords_are_too_short() {
        for value in ["a", "letmein", "1234567"] {
            assert_eq!(validate_password(value), Some(ValidationError::TooShort));
        }
    }

    #[test]
    fn eight_or_more_characters_pass() {
        for value in ["letmein!", "12345678", "a much longer passphrase"] {
            assert_eq!(validate_password(value), None);
        }
    }

    #[test]
    fn blank_challenge_answer_is_empty_field() {
        assert_eq!(
            validate_challenge_answer("", 7),
            Some(ValidationError::EmptyField)
        );
    }

    #[test]
    fn wrong_or_unparseable_answers_are_wrong_answer() {
        for value in ["8", "-7", "seven", "7.0"] {
            assert_eq!(
                validate_challenge_answer(value, 7),
                Some(ValidationError::WrongAnswer),
                "expected {value:?} to be rejected"
            );
        }
    }

    #[test]
    fn the_exact_sum_passes_even_with_padding() {
        assert_eq!(validate_challenge_answer("7", 7), None);
        assert_eq!(validate_challenge_answer(" 7 ", 7), None);
    }
}
