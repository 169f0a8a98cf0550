//! Client-side checks run before any request leaves the machine.

use std::fmt;

use serde::Serialize;

/// True iff every field is non-empty after trimming whitespace and BOMs.
pub fn fields_filled<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.iter().all(|field| !trim_field(field.as_ref()).is_empty())
}

fn trim_field(field: &str) -> &str {
    field.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Why a form was not submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyFields,
    PasswordMismatch,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyFields => write!(f, "Please fill in all fields."),
            ValidationError::PasswordMismatch => write!(f, "Passwords do not match."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Login payload: `{email, password}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl LoginFields {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// # Errors
    /// Returns `EmptyFields` if any field is blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if fields_filled(&[&self.email, &self.password]) {
            Ok(())
        } else {
            Err(ValidationError::EmptyFields)
        }
    }
}

/// Registration payload: `{email, username, password, password_check}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegisterFields {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_check: String,
}

impl RegisterFields {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        password_check: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: password.into(),
            password_check: password_check.into(),
        }
    }

    /// Blank fields are reported before a password mismatch.
    ///
    /// Passwords are compared exactly, without trimming.
    ///
    /// # Errors
    /// Returns `EmptyFields` or `PasswordMismatch`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !fields_filled(&[
            &self.email,
            &self.username,
            &self.password,
            &self.password_check,
        ]) {
            return Err(ValidationError::EmptyFields);
        }
        if self.password != self.password_check {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_filled() {
        assert!(!fields_filled(&["  ", "x"]));
        assert!(fields_filled(&["a", "b"]));
        assert!(!fields_filled(&["a", "\t\n"]));
        assert!(!fields_filled(&[""]));
        assert!(fields_filled::<&str>(&[]));
    }

    #[test]
    fn test_fields_filled_treats_bom_as_blank() {
        assert!(!fields_filled(&["\u{FEFF}", "x"]));
        assert!(!fields_filled(&[" \u{FEFF}\t", "x"]));
        assert!(fields_filled(&["\u{FEFF}a", "x"]));
    }

    #[test]
    fn test_fields_filled_accepts_owned_strings() {
        let fields = vec![" padded ".to_string(), "x".to_string()];
        assert!(fields_filled(&fields));
    }

    #[test]
    fn test_login_validation() {
        assert_eq!(LoginFields::new("user@example.com", "secret").validate(), Ok(()));
        assert_eq!(
            LoginFields::new("user@example.com", "   ").validate(),
            Err(ValidationError::EmptyFields)
        );
    }

    #[test]
    fn test_register_mismatch() {
        let fields = RegisterFields::new("u@e.com", "name", "pw1", "pw2");
        assert_eq!(fields.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_register_blank_reported_before_mismatch() {
        let fields = RegisterFields::new("u@e.com", "name", " ", "pw2");
        assert_eq!(fields.validate(), Err(ValidationError::EmptyFields));
    }

    #[test]
    fn test_register_passwords_compared_untrimmed() {
        let fields = RegisterFields::new("u@e.com", "name", "pw ", "pw");
        assert_eq!(fields.validate(), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_payload_shapes() {
        let login = serde_json::to_value(LoginFields::new("user@example.com", "secret")).unwrap();
        assert_eq!(
            login,
            serde_json::json!({"email": "user@example.com", "password": "secret"})
        );

        let register =
            serde_json::to_value(RegisterFields::new("u@e.com", "name", "pw", "pw")).unwrap();
        assert_eq!(
            register,
            serde_json::json!({
                "email": "u@e.com",
                "username": "name",
                "password": "pw",
                "password_check": "pw"
            })
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::EmptyFields.to_string(),
            "Please fill in all fields."
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );
    }
}
