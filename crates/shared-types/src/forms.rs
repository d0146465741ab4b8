use std::collections::HashMap;

use crate::AppError;

/// Values captured by the sign-in form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert("password".to_string(), "Password is required".to_string());
        }
        finish(errors)
    }
}

/// Values captured by the patient sign-up form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub const MIN_PASSWORD_LEN: usize = 8;

impl RegisterForm {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = HashMap::new();
        if self.name.trim().is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
        check_email(&self.email, &mut errors);
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                "password".to_string(),
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        } else if self.password != self.confirm_password {
            errors.insert(
                "confirm_password".to_string(),
                "Passwords do not match".to_string(),
            );
        }
        finish(errors)
    }
}

fn check_email(email: &str, errors: &mut HashMap<String, String>) {
    let email = email.trim();
    if email.is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !looks_like_email(email) {
        errors.insert("email".to_string(), "Enter a valid email address".to_string());
    }
}

/// Shape check only: one `@` with text on both sides and a dot in the domain.
fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

fn finish(errors: HashMap<String, String>) -> Result<(), AppError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Please fix the highlighted fields", errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let err = LoginForm::default().validate().unwrap_err();
        assert_eq!(err.field("email"), Some("Email is required"));
        assert_eq!(err.field("password"), Some("Password is required"));
    }

    #[test]
    fn login_accepts_valid_input() {
        let form = LoginForm {
            email: "pat@clinic.test".into(),
            password: "hunter22".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn email_shape_is_checked() {
        for bad in ["pat", "@clinic.test", "pat@", "pat@clinic", "pat@@clinic.test"] {
            let form = LoginForm {
                email: bad.into(),
                password: "x".into(),
            };
            let err = form.validate().unwrap_err();
            assert_eq!(err.field("email"), Some("Enter a valid email address"), "input: {bad}");
        }
    }

    #[test]
    fn register_checks_password_rules() {
        let mut form = RegisterForm {
            name: "Pat Doe".into(),
            email: "pat@clinic.test".into(),
            password: "short".into(),
            confirm_password: "short".into(),
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.field("password"), Some("Password must be at least 8 characters"));

        form.password = "long enough".into();
        let err = form.validate().unwrap_err();
        assert_eq!(err.field("confirm_password"), Some("Passwords do not match"));

        form.confirm_password = "long enough".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn register_requires_name() {
        let form = RegisterForm {
            name: "   ".into(),
            email: "pat@clinic.test".into(),
            password: "long enough".into(),
            confirm_password: "long enough".into(),
        };
        assert_eq!(form.validate().unwrap_err().field("name"), Some("Name is required"));
    }
}
