use validator::Validate;

use super::{check, FieldErrors};

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub identifier: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        check(self).into_result(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct ForgotPasswordForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

impl ForgotPasswordForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        check(self).into_result(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct ResetPasswordForm {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm: String,
}

impl ResetPasswordForm {
    pub fn check(&self) -> Result<(), FieldErrors> {
        check(self).into_result(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let errors = LoginForm::default().check().unwrap_err();
        assert_eq!(errors.get("identifier"), Some("Email or username is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));

        let form = LoginForm {
            identifier: "admin".to_string(),
            password: "secret".to_string(),
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn test_reset_requires_matching_confirmation() {
        let form = ResetPasswordForm {
            password: "n3w-secret".to_string(),
            confirm: "n3w-secreT".to_string(),
        };
        assert_eq!(form.check().unwrap_err().get("confirm"), Some("Passwords do not match"));

        let form = ResetPasswordForm {
            confirm: "n3w-secret".to_string(),
            ..form
        };
        assert!(form.check().is_ok());
    }

    #[test]
    fn test_forgot_password_needs_email() {
        let form = ForgotPasswordForm {
            email: "admin".to_string(),
        };
        assert_eq!(form.check().unwrap_err().get("email"), Some("Enter a valid email address"));
    }
}
