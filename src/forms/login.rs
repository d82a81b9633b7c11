use anyhow::Result;

use crate::model::LoginRequest;

use super::fields::is_blank;
use super::{FieldValues, FormField, ValidationResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl FormField for LoginField {
    fn name(self) -> &'static str {
        match self {
            LoginField::Username => "username",
            LoginField::Password => "password",
        }
    }

    fn label(self) -> &'static str {
        match self {
            LoginField::Username => "Username",
            LoginField::Password => "Password",
        }
    }

    fn secret(self) -> bool {
        self == LoginField::Password
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult<LoginField> {
        let mut errors = ValidationResult::default();
        if is_blank(&self.username) {
            errors.push(LoginField::Username, "Username is required.");
        }
        if is_blank(&self.password) {
            errors.push(LoginField::Password, "Password is required.");
        }
        errors
    }

    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }
}

impl FieldValues for LoginForm {
    type Field = LoginField;

    fn fields(&self) -> Vec<LoginField> {
        vec![LoginField::Username, LoginField::Password]
    }

    fn value(&self, field: LoginField) -> String {
        match field {
            LoginField::Username => self.username.clone(),
            LoginField::Password => self.password.clone(),
        }
    }

    fn set_value(&mut self, field: LoginField, value: &str) -> Result<()> {
        match field {
            LoginField::Username => self.username = value.to_string(),
            LoginField::Password => self.password = value.to_string(),
        }
        Ok(())
    }
}
