//! Login / registration form state and validation.

use crate::error::{ChatError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Editable fields of the auth card plus its in-flight flag.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub is_loading: bool,
}

impl AuthForm {
    /// Switching mode keeps the username but never carries passwords over.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.password.clear();
        self.confirm_password.clear();
    }

    /// Checks the fields and returns the username to authenticate as, exactly
    /// as typed. Any non-empty pair is accepted.
    pub fn validate(&self) -> Result<String> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ChatError::MissingCredentials);
        }
        if self.mode == AuthMode::Register && self.password != self.confirm_password {
            return Err(ChatError::PasswordMismatch);
        }
        Ok(self.username.clone())
    }

    pub fn reset(&mut self) {
        *self = Self {
            mode: self.mode,
            ..Self::default()
        };
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.is_loading, self.mode) {
            (true, _) => "Processing...",
            (false, AuthMode::Login) => "Sign In",
            (false, AuthMode::Register) => "Sign Up",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Sign in to your account",
            AuthMode::Register => "Create a new account",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Don't have an account? Sign up",
            AuthMode::Register => "Already have an account? Sign in",
        }
    }
}
