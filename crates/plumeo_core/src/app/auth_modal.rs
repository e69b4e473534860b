//! Login/signup modal shell. Holds presentation state only; no credentials.

use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Log in to Plumeo",
            Self::Signup => "Sign up for Plumeo",
        }
    }

    /// Label of the button that switches to the other mode.
    pub fn switch_label(self) -> &'static str {
        match self {
            Self::Login => "Switch to Sign up",
            Self::Signup => "Switch to Log in",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "signup" => Ok(Self::Signup),
            _ => Err(value.to_string()),
        }
    }
}

/// What the surface needs to draw an open modal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthModalView {
    pub mode: AuthMode,
    pub title: &'static str,
    pub switch_label: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthModal {
    open: bool,
    mode: AuthMode,
}

impl AuthModal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn open(&mut self, mode: AuthMode) -> AuthModalView {
        self.open = true;
        self.mode = mode;
        self.view()
    }

    /// Returns whether the modal was open before.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn switch_mode(&mut self) -> AuthModalView {
        self.mode = self.mode.toggled();
        self.view()
    }

    pub fn view(&self) -> AuthModalView {
        AuthModalView {
            mode: self.mode,
            title: self.mode.title(),
            switch_label: self.mode.switch_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthMode, AuthModal};

    #[test]
    fn switch_flips_title_and_label() {
        let mut modal = AuthModal::default();
        modal.open(AuthMode::Login);
        let view = modal.switch_mode();
        assert_eq!(view.title, "Sign up for Plumeo");
        assert_eq!(view.switch_label, "Switch to Log in");
        assert_eq!(modal.switch_mode().mode, AuthMode::Login);
    }

    #[test]
    fn close_reports_previous_state() {
        let mut modal = AuthModal::default();
        assert!(!modal.close());
        modal.open(AuthMode::Signup);
        assert!(modal.close());
        assert!(!modal.is_open());
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("SignUp".parse::<AuthMode>(), Ok(AuthMode::Signup));
        assert!("oauth".parse::<AuthMode>().is_err());
    }
}
