//! Login status of the current browser tab and the screen it selects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root starts in `Checking`, runs the liveness check once on mount,
//! and settles in `LoggedIn` or `LoggedOut`. There is no transition back to
//! `Checking` short of a full page load.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Checking,
    LoggedIn,
    LoggedOut,
}

impl LoginStatus {
    pub fn from_liveness(alive: bool) -> Self {
        if alive { Self::LoggedIn } else { Self::LoggedOut }
    }

    pub fn screen(self) -> Screen {
        match self {
            Self::Checking => Screen::Checking,
            Self::LoggedIn => Screen::Home,
            Self::LoggedOut => Screen::Login,
        }
    }
}

/// Top-level view rendered at the app root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Checking,
    Login,
    Home,
}

/// Authentication state provided to pages via context.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub status: LoginStatus,
}
