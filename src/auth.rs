//! Session gate for the greeting UI.
//!
//! This is deliberately not a security boundary: the secret is a static
//! string compared in plaintext on the client, matching the reference
//! behavior. It lives behind this one type so a real credential check
//! could replace it without touching the shell.

/// The fixed passphrase. Every fresh launch starts unauthenticated.
const ACCESS_SECRET: &str = "2025";

const WRONG_SECRET_MESSAGE: &str = "密码错误，请重试";

#[derive(Debug, Default)]
pub struct SessionGate {
    authenticated: bool,
    last_error: Option<String>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte-exact, case-sensitive check against the fixed secret. On
    /// failure the caller is expected to clear the input field; the gate
    /// itself keeps the localized error for display. No attempt counting,
    /// no delay.
    pub fn attempt_login(&mut self, candidate: &str) -> bool {
        if candidate == ACCESS_SECRET {
            self.authenticated = true;
            self.last_error = None;
            true
        } else {
            self.last_error = Some(WRONG_SECRET_MESSAGE.to_string());
            false
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
