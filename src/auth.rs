//! Access gate for front-ends
//!
//! The legacy framework sat behind a single shared static credential. That
//! check is authentication-adjacent plumbing, not part of the pipeline
//! contract, so it lives here as a standalone boolean gate front-ends can
//! consult before running a session.

/// Shared-secret access gate.
#[derive(Debug, Clone)]
pub struct AccessGate {
    secret: String,
}

impl AccessGate {
    /// Create a gate around the given shared secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check a candidate credential against the shared secret.
    pub fn verify(&self, candidate: &str) -> bool {
        candidate == self.secret
    }
}
