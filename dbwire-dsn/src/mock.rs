//! Mock connectivity layer.
//!
//! The natural companion of the `Mock` driver: records every delegated call
//! and returns a canned handle, so adapter behavior can be asserted without
//! a database. Downstream test suites use it the same way this crate's do.

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;

use crate::connect::{Connectivity, Credentials};

/// One recorded delegation to the mock layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// Connection string exactly as delegated.
    pub dsn: String,
    /// Resolved username.
    pub username: String,
    /// Resolved password.
    pub password: Option<String>,
}

/// Handle returned by [`MockConnectivity`] on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockHandle {
    /// Connection string the handle was opened with.
    pub dsn: String,
    /// Username the handle was opened as.
    pub username: String,
}

/// Failure produced by a mock configured to fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct MockFailure(pub String);

/// A [`Connectivity`] implementation that opens nothing.
#[derive(Debug, Default)]
pub struct MockConnectivity {
    calls: Mutex<Vec<MockCall>>,
    failure: Option<String>,
}

impl MockConnectivity {
    /// Create a mock whose connections always succeed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose connections fail with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Every call delegated so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Connectivity for MockConnectivity {
    type Handle = MockHandle;
    type Error = MockFailure;

    async fn connect(&self, dsn: &str, credentials: &Credentials) -> Result<MockHandle, MockFailure> {
        self.calls.lock().push(MockCall {
            dsn: dsn.to_string(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        });

        match &self.failure {
            Some(message) => Err(MockFailure(message.clone())),
            None => Ok(MockHandle {
                dsn: dsn.to_string(),
                username: credentials.username.clone(),
            }),
        }
    }
}
