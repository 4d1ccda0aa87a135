//! Port used by the readiness probe to confirm backing services respond.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Reasons a dependency is not ready.
    pub enum ReadinessCheckError {
        /// The dependency did not answer.
        Unavailable { message: String } => "dependency unavailable: {message}",
    }
}

/// A dependency the service needs before it can take traffic.
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    /// Succeeds when the dependency answers.
    async fn check(&self) -> Result<(), ReadinessCheckError>;
}

/// Readiness check that always succeeds, for tests without a store.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysReady;

#[async_trait]
impl ReadinessCheck for AlwaysReady {
    async fn check(&self) -> Result<(), ReadinessCheckError> {
        Ok(())
    }
}
