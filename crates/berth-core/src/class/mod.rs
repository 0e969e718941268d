//! Host-side view of a test class that declares deployment methods.
//!
//! The host implements [`DeploymentClass`] for whatever represents a test class in its world.
//! [`StaticClass`] covers classes whose deployments are plain Rust closures.
mod error;
pub use error::InvocationError;

mod fixed;
pub use fixed::StaticClass;

use berth_model::Candidate;

/// Test class exposing deployment-producing operations.
///
/// A class is responsible for:
/// - enumerating its deployment operations together with their target tags (`candidates`)
/// - running one of them on request and returning the produced archive (`invoke`)
pub trait DeploymentClass {
    /// Artifact produced by a deployment operation.
    type Archive;

    /// Class name used in logs and error messages.
    fn name(&self) -> &str;

    /// Deployment operations in declaration order.
    fn candidates(&self) -> Vec<Candidate>;

    /// Run the named operation and return its archive.
    fn invoke(&self, method: &str) -> Result<Self::Archive, InvocationError>;
}
