mod target;
pub use target::TargetName;

/// Name of a test class as reported by the host (used in diagnostics only).
pub type ClassName = String;

/// Name of a deployment-producing operation declared on a test class.
///
/// Unique within its class; serves as the candidate identity.
pub type MethodName = String;
