pub mod class;
pub mod error;
pub mod generator;
pub mod registry;
pub mod selector;

pub use class::{DeploymentClass, InvocationError, StaticClass};
pub use error::{CoreError, CoreResult};
pub use generator::{DeploymentDescription, DeploymentGenerator, GeneratorConfig};
pub use registry::{AdapterRegistry, EnvSignal, FixedSignal, TargetResolver, resolve_target};
pub use selector::{group_candidates, select};

pub mod prelude {
    pub use crate::class::{DeploymentClass, InvocationError, StaticClass};
    pub use crate::error::CoreError;
    pub use crate::generator::{DeploymentDescription, DeploymentGenerator, GeneratorConfig};
    pub use crate::registry::TargetResolver;
    pub use berth_model::{Candidate, CandidateGroup, TargetName};
}
