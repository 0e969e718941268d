mod domain;
pub use domain::{ClassName, MethodName, TargetName};

mod error;
pub use error::{ModelError, ModelResult};

mod candidate;
pub use candidate::{Candidate, CandidateGroup};
