use std::fmt;

use berth_model::{Candidate, ClassName, TargetName};

use crate::class::{DeploymentClass, InvocationError};

type Producer<A> = Box<dyn Fn() -> Result<A, InvocationError> + Send + Sync>;

/// [`DeploymentClass`] assembled in code from named producer closures.
///
/// Declaration order is kept, so candidates come back in the order they were added.
pub struct StaticClass<A> {
    name: ClassName,
    methods: Vec<(Candidate, Producer<A>)>,
}

impl<A> StaticClass<A> {
    /// Create a class with no deployment methods.
    pub fn new(name: impl Into<ClassName>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// Add an untagged (default) deployment method.
    pub fn deployment<F>(self, method: &str, producer: F) -> Self
    where
        F: Fn() -> Result<A, InvocationError> + Send + Sync + 'static,
    {
        self.deployment_for(TargetName::None, method, producer)
    }

    /// Add a deployment method tagged for `target`.
    pub fn deployment_for<F>(mut self, target: TargetName, method: &str, producer: F) -> Self
    where
        F: Fn() -> Result<A, InvocationError> + Send + Sync + 'static,
    {
        let producer: Producer<A> = Box::new(producer);
        self.methods.push((Candidate::tagged(method, target), producer));
        self
    }
}

impl<A> DeploymentClass for StaticClass<A> {
    type Archive = A;

    fn name(&self) -> &str {
        &self.name
    }

    fn candidates(&self) -> Vec<Candidate> {
        self.methods.iter().map(|(c, _)| c.clone()).collect()
    }

    fn invoke(&self, method: &str) -> Result<A, InvocationError> {
        let (_, producer) = self
            .methods
            .iter()
            .find(|(c, _)| c.method == method)
            .ok_or_else(|| InvocationError::MissingMethod(method.to_string()))?;
        producer()
    }
}

impl<A> fmt::Debug for StaticClass<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticClass")
            .field("name", &self.name)
            .field(
                "methods",
                &self.methods.iter().map(|(c, _)| c).collect::<Vec<_>>(),
            )
            .finish()
    }
}
