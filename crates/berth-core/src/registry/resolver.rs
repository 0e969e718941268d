use std::sync::Arc;

use tracing::trace;

/// Environment variable read by [`EnvSignal::default`].
pub const DEFAULT_SIGNAL_ENV: &str = "BERTH_ADAPTER";

/// Source of the active container adapter signal.
///
/// Queried once per generated deployment; implementations must not cache a stale
/// answer if the active adapter can change between test classes.
pub trait TargetResolver: Send + Sync {
    /// Resolver name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Package/module path of the active adapter, or `None` if no adapter is present.
    fn active_signal(&self) -> Option<String>;
}

impl<R: TargetResolver + ?Sized> TargetResolver for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn active_signal(&self) -> Option<String> {
        (**self).active_signal()
    }
}

impl<R: TargetResolver + ?Sized> TargetResolver for Arc<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn active_signal(&self) -> Option<String> {
        (**self).active_signal()
    }
}

/// Resolver that always reports the same signal.
#[derive(Debug, Clone)]
pub struct FixedSignal(String);

impl FixedSignal {
    pub fn new(signal: impl Into<String>) -> Self {
        Self(signal.into())
    }
}

impl TargetResolver for FixedSignal {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn active_signal(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Ordered set of container adapters registered for the run.
///
/// The first registered adapter is the active one.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    adapters: Vec<String>,
}

impl AdapterRegistry {
    /// Create an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Register an adapter by its package/module path.
    #[inline]
    pub fn register(&mut self, signal: impl Into<String>) -> &mut Self {
        self.adapters.push(signal.into());
        self
    }

    /// Register an adapter by its Rust type.
    ///
    /// The signal is the type path with `::` separators rewritten to `.`, so
    /// `acme::container::glassfish::Remote` registers as `acme.container.glassfish.remote`.
    pub fn register_type<T: ?Sized>(&mut self) -> &mut Self {
        let signal = type_signal::<T>();
        trace!(%signal, "registering adapter type");
        self.register(signal)
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Returns `true` if no adapter is registered.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl TargetResolver for AdapterRegistry {
    fn name(&self) -> &'static str {
        "adapter-registry"
    }

    fn active_signal(&self) -> Option<String> {
        self.adapters.first().cloned()
    }
}

/// Resolver that reads the signal from an environment variable on every query.
#[derive(Debug, Clone)]
pub struct EnvSignal {
    var: String,
}

impl EnvSignal {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }

    /// Name of the variable being read.
    pub fn var(&self) -> &str {
        &self.var
    }
}

impl Default for EnvSignal {
    fn default() -> Self {
        Self::new(DEFAULT_SIGNAL_ENV)
    }
}

impl TargetResolver for EnvSignal {
    fn name(&self) -> &'static str {
        "env"
    }

    fn active_signal(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

fn type_signal<T: ?Sized>() -> String {
    std::any::type_name::<T>()
        .replace("::", ".")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    mod container {
        pub mod glassfish {
            pub struct RemoteAdapter;
        }
    }

    #[test]
    fn fixed_signal_is_returned_verbatim() {
        let r = FixedSignal::new("org.jboss.as.arquillian.container.managed");
        assert_eq!(
            r.active_signal().as_deref(),
            Some("org.jboss.as.arquillian.container.managed")
        );
    }

    #[test]
    fn empty_registry_has_no_active_adapter() {
        let r = AdapterRegistry::new();
        assert!(r.is_empty());
        assert_eq!(r.active_signal(), None);
    }

    #[test]
    fn first_registered_adapter_is_active() {
        let mut r = AdapterRegistry::new();
        r.register("org.jboss.as.arquillian.container.remote")
            .register("org.jboss.arquillian.container.glassfish.remote_3_1");

        assert_eq!(r.len(), 2);
        assert_eq!(
            r.active_signal().as_deref(),
            Some("org.jboss.as.arquillian.container.remote")
        );
    }

    #[test]
    fn register_type_uses_dotted_module_path() {
        let mut r = AdapterRegistry::new();
        r.register_type::<container::glassfish::RemoteAdapter>();

        let signal = r.active_signal().expect("adapter registered");
        assert!(
            signal.ends_with("container.glassfish.remoteadapter"),
            "unexpected signal: {signal}"
        );
        assert!(!signal.contains("::"));
    }

    #[test]
    fn env_signal_unset_variable_yields_nothing() {
        let r = EnvSignal::new("BERTH_TEST_SIGNAL_SURELY_UNSET");
        assert_eq!(r.active_signal(), None);
    }

    #[test]
    fn env_signal_reads_trimmed_value() {
        let var = "BERTH_TEST_SIGNAL_TRIMMED";
        // SAFETY: variable name is unique to this test.
        unsafe { std::env::set_var(var, "  container.tomcat.embedded  ") };

        let r = EnvSignal::new(var);
        assert_eq!(r.active_signal().as_deref(), Some("container.tomcat.embedded"));

        // SAFETY: see above.
        unsafe { std::env::set_var(var, "   ") };
        assert_eq!(r.active_signal(), None);
    }

    #[test]
    fn env_signal_default_variable() {
        assert_eq!(EnvSignal::default().var(), DEFAULT_SIGNAL_ENV);
    }
}
