use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{ModelError, ModelResult};

/// Runtime target a deployment candidate can be tagged with.
///
/// Every concrete member carries a signal fragment: a unique piece of the
/// container adapter's package/module path that identifies it at runtime.
/// `None` tags untagged (default) candidates and is never matched by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TargetName {
    /// GlassFish 3.1 container.
    Glassfish,
    /// JBoss AS7 container.
    JbossAs7,
    /// Apache Tomcat container.
    Tomcat,
    /// Jetty container.
    Jetty,
    /// Weld EE embedded container.
    Weld,
    /// OpenEJB embedded container.
    OpenEjb,
    /// No specific target; the default bucket.
    #[default]
    None,
}

impl TargetName {
    /// Concrete targets in lookup order. `None` is not part of the scan.
    pub const KNOWN: [TargetName; 6] = [
        TargetName::Glassfish,
        TargetName::JbossAs7,
        TargetName::Tomcat,
        TargetName::Jetty,
        TargetName::Weld,
        TargetName::OpenEjb,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetName::Glassfish => "glassfish",
            TargetName::JbossAs7 => "jbossas7",
            TargetName::Tomcat => "tomcat",
            TargetName::Jetty => "jetty",
            TargetName::Weld => "weld",
            TargetName::OpenEjb => "openejb",
            TargetName::None => "none",
        }
    }

    /// Identifying fragment of the adapter path, `None` for the sentinel.
    pub fn signal_fragment(&self) -> Option<&'static str> {
        match self {
            TargetName::Glassfish => Some("container.glassfish"),
            TargetName::JbossAs7 => Some("jboss.as.arquillian.container"),
            TargetName::Tomcat => Some("container.tomcat"),
            TargetName::Jetty => Some("container.jetty"),
            TargetName::Weld => Some("container.weld"),
            TargetName::OpenEjb => Some("openejb.arquillian"),
            TargetName::None => None,
        }
    }

    /// Returns the first known target whose fragment occurs in `signal`.
    ///
    /// The signal is lowercased before matching. Returns `None` (the Rust
    /// option, not the sentinel) when nothing matches.
    pub fn matching(signal: &str) -> Option<TargetName> {
        let signal = signal.to_ascii_lowercase();
        Self::KNOWN.into_iter().find(|t| {
            t.signal_fragment()
                .is_some_and(|fragment| signal.contains(fragment))
        })
    }

    /// Returns `true` for the untagged sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, TargetName::None)
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetName {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glassfish" => Ok(TargetName::Glassfish),
            "jbossas7" => Ok(TargetName::JbossAs7),
            "tomcat" => Ok(TargetName::Tomcat),
            "jetty" => Ok(TargetName::Jetty),
            "weld" => Ok(TargetName::Weld),
            "openejb" => Ok(TargetName::OpenEjb),
            "none" => Ok(TargetName::None),
            _ => Err(ModelError::UnknownTarget(s.to_string())),
        }
    }
}

impl Serialize for TargetName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TargetName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}
