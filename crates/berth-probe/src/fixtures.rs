//! Sample test classes covering every selection outcome.
use berth_core::StaticClass;
use berth_model::TargetName;

/// Stand-in for a web archive built by a deployment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebArchive {
    pub name: String,
}

impl WebArchive {
    pub fn create(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

type Class = StaticClass<WebArchive>;

pub fn single_plain() -> Class {
    StaticClass::new("SinglePlainDeployment")
        .deployment("deploy", || Ok(WebArchive::create("plain.war")))
}

pub fn single_concrete() -> Class {
    StaticClass::new("SingleConcreteDeployment").deployment_for(
        TargetName::Glassfish,
        "deploy",
        || Ok(WebArchive::create("glassfish.war")),
    )
}

pub fn multiple_concrete() -> Class {
    StaticClass::new("MultipleConcreteDeployment")
        .deployment_for(TargetName::JbossAs7, "deploy", || {
            Ok(WebArchive::create("as7.war"))
        })
        .deployment_for(TargetName::Glassfish, "deploy2", || {
            Ok(WebArchive::create("glassfish.war"))
        })
}

pub fn multiple_duplicated_concrete() -> Class {
    StaticClass::new("MultipleDuplicatedConcreteDeployment")
        .deployment_for(TargetName::Glassfish, "deploy", || {
            Ok(WebArchive::create("glassfish-a.war"))
        })
        .deployment_for(TargetName::Glassfish, "deploy2", || {
            Ok(WebArchive::create("glassfish-b.war"))
        })
}

pub fn multiple_plain() -> Class {
    StaticClass::new("MultiplePlainDeployment")
        .deployment("deploy", || Ok(WebArchive::create("plain-a.war")))
        .deployment("deploy2", || Ok(WebArchive::create("plain-b.war")))
}

pub fn no_deployment() -> Class {
    StaticClass::new("NoDeployment")
}

/// All fixtures in a stable order.
pub fn all() -> Vec<Class> {
    vec![
        single_plain(),
        single_concrete(),
        multiple_concrete(),
        multiple_duplicated_concrete(),
        multiple_plain(),
        no_deployment(),
    ]
}
