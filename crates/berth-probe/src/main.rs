mod config;
mod fixtures;

use tracing::{info, warn};

use berth_core::{DeploymentClass, DeploymentGenerator, EnvSignal, FixedSignal, TargetResolver};
use berth_observe::init_logger;

use crate::config::ProbeConfig;

fn main() -> anyhow::Result<()> {
    // 1) config + logger
    let cfg = ProbeConfig::load()?;
    init_logger(&cfg.logger)?;

    // 2) adapter signal: first argument wins over the environment
    let resolver: Box<dyn TargetResolver> = match std::env::args().nth(1) {
        Some(signal) => Box::new(FixedSignal::new(signal)),
        None => Box::new(EnvSignal::default()),
    };
    let generator = DeploymentGenerator::new(resolver).with_config(cfg.generator);
    info!(
        resolver = generator.resolver().name(),
        deployment = %generator.config().deployment_name,
        "probe started"
    );

    // 3) run every fixture class against the active adapter;
    //    some fixtures are invalid on purpose, so errors are reported, not fatal
    for class in fixtures::all() {
        match generator.generate(&class) {
            Ok(deployments) => {
                for d in deployments {
                    info!(class = class.name(), archive = %d.archive.name, "{d}");
                }
            }
            Err(e) => warn!(class = class.name(), error = %e, "deployment not generated"),
        }
    }

    info!("probe finished");
    Ok(())
}
