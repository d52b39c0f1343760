use hiring_registry::error::AppError;
use hiring_registry::registry::{HiringRegistry, RosterImporter};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the registry the server starts with, replaying a roster file when one is configured.
pub(crate) fn seed_registry(roster: Option<&Path>) -> Result<HiringRegistry, AppError> {
    let Some(path) = roster else {
        return Ok(HiringRegistry::new());
    };

    let registry = RosterImporter::from_path(path)?;
    info!(
        roster = %path.display(),
        skills = registry.skills().count(),
        positions = registry.positions().count(),
        applicants = registry.applicants().count(),
        "registry seeded from roster"
    );
    Ok(registry)
}
