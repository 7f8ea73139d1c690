mod config;
mod error;
mod seed;

use crate::config::{Config, LoggingConfig};
use crate::error::{EditorError, Result};
use rbac_editor_service::{EditableBinding, RoleAssignmentCollection, StateCell};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    init_tracing(&config.logging)?;
    info!("Starting RBAC binding editor...");

    let assignments: StateCell<RoleAssignmentCollection> = StateCell::default();
    if let Some(path) = &config.editor.seed_file {
        let seeded = seed::load_assignments(path)?;
        info!("Loaded {} role assignments from {}", seeded.len(), path.display());
        assignments.replace(seeded);
    }

    let binding: StateCell<EditableBinding> = StateCell::default();
    if let Some(path) = &config.editor.binding_file {
        let persisted = seed::load_binding(path)?;
        let state = binding.update(|prev| prev.ingest(Some(&persisted)));
        if !state.is_valid() {
            warn!("Binding loaded from {} needs at least one role and one subject", path.display());
        }

        let template = config.editor.template();
        let resources = if persisted.is_cluster_scoped() {
            serde_json::to_value(state.to_cluster_role_bindings(&template))?
        } else {
            serde_json::to_value(state.to_role_bindings(&template))?
        };
        let report = serde_json::json!({
            "binding": &state,
            "isValid": state.is_valid(),
            "resources": resources,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    info!(
        "RBAC binding editor finished with {} role assignments",
        assignments.get().len()
    );
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let initialized = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    initialized.map_err(|e| EditorError::Logging(e.to_string()))
}
