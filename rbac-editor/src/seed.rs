use crate::error::{EditorError, Result};
use rbac_editor_api::Extension;
use rbac_editor_domain::security::{PersistedBinding, RoleAssignment};
use rbac_editor_service::RoleAssignmentCollection;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::warn;
use validator::Validate;

/// 按扩展名解析JSON或YAML文档，没有扩展名时按JSON处理
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Ok(serde_yaml::from_str(&content)?),
        Some("json") | None => Ok(serde_json::from_str(&content)?),
        Some(other) => Err(EditorError::UnsupportedFormat(other.to_string())),
    }
}

/// 读取角色分配种子并原样载入；校验失败只记录警告
pub fn load_assignments(path: &Path) -> Result<RoleAssignmentCollection> {
    let seed: Vec<RoleAssignment> = read_document(path)?;
    for assignment in &seed {
        if let Err(errors) = assignment.validate() {
            warn!("Role assignment {:?} is incomplete: {}", assignment.name(), errors);
        }
    }
    Ok(RoleAssignmentCollection::load(seed))
}

pub fn load_binding(path: &Path) -> Result<PersistedBinding> {
    read_document(path)
}
