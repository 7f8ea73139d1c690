use super::cluster_role_binding::ClusterRoleBinding;
use super::role_binding::{RoleBinding, SubjectSource};
use serde::{Deserialize, Serialize};

/// PersistedBinding 编辑器可以载入的两种绑定形态
///
/// JSON中数组解码为 `Namespaced`，对象解码为 `ClusterScoped`。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PersistedBinding {
    Namespaced(Vec<RoleBinding>),
    ClusterScoped(ClusterRoleBinding),
}

impl PersistedBinding {
    /// 按记录顺序返回每条记录携带的对象
    pub fn subject_sources(&self) -> Vec<&dyn SubjectSource> {
        match self {
            PersistedBinding::Namespaced(records) => {
                records.iter().map(|r| r as &dyn SubjectSource).collect()
            }
            PersistedBinding::ClusterScoped(binding) => vec![binding as &dyn SubjectSource],
        }
    }

    pub fn is_cluster_scoped(&self) -> bool {
        matches!(self, PersistedBinding::ClusterScoped(_))
    }
}

impl From<Vec<RoleBinding>> for PersistedBinding {
    fn from(records: Vec<RoleBinding>) -> Self {
        PersistedBinding::Namespaced(records)
    }
}

impl From<ClusterRoleBinding> for PersistedBinding {
    fn from(binding: ClusterRoleBinding) -> Self {
        PersistedBinding::ClusterScoped(binding)
    }
}
