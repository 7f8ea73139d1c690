use rbac_editor_api::extension::{Extension, GroupVersionKind, Metadata};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// RoleAssignment实体的GVK常量
pub const ROLE_ASSIGNMENT_GROUP: &str = "rbac.open-cluster-management.io";
pub const ROLE_ASSIGNMENT_VERSION: &str = "v1alpha1";
pub const ROLE_ASSIGNMENT_KIND: &str = "RoleAssignment";

/// RoleAssignment实体，`metadata.name` 是它在集合中的键
///
/// `apiVersion` 和 `kind` 按原样保留，缺失时补为本资源的默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoleAssignment {
    #[serde(rename = "apiVersion", default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    #[validate(custom(function = "validate_metadata_name"))]
    pub metadata: Metadata,
    #[validate(nested)]
    pub spec: RoleAssignmentSpec,
}

impl Extension for RoleAssignment {
    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn group_version_kind(&self) -> GroupVersionKind {
        role_assignment_gvk()
    }
}

impl RoleAssignment {
    pub fn new(name: impl Into<String>, spec: RoleAssignmentSpec) -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
            metadata: Metadata::new(name),
            spec,
        }
    }
}

fn role_assignment_gvk() -> GroupVersionKind {
    GroupVersionKind::new(ROLE_ASSIGNMENT_GROUP, ROLE_ASSIGNMENT_VERSION, ROLE_ASSIGNMENT_KIND)
}

fn default_api_version() -> String {
    role_assignment_gvk().api_version()
}

fn default_kind() -> String {
    ROLE_ASSIGNMENT_KIND.to_string()
}

/// RoleAssignmentSpec包含角色和被授予的对象
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoleAssignmentSpec {
    #[validate(length(min = 1))]
    pub role: String,
    #[serde(default)]
    #[validate(nested)]
    pub subjects: Vec<RoleAssignmentSubject>,
}

/// RoleAssignmentSubject 一个对象及其生效的集群
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RoleAssignmentSubject {
    pub kind: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(nested)]
    pub clusters: Vec<ClusterScope>,
}

/// ClusterScope 对象在某个集群上的授权范围
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClusterScope {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub cluster_wide: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub namespaces: Vec<String>,
}

fn validate_metadata_name(metadata: &Metadata) -> Result<(), ValidationError> {
    if metadata.name.trim().is_empty() {
        return Err(ValidationError::new("empty_name"));
    }
    Ok(())
}
