use super::role_binding::{RoleRef, Subject, SubjectSource};
use serde::{Deserialize, Serialize};

/// ClusterRoleBinding 集群级绑定，没有顶层命名空间
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterRoleBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub role_ref: RoleRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<Subject>>,
}

impl ClusterRoleBinding {
    pub fn new(role_ref: RoleRef, subjects: Vec<Subject>) -> Self {
        Self {
            name: None,
            role_ref,
            subject: None,
            subjects: Some(subjects),
        }
    }

    /// 引用的角色名称，为空时返回 `None`
    pub fn role_name(&self) -> Option<&str> {
        Some(self.role_ref.name.as_str()).filter(|name| !name.is_empty())
    }
}

impl SubjectSource for ClusterRoleBinding {
    fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    fn subject_list(&self) -> Option<&[Subject]> {
        self.subjects.as_deref()
    }
}
