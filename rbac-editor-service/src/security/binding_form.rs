use super::binding_reconciler::EditableBinding;
use rbac_editor_domain::security::role_binding::{CLUSTER_ROLE_KIND, RBAC_API_GROUP};
use rbac_editor_domain::security::{ClusterRoleBinding, RoleBinding, RoleRef, Subject};

/// BindingTemplate 把编辑状态写回绑定时使用的角色引用模板
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingTemplate {
    /// 角色引用的kind，默认 `ClusterRole`
    pub role_kind: String,
    pub api_group: String,
}

impl Default for BindingTemplate {
    fn default() -> Self {
        Self {
            role_kind: CLUSTER_ROLE_KIND.to_string(),
            api_group: RBAC_API_GROUP.to_string(),
        }
    }
}

impl BindingTemplate {
    fn role_ref(&self, name: &str) -> RoleRef {
        RoleRef {
            api_group: self.api_group.clone(),
            kind: self.role_kind.clone(),
            name: name.to_string(),
        }
    }
}

impl EditableBinding {
    /// 当前类型下的全部对象
    fn form_subjects(&self, template: &BindingTemplate) -> Vec<Subject> {
        self.subject_names
            .iter()
            .map(|name| Subject {
                kind: self.subject_kind.as_str().to_string(),
                name: name.clone(),
                api_group: template.api_group.clone(),
                namespace: None,
            })
            .collect()
    }

    /// 生成命名空间级绑定：命名空间 × 角色，命名空间在外层
    pub fn to_role_bindings(&self, template: &BindingTemplate) -> Vec<RoleBinding> {
        let subjects = self.form_subjects(template);
        let subjects = &subjects;
        self.namespaces
            .iter()
            .flat_map(|namespace| {
                self.role_names.iter().map(move |role| {
                    RoleBinding::new(namespace.clone(), template.role_ref(role), subjects.clone())
                })
            })
            .collect()
    }

    /// 生成集群级绑定，每个角色一条，名称留给调用方分配
    pub fn to_cluster_role_bindings(&self, template: &BindingTemplate) -> Vec<ClusterRoleBinding> {
        let subjects = self.form_subjects(template);
        self.role_names
            .iter()
            .map(|role| ClusterRoleBinding::new(template.role_ref(role), subjects.clone()))
            .collect()
    }
}
