use indexmap::IndexSet;
use rbac_editor_domain::security::{PersistedBinding, Subject, SubjectKind, SubjectSource};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// EditableBinding 绑定编辑器的可编辑状态
///
/// `users` 和 `groups` 是两种对象类型各自的影子列表：与 `subject_kind`
/// 对应的那个镜像 `subject_names`，另一个保存该类型上一次激活时的快照。
/// 镜像只在 [`EditableBinding::set_subject_kind`] 和 [`EditableBinding::ingest`]
/// 中同步，直接编辑 `subject_names` 不会刷新影子列表。
///
/// 所有操作都返回新的快照，不修改 `self`。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableBinding {
    pub subject_kind: SubjectKind,
    pub subject_names: Vec<String>,
    pub users: Vec<String>,
    pub groups: Vec<String>,
    pub role_names: Vec<String>,
    pub namespaces: Vec<String>,
}

impl EditableBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// 至少有一个角色并且至少有一个对象时才有效，与对象类型无关
    pub fn is_valid(&self) -> bool {
        !self.role_names.is_empty() && !self.subject_names.is_empty()
    }

    /// 指定类型的影子列表
    pub fn shadow(&self, kind: SubjectKind) -> &[String] {
        match kind {
            SubjectKind::User => &self.users,
            SubjectKind::Group => &self.groups,
        }
    }

    fn shadow_mut(&mut self, kind: SubjectKind) -> &mut Vec<String> {
        match kind {
            SubjectKind::User => &mut self.users,
            SubjectKind::Group => &mut self.groups,
        }
    }

    /// 载入持久化的绑定
    ///
    /// `None` 时状态不变。否则 `role_names`、`namespaces`、`subject_names`
    /// 整体替换为新计算的值（去重并保持首次出现顺序），`subject_kind`
    /// 取第一个带对象的记录中第一个对象的类型；没有对象或类型无法识别时
    /// 保留原来的 `subject_kind`，两个影子列表也都不动。
    pub fn ingest(&self, persisted: Option<&PersistedBinding>) -> Self {
        let Some(persisted) = persisted else {
            return self.clone();
        };

        let role_names = match persisted {
            PersistedBinding::Namespaced(records) => {
                dedup(records.iter().map(|r| r.role_ref.name.as_str()))
            }
            PersistedBinding::ClusterScoped(binding) => {
                binding.role_name().map(|name| vec![name.to_string()]).unwrap_or_default()
            }
        };

        let namespaces = match persisted {
            PersistedBinding::Namespaced(records) => dedup(
                records
                    .iter()
                    .map(|r| r.namespace.as_str())
                    .filter(|ns| !ns.is_empty()),
            ),
            PersistedBinding::ClusterScoped(binding) => {
                dedup(binding.resolved_subjects().iter().filter_map(Subject::namespace))
            }
        };

        let subject_lists: Vec<&[Subject]> = persisted
            .subject_sources()
            .into_iter()
            .map(|source| source.resolved_subjects())
            .collect();

        let subject_names = dedup(
            subject_lists
                .iter()
                .flat_map(|subjects| subjects.iter())
                .map(|s| s.name.as_str()),
        );

        let resolved_kind = subject_lists
            .iter()
            .find_map(|subjects| subjects.first())
            .and_then(Subject::subject_kind);

        let mut next = Self {
            subject_kind: resolved_kind.unwrap_or(self.subject_kind),
            subject_names,
            users: self.users.clone(),
            groups: self.groups.clone(),
            role_names,
            namespaces,
        };
        if let Some(kind) = resolved_kind {
            *next.shadow_mut(kind) = next.subject_names.clone();
        }

        debug!(
            "Ingested {} binding: {} roles, {} namespaces, {} {} subjects",
            if persisted.is_cluster_scoped() { "cluster-scoped" } else { "namespaced" },
            next.role_names.len(),
            next.namespaces.len(),
            next.subject_names.len(),
            next.subject_kind,
        );
        next
    }

    /// 切换对象类型
    ///
    /// 切换前把 `subject_names` 存入当前类型的影子列表，切换后从新类型的
    /// 影子列表恢复 `subject_names`，来回切换一次不会丢失任何输入。
    pub fn set_subject_kind(&self, requested: &str) -> Self {
        let kind = SubjectKind::from_marker(requested);
        let mut next = self.clone();
        *next.shadow_mut(self.subject_kind) = self.subject_names.clone();
        next.subject_kind = kind;
        next.subject_names = next.shadow(kind).to_vec();
        next
    }

    pub fn set_subject_names(&self, values: Vec<String>) -> Self {
        Self {
            subject_names: values,
            ..self.clone()
        }
    }

    pub fn set_role_names(&self, values: Vec<String>) -> Self {
        Self {
            role_names: values,
            ..self.clone()
        }
    }

    pub fn set_namespaces(&self, values: Vec<String>) -> Self {
        Self {
            namespaces: values,
            ..self.clone()
        }
    }
}

fn dedup<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    values
        .into_iter()
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
