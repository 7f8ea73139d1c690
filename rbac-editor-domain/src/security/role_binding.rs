use serde::{Deserialize, Serialize};
use std::fmt;

/// RBAC资源所在的API组
pub const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// Subject和RoleRef中使用的kind常量
pub const USER_KIND: &str = "User";
pub const GROUP_KIND: &str = "Group";
pub const ROLE_KIND: &str = "Role";
pub const CLUSTER_ROLE_KIND: &str = "ClusterRole";

/// 表单控件中代表Group的取值（大小写敏感）
pub const GROUP_MARKER: &str = "group";

/// SubjectKind 编辑器中可切换的绑定对象类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectKind {
    #[default]
    User,
    Group,
}

impl SubjectKind {
    /// 把表单控件的取值映射为SubjectKind
    ///
    /// 只有与 [`GROUP_MARKER`] 完全相同的值映射为 `Group`，
    /// 其余任何值（包括无法识别的字符串）都映射为 `User`。
    pub fn from_marker(value: &str) -> Self {
        if value == GROUP_MARKER {
            SubjectKind::Group
        } else {
            SubjectKind::User
        }
    }

    /// 解析资源中的kind字段，只识别 `User` 和 `Group`
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            USER_KIND => Some(SubjectKind::User),
            GROUP_KIND => Some(SubjectKind::Group),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectKind::User => USER_KIND,
            SubjectKind::Group => GROUP_KIND,
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject表示绑定的对象
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Kind是对象的类型（User、Group、ServiceAccount等）
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub api_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Subject {
    pub fn new(kind: SubjectKind, name: impl Into<String>) -> Self {
        Self {
            kind: kind.as_str().to_string(),
            name: name.into(),
            api_group: RBAC_API_GROUP.to_string(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// 能识别的kind才返回值，ServiceAccount等返回 `None`
    pub fn subject_kind(&self) -> Option<SubjectKind> {
        SubjectKind::from_kind(&self.kind)
    }

    /// 非空的namespace
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref().filter(|ns| !ns.is_empty())
    }
}

/// RoleRef包含指向要使用的角色的信息
///
/// 所有字段缺失时都回落为空字符串，残缺的引用不会导致反序列化失败。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
    #[serde(default)]
    pub api_group: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

impl RoleRef {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_group: RBAC_API_GROUP.to_string(),
            kind: kind.into(),
            name: name.into(),
        }
    }
}

/// SubjectSource 由携带 `subject` 或 `subjects` 字段的记录实现
pub trait SubjectSource {
    fn subject(&self) -> Option<&Subject>;
    fn subject_list(&self) -> Option<&[Subject]>;

    /// 记录实际携带的对象；两个字段同时存在时单数的 `subject` 优先
    fn resolved_subjects(&self) -> &[Subject] {
        match (self.subject(), self.subject_list()) {
            (Some(subject), _) => std::slice::from_ref(subject),
            (None, Some(subjects)) => subjects,
            (None, None) => &[],
        }
    }
}

/// RoleBinding 命名空间级绑定中的一条记录
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoleBinding {
    /// 空字符串表示记录未指定命名空间
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub role_ref: RoleRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<Vec<Subject>>,
}

impl RoleBinding {
    pub fn new(namespace: impl Into<String>, role_ref: RoleRef, subjects: Vec<Subject>) -> Self {
        Self {
            namespace: namespace.into(),
            role_ref,
            subject: None,
            subjects: Some(subjects),
        }
    }
}

impl SubjectSource for RoleBinding {
    fn subject(&self) -> Option<&Subject> {
        self.subject.as_ref()
    }

    fn subject_list(&self) -> Option<&[Subject]> {
        self.subjects.as_deref()
    }
}
