pub mod security;

pub use security::{
    RoleBinding, RoleRef, Subject, SubjectKind, SubjectSource,
    ClusterRoleBinding,
    PersistedBinding,
    RoleAssignment, RoleAssignmentSpec, RoleAssignmentSubject, ClusterScope,
};
