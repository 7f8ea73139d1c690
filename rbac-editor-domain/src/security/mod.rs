pub mod role_binding;
pub mod cluster_role_binding;
pub mod persisted;
pub mod role_assignment;

pub use role_binding::{RoleBinding, RoleRef, Subject, SubjectKind, SubjectSource};
pub use cluster_role_binding::ClusterRoleBinding;
pub use persisted::PersistedBinding;
pub use role_assignment::{ClusterScope, RoleAssignment, RoleAssignmentSpec, RoleAssignmentSubject};
