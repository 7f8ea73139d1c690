pub mod binding_reconciler;
pub mod binding_form;
pub mod role_assignment_store;

pub use binding_reconciler::EditableBinding;
pub use binding_form::BindingTemplate;
pub use role_assignment_store::RoleAssignmentCollection;
