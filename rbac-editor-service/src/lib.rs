pub mod security;
pub mod state;

pub use security::{BindingTemplate, EditableBinding, RoleAssignmentCollection};
pub use state::StateCell;
