pub mod extension;

pub use extension::{Extension, GroupVersionKind, Metadata};
