//! Query descriptors and the immutable builder.

pub mod builder;
pub mod descriptor;
pub mod spec;

pub use builder::QueryBuilder;
pub use descriptor::{Attribute, Mode, OrderItem, QueryDescriptor};
pub use spec::QuerySpec;
