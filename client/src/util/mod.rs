//! Browser helpers shared across components. Everything here is a no-op
//! outside the `hydrate` build.

pub mod dom;
pub mod visibility;
