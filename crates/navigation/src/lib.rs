//! Navigation core for the dashboard shell: resolves which view a
//! `(role, path)` pair lands on, and owns the route table, the role-scoped
//! sidebar menus and the view label table.

pub mod labels;
pub mod menu;
pub mod resolver;

pub use resolver::builder::{RegistryError, ResolverBuilder};
pub use resolver::table::{builtin_resolver, RESOLVER};
pub use resolver::{Resolution, RouteEntry, ViewResolver};
