//! Construction of [`ViewResolver`] with registration-time invariants.
//!
//! Duplicate keys are rejected here so a more specific route can never be
//! shadowed by an entry registered earlier.

use std::collections::HashMap;

use contracts::{RenderMode, Role};
use thiserror::Error;

use super::{RouteEntry, ViewResolver};

/// Registration failed because a key was seen twice.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate route path: {path}")]
    DuplicatePath { path: &'static str },
    #[error("duplicate default view for role: {role}")]
    DuplicateRoleDefault { role: &'static str },
}

/// Collects routes and role defaults, then validates them into an
/// immutable [`ViewResolver`].
#[derive(Debug, Default)]
pub struct ResolverBuilder {
    routes: Vec<(&'static str, RouteEntry)>,
    defaults: Vec<(Role, &'static str)>,
}

impl ResolverBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a route with the default action set.
    pub fn route(self, path: &'static str, view_id: &'static str) -> Self {
        self.route_with_mode(path, view_id, RenderMode::Default)
    }

    /// Registers a route that forces a specific render mode on its view.
    pub fn route_with_mode(
        mut self,
        path: &'static str,
        view_id: &'static str,
        render_mode: RenderMode,
    ) -> Self {
        self.routes.push((
            path,
            RouteEntry {
                view_id,
                render_mode,
            },
        ));
        self
    }

    /// Registers the view a role lands on when no path matches.
    pub fn default_view(mut self, role: Role, view_id: &'static str) -> Self {
        self.defaults.push((role, view_id));
        self
    }

    /// Validates key uniqueness and produces the resolver.
    pub fn build(self) -> Result<ViewResolver, RegistryError> {
        let mut routes = HashMap::with_capacity(self.routes.len());
        for (path, entry) in self.routes {
            if routes.insert(path, entry).is_some() {
                return Err(RegistryError::DuplicatePath { path });
            }
        }

        let mut defaults = HashMap::with_capacity(self.defaults.len());
        for (role, view_id) in self.defaults {
            if defaults.insert(role, view_id).is_some() {
                return Err(RegistryError::DuplicateRoleDefault { role: role.code() });
            }
        }

        Ok(ViewResolver::new(routes, defaults))
    }
}
