//! View resolution - single source of truth for mapping (role, path) → view
//!
//! Contains:
//! - `ViewResolver` - the two-tier dispatch table (path registry, role defaults)
//! - `builder` - construction with duplicate-key rejection
//! - `table` - the built-in route table

pub mod builder;
pub mod table;

use std::collections::HashMap;

use contracts::{RenderMode, Role};
use serde::Serialize;

/// View every resolution degrades to when neither the path nor the role
/// is registered.
pub const FALLBACK_VIEW: &str = "OperationalDashboard";

/// One registered route target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub view_id: &'static str,
    pub render_mode: RenderMode,
}

/// Outcome of a resolution: which view to instantiate and which action set
/// it should expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub view_id: &'static str,
    pub render_mode: RenderMode,
}

/// Immutable (role, path) → view dispatch table.
///
/// Built once at startup through [`builder::ResolverBuilder`] and read-only
/// afterwards. Resolution is total: every input yields a view, unmatched
/// input degrades to the role default and finally to [`FALLBACK_VIEW`].
#[derive(Debug, Clone)]
pub struct ViewResolver {
    routes: HashMap<&'static str, RouteEntry>,
    defaults: HashMap<Role, &'static str>,
}

impl ViewResolver {
    pub(crate) fn new(
        routes: HashMap<&'static str, RouteEntry>,
        defaults: HashMap<Role, &'static str>,
    ) -> Self {
        Self { routes, defaults }
    }

    /// Resolves a navigation path for the given role.
    ///
    /// Priority order, first match wins:
    /// 1. exact match in the path registry (the route's own render mode)
    /// 2. the role's default view
    /// 3. the operational dashboard
    pub fn resolve(&self, role: Role, path: Option<&str>) -> Resolution {
        if let Some(path) = path {
            if let Some(entry) = self.routes.get(path) {
                log::debug!("resolved path '{}' -> {}", path, entry.view_id);
                return Resolution {
                    view_id: entry.view_id,
                    render_mode: entry.render_mode,
                };
            }
            log::warn!(
                "unknown path '{}', falling back to '{}' role default",
                path,
                role.code()
            );
        }

        let view_id = self
            .defaults
            .get(&role)
            .copied()
            .unwrap_or(FALLBACK_VIEW);
        Resolution {
            view_id,
            render_mode: RenderMode::Default,
        }
    }

    /// Same as [`resolve`](Self::resolve) for callers holding a raw session
    /// role code. Unknown codes behave as the operational role.
    pub fn resolve_code(&self, role_code: &str, path: Option<&str>) -> Resolution {
        self.resolve(Role::from_code_or_default(role_code), path)
    }

    /// Looks up a registered route without any fallback.
    pub fn route(&self, path: &str) -> Option<&RouteEntry> {
        self.routes.get(path)
    }

    /// Default view registered for a role, if any.
    pub fn default_view(&self, role: Role) -> Option<&'static str> {
        self.defaults.get(&role).copied()
    }

    /// All registered paths, in no particular order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    /// All registered routes, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = (&'static str, &RouteEntry)> + '_ {
        self.routes.iter().map(|(path, entry)| (*path, entry))
    }

    /// All registered role defaults, in no particular order.
    pub fn default_views(&self) -> impl Iterator<Item = (Role, &'static str)> + '_ {
        self.defaults.iter().map(|(role, view)| (*role, *view))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::builder::ResolverBuilder;
    use super::*;

    fn small_resolver() -> ViewResolver {
        ResolverBuilder::new()
            .route("/hrd/gaji/daftar", "DaftarGajiDashboard")
            .route_with_mode(
                "/management/penggajian",
                "PengajianActiveDashboard",
                RenderMode::Management,
            )
            .default_view(Role::Hrd, "HrdDashboard")
            .default_view(Role::Operational, FALLBACK_VIEW)
            .build()
            .unwrap()
    }

    #[test]
    fn test_path_match_wins_over_role_default() {
        let resolver = small_resolver();
        for role in Role::all() {
            let r = resolver.resolve(role, Some("/hrd/gaji/daftar"));
            assert_eq!(r.view_id, "DaftarGajiDashboard");
            assert_eq!(r.render_mode, RenderMode::Default);
        }
    }

    #[test]
    fn test_route_render_mode_is_carried() {
        let resolver = small_resolver();
        let r = resolver.resolve(Role::Gudang, Some("/management/penggajian"));
        assert_eq!(r.view_id, "PengajianActiveDashboard");
        assert_eq!(r.render_mode, RenderMode::Management);
    }

    #[test]
    fn test_role_default_on_unknown_path() {
        let resolver = small_resolver();
        let r = resolver.resolve(Role::Hrd, Some("/no/such/path"));
        assert_eq!(r.view_id, "HrdDashboard");
        assert_eq!(r.render_mode, RenderMode::Default);
    }

    #[test]
    fn test_role_default_on_missing_path() {
        let resolver = small_resolver();
        let r = resolver.resolve(Role::Hrd, None);
        assert_eq!(r.view_id, "HrdDashboard");
    }

    #[test]
    fn test_fallback_when_role_has_no_default() {
        let resolver = small_resolver();
        let r = resolver.resolve(Role::Tax, None);
        assert_eq!(r.view_id, FALLBACK_VIEW);
        assert_eq!(r.render_mode, RenderMode::Default);
    }

    #[test]
    fn test_resolve_code_unknown_role() {
        let resolver = small_resolver();
        let r = resolver.resolve_code("unknown-role", Some("/no/such/path"));
        assert_eq!(r.view_id, FALLBACK_VIEW);
    }

    #[test]
    fn test_resolution_serializes_for_diagnostics() {
        let resolver = small_resolver();
        let r = resolver.resolve(Role::Hrd, Some("/management/penggajian"));
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["view_id"], "PengajianActiveDashboard");
        assert_eq!(json["render_mode"], "management");
    }
}
