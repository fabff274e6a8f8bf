//! The two client-side routes.

/// Path segment of the admin viewer, relative to the site base.
pub const ADMIN_SEGMENT: &str = "admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Admin,
}

impl Route {
    /// Resolve a location pathname against the site's base path
    /// (`/` or `/<repository>/`). Anything that is not the admin route is home.
    pub fn from_path(path: &str, base_path: &str) -> Self {
        let base = base_path.trim_end_matches('/');
        let rest = path.strip_prefix(base).unwrap_or(path);
        let rest = rest.trim_matches('/');
        let rest = rest.strip_suffix("index.html").unwrap_or(rest).trim_end_matches('/');
        if rest == ADMIN_SEGMENT {
            Route::Admin
        } else {
            Route::Home
        }
    }

    /// Absolute URL path of the route.
    pub fn href(self, base_path: &str) -> String {
        match self {
            Route::Home => base_path.to_string(),
            Route::Admin => format!("{base_path}{ADMIN_SEGMENT}/"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_site_routes() {
        assert_eq!(Route::from_path("/", "/"), Route::Home);
        assert_eq!(Route::from_path("/admin", "/"), Route::Admin);
        assert_eq!(Route::from_path("/admin/", "/"), Route::Admin);
        assert_eq!(Route::from_path("/admin/index.html", "/"), Route::Admin);
        assert_eq!(Route::from_path("/index.html", "/"), Route::Home);
    }

    #[test]
    fn project_site_routes() {
        let base = "/portfolio/";
        assert_eq!(Route::from_path("/portfolio/", base), Route::Home);
        assert_eq!(Route::from_path("/portfolio/admin", base), Route::Admin);
        assert_eq!(Route::from_path("/portfolio/nope", base), Route::Home);
    }

    #[test]
    fn unknown_paths_fall_back_home() {
        assert_eq!(Route::from_path("/administrator", "/"), Route::Home);
        assert_eq!(Route::from_path("/admin/extra", "/"), Route::Home);
    }

    #[test]
    fn hrefs() {
        assert_eq!(Route::Home.href("/"), "/");
        assert_eq!(Route::Admin.href("/"), "/admin/");
        assert_eq!(Route::Admin.href("/portfolio/"), "/portfolio/admin/");
    }
}
