//! The panel's two routes.

/// Top-level route. Unknown paths resolve to [`Route::Orders`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    Customers,
    #[default]
    Orders,
}

impl Route {
    pub fn all() -> &'static [Route] {
        &[Route::Customers, Route::Orders]
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Customers => "/customers",
            Route::Orders => "/orders",
        }
    }

    /// Display name of the route tab.
    pub fn name(self) -> &'static str {
        match self {
            Route::Customers => "Customers",
            Route::Orders => "Orders",
        }
    }

    /// Resolves a path; anything unknown redirects to `/orders`.
    /// A trailing slash is ignored.
    pub fn resolve(path: &str) -> Route {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        match path {
            "/customers" => Route::Customers,
            _ => Route::Orders,
        }
    }

    pub fn next(self) -> Route {
        match self {
            Route::Customers => Route::Orders,
            Route::Orders => Route::Customers,
        }
    }

    pub fn prev(self) -> Route {
        // Two routes: previous and next coincide.
        self.next()
    }
}
