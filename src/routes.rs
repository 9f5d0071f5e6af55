//! Routes
//!
//! Hash-based pages of the application.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }

    /// Match `location.hash` (with or without `#`); unknown paths go to Login
    pub fn from_path(path: &str) -> Self {
        let hash = path.trim_start_matches('#');
        [Route::Bills, Route::NewBill, Route::Dashboard]
            .into_iter()
            .find(|r| r.path().trim_start_matches('#') == hash)
            .unwrap_or(Route::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_roundtrip() {
        for route in [Route::Login, Route::Bills, Route::NewBill, Route::Dashboard] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_hash_without_prefix_and_unknown() {
        assert_eq!(Route::from_path("employee/bills"), Route::Bills);
        assert_eq!(Route::from_path("#employee/nowhere"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
    }
}
