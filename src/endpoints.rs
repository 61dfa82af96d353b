//! Defines the endpoints for the server routes.

/// The root of the server, redirects to the dashboard.
pub const ROOT: &str = "/";

/// The dashboard page.
pub const DASHBOARD_VIEW: &str = "/dashboard";

/// The transactions JSON API (GET, POST and DELETE).
pub const TRANSACTIONS_API: &str = "/api/transactions";

/// The budgets JSON API (GET and POST).
pub const BUDGETS_API: &str = "/api/budgets";

/// The goals JSON API (GET only).
pub const GOALS_API: &str = "/api/goals";

/// The route prefix for static files such as stylesheets.
pub const STATIC: &str = "/static";

#[cfg(test)]
mod tests {
    use axum::http::Uri;

    use crate::endpoints;

    #[test]
    fn endpoints_are_valid_uris() {
        let endpoints = [
            endpoints::ROOT,
            endpoints::DASHBOARD_VIEW,
            endpoints::TRANSACTIONS_API,
            endpoints::BUDGETS_API,
            endpoints::GOALS_API,
            endpoints::STATIC,
        ];

        for endpoint in endpoints {
            endpoint
                .parse::<Uri>()
                .unwrap_or_else(|_| panic!("{endpoint} is not a valid URI"));
        }
    }
}
