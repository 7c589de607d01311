//! Route gating decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigation is resolved synchronously from the requested route and
//! whether a session token is present. Nothing here talks to the server; a
//! stored token is trusted until a later request fails.
//!
//! The protected-view guard sends anonymous users to `/signin`, while the
//! catch-all sends them to `/signup`. Both targets are intentional and kept
//! as separate rules.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos_router::NavigateOptions;

/// Screens known to the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    SignUp,
    SignIn,
    Welcome,
}

impl AppRoute {
    /// Absolute client path for this screen.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SignUp => "/signup",
            Self::SignIn => "/signin",
            Self::Welcome => "/welcome",
        }
    }

    /// Match a client path, ignoring ASCII case and one trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        [Self::SignUp, Self::SignIn, Self::Welcome]
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(trimmed))
    }
}

/// Outcome of gating a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Guard for views that require a session.
#[must_use]
pub const fn protect(route: AppRoute, authenticated: bool) -> RouteDecision {
    if authenticated {
        RouteDecision::Render(route)
    } else {
        RouteDecision::Redirect(AppRoute::SignIn)
    }
}

/// Apply the routing table to an already-matched route.
///
/// `None` stands for any path without a dedicated rule.
#[must_use]
pub const fn resolve_route(route: Option<AppRoute>, authenticated: bool) -> RouteDecision {
    match route {
        Some(route @ (AppRoute::SignUp | AppRoute::SignIn)) => {
            if authenticated {
                RouteDecision::Redirect(AppRoute::Welcome)
            } else {
                RouteDecision::Render(route)
            }
        }
        Some(AppRoute::Welcome) => protect(AppRoute::Welcome, authenticated),
        None => {
            if authenticated {
                RouteDecision::Redirect(AppRoute::Welcome)
            } else {
                RouteDecision::Redirect(AppRoute::SignUp)
            }
        }
    }
}

/// Apply the routing table to a raw client path.
#[must_use]
pub fn resolve(path: &str, authenticated: bool) -> RouteDecision {
    resolve_route(AppRoute::from_path(path), authenticated)
}

/// Navigation that swaps the current history entry instead of pushing one.
///
/// Used for guard redirects and post-auth hops, so Back never lands on a
/// screen that would immediately bounce the user again.
#[must_use]
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}
