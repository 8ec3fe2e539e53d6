//! Typed route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every navigable path resolves to a [`Route`] before the navigation guard
//! runs. OAuth provider callbacks are their own variants so the guard matches
//! on the variant instead of comparing path strings.
//!
//! DESIGN
//! ======
//! Descriptors are a `'static` table registered once. Matching walks the
//! table in order, so literal segments (`/teams/new`) must precede the
//! parameterised pattern they would otherwise collide with (`/teams/:id`).

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Unauthenticated landing route.
pub const WELCOME_PATH: &str = "/welcome";
/// Sign-in route.
pub const SIGNIN_PATH: &str = "/signin";
/// Authenticated home route.
pub const ROOT_PATH: &str = "/";
/// Not-found view.
pub const NOT_FOUND_PATH: &str = "/404";
/// Twitter OAuth callback.
pub const TWITTER_CALLBACK_PATH: &str = "/auth/twitter/callback";
/// Google OAuth callback.
pub const GOOGLE_CALLBACK_PATH: &str = "/auth/google/callback";

/// Default document title.
pub const DEFAULT_TITLE: &str = "gonawin";

/// Authentication requirement of a registered route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reachable without signing in.
    Public,
    /// Requires a signed-in user with a resolved profile.
    RequireLogin,
    /// Registered without a requirement; the guard leaves it alone.
    Unguarded,
}

/// Identity of each registered page route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteId {
    Welcome,
    GettingStarted,
    Home,
    SignIn,
    About,
    Search,
    Users,
    UserShow,
    Teams,
    TeamNew,
    TeamShow,
    TeamEdit,
    TeamInvite,
    Tournaments,
    TournamentNew,
    TournamentShow,
    TournamentEdit,
    EditProfile,
    Networks,
    Email,
    Invite,
    NotFound,
}

/// Static configuration mapping a URL pattern to its access rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub id: RouteId,
    /// Path pattern; `:id` marks the single parameter segment.
    pub pattern: &'static str,
    pub access: Access,
    /// When false, query-string changes do not re-run the navigation guard.
    pub reload_on_search: bool,
}

impl RouteDescriptor {
    const fn new(id: RouteId, pattern: &'static str, access: Access) -> Self {
        Self {
            id,
            pattern,
            access,
            reload_on_search: true,
        }
    }

    const fn keep_on_search(mut self) -> Self {
        self.reload_on_search = false;
        self
    }

    /// Whether entering this route requires a signed-in user.
    pub fn requires_login(&self) -> bool {
        self.access == Access::RequireLogin
    }

    /// Guest-only routes bounce signed-in users back to the root.
    pub fn is_guest_only(&self) -> bool {
        matches!(self.id, RouteId::Welcome | RouteId::SignIn)
    }
}

use Access::{Public, RequireLogin, Unguarded};

/// Registered routes, in match order.
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new(RouteId::Welcome, "/welcome", Public),
    RouteDescriptor::new(RouteId::GettingStarted, "/getting-started", Public),
    RouteDescriptor::new(RouteId::Home, "/", RequireLogin),
    RouteDescriptor::new(RouteId::SignIn, "/signin", Public),
    RouteDescriptor::new(RouteId::About, "/about", Public),
    RouteDescriptor::new(RouteId::Search, "/search", RequireLogin),
    RouteDescriptor::new(RouteId::Users, "/users/", RequireLogin),
    RouteDescriptor::new(RouteId::UserShow, "/users/:id", RequireLogin),
    RouteDescriptor::new(RouteId::Teams, "/teams", RequireLogin),
    RouteDescriptor::new(RouteId::TeamNew, "/teams/new", RequireLogin),
    RouteDescriptor::new(RouteId::TeamShow, "/teams/:id", RequireLogin),
    RouteDescriptor::new(RouteId::TeamEdit, "/teams/edit/:id", RequireLogin),
    RouteDescriptor::new(RouteId::TeamInvite, "/teams/invite/:id", RequireLogin),
    RouteDescriptor::new(RouteId::Tournaments, "/tournaments", RequireLogin),
    RouteDescriptor::new(RouteId::TournamentNew, "/tournaments/new", RequireLogin),
    RouteDescriptor::new(RouteId::TournamentShow, "/tournaments/:id", RequireLogin).keep_on_search(),
    RouteDescriptor::new(RouteId::TournamentEdit, "/tournaments/edit/:id", RequireLogin),
    RouteDescriptor::new(RouteId::EditProfile, "/settings/edit-profile", RequireLogin),
    RouteDescriptor::new(RouteId::Networks, "/settings/networks", RequireLogin),
    RouteDescriptor::new(RouteId::Email, "/settings/email", RequireLogin),
    RouteDescriptor::new(RouteId::Invite, "/invite", RequireLogin),
    RouteDescriptor::new(RouteId::NotFound, "/404", Unguarded),
];

/// Look up the descriptor registered for `id`.
pub fn descriptor(id: RouteId) -> &'static RouteDescriptor {
    ROUTES
        .iter()
        .find(|route| route.id == id)
        .unwrap_or(&ROUTES[ROUTES.len() - 1])
}

/// Query parameters delivered to the Twitter OAuth callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TwitterCallback {
    pub oauth_token: String,
    pub oauth_verifier: String,
}

/// Query parameters delivered to the Google OAuth callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoogleCallback {
    pub auth_token: String,
}

/// A resolved navigation target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// A registered page, with its `:id` parameter when the pattern has one.
    Page {
        descriptor: &'static RouteDescriptor,
        param: Option<String>,
    },
    TwitterCallback(TwitterCallback),
    GoogleCallback(GoogleCallback),
    /// No registered pattern matched; navigation continues at `to`.
    Redirect { to: &'static str },
}

impl Route {
    /// Descriptor of a page route.
    pub fn descriptor(&self) -> Option<&'static RouteDescriptor> {
        match self {
            Self::Page { descriptor, .. } => Some(descriptor),
            _ => None,
        }
    }

    /// Whether entering this route requires a signed-in user.
    pub fn requires_login(&self) -> bool {
        self.descriptor().is_some_and(RouteDescriptor::requires_login)
    }

    /// Whether this route is guest-only.
    pub fn is_guest_only(&self) -> bool {
        self.descriptor().is_some_and(RouteDescriptor::is_guest_only)
    }
}

/// Resolve a browser location into a [`Route`].
///
/// `query` may carry a leading `?`.
pub fn resolve(path: &str, query: &str) -> Route {
    let path = normalize(path);
    if path == TWITTER_CALLBACK_PATH {
        return Route::TwitterCallback(TwitterCallback {
            oauth_token: query_param(query, "oauth_token").unwrap_or_default(),
            oauth_verifier: query_param(query, "oauth_verifier").unwrap_or_default(),
        });
    }
    if path == GOOGLE_CALLBACK_PATH {
        return Route::GoogleCallback(GoogleCallback {
            auth_token: query_param(query, "auth_token").unwrap_or_default(),
        });
    }
    for descriptor in ROUTES {
        if let Some(param) = match_pattern(descriptor.pattern, path) {
            return Route::Page { descriptor, param };
        }
    }
    Route::Redirect { to: ROOT_PATH }
}

/// Document title for a navigation target.
pub fn page_title(path: &str) -> &'static str {
    match normalize(path) {
        SIGNIN_PATH => "gonawin - Sign In",
        "/about" => "gonawin - About",
        "/getting-started" => "gonawin - Getting Started",
        _ => DEFAULT_TITLE,
    }
}

/// First value of `name` in a query string, percent-decoded.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else if path.is_empty() {
        ROOT_PATH
    } else {
        path
    }
}

/// Match `path` against `pattern`. `Some(None)` is a literal match,
/// `Some(Some(id))` a match that bound the `:id` segment.
fn match_pattern(pattern: &str, path: &str) -> Option<Option<String>> {
    let pattern = normalize(pattern);
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');
    let mut param = None;
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(param),
            (Some(expected), Some(actual)) => {
                if expected.starts_with(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    param = Some(actual.to_owned());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}
