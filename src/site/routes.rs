//! Route table.

use crate::error::{SiteError, SiteResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The site's pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    Services,
    Contact,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Services, Route::Contact];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Services => "/service",
            Self::Contact => "/contact",
        }
    }

    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::Contact => "Contact",
        }
    }

    /// Resolve a path to a route.
    ///
    /// Query strings, fragments, surrounding whitespace and trailing slashes
    /// are ignored, and a missing leading slash is tolerated.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::UnknownRoute` for any other path.
    pub fn from_path(path: &str) -> SiteResult<Self> {
        let trimmed = path.trim();
        let without_query = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_matches('/');
        let normalized = format!("/{}", without_query);

        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| SiteError::UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s)
    }
}
