//! A visitor's session: the active route and its mounted view.

use crate::config::Config;
use crate::delivery::ContactSink;
use crate::error::{SearchResult, SiteError, SiteResult};
use crate::hero::TypewriterTiming;
use crate::metrics::Metrics;
use crate::models::Page;
use crate::search::{SearchHit, SiteSearchIndex};
use crate::site::{page, Route};
use crate::views::{ContactView, HomeView, ServicesView};
use std::sync::Arc;
use std::time::Duration;

/// The view currently mounted.
#[derive(Debug)]
pub enum ActiveView {
    Home(HomeView),
    Services(ServicesView),
    Contact(ContactView),
}

impl ActiveView {
    pub fn route(&self) -> Route {
        match self {
            Self::Home(_) => Route::Home,
            Self::Services(_) => Route::Services,
            Self::Contact(_) => Route::Contact,
        }
    }
}

/// Owns exactly one mounted view at a time.
///
/// Navigating drops the previous view, which cancels its timers.
pub struct SiteSession {
    view: ActiveView,
    sink: Arc<dyn ContactSink>,
    metrics: Metrics,
    search: SiteSearchIndex,
    timing: TypewriterTiming,
    toast_duration: Duration,
    max_search_results: usize,
    search_confidence_threshold: u8,
}

impl SiteSession {
    /// Start a session on the landing page.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config, sink: Arc<dyn ContactSink>, metrics: Metrics) -> SiteResult<Self> {
        let timing = TypewriterTiming::from(config);

        Ok(Self {
            view: ActiveView::Home(HomeView::mount(timing)?),
            sink,
            metrics,
            search: SiteSearchIndex::for_site(),
            timing,
            toast_duration: config.toast_duration(),
            max_search_results: config.max_search_results,
            search_confidence_threshold: config.search_confidence_threshold,
        })
    }

    /// Route of the mounted view.
    pub fn route(&self) -> Route {
        self.view.route()
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    /// Mount the page at `path`.
    ///
    /// Navigating to the route that is already mounted keeps the current
    /// view (and its state) alive.
    pub fn navigate(&mut self, path: &str) -> SiteResult<Route> {
        let route = Route::from_path(path)?;
        if route == self.route() {
            return Ok(route);
        }

        let view = match route {
            Route::Home => ActiveView::Home(HomeView::mount(self.timing)?),
            Route::Services => ActiveView::Services(ServicesView::mount()),
            Route::Contact => ActiveView::Contact(ContactView::mount(
                Arc::clone(&self.sink),
                self.metrics.clone(),
                self.toast_duration,
            )),
        };

        tracing::info!(from = %self.route(), to = %route, "Navigating");
        self.view = view;
        Ok(route)
    }

    /// Content of the mounted page.
    pub fn current_page(&self) -> Page {
        page(self.route())
    }

    pub fn home(&self) -> SiteResult<&HomeView> {
        match &self.view {
            ActiveView::Home(view) => Ok(view),
            other => Err(SiteError::ViewNotActive {
                expected: Route::Home.name(),
                active: other.route().name(),
            }),
        }
    }

    pub fn contact(&self) -> SiteResult<&ContactView> {
        match &self.view {
            ActiveView::Contact(view) => Ok(view),
            other => Err(SiteError::ViewNotActive {
                expected: Route::Contact.name(),
                active: other.route().name(),
            }),
        }
    }

    pub fn contact_mut(&mut self) -> SiteResult<&mut ContactView> {
        match &mut self.view {
            ActiveView::Contact(view) => Ok(view),
            other => Err(SiteError::ViewNotActive {
                expected: Route::Contact.name(),
                active: other.route().name(),
            }),
        }
    }

    /// Search site content with the configured limits.
    pub fn search(&self, query: &str) -> SearchResult<Vec<SearchHit>> {
        self.metrics.record_search();
        self.search.search(
            query,
            self.max_search_results,
            self.search_confidence_threshold,
        )
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

impl std::fmt::Debug for SiteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteSession")
            .field("view", &self.view)
            .field("sink", &self.sink.name())
            .finish()
    }
}
