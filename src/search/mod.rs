//! Full-text search over site content, plus the search link builder used by
//! the search modal.

pub mod site_index;

pub use site_index::{
    search_url, ContentKind, MatchContext, SearchHit, SearchableDocument, SiteSearchIndex,
};
