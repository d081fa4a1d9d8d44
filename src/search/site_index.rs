//! Full-text search over the site's page content.
//!
//! Every piece of text on every page becomes a [`SearchableDocument`].
//! Queries are matched by substring first and fall back to a fuzzy
//! subsequence score from `nucleo-matcher`. Hits are grouped by the page
//! section they belong to.

use crate::error::{SearchError, SearchResult};
use crate::models::Section;
use crate::site::{pages, Route};
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config as MatcherConfig, Matcher, Utf32Str};
use serde::Serialize;
use std::collections::HashMap;

/// Maximum snippet length in characters
const MAX_SNIPPET_LENGTH: usize = 150;

/// Context characters to show before and after match
const CONTEXT_CHARS: usize = 50;

/// Longest accepted query, in characters
const MAX_QUERY_LENGTH: usize = 500;

/// Highest confidence a fuzzy match can reach
const MAX_FUZZY_CONFIDENCE: f64 = 85.0;

/// Kind of text a document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Headline,
    Heading,
    Body,
    Card,
    Feature,
    Action,
    Contact,
}

impl ContentKind {
    /// Get display name for the content kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Heading => "heading",
            Self::Body => "body",
            Self::Card => "card",
            Self::Feature => "feature",
            Self::Action => "action",
            Self::Contact => "contact",
        }
    }
}

/// One searchable piece of page text.
#[derive(Debug, Clone)]
pub struct SearchableDocument {
    /// Page the text appears on
    pub route: Route,

    /// Heading of the section the text belongs to
    pub section: String,

    pub kind: ContentKind,

    pub content: String,
}

/// A match found in a document with context.
#[derive(Debug, Clone, Serialize)]
pub struct MatchContext {
    pub kind: ContentKind,

    /// Snippet showing the match with context
    pub snippet: String,

    /// Confidence score (0-100)
    pub confidence: u8,
}

/// All matches inside one page section.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub route: Route,

    /// Path of the page, for linking
    pub path: &'static str,

    pub section: String,

    pub matches: Vec<MatchContext>,

    /// Overall confidence score (0-100), boosted for multiple matches
    pub confidence: u8,
}

/// Search index over site content.
pub struct SiteSearchIndex {
    documents: Vec<SearchableDocument>,
}

impl SiteSearchIndex {
    /// Create a new empty search index.
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    /// Index that already holds every page of the site.
    pub fn for_site() -> Self {
        let mut index = Self::new();
        for route in Route::ALL {
            index.index_page(route, &pages::sections(route));
        }
        index
    }

    /// Index the sections of one page.
    pub fn index_page(&mut self, route: Route, sections: &[Section]) {
        for section in sections {
            self.index_section(route, section);
        }
    }

    fn push(&mut self, route: Route, section: &str, kind: ContentKind, content: &str) {
        if content.trim().is_empty() {
            return;
        }
        self.documents.push(SearchableDocument {
            route,
            section: section.to_string(),
            kind,
            content: content.to_string(),
        });
    }

    fn index_section(&mut self, route: Route, section: &Section) {
        match section {
            Section::Hero(hero) => {
                for headline in &hero.headlines {
                    self.push(route, "Hero", ContentKind::Headline, headline);
                }
                self.push(route, "Hero", ContentKind::Body, hero.tagline);
                self.push(route, "Hero", ContentKind::Action, hero.primary_action);
                self.push(route, "Hero", ContentKind::Action, hero.secondary_action);
            }
            Section::Intro { heading, body } => {
                self.push(route, heading, ContentKind::Heading, heading);
                self.push(route, heading, ContentKind::Body, body);
            }
            Section::Cards(grid) => {
                self.push(route, grid.heading, ContentKind::Heading, grid.heading);
                self.push(route, grid.heading, ContentKind::Body, grid.intro);
                for card in &grid.cards {
                    let text = format!("{}. {} {}", card.title, card.front, card.back);
                    self.push(route, grid.heading, ContentKind::Card, &text);
                }
            }
            Section::Services { offerings } => {
                for offering in offerings {
                    self.push(route, offering.title, ContentKind::Heading, offering.title);
                    self.push(route, offering.title, ContentKind::Body, offering.description);
                    for feature in &offering.features {
                        self.push(route, offering.title, ContentKind::Feature, feature);
                    }
                }
            }
            Section::CallToAction(cta) => {
                self.push(route, cta.headline, ContentKind::Heading, cta.headline);
                self.push(route, cta.headline, ContentKind::Body, cta.body);
                for perk in &cta.perks {
                    self.push(route, cta.headline, ContentKind::Feature, perk);
                }
                for action in &cta.actions {
                    self.push(route, cta.headline, ContentKind::Action, action);
                }
            }
            Section::ContactDetails {
                heading,
                body,
                channels,
                hours,
            } => {
                self.push(route, heading, ContentKind::Heading, heading);
                self.push(route, heading, ContentKind::Body, body);
                for channel in channels {
                    let text = format!("{}: {}", channel.title, channel.details);
                    self.push(route, heading, ContentKind::Contact, &text);
                }
                for slot in hours {
                    let text = format!("{} {}", slot.days, slot.hours);
                    self.push(route, heading, ContentKind::Contact, &text);
                }
            }
            Section::ContactForm {
                heading,
                submit_label,
                ..
            } => {
                self.push(route, heading, ContentKind::Heading, heading);
                self.push(route, heading, ContentKind::Action, submit_label);
            }
        }
    }

    /// Search the index for a query string.
    ///
    /// Returns hits grouped by page section, sorted by confidence.
    ///
    /// # Arguments
    /// * `query` - The search query
    /// * `max_results` - Maximum number of sections to return
    /// * `min_confidence` - Minimum confidence threshold (0-100)
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidQuery` if the query is blank.
    pub fn search(
        &self,
        query: &str,
        max_results: usize,
        min_confidence: u8,
    ) -> SearchResult<Vec<SearchHit>> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Err(SearchError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }
        if query_lower.chars().count() > MAX_QUERY_LENGTH {
            return Err(SearchError::InvalidQuery(format!(
                "Search query too long (max {} characters)",
                MAX_QUERY_LENGTH
            )));
        }

        let mut scorer = FuzzyScorer::new(&query_lower);
        let mut grouped: HashMap<(Route, &str), Vec<MatchContext>> = HashMap::new();
        let mut order: Vec<(Route, &str)> = Vec::new();

        for doc in &self.documents {
            let Some(found) = self.find_match(doc, &query_lower, &mut scorer) else {
                continue;
            };
            if found.confidence < min_confidence {
                continue;
            }
            let key = (doc.route, doc.section.as_str());
            let entry = grouped.entry(key).or_default();
            if entry.is_empty() {
                order.push(key);
            }
            entry.push(found);
        }

        let mut results: Vec<SearchHit> = order
            .into_iter()
            .filter_map(|key| {
                let matches = grouped.remove(&key)?;
                let max_confidence = matches.iter().map(|m| m.confidence).max().unwrap_or(0);
                let match_count_boost = (matches.len().saturating_sub(1) * 5).min(15) as u8;
                let confidence = max_confidence.saturating_add(match_count_boost).min(100);
                Some(SearchHit {
                    route: key.0,
                    path: key.0.path(),
                    section: key.1.to_string(),
                    matches,
                    confidence,
                })
            })
            .collect();

        // Stable sort keeps page order among equal scores
        results.sort_by(|a, b| b.confidence.cmp(&a.confidence));
        results.truncate(max_results);

        Ok(results)
    }

    fn find_match(
        &self,
        doc: &SearchableDocument,
        query_lower: &str,
        scorer: &mut FuzzyScorer,
    ) -> Option<MatchContext> {
        let content_lower = doc.content.to_lowercase();

        let confidence = match content_lower.find(query_lower) {
            Some(_) => {
                let ratio = query_lower.len() as f64 / content_lower.len() as f64;
                (85.0 * ratio + 10.0).min(95.0) as u8
            }
            None => scorer.score(&doc.content)?,
        };

        Some(MatchContext {
            kind: doc.kind,
            snippet: generate_snippet(&doc.content, &content_lower, query_lower),
            confidence,
        })
    }

    /// Clear all documents from the index.
    pub fn clear(&mut self) {
        self.documents.clear();
    }

    /// Get the number of indexed documents.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

impl Default for SiteSearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Fuzzy subsequence scorer for a single query.
///
/// Scores are scaled against the query's score on itself, so a perfect
/// subsequence lands near [`MAX_FUZZY_CONFIDENCE`].
struct FuzzyScorer {
    matcher: Matcher,
    pattern: Pattern,
    best: u32,
    buf: Vec<char>,
}

impl FuzzyScorer {
    fn new(query: &str) -> Self {
        let mut matcher = Matcher::new(MatcherConfig::DEFAULT);
        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        let mut buf = Vec::new();
        let best = pattern
            .score(Utf32Str::new(query, &mut buf), &mut matcher)
            .unwrap_or(0);

        Self {
            matcher,
            pattern,
            best,
            buf,
        }
    }

    fn score(&mut self, haystack: &str) -> Option<u8> {
        if self.best == 0 {
            return None;
        }
        let raw = self
            .pattern
            .score(Utf32Str::new(haystack, &mut self.buf), &mut self.matcher)?;
        let scaled = (raw as f64 / self.best as f64 * MAX_FUZZY_CONFIDENCE).min(MAX_FUZZY_CONFIDENCE);
        Some(scaled as u8)
    }
}

/// Largest char boundary at or below `index`.
fn floor_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Generate a snippet with context around the match.
fn generate_snippet(original: &str, content_lower: &str, query: &str) -> String {
    let pos = content_lower.find(query).unwrap_or_else(|| {
        let first_word = query.split_whitespace().next().unwrap_or(query);
        content_lower.find(first_word).unwrap_or(0)
    });

    let start = floor_boundary(original, pos.saturating_sub(CONTEXT_CHARS));
    let end = floor_boundary(original, pos + query.len() + CONTEXT_CHARS);

    let mut snippet = original[start..end].to_string();

    if start > 0 {
        snippet = format!("...{}", snippet);
    }
    if end < original.len() {
        snippet = format!("{}...", snippet);
    }

    if snippet.chars().count() > MAX_SNIPPET_LENGTH {
        snippet = snippet.chars().take(MAX_SNIPPET_LENGTH - 3).collect();
        snippet.push_str("...");
    }

    snippet
}

/// Link to the search results page for a query.
///
/// Returns `None` when the query is blank.
pub fn search_url(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(format!("/search?q={}", urlencoding::encode(trimmed)))
}
