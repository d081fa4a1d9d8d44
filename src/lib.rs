//! LotsEye site - the agency's marketing site as a Rust library, served over
//! the Model Context Protocol.
//!
//! The interesting parts are the contact form (validation and submission),
//! the auto-hiding toast and the hero typewriter. Everything else is page
//! content and plumbing around them.
//!
//! # Architecture
//!
//! - **domain**: Email and phone validators and their value objects
//! - **form**: Contact form state machine
//! - **notify**: Toast notifications
//! - **hero**: Typewriter text cycler
//! - **timers**: Per-view timer ownership
//! - **views**: Mounted pages and their live state
//! - **session**: Route table state and view lifecycle
//! - **site**: Routes and static page content
//! - **search**: Full-text search over page content
//! - **delivery**: Where validated submissions are sent
//! - **server**: MCP protocol server

pub mod config;
pub mod delivery;
pub mod domain;
pub mod error;
pub mod form;
pub mod hero;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod search;
pub mod server;
pub mod session;
pub mod site;
pub mod timers;
pub mod views;

pub use config::Config;
pub use delivery::{ContactSink, HttpContactSink, LogSink};
pub use domain::{
    email_form_message, phone_form_message, validate_email, validate_phone, EmailAddress,
    EmailRejection, PhoneNumber, PhoneRejection, ValidationError,
};
pub use error::{ConfigError, SearchError, SiteError, SubmissionError};
pub use form::{ContactField, ContactForm, SubmitOutcome};
pub use hero::{Typewriter, TypewriterSnapshot, TypewriterTiming};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContactSubmission, Page, Section};
pub use notify::{Toast, ToastId, ToastKind, ToastState};
pub use search::{search_url, SearchHit, SiteSearchIndex};
pub use server::SiteMcpServer;
pub use session::{ActiveView, SiteSession};
pub use site::Route;
pub use timers::TimerSet;
pub use views::{ContactView, HomeView, ServicesView, SubmitReport};
