//! Data models for the LotsEye site.
//!
//! This module contains the page content types and the contact submission
//! that is handed to delivery sinks.

pub mod content;
pub mod submission;

pub use content::{
    Brand, BusinessHours, CallToAction, CardGrid, ContactChannel, FlipCard, Footer, Hero,
    NavLink, Page, Section, ServiceOffering, SocialLink,
};
pub use submission::ContactSubmission;
