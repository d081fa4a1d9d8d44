//! Page content models.
//!
//! These types describe what each page shows. They serialize to JSON for the
//! MCP `get_page` tool and feed the site search index.

use serde::Serialize;

/// A link in the navigation bar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub path: &'static str,
}

/// Brand shown at the left of the navigation bar.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub tagline: &'static str,
}

/// Landing page hero: the typewriter playlist plus static copy.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Hero {
    /// Headlines the typewriter cycles through
    pub headlines: Vec<&'static str>,
    pub tagline: &'static str,
    pub primary_action: &'static str,
    pub secondary_action: &'static str,
}

/// A card with a front face and a back face revealed on hover/focus.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlipCard {
    pub title: &'static str,
    pub front: &'static str,
    pub back: &'static str,
}

/// A titled grid of flip cards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CardGrid {
    pub heading: &'static str,
    pub intro: &'static str,
    pub cards: Vec<FlipCard>,
}

/// One entry on the services page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
    pub features: Vec<&'static str>,
    pub icon: &'static str,
}

/// Call-to-action block.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CallToAction {
    pub headline: &'static str,
    pub body: &'static str,
    pub perks: Vec<&'static str>,
    pub actions: Vec<&'static str>,
    pub rating: Option<&'static str>,
}

/// A way to reach the agency.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub details: &'static str,
    pub link: &'static str,
}

/// Opening hours line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BusinessHours {
    pub days: &'static str,
    pub hours: &'static str,
}

/// Social profile link in the footer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

/// Site footer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Footer {
    pub heading: &'static str,
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

/// A block of content on a page.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Hero(Hero),
    Intro {
        heading: &'static str,
        body: &'static str,
    },
    Cards(CardGrid),
    Services {
        offerings: Vec<ServiceOffering>,
    },
    CallToAction(CallToAction),
    ContactDetails {
        heading: &'static str,
        body: &'static str,
        channels: Vec<ContactChannel>,
        hours: Vec<BusinessHours>,
    },
    ContactForm {
        heading: &'static str,
        fields: Vec<&'static str>,
        submit_label: &'static str,
    },
}

/// Everything a page renders, including the shared chrome.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub title: &'static str,
    pub brand: Brand,
    pub nav: Vec<NavLink>,
    pub sections: Vec<Section>,
    pub footer: Footer,
}
