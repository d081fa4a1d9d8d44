//! Page content for every route.

use super::routes::Route;
use crate::models::{
    Brand, BusinessHours, CallToAction, CardGrid, ContactChannel, FlipCard, Footer, Hero, NavLink,
    Page, Section, ServiceOffering, SocialLink,
};
use chrono::Datelike;

/// Headlines the hero typewriter cycles through.
pub const HERO_HEADLINES: [&str; 4] = [
    "Welcome to LotsEye",
    "Grow Your Business with Powerful Digital Marketing",
    "Transform Your Digital Presence",
    "Elevate Your Brand Online",
];

/// Fields of the contact form in display order.
pub const CONTACT_FORM_FIELDS: [&str; 5] = ["name", "email", "phone", "subject", "message"];

pub fn brand() -> Brand {
    Brand {
        name: "LOTS EYE",
        tagline: "YOUR BRAND | OUR VISION",
    }
}

pub fn nav_links() -> Vec<NavLink> {
    Route::ALL
        .iter()
        .map(|route| NavLink {
            name: route.label(),
            path: route.path(),
        })
        .collect()
}

pub fn hero() -> Hero {
    Hero {
        headlines: HERO_HEADLINES.to_vec(),
        tagline: "Your brand, our vision. We create stunning digital experiences that captivate \
                  your audience and drive results. Discover the power of modern web design and \
                  development.",
        primary_action: "Get Started Today",
        secondary_action: "Learn More",
    }
}

/// Flip cards for the landing page services grid.
pub fn marketing_services() -> CardGrid {
    CardGrid {
        heading: "Our Digital Marketing Services",
        intro: "Comprehensive digital marketing solutions designed to accelerate your business \
                growth and maximize your return on investment",
        cards: vec![
            FlipCard {
                title: "PPC Advertising",
                front: "High-converting Google Ads & Facebook campaigns that maximize ROI.",
                back: "Strategic ad management with A/B testing, keyword optimization, and \
                       conversion tracking for maximum profitability.",
            },
            FlipCard {
                title: "SEO & Content Marketing",
                front: "Dominate search results with data-driven SEO strategies.",
                back: "Complete SEO audits, keyword research, content optimization, and link \
                       building to boost organic traffic and rankings.",
            },
            FlipCard {
                title: "Social Media Marketing",
                front: "Build engaged communities and drive sales through social media.",
                back: "Strategic social media management, influencer partnerships, and viral \
                       content creation across all major platforms.",
            },
            FlipCard {
                title: "Email Marketing",
                front: "Nurture leads and boost customer lifetime value with email automation.",
                back: "Advanced email sequences, segmentation, personalization, and automation \
                       to convert prospects into loyal customers.",
            },
            FlipCard {
                title: "Analytics & Reporting",
                front: "Make data-driven decisions with comprehensive analytics tracking.",
                back: "Custom dashboards, conversion tracking, attribution modeling, and \
                       detailed ROI reporting for all marketing channels.",
            },
            FlipCard {
                title: "Mobile & App Marketing",
                front: "Capture mobile audiences with optimized mobile marketing strategies.",
                back: "Mobile-first campaigns, app store optimization, push notifications, and \
                       location-based marketing for maximum mobile engagement.",
            },
        ],
    }
}

/// Flip cards for the "why choose us" grid.
pub fn why_choose_us() -> CardGrid {
    CardGrid {
        heading: "Why Choose LotsEye for Your Digital Marketing?",
        intro: "We don't just promise results - we deliver them. Here's what sets us apart from \
                other digital marketing agencies",
        cards: vec![
            FlipCard {
                title: "Proven ROI Results",
                front: "Average 300% ROI increase within 90 days of campaign launch.",
                back: "Data-driven strategies with transparent reporting and measurable outcomes \
                       that directly impact your bottom line.",
            },
            FlipCard {
                title: "Expert Team",
                front: "Certified Google & Facebook marketing specialists with 10+ years \
                        experience.",
                back: "Our team holds advanced certifications and has managed over $50M in ad \
                       spend across industries.",
            },
            FlipCard {
                title: "Rapid Implementation",
                front: "Get your campaigns live within 48 hours, not weeks.",
                back: "Fast-track setup process with immediate optimization and performance \
                       monitoring from day one.",
            },
            FlipCard {
                title: "24/7 Optimization",
                front: "Continuous campaign monitoring and real-time optimization.",
                back: "AI-powered tools and manual oversight ensure peak performance around the \
                       clock.",
            },
            FlipCard {
                title: "Dedicated Support",
                front: "Direct access to your dedicated marketing strategist and support team.",
                back: "No call centers or ticket systems - speak directly with the experts \
                       managing your campaigns.",
            },
            FlipCard {
                title: "Risk-Free Guarantee",
                front: "30-day money-back guarantee if you're not satisfied with results.",
                back: "We're so confident in our results, we offer a full refund if you don't \
                       see improvement in 30 days.",
            },
        ],
    }
}

pub fn home_call_to_action() -> CallToAction {
    CallToAction {
        headline: "Ready to 3X Your Revenue in 90 Days?",
        body: "Join 500+ businesses that have transformed their growth with our proven digital \
               marketing strategies. Get your FREE marketing audit and discover exactly how to \
               dominate your market.",
        perks: vec![
            "Free 30-minute strategy session",
            "Custom growth roadmap",
            "Competitor analysis included",
            "No obligations or commitments",
        ],
        actions: vec!["Get Your FREE Marketing Audit"],
        rating: Some("Rated 4.9/5 by 500+ satisfied clients"),
    }
}

pub fn service_offerings() -> Vec<ServiceOffering> {
    vec![
        ServiceOffering {
            title: "Web Development",
            description: "Custom websites and web applications built with modern technologies",
            features: vec![
                "Responsive Design",
                "Performance Optimization",
                "SEO Friendly",
                "Cross-browser Compatible",
            ],
            icon: "💻",
        },
        ServiceOffering {
            title: "Mobile Development",
            description: "Native and cross-platform mobile applications for iOS and Android",
            features: vec![
                "Native Performance",
                "Cross-platform",
                "App Store Optimization",
                "Push Notifications",
            ],
            icon: "📱",
        },
        ServiceOffering {
            title: "UI/UX Design",
            description: "Beautiful and intuitive user interfaces that enhance user experience",
            features: vec![
                "User Research",
                "Wireframing",
                "Prototyping",
                "Visual Design",
            ],
            icon: "🎨",
        },
        ServiceOffering {
            title: "Digital Marketing",
            description: "Comprehensive digital marketing strategies to grow your business",
            features: vec![
                "SEO Optimization",
                "Social Media",
                "Content Marketing",
                "Analytics",
            ],
            icon: "📈",
        },
        ServiceOffering {
            title: "E-commerce Solutions",
            description: "Complete e-commerce platforms to sell your products online",
            features: vec![
                "Payment Integration",
                "Inventory Management",
                "Order Tracking",
                "Customer Support",
            ],
            icon: "🛒",
        },
        ServiceOffering {
            title: "Consulting",
            description: "Expert advice and guidance for your digital transformation journey",
            features: vec![
                "Strategy Planning",
                "Technology Assessment",
                "Process Optimization",
                "Training",
            ],
            icon: "💡",
        },
    ]
}

pub fn services_call_to_action() -> CallToAction {
    CallToAction {
        headline: "Ready to Get Started?",
        body: "Let's discuss your project and see how we can help bring your vision to life.",
        perks: Vec::new(),
        actions: vec!["Start Your Project", "Schedule Consultation"],
        rating: None,
    }
}

pub fn contact_channels() -> Vec<ContactChannel> {
    vec![
        ContactChannel {
            title: "Email",
            details: "ayushiparmar9997@gmail.com",
            link: "mailto:ayushiparmar9997@gmail.com",
        },
        ContactChannel {
            title: "Phone",
            details: "+91 6353292499",
            link: "tel:+916353292499",
        },
        ContactChannel {
            title: "Address",
            details: "95, Darshan Society, near Mini Virpur Temple, Palanpur Jakatnaka, \
                      Surat-395009",
            link: "#",
        },
    ]
}

pub fn business_hours() -> Vec<BusinessHours> {
    vec![BusinessHours {
        days: "Monday - Friday",
        hours: "9:00 AM - 6:00 PM",
    }]
}

/// Footer with the copyright line for `year`.
pub fn footer(year: i32) -> Footer {
    Footer {
        heading: "Stay Connected",
        socials: vec![
            SocialLink {
                name: "GitHub",
                url: "https://github.com",
            },
            SocialLink {
                name: "LinkedIn",
                url: "https://linkedin.com",
            },
            SocialLink {
                name: "Twitter",
                url: "https://twitter.com",
            },
        ],
        copyright: format!("© {} LotsEye. All rights reserved.", year),
    }
}

/// Body sections for a route, without the shared chrome.
pub fn sections(route: Route) -> Vec<Section> {
    match route {
        Route::Home => vec![
            Section::Hero(hero()),
            Section::Cards(marketing_services()),
            Section::Cards(why_choose_us()),
            Section::CallToAction(home_call_to_action()),
        ],
        Route::Services => vec![
            Section::Intro {
                heading: "Our Services",
                body: "We offer comprehensive digital solutions to help your business thrive in \
                       the modern world. From web development to digital marketing, we've got \
                       you covered.",
            },
            Section::Services {
                offerings: service_offerings(),
            },
            Section::CallToAction(services_call_to_action()),
        ],
        Route::Contact => vec![
            Section::Intro {
                heading: "Get In Touch",
                body: "Ready to start your next project? We'd love to hear from you. Send us a \
                       message and we'll respond as soon as possible.",
            },
            Section::ContactForm {
                heading: "Send us a Message",
                fields: CONTACT_FORM_FIELDS.to_vec(),
                submit_label: "Send Message",
            },
            Section::ContactDetails {
                heading: "Contact Information",
                body: "We're here to help and answer any question you might have. We look \
                       forward to hearing from you.",
                channels: contact_channels(),
                hours: business_hours(),
            },
        ],
    }
}

fn title(route: Route) -> &'static str {
    match route {
        Route::Home => "LotsEye | Digital Marketing Agency",
        Route::Services => "Our Services | LotsEye",
        Route::Contact => "Contact | LotsEye",
    }
}

/// Full page for a route, with the footer stamped for the current year.
pub fn page(route: Route) -> Page {
    Page {
        path: route.path(),
        title: title(route),
        brand: brand(),
        nav: nav_links(),
        sections: sections(route),
        footer: footer(chrono::Utc::now().year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_links_follow_route_table() {
        let links = nav_links();
        assert_eq!(links.len(), 3);
        assert_eq!(links[1].name, "Services");
        assert_eq!(links[1].path, "/service");
    }

    #[test]
    fn test_card_grids_have_six_cards() {
        assert_eq!(marketing_services().cards.len(), 6);
        assert_eq!(why_choose_us().cards.len(), 6);
        for card in marketing_services().cards.iter().chain(why_choose_us().cards.iter()) {
            assert!(!card.front.is_empty() && !card.back.is_empty(), "{}", card.title);
        }
    }

    #[test]
    fn test_every_offering_lists_four_features() {
        for offering in service_offerings() {
            assert_eq!(offering.features.len(), 4, "{}", offering.title);
        }
    }

    #[test]
    fn test_footer_year() {
        assert_eq!(footer(2031).copyright, "© 2031 LotsEye. All rights reserved.");
    }

    #[test]
    fn test_contact_page_has_form_and_details() {
        let page = page(Route::Contact);
        assert_eq!(page.path, "/contact");
        assert!(page
            .sections
            .iter()
            .any(|s| matches!(s, Section::ContactForm { fields, .. } if fields.len() == 5)));
        assert!(page
            .sections
            .iter()
            .any(|s| matches!(s, Section::ContactDetails { .. })));
    }

    #[test]
    fn test_page_serializes_with_section_tags() {
        let json = serde_json::to_value(page(Route::Home)).unwrap();
        assert_eq!(json["sections"][0]["type"], "hero");
        assert_eq!(json["sections"][0]["headlines"][0], "Welcome to LotsEye");
        assert_eq!(json["sections"][1]["type"], "cards");
    }
}
