//! Static navigation configuration.
//!
//! Labels and descriptions are fixed data, not state: defined once here,
//! never mutated. Only the choice of active item lives in a signal (owned by
//! the shell).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: "home",
        label: "Home",
        description: "Return to the main sign-in experience.",
    },
    NavItem {
        id: "about",
        label: "About",
        description: "Learn more about our secure account platform.",
    },
    NavItem {
        id: "services",
        label: "Services",
        description: "Discover the authentication services we provide.",
    },
    NavItem {
        id: "global",
        label: "Global",
        description: "Explore our global features and worldwide infrastructure.",
    },
    NavItem {
        id: "blogs",
        label: "Blogs",
        description: "Read our latest articles, insights, and updates on security and technology.",
    },
    NavItem {
        id: "contact",
        label: "Contact",
        description: "Need help? Reach out to our team any time.",
    },
    NavItem {
        id: "support",
        label: "Support",
        description: "Browse FAQs and support resources for quick answers.",
    },
];
