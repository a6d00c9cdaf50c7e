//! This crate contains all shared UI for the SecurePortal workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod nav;
pub use nav::{NavItem, NAV_ITEMS};

mod navbar;
pub use navbar::Navbar;

mod session;
pub use session::{use_session, SessionProvider};

mod login_form;
pub use login_form::LoginForm;

mod success;
pub use success::SuccessCard;
