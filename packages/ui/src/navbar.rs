use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaStar;
use dioxus_free_icons::Icon;

use crate::nav::NAV_ITEMS;

/// Top navigation bar: brand plus one button per [`NAV_ITEMS`] entry. The
/// shell owns the `active` index and renders the matching description.
#[component]
pub fn Navbar(mut active: Signal<usize>) -> Element {
    rsx! {
        header { class: "top-nav",
            div { class: "top-nav__brand",
                Icon { icon: FaStar, width: 18, height: 18 }
                "SecurePortal"
            }
            nav { class: "top-nav__menu", aria_label: "Primary navigation",
                for (index, item) in NAV_ITEMS.iter().enumerate() {
                    button {
                        key: "{item.id}",
                        r#type: "button",
                        class: if index == active() { "top-nav__link is-active" } else { "top-nav__link" },
                        onclick: move |_| active.set(index),
                        "{item.label}"
                    }
                }
            }
        }
    }
}
