use maud::{html, Markup};

pub mod error;
pub mod filter_form;

pub use error::error_page;
pub use filter_form::{filter_form, DateFieldLabels};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Colored status pill used in both tables.
pub fn status_badge(label: &str, class: &str) -> Markup {
    html! {
        span class=(class) { (label) }
    }
}

/// Column-header arrow: ▲/▼ on the active sort column, ⇅ elsewhere.
pub fn sort_indicator(active: bool, descending: bool) -> &'static str {
    if active {
        if descending {
            " ▼"
        } else {
            " ▲"
        }
    } else {
        " ⇅"
    }
}
