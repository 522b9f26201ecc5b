use maud::{html, Markup};

pub mod kpi;

pub use kpi::kpi_card;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

/// Inline status banner.
pub fn notice(kind: Notice, message: &str) -> Markup {
    let class = match kind {
        Notice::Success => "notice success",
        Notice::Error => "notice error",
    };
    html! {
        div class=(class) role="alert" { (message) }
    }
}
