use maud::{html, Markup, DOCTYPE};

/// How much navigation surrounds a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chrome {
    /// Top bar and sidebar.
    Full,
    /// Top bar only (the injection gateway).
    TopBar,
    /// Nothing (the login screen).
    Bare,
}

const SIDEBAR_ITEMS: [(&str, &str); 3] = [
    ("/", "Dashboard"),
    ("/data", "Data Explorer"),
    ("/settings", "Settings"),
];

pub fn app_shell(title: &str, chrome: Chrome, active_path: &str, content: Markup) -> Markup {
    let main_class = match chrome {
        Chrome::Full => "main with-sidebar",
        Chrome::TopBar => "main",
        Chrome::Bare => "main bare",
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Re-Source Hub" }
                link rel="stylesheet" href="/static/main.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                @if chrome != Chrome::Bare {
                    (top_bar())
                }
                @if chrome == Chrome::Full {
                    (sidebar(active_path))
                }
                main class=(main_class) {
                    (content)
                }
            }
        }
    }
}

fn top_bar() -> Markup {
    html! {
        nav class="topbar" {
            div class="brand" {
                span class="brand-icon" aria-hidden="true" { "◆" }
                h1 { "RE-SOURCE HUB " span class="muted" { "| V3.0 ENTERPRISE" } }
            }
            div class="node-status" {
                span class="pulse" {}
                span { "Ambattur Node: Online" }
            }
        }
    }
}

fn sidebar(active_path: &str) -> Markup {
    html! {
        aside class="sidebar" {
            nav {
                @for (path, label) in SIDEBAR_ITEMS {
                    a href=(path) class=(if path == active_path { "nav-item active" } else { "nav-item" }) {
                        (label)
                    }
                }
            }
            div class="sidebar-cta" {
                a href="/inject" class="btn primary" { "+ Inject Material" }
            }
            div class="sidebar-footer" {
                a href="/login" class="nav-item" { "Logout" }
            }
        }
    }
}
