use crate::templates::pages::inject::DISABLE_SUBMIT;
use crate::templates::{app_shell, card, notice, Chrome, Notice};
use maud::{html, Markup};

pub const SETTINGS_SAVED: &str = "Configurations Saved Successfully!";

const ALERT_MATERIALS: [&str; 3] = ["Copper Wire", "Steel Offcuts", "Plastic Pellets"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsRole {
    #[default]
    Buyer,
    Seller,
}

impl SettingsRole {
    pub fn from_param(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "seller" => SettingsRole::Seller,
            _ => SettingsRole::Buyer,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SettingsRole::Buyer => "buyer",
            SettingsRole::Seller => "seller",
        }
    }
}

/// Static form; values are display defaults and are never stored.
pub fn settings_page(role: SettingsRole, flash: Option<&str>) -> Markup {
    app_shell(
        "Enterprise Configuration",
        Chrome::Full,
        "/settings",
        html! {
            div class="page-head" {
                div {
                    h1 { "Enterprise Configuration" }
                    p class="muted" { "Manage node profile and network protocols" }
                }
                div class="toggle" {
                    a href="/settings?role=buyer" class=(if role == SettingsRole::Buyer { "active" } else { "" }) { "Buyer View" }
                    a href="/settings?role=seller" class=(if role == SettingsRole::Seller { "active" } else { "" }) { "Seller View" }
                }
            }

            @if let Some(msg) = flash {
                (notice(Notice::Success, msg))
            }

            form method="post" action=(format!("/settings?role={}", role.as_param())) onsubmit=(DISABLE_SUBMIT) {
                div class="two-col" {
                    div {
                        (card("Node Profile", html! {
                            label { "Company Name" }
                            input type="text" name="company" value="Re-Source Hub Industries Pvt Ltd";
                            label { "GSTIN / Corporate ID" }
                            input type="text" name="gstin" value="33AABCR1234H1Z5";
                            label { "Ambattur Sector Address" }
                            input type="text" name="address" value="Plot 42, 3rd Main Rd, Industrial Estate, Ambattur, Chennai";
                        }))
                        (card("Developer API", html! {
                            label { "API Secret Key" }
                            input type="text" value="sk_live_51M..." readonly;
                            p class="muted small" { "Used for programmatic access to the Smart Contract Ledger." }
                        }))
                    }
                    div {
                        @match role {
                            SettingsRole::Buyer => (buyer_sections()),
                            SettingsRole::Seller => (seller_sections()),
                        }
                    }
                }

                div class="form-actions" {
                    button type="submit" class="btn primary" {
                        span class="btn-text" { "Save Configurations" }
                        span class="spinner-text" { "Saving..." }
                    }
                }
            }
        },
    )
}

fn buyer_sections() -> Markup {
    html! {
        (card("Logistics Constraints", html! {
            label for="radius" { "Maximum Haulage Radius " span class="accent" { "15 km" } }
            input type="range" id="radius" name="radius" min="1" max="50" value="15";
            div class="range-labels muted small" { span { "1 km" } span { "50 km" } }
        }))
        (card("Procurement Alerts", html! {
            @for item in ALERT_MATERIALS {
                label class="switch-row" {
                    span { "Alert me for " (item) }
                    input type="checkbox" name="alerts" value=(item) checked;
                }
            }
        }))
    }
}

fn seller_sections() -> Markup {
    html! {
        (card("Verification", html! {
            div class="dropzone" {
                p { "Upload Phase-1 Chemical Safety Certificate" }
                p class="muted small" { "PDF, DOCX up to 10MB" }
            }
        }))
        (card("Auto-Approval", html! {
            label class="switch-row" {
                span {
                    strong { "Instant Bid Acceptance" }
                    br;
                    span class="muted small" { "Automatically accept bids that meet or exceed quoted price." }
                }
                input type="checkbox" name="instant_accept";
            }
        }))
    }
}
