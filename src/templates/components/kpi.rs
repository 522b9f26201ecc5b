use maud::{html, Markup};

pub fn kpi_card(title: &str, value: &str, tone: &str, badge: Option<&str>) -> Markup {
    html! {
        div class=(format!("kpi-card {tone}")) {
            div class="kpi-head" {
                span class="kpi-icon" {}
                @if let Some(badge) = badge {
                    span class="kpi-badge" { "▲ " (badge) }
                }
            }
            h3 { (title) }
            p class="kpi-value" { (value) }
        }
    }
}
