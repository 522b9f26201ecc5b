use crate::domain::listing::{format_inr, format_quantity};
use crate::domain::{Listing, SortKey};
use crate::templates::{app_shell, notice, Chrome, Notice};
use maud::{html, Markup};

pub const CONTRACT_INITIATED: &str = "Smart Contract Initiated Successfully!";

pub struct ExplorerVm {
    pub search: String,
    pub sort: SortKey,
    pub listings: Vec<Listing>,
    pub flash: Option<String>,
}

pub fn explorer_page(vm: &ExplorerVm) -> Markup {
    app_shell(
        "Marketplace Explorer",
        Chrome::Full,
        "/data",
        html! {
            div class="page-head" {
                div {
                    h1 { "Marketplace Explorer" }
                    p class="muted" { "Source certified industrial byproducts" }
                }
                form class="toolbar" method="get" action="/data" {
                    input type="search" name="q" placeholder="Search materials..." value=(vm.search);
                    select name="sort" onchange="this.form.submit()" {
                        @if vm.sort == SortKey::Unsorted {
                            option value=(SortKey::Unsorted.as_param()) selected { (SortKey::Unsorted.label()) }
                        }
                        @for key in SortKey::OPTIONS {
                            option value=(key.as_param()) selected[key == vm.sort] { (key.label()) }
                        }
                    }
                    button type="submit" class="btn" { "Apply" }
                }
            }

            @if let Some(msg) = &vm.flash {
                (notice(Notice::Success, msg))
            }

            @if vm.listings.is_empty() {
                p class="empty muted" { "No materials match your search." }
            }

            div class="listing-grid" {
                @for item in &vm.listings {
                    (listing_card(item))
                }
            }
        },
    )
}

fn listing_card(item: &Listing) -> Markup {
    let slot = format!("contract-{}", item.id);
    html! {
        article class="listing-card" data-id=(item.id) {
            div class="listing-body" {
                div class="thumb" {
                    @if let Some(url) = &item.photo_url {
                        img src=(url) alt=(item.material);
                    } @else {
                        span class="thumb-placeholder" aria-hidden="true" { "▣" }
                    }
                }
                div class="listing-info" {
                    div class="listing-title" {
                        h3 title=(item.material) { (item.display_name()) }
                        span class="pill success" { (item.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("Active")) }
                    }
                    p class="muted" { (format_quantity(item.raw_volume)) " Tonnes" }
                    p class="muted" {
                        @if item.distance.is_empty() { "Unknown distance" } @else { (item.distance) }
                        " away"
                    }
                    p class="price-label muted" { "Price per Lot" }
                    p class="price" { "₹" (format_inr(item.price_or_zero())) }
                }
            }
            form class="listing-action" method="post" action=(format!("/data/contract/{}", item.id))
                hx-post=(format!("/data/contract/{}", item.id))
                hx-target=(format!("#{slot}"))
                hx-swap="innerHTML"
                hx-disabled-elt="button"
            {
                button type="submit" class="btn success wide" {
                    span class="btn-text" { "Initiate Smart Contract →" }
                    span class="spinner-text" { "Contract Pending..." }
                }
                div id=(slot) {}
            }
        }
    }
}

/// Fragment swapped into a card when the request came from htmx.
pub fn contract_notice() -> Markup {
    notice(Notice::Success, CONTRACT_INITIATED)
}
