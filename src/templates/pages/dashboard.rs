use crate::domain::listing::format_quantity;
use crate::domain::metrics::{MapMarker, CO2_WEEKLY};
use crate::domain::Listing;
use crate::templates::{app_shell, components::kpi_card, Chrome};
use maud::{html, Markup};

pub struct DashboardVm {
    pub tonnes_diverted: f64,
    pub listings: Vec<Listing>,
    pub markers: Vec<MapMarker>,
    pub hub: MapMarker,
    pub is_demo: bool,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    app_shell(
        "Dashboard",
        Chrome::Full,
        "/",
        html! {
            div class="kpi-grid" {
                (kpi_card("Active Nodes", "42", "emerald", Some("+3")))
                (kpi_card("Tonnes Diverted", &format_quantity(vm.tonnes_diverted), "blue", None))
                (kpi_card("OPEX Saved", "₹42,500", "green", None))
                (kpi_card("DB Latency", "14ms", "blue", None))
            }

            div class="two-col" {
                section class="panel" {
                    h2 { "CO2-e Mitigation (kg)" }
                    (co2_chart())
                }
                section class="panel map-panel" data-center-lat=(vm.hub.lat) data-center-lon=(vm.hub.lon) data-zoom="12" {
                    h2 { "Node Map" }
                    ul class="markers" {
                        (marker(&vm.hub, true))
                        @for m in &vm.markers {
                            (marker(m, false))
                        }
                    }
                }
            }

            section class="panel" {
                div class="panel-head" data-source=(if vm.is_demo { "demo" } else { "live" }) {
                    h2 { "Hyper-Local Smart Matches" }
                    span class="pill success" { "Live SQL Sync" }
                }
                (matches_table(&vm.listings))
            }
        },
    )
}

fn co2_chart() -> Markup {
    let max = CO2_WEEKLY.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    html! {
        div class="bar-chart" role="img" aria-label="CO2-e mitigation per week" {
            @for (label, value) in CO2_WEEKLY {
                div class="bar-col" {
                    div class="bar" style=(format!("height: {}%", value * 100 / max)) title=(value) {}
                    span class="bar-label" { (label) }
                }
            }
        }
    }
}

fn marker(m: &MapMarker, is_hub: bool) -> Markup {
    html! {
        li class=(if is_hub { "marker hub" } else { "marker" })
            data-lat=(format!("{:.5}", m.lat))
            data-lon=(format!("{:.5}", m.lon))
        {
            strong { (m.title) }
            @for line in &m.lines {
                br;
                (line)
            }
        }
    }
}

fn matches_table(listings: &[Listing]) -> Markup {
    html! {
        div class="table-wrap" {
            table {
                thead {
                    tr {
                        th { "Asset" }
                        th { "Trajectory" }
                        th { "Haulage" }
                        th { "Volume" }
                        th { "Status" }
                    }
                }
                tbody {
                    @for item in listings {
                        tr {
                            td class="strong" { (item.material) }
                            td { (item.routing) }
                            td class="accent" { (item.distance) }
                            td { (format_quantity(item.raw_volume)) " T" }
                            td { span class="pill success" { "Active" } }
                        }
                    }
                }
            }
        }
    }
}
