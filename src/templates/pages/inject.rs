use crate::submission::{SubmissionForm, MATERIALS, OTHER_MATERIAL};
use crate::templates::{app_shell, notice, Chrome, Notice};
use maud::{html, Markup};

/// Shows the custom name input only while "Other" is selected.
const TOGGLE_OTHER: &str =
    "document.getElementById('other-field').classList.toggle('hidden', this.value != 'Other')";

/// A disabled submit button shows its pending text until the next page arrives.
pub const DISABLE_SUBMIT: &str = "this.querySelector('button[type=submit]').disabled = true";

pub fn inject_page(form: &SubmissionForm, error: Option<&str>) -> Markup {
    app_shell(
        "Asset Injection Gateway",
        Chrome::TopBar,
        "/inject",
        html! {
            div class="narrow" {
                a href="/" class="back-link" { "← Back to Dashboard" }

                div class="panel" {
                    div class="panel-head" {
                        div {
                            h1 { "Asset Injection Gateway" }
                            p class="muted" { "Submit new material payloads to the distribution network" }
                        }
                    }

                    @if let Some(msg) = error {
                        (notice(Notice::Error, msg))
                    }

                    form id="inject-form" method="post" action="/inject" onsubmit=(DISABLE_SUBMIT) {
                        label for="material" { "Material Classification" }
                        select id="material" name="material" onchange=(TOGGLE_OTHER) required {
                            option value="" selected[form.material.is_empty()] { "Select a material type..." }
                            @for mat in MATERIALS {
                                option value=(mat) selected[form.material == mat] { (mat) }
                            }
                        }

                        div id="other-field" class=(if form.material == OTHER_MATERIAL { "other-field" } else { "other-field hidden" }) {
                            label for="custom_material" { "Specify Material" }
                            input type="text" id="custom_material" name="custom_material"
                                placeholder="Enter custom material name" value=(form.custom_material);
                        }

                        div class="two-col" {
                            div {
                                label for="volume" { "Payload Volume (Tonnes)" }
                                input type="number" id="volume" name="volume" step="0.1" min="0.1"
                                    placeholder="0.0" value=(form.volume) required;
                            }
                            div {
                                label for="price" { "Quoted Price (per Tonne)" }
                                input type="number" id="price" name="price" step="0.01" min="0"
                                    placeholder="0.00" value=(form.price) required;
                            }
                        }

                        label for="photo" { "Material Photo" }
                        input type="file" id="photo" name="photo" accept="image/*";
                        @if let Some(name) = &form.photo {
                            p class="muted" { "Selected: " (name) }
                        }

                        div class="certify" {
                            input type="checkbox" id="certified" name="certified" checked[form.certified] required;
                            label for="certified" {
                                "I certify this payload passes "
                                strong { "Phase-1 QA compliance" }
                                " and meets all regulatory standards for material redistribution."
                            }
                        }

                        button type="submit" class="btn primary wide" {
                            span class="btn-text" { "Inject Payload" }
                            span class="spinner-text" { "Calculating Haulage..." }
                        }
                    }

                    p class="notice info" {
                        strong { "Note:" }
                        " All payloads are automatically routed through the smart matching engine for optimal distribution and sustainability metrics."
                    }
                }
            }
        },
    )
}
