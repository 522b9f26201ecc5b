use crate::templates::{app_shell, Chrome};
use maud::{html, Markup};

pub fn error_page(status: u16, message: &str) -> Markup {
    app_shell(
        &format!("Error {status}"),
        Chrome::TopBar,
        "",
        html! {
            div class="narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to Dashboard" } }
            }
        },
    )
}
