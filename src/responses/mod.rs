pub mod errors;
pub mod html;

pub use errors::{html_error_response, ResultResp};
pub use html::{css_response, html_response, html_with_status, see_other};
