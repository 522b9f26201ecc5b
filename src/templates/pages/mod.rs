pub mod dashboard;
pub mod error;
pub mod explorer;
pub mod inject;
pub mod login;
pub mod settings;

pub use dashboard::{dashboard_page, DashboardVm};
pub use error::error_page;
pub use explorer::{contract_notice, explorer_page, ExplorerVm};
pub use inject::inject_page;
pub use login::{login_page, UserType};
pub use settings::{settings_page, SettingsRole};
