pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, notice, Notice};
pub use layouts::shell::{app_shell, Chrome};
