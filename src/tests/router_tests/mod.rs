mod explorer_tests;
mod inject_tests;
mod login_tests;
mod settings_tests;
