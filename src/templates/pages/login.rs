use crate::templates::{app_shell, notice, Chrome, Notice};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserType {
    #[default]
    Buyer,
    Seller,
}

impl UserType {
    pub fn from_param(raw: &str) -> Self {
        match raw {
            "seller" => UserType::Seller,
            _ => UserType::Buyer,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            UserType::Buyer => "buyer",
            UserType::Seller => "seller",
        }
    }
}

pub fn login_page(user_type: UserType, username: &str, error: Option<&str>) -> Markup {
    let (cta, tone) = match user_type {
        UserType::Buyer => ("Sign In to Buy", "blue"),
        UserType::Seller => ("Sign In to Sell", "emerald"),
    };

    app_shell(
        "Sign in",
        Chrome::Bare,
        "/login",
        html! {
            div class=(format!("login-card {tone}")) {
                div class="login-head" {
                    h2 { "Welcome Back" }
                    p class="muted" { "Sign in to your account to continue" }
                }

                div class="toggle" {
                    a href="/login?as=buyer" class=(if user_type == UserType::Buyer { "active" } else { "" }) { "Buyer" }
                    a href="/login?as=seller" class=(if user_type == UserType::Seller { "active" } else { "" }) { "Seller" }
                }

                @if let Some(msg) = error {
                    (notice(Notice::Error, msg))
                }

                form method="post" action="/login" {
                    input type="hidden" name="user_type" value=(user_type.as_param());
                    label for="username" { "Username" }
                    input type="text" id="username" name="username" placeholder="Enter your username" value=(username) required;
                    label for="password" { "Password" }
                    input type="password" id="password" name="password" placeholder="Enter your password" required;
                    button type="submit" class="btn primary wide" { (cta) " →" }
                }
            }
        },
    )
}
