use crate::app::App;
use crate::domain::metrics::{hub_marker, listing_markers, total_diverted, DEMO_TONNES_DIVERTED};
use crate::domain::{derive, SortKey};
use crate::errors::ServerError;
use crate::forms::{checked, field, parse_query, read_form};
use crate::responses::{css_response, html_response, html_with_status, see_other, ResultResp};
use crate::retrieval::{fetch_all, RetrievalProfile};
use crate::submission::{
    SubmissionError, SubmissionForm, SubmissionGateway, SubmissionState, IN_PROGRESS,
};
use crate::templates::pages::{self, explorer::CONTRACT_INITIATED, settings::SETTINGS_SAVED};
use crate::templates::pages::{SettingsRole, UserType};
use astra::Request;
use std::time::Instant;

const MAIN_CSS: &str = include_str!("../static/main.css");

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(app),
        ("GET", "/data") => explorer(&req, app, None),
        ("POST", p) if p.starts_with("/data/contract/") => initiate_contract(req, app),
        ("GET", "/inject") => html_response(pages::inject_page(&SubmissionForm::default(), None)),
        ("POST", "/inject") => inject(req, app),
        ("GET", "/login") => {
            let user_type = UserType::from_param(field(&parse_query(&req), "as"));
            html_response(pages::login_page(user_type, "", None))
        }
        ("POST", "/login") => login(req),
        ("GET", "/settings") => {
            let role = SettingsRole::from_param(field(&parse_query(&req), "role"));
            html_response(pages::settings_page(role, None))
        }
        ("POST", "/settings") => save_settings(&req, app),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(app: &App) -> ResultResp {
    let mut rng = rand::thread_rng();
    let outcome = fetch_all(app.backend(), &RetrievalProfile::DASHBOARD, &mut rng);

    let is_demo = outcome.is_demo();
    let tonnes_diverted = if is_demo {
        DEMO_TONNES_DIVERTED
    } else {
        total_diverted(outcome.listings())
    };
    let listings = outcome.into_listings();

    let vm = pages::DashboardVm {
        tonnes_diverted,
        markers: listing_markers(&mut rng, &listings),
        hub: hub_marker(),
        listings,
        is_demo,
    };
    html_response(pages::dashboard_page(&vm))
}

fn explorer(req: &Request, app: &App, flash: Option<&str>) -> ResultResp {
    let query = parse_query(req);
    let search = field(&query, "q").to_string();
    let sort = match query.get("sort") {
        Some(raw) => SortKey::from_param(raw),
        None => SortKey::default(),
    };

    let outcome = fetch_all(app.backend(), &RetrievalProfile::EXPLORER, &mut rand::thread_rng());
    let vm = pages::ExplorerVm {
        listings: derive(outcome.listings(), &search, sort),
        search,
        sort,
        flash: flash.map(str::to_string),
    };
    html_response(pages::explorer_page(&vm))
}

/// Simulated: waits, then acknowledges. Nothing is recorded.
fn initiate_contract(req: Request, app: &App) -> ResultResp {
    let id: i64 = req
        .uri()
        .path()
        .trim_start_matches("/data/contract/")
        .parse()
        .map_err(|_| ServerError::BadRequest("invalid listing id".into()))?;

    tracing::info!(listing_id = id, "smart contract requested");
    app.contract_pacing().simulate();

    if req.headers().contains_key("HX-Request") {
        html_response(pages::contract_notice())
    } else {
        explorer(&req, app, Some(CONTRACT_INITIATED))
    }
}

fn inject(req: Request, app: &App) -> ResultResp {
    let fields = read_form(req)?;
    let form = SubmissionForm {
        material: field(&fields, "material").to_string(),
        custom_material: field(&fields, "custom_material").to_string(),
        volume: field(&fields, "volume").to_string(),
        price: field(&fields, "price").to_string(),
        photo: Some(field(&fields, "photo"))
            .filter(|name| !name.is_empty())
            .map(str::to_string),
        certified: checked(&fields, "certified"),
    };

    let started = Instant::now();
    let state = SubmissionGateway::new(app.backend()).submit(
        SubmissionState::Idle,
        &form,
        &mut rand::thread_rng(),
    );

    match state {
        SubmissionState::Succeeded(listing) => {
            app.submit_pacing().settle(started);
            tracing::info!(id = listing.id, material = %listing.material, "material injected");
            see_other("/")
        }
        SubmissionState::Failed(err) => {
            let status = match &err {
                SubmissionError::Validation(_) => 400,
                SubmissionError::Transport(_) => 502,
            };
            html_with_status(status, pages::inject_page(&form, Some(err.user_message())))
        }
        SubmissionState::Idle | SubmissionState::Submitting => {
            html_with_status(409, pages::inject_page(&form, Some(IN_PROGRESS)))
        }
    }
}

/// Not an authentication step: any non-empty pair is accepted.
fn login(req: Request) -> ResultResp {
    let fields = read_form(req)?;
    let user_type = UserType::from_param(field(&fields, "user_type"));
    let username = field(&fields, "username");
    let password = field(&fields, "password");

    if username.is_empty() || password.is_empty() {
        return html_with_status(
            400,
            pages::login_page(user_type, username, Some("Username and password are required")),
        );
    }

    tracing::info!(user_type = user_type.as_param(), %username, "login accepted");
    see_other("/")
}

fn save_settings(req: &Request, app: &App) -> ResultResp {
    let role = SettingsRole::from_param(field(&parse_query(req), "role"));
    app.settings_pacing().simulate();
    html_response(pages::settings_page(role, Some(SETTINGS_SAVED)))
}
