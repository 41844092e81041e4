//! ExpoAdmin console
//!
//! Signs in with credentials from the environment, opens the dashboard for
//! the returned role and prints the active tab's items.

use anyhow::Context;
use tracing::{error, info, warn};

use ExpoAdmin::{
    config::Settings,
    dashboard::{ActivePanel, DashboardShell, ManagementPanel, PanelView},
    services::{ApiClient, AuthContext, MediaPolicy, SessionClient},
    store::Resource,
    utils::logging,
    ExpoAdminError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("loading settings")?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}", ExpoAdmin::info());

    if let Err(e) = run(&settings).await {
        match e.downcast_ref::<ExpoAdminError>() {
            Some(err) => error!(
                severity = %err.severity(),
                recoverable = err.is_recoverable(),
                error = %err,
                "Console run failed"
            ),
            None => error!(error = %e, "Console run failed"),
        }
        return Err(e);
    }

    Ok(())
}

/// Sign in, open the dashboard and print the active tab
async fn run(settings: &Settings) -> anyhow::Result<()> {
    let auth = AuthContext::new();
    let api = ApiClient::new(&settings.api, auth)?;
    let media = MediaPolicy::from_config(&settings.media)?;

    // Sign in
    let sessions = SessionClient::new(api.clone());
    let password = std::env::var("EXPOADMIN_PASSWORD").context("EXPOADMIN_PASSWORD is not set")?;
    let session = match (std::env::var("EXPOADMIN_EMAIL"), std::env::var("EXPOADMIN_USERNAME")) {
        (Ok(email), _) => sessions.login_team(&email, &password).await?,
        (Err(_), Ok(username)) => sessions.login_admin(&username, &password).await?,
        _ => anyhow::bail!("set EXPOADMIN_EMAIL (team) or EXPOADMIN_USERNAME (admin)"),
    };
    info!(role = %session.role, "Signed in");

    let mut shell = DashboardShell::open(api, media).await;
    println!("{}", shell.title());

    if shell.tabs().is_empty() {
        warn!(role = %shell.role(), "Role has no dashboard tabs");
    }

    let requested = std::env::var("EXPOADMIN_TAB").ok();
    if let Some(tab) = requested.as_deref() {
        if !shell.on_tab_change(tab).await && shell.active_tab().map(|t| t.as_str()) != Some(tab) {
            warn!(tab = tab, "Tab is not available for this role");
        }
    }

    for tab in shell.tabs() {
        let marker = if shell.active_tab() == Some(*tab) { "*" } else { " " };
        println!("{} {}", marker, tab.label());
    }

    match shell.panel() {
        Some(ActivePanel::Exhibitors(panel)) => print_panel(panel, |e| format!("{} <{}> [{}]", e.company_name, e.email, e.status.as_str())).await,
        Some(ActivePanel::Visitors(panel)) => print_panel(panel, |v| format!("{} {} <{}>", v.first_name, v.last_name, v.email)).await,
        Some(ActivePanel::Events(panel)) => print_panel(panel, |e| format!("{} ({} - {})", e.title, e.start_date, e.end_date)).await,
        Some(ActivePanel::Categories(panel)) => print_panel(panel, |c| format!("{} {}", c.icon, c.name)).await,
        Some(ActivePanel::Gallery(panel)) => print_panel(panel, |g| format!("#{} {} [{}]", g.display_order, g.title, g.kind.as_str())).await,
        Some(ActivePanel::Team(panel)) => print_panel(panel, |m| format!("{} <{}> {}", m.name, m.email, m.role.as_str().to_uppercase())).await,
        None => {}
    }

    shell.on_logout();
    info!("Signed out");

    Ok(())
}

async fn print_panel<R, F>(panel: &ManagementPanel<R>, describe: F)
where
    R: Resource,
    F: Fn(&R::Item) -> String,
{
    match panel.view().await {
        PanelView::Loading => println!("  loading..."),
        PanelView::Ready { items, error, .. } => {
            if let Some(error) = error {
                println!("  ! {}", error);
            }
            println!("  {} {}", items.len(), R::PLURAL);
            for item in &items {
                let asset = panel
                    .renderable_asset(item)
                    .map(|url| format!("  {}", url))
                    .unwrap_or_default();
                println!("  - [{}] {}{}", R::item_id(item), describe(item), asset);
            }
        }
    }
}
