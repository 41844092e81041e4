//! Dashboard shell
//!
//! Ties the session role to its tab set, tracks the active tab, owns the
//! panel mounted for that tab, and ends the session on logout. Switching tabs
//! unmounts the previous panel, so each tab starts from a fresh fetch.

use tracing::{debug, info};
use crate::models::Tab;
use crate::services::api::ApiClient;
use crate::services::media::MediaPolicy;
use crate::store::{Categories, Events, Exhibitors, Gallery, OpOutcome, Team, Visitors};
use super::panel::ManagementPanel;
use super::router::RoleRouter;

/// The panel mounted for the active tab
pub enum ActivePanel {
    Exhibitors(ManagementPanel<Exhibitors>),
    Visitors(ManagementPanel<Visitors>),
    Events(ManagementPanel<Events>),
    Categories(ManagementPanel<Categories>),
    Gallery(ManagementPanel<Gallery>),
    Team(ManagementPanel<Team>),
}

impl ActivePanel {
    fn mount(tab: Tab, api: &ApiClient, media: &MediaPolicy) -> Self {
        let (api, media) = (api.clone(), media.clone());
        match tab {
            Tab::Exhibitors => ActivePanel::Exhibitors(ManagementPanel::new(api, media)),
            Tab::Visitors => ActivePanel::Visitors(ManagementPanel::new(api, media)),
            Tab::Events => ActivePanel::Events(ManagementPanel::new(api, media)),
            Tab::Categories => ActivePanel::Categories(ManagementPanel::new(api, media)),
            Tab::Gallery => ActivePanel::Gallery(ManagementPanel::new(api, media)),
            Tab::ManageTeam => ActivePanel::Team(ManagementPanel::new(api, media)),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ActivePanel::Exhibitors(_) => Tab::Exhibitors,
            ActivePanel::Visitors(_) => Tab::Visitors,
            ActivePanel::Events(_) => Tab::Events,
            ActivePanel::Categories(_) => Tab::Categories,
            ActivePanel::Gallery(_) => Tab::Gallery,
            ActivePanel::Team(_) => Tab::ManageTeam,
        }
    }

    /// Initial fetch of the mounted panel
    pub async fn load(&self) -> OpOutcome {
        match self {
            ActivePanel::Exhibitors(panel) => panel.load().await,
            ActivePanel::Visitors(panel) => panel.load().await,
            ActivePanel::Events(panel) => panel.load().await,
            ActivePanel::Categories(panel) => panel.load().await,
            ActivePanel::Gallery(panel) => panel.load().await,
            ActivePanel::Team(panel) => panel.load().await,
        }
    }
}

pub struct DashboardShell {
    api: ApiClient,
    media: MediaPolicy,
    role: String,
    tabs: &'static [Tab],
    active_tab: Option<Tab>,
    panel: Option<ActivePanel>,
}

impl DashboardShell {
    /// Build the shell for the signed-in role; the first tab's panel is mounted but not fetched
    pub fn new(api: ApiClient, media: MediaPolicy) -> Self {
        let role = api.auth().role().unwrap_or_default();
        let tabs = RoleRouter::tabs_for(&role);
        let active_tab = tabs.first().copied();
        let panel = active_tab.map(|tab| ActivePanel::mount(tab, &api, &media));

        info!(role = %role, tabs = tabs.len(), active_tab = ?active_tab, "Dashboard opened");

        Self {
            api,
            media,
            role,
            tabs,
            active_tab,
            panel,
        }
    }

    /// Build the shell and run the active panel's initial fetch
    pub async fn open(api: ApiClient, media: MediaPolicy) -> Self {
        let shell = Self::new(api, media);
        if let Some(panel) = shell.panel.as_ref() {
            panel.load().await;
        }
        shell
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn title(&self) -> &'static str {
        RoleRouter::title_for(&self.role)
    }

    pub fn tabs(&self) -> &'static [Tab] {
        self.tabs
    }

    pub fn active_tab(&self) -> Option<Tab> {
        self.active_tab
    }

    pub fn panel(&self) -> Option<&ActivePanel> {
        self.panel.as_ref()
    }

    pub fn panel_mut(&mut self) -> Option<&mut ActivePanel> {
        self.panel.as_mut()
    }

    /// Switch to `tab` if the role can see it; returns whether the active tab changed
    pub async fn on_tab_change(&mut self, tab: &str) -> bool {
        let tab = match tab.parse::<Tab>() {
            Ok(tab) if self.tabs.contains(&tab) => tab,
            _ => {
                debug!(role = %self.role, tab = tab, "Ignoring tab outside the role's tab set");
                return false;
            }
        };

        if self.active_tab == Some(tab) {
            return false;
        }

        // Dropping the old panel detaches its store before the new one mounts
        self.panel = None;
        self.active_tab = Some(tab);
        let panel = ActivePanel::mount(tab, &self.api, &self.media);
        panel.load().await;
        self.panel = Some(panel);

        info!(role = %self.role, tab = %tab, "Tab changed");
        true
    }

    /// End the session and unmount everything
    pub fn on_logout(&mut self) {
        self.panel = None;
        self.active_tab = None;
        self.tabs = &[];
        self.api.auth().logout();
    }
}
