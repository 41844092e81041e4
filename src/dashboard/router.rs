//! Role to tab routing
//!
//! Pure lookup of the tabs and dashboard title a role gets. Roles arrive as
//! strings from the session; anything unrecognized maps to no tabs and the
//! generic title rather than an error.

use crate::models::{Role, Tab};

const ADMIN_TABS: &[Tab] = &[
    Tab::Exhibitors,
    Tab::Visitors,
    Tab::Events,
    Tab::Categories,
    Tab::Gallery,
    Tab::ManageTeam,
];

const MANAGER_TABS: &[Tab] = &[
    Tab::Exhibitors,
    Tab::Visitors,
    Tab::Events,
    Tab::Categories,
    Tab::Gallery,
];

const SALES_TABS: &[Tab] = &[Tab::Exhibitors, Tab::Visitors];

pub const FALLBACK_TITLE: &str = "Dashboard";

pub struct RoleRouter;

impl RoleRouter {
    /// Ordered, duplicate-free tabs visible to `role`
    pub fn tabs_for(role: &str) -> &'static [Tab] {
        match role.parse::<Role>() {
            Ok(role) => Self::tabs_for_role(role),
            Err(_) => &[],
        }
    }

    pub fn title_for(role: &str) -> &'static str {
        match role.parse::<Role>() {
            Ok(role) => Self::title_for_role(role),
            Err(_) => FALLBACK_TITLE,
        }
    }

    pub fn tabs_for_role(role: Role) -> &'static [Tab] {
        match role {
            Role::Admin => ADMIN_TABS,
            Role::Manager => MANAGER_TABS,
            Role::Sales => SALES_TABS,
        }
    }

    pub fn title_for_role(role: Role) -> &'static str {
        match role {
            Role::Admin => "Admin Dashboard",
            Role::Manager => "Manager Dashboard",
            Role::Sales => "Sales Dashboard",
        }
    }

    pub fn can_access(role: &str, tab: Tab) -> bool {
        Self::tabs_for(role).contains(&tab)
    }
}
