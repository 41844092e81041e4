//! Role and tab model

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

/// Staff role carried by the session; fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Sales,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Sales];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Sales => "sales",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "sales" => Ok(Role::Sales),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

/// Dashboard tab identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Exhibitors,
    Visitors,
    Events,
    Categories,
    Gallery,
    ManageTeam,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Exhibitors,
        Tab::Visitors,
        Tab::Events,
        Tab::Categories,
        Tab::Gallery,
        Tab::ManageTeam,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Exhibitors => "exhibitors",
            Tab::Visitors => "visitors",
            Tab::Events => "events",
            Tab::Categories => "categories",
            Tab::Gallery => "gallery",
            Tab::ManageTeam => "manage-team",
        }
    }

    /// Human label, e.g. `Manage Team`
    pub fn label(&self) -> String {
        crate::utils::helpers::display_label(self.as_str())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("unknown tab: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_identifiers_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), tab);
            assert_eq!(serde_json::to_string(&tab).unwrap(), format!("\"{}\"", tab.as_str()));
        }
        assert!("manage_team".parse::<Tab>().is_err());
    }

    #[test]
    fn test_role_parsing_is_case_sensitive() {
        assert_eq!("sales".parse::<Role>().unwrap(), Role::Sales);
        assert!("Sales".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }
}
