//! Property tests for role routing

use proptest::prelude::*;
use std::collections::HashSet;
use ExpoAdmin::dashboard::{RoleRouter, FALLBACK_TITLE};
use ExpoAdmin::models::{Role, Tab};

proptest! {
    #[test]
    fn unknown_roles_get_nothing(role in "[a-zA-Z_ -]{0,16}") {
        prop_assume!(role.parse::<Role>().is_err());

        prop_assert!(RoleRouter::tabs_for(&role).is_empty());
        prop_assert_eq!(RoleRouter::title_for(&role), FALLBACK_TITLE);
        for tab in Tab::ALL {
            prop_assert!(!RoleRouter::can_access(&role, tab));
        }
    }

    #[test]
    fn tab_sets_are_ordered_and_unique(index in 0usize..3) {
        let role = Role::ALL[index];
        let tabs = RoleRouter::tabs_for_role(role);

        let unique: HashSet<&Tab> = tabs.iter().collect();
        prop_assert_eq!(unique.len(), tabs.len());

        // Tabs keep the canonical order
        let positions: Vec<usize> = tabs
            .iter()
            .map(|tab| Tab::ALL.iter().position(|t| t == tab).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));

        prop_assert_eq!(RoleRouter::tabs_for(role.as_str()), tabs);
    }
}

#[test]
fn test_role_tab_sets_nest() {
    let admin = RoleRouter::tabs_for("admin");
    let manager = RoleRouter::tabs_for("manager");
    let sales = RoleRouter::tabs_for("sales");

    assert!(manager.iter().all(|tab| admin.contains(tab)));
    assert!(sales.iter().all(|tab| manager.contains(tab)));
    assert!(RoleRouter::can_access("admin", Tab::ManageTeam));
    assert!(!RoleRouter::can_access("manager", Tab::ManageTeam));
    assert!(!RoleRouter::can_access("sales", Tab::Events));
}

#[test]
fn test_role_names_are_case_sensitive() {
    assert!(RoleRouter::tabs_for("Admin").is_empty());
    assert_eq!(RoleRouter::title_for("SALES"), FALLBACK_TITLE);
}
