//! Dashboard module
//!
//! Role routing, the dashboard shell and the per-resource management panels.
//! Everything here is headless: presentation code renders the views these
//! types expose.

pub mod panel;
pub mod router;
pub mod shell;

pub use panel::{ManagementPanel, PanelView};
pub use router::{RoleRouter, FALLBACK_TITLE};
pub use shell::{ActivePanel, DashboardShell};
