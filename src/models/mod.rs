//! Data models module
//!
//! This module contains the resource entities exchanged with the backend
//! and the drafts the add modals collect.

pub mod role;
pub mod asset;
pub mod team;
pub mod category;
pub mod exhibitor;
pub mod visitor;
pub mod event;
pub mod gallery;

// Re-export commonly used models
pub use role::{Role, Tab};
pub use asset::Asset;
pub use team::{TeamMember, TeamRole, CreateTeamMemberRequest};
pub use category::{Category, CreateCategoryRequest};
pub use exhibitor::{Exhibitor, ExhibitorStatus, CreateExhibitorRequest};
pub use visitor::{Visitor, CreateVisitorRequest};
pub use event::{Event, CreateEventRequest};
pub use gallery::{GalleryImage, GalleryKind, CreateGalleryImageRequest};
