//! Resource stores
//!
//! This module contains the generic store that owns fetch, create and delete
//! lifecycles for a resource, and the descriptors of the concrete resources.

pub mod envelope;
pub mod removal;
pub mod resource;
pub mod resources;
pub mod store;

pub use envelope::ListEnvelope;
pub use removal::{Confirm, PendingRemoval};
pub use resource::{Endpoints, Resource};
pub use resources::{Categories, Events, Exhibitors, Gallery, Team, Visitors};
pub use store::{failure_message, OpOutcome, Operation, ResourceStore, StoreSnapshot};

pub type TeamStore = ResourceStore<Team>;
pub type CategoryStore = ResourceStore<Categories>;
pub type ExhibitorStore = ResourceStore<Exhibitors>;
pub type VisitorStore = ResourceStore<Visitors>;
pub type EventStore = ResourceStore<Events>;
pub type GalleryStore = ResourceStore<Gallery>;
