//! Management panel
//!
//! Headless state for one resource tab. The panel mounts its own store,
//! exposes what presentation code should draw, keeps the add-modal draft,
//! and walks the delete confirmation protocol. All network effects go
//! through the store.

use url::Url;
use tracing::debug;
use crate::services::api::ApiClient;
use crate::services::media::MediaPolicy;
use crate::store::{OpOutcome, PendingRemoval, Resource, ResourceStore};

/// What the panel should render
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView<T> {
    /// No list has arrived yet
    Loading,
    Ready {
        items: Vec<T>,
        /// A request is outstanding; the items are the last known list
        refreshing: bool,
        error: Option<String>,
        modal_open: bool,
        form_error: Option<String>,
        pending_delete: Option<PendingRemoval>,
    },
}

pub struct ManagementPanel<R: Resource> {
    store: ResourceStore<R>,
    media: MediaPolicy,
    draft: Option<R::Draft>,
    form_error: Option<String>,
    pending_delete: Option<PendingRemoval>,
}

impl<R: Resource> ManagementPanel<R> {
    /// Mount the panel with a fresh store; call `load` for the initial fetch
    pub fn new(api: ApiClient, media: MediaPolicy) -> Self {
        Self {
            store: ResourceStore::new(api),
            media,
            draft: None,
            form_error: None,
            pending_delete: None,
        }
    }

    pub fn store(&self) -> &ResourceStore<R> {
        &self.store
    }

    /// Initial fetch after mount
    pub async fn load(&self) -> OpOutcome {
        self.store.fetch_all().await
    }

    pub async fn refresh(&self) -> OpOutcome {
        self.store.fetch_all().await
    }

    pub async fn view(&self) -> PanelView<R::Item> {
        let snapshot = self.store.snapshot().await;

        if !snapshot.loaded && (snapshot.loading || snapshot.error.is_none()) {
            return PanelView::Loading;
        }

        PanelView::Ready {
            items: snapshot.items,
            refreshing: snapshot.loading,
            error: snapshot.error,
            modal_open: self.draft.is_some(),
            form_error: self.form_error.clone(),
            pending_delete: self.pending_delete.clone(),
        }
    }

    /// Heading count, e.g. `Manage Team (3)`
    pub async fn count(&self) -> usize {
        self.store.items().await.len()
    }

    /// Asset URL of `item` if it may be rendered
    pub fn renderable_asset(&self, item: &R::Item) -> Option<Url> {
        R::asset_url(item).and_then(|raw| self.media.renderable(raw))
    }

    /// Open the add modal with an empty draft
    pub fn open_add_modal(&mut self) {
        self.draft = Some(R::Draft::default());
        self.form_error = None;
    }

    pub fn is_modal_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        self.draft.as_mut()
    }

    /// Close the add modal, discarding the draft
    pub fn cancel_add_modal(&mut self) {
        self.draft = None;
        self.form_error = None;
    }

    /// Submit the draft as-is; closes the modal and refreshes once `create` resolves
    pub async fn submit_add_modal(&mut self) -> OpOutcome {
        let draft = match self.draft.as_ref() {
            Some(draft) => draft.clone(),
            None => return OpOutcome::NotPending,
        };

        if let Err(reason) = R::validate(&draft) {
            debug!(resource = R::PLURAL, reason = %reason, "Draft rejected by form validation");
            self.form_error = Some(reason.clone());
            return OpOutcome::Rejected(reason);
        }

        let outcome = self.store.create(&draft).await;

        self.cancel_add_modal();
        self.store.fetch_all().await;
        outcome
    }

    /// Ask for confirmation before deleting `id`; the prompt is on the token
    pub async fn request_delete(&mut self, id: i64) -> PendingRemoval {
        if let Some(previous) = self.pending_delete.take() {
            self.store.cancel_removal(&previous).await;
        }
        let pending = self.store.request_removal(id).await;
        self.pending_delete = Some(pending.clone());
        pending
    }

    pub fn pending_delete(&self) -> Option<&PendingRemoval> {
        self.pending_delete.as_ref()
    }

    /// The user confirmed the prompt
    pub async fn confirm_delete(&mut self) -> OpOutcome {
        match self.pending_delete.take() {
            Some(pending) => self.store.confirm_removal(pending).await,
            None => OpOutcome::NotPending,
        }
    }

    /// The user dismissed the prompt
    pub async fn cancel_delete(&mut self) {
        if let Some(pending) = self.pending_delete.take() {
            self.store.cancel_removal(&pending).await;
        }
    }
}

impl<R: Resource> Drop for ManagementPanel<R> {
    fn drop(&mut self) {
        self.store.detach();
    }
}
