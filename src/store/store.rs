//! Resource store
//!
//! One `ResourceStore` owns the client-side state of one resource: the list
//! last returned by the server, a loading flag, and a user-facing error
//! message. The list is only ever replaced by a successful list response;
//! creates and deletes are followed by a full refetch instead of local edits.
//! A failed create or delete stays on the store across that refetch and is
//! cleared by the next successful mutation; a failed load is cleared by the
//! next successful load.
//! Failures never escape the public operations: they are logged, turned into
//! a message on the store, and reported back as an `OpOutcome`.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;
use crate::services::api::ApiClient;
use crate::utils::errors::ApiError;
use crate::utils::logging::log_admin_action;
use super::envelope::ListEnvelope;
use super::removal::{Confirm, PendingRemoval};
use super::resource::Resource;

/// Network operation a store performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Delete,
}

impl Operation {
    fn verb(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Delete => "delete",
        }
    }
}

/// User-facing message for a failed operation on `R`
pub fn failure_message<R: Resource>(operation: Operation, error: &ApiError) -> String {
    let noun = match operation {
        Operation::Load => R::PLURAL,
        Operation::Create | Operation::Delete => R::SINGULAR,
    };

    if error.is_authorization() {
        format!("Unauthorized: could not {} {}. Please sign in again.", operation.verb(), noun)
    } else {
        format!("Failed to {} {}.", operation.verb(), noun)
    }
}

/// What a store operation ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpOutcome {
    /// The request succeeded and its effect was committed
    Applied,
    /// The request failed; the message is on the store
    Failed(ApiError),
    /// A list response arrived after a newer one had been committed
    Stale,
    /// The store was unmounted before the response arrived
    Detached,
    /// The user declined the removal prompt; nothing was sent
    Declined,
    /// The removal token was unknown or already used; nothing was sent
    NotPending,
    /// The draft failed form validation; nothing was sent
    Rejected(String),
}

impl OpOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, OpOutcome::Applied)
    }
}

/// Recorded failure and the operation it came from
#[derive(Debug, Clone)]
struct Failure {
    operation: Operation,
    message: String,
}

#[derive(Debug)]
struct StoreState<T> {
    items: Vec<T>,
    loaded: bool,
    in_flight: usize,
    error: Option<Failure>,
    /// Sequence number of the last list response that was committed
    committed_seq: u64,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            in_flight: 0,
            error: None,
            committed_seq: 0,
        }
    }
}

impl<T> StoreState<T> {
    fn clear_error_from(&mut self, operations: &[Operation]) {
        if matches!(&self.error, Some(failure) if operations.contains(&failure.operation)) {
            self.error = None;
        }
    }
}

/// Point-in-time copy of a store's state
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot<T> {
    pub items: Vec<T>,
    /// True while any request of this store is outstanding
    pub loading: bool,
    /// True once a list response has been committed
    pub loaded: bool,
    pub error: Option<String>,
}

pub struct ResourceStore<R: Resource> {
    api: ApiClient,
    state: Arc<RwLock<StoreState<R::Item>>>,
    pending: Arc<Mutex<HashMap<Uuid, i64>>>,
    next_seq: Arc<AtomicU64>,
    mounted: Arc<AtomicBool>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceStore<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: Arc::clone(&self.state),
            pending: Arc::clone(&self.pending),
            next_seq: Arc::clone(&self.next_seq),
            mounted: Arc::clone(&self.mounted),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ResourceStore<R> {
    /// Create an empty, mounted store
    pub fn new(api: ApiClient) -> Self {
        debug!(resource = R::PLURAL, "Store mounted");
        Self {
            api,
            state: Arc::new(RwLock::new(StoreState::default())),
            pending: Arc::new(Mutex::new(HashMap::new())),
            next_seq: Arc::new(AtomicU64::new(0)),
            mounted: Arc::new(AtomicBool::new(true)),
            _resource: PhantomData,
        }
    }

    pub async fn snapshot(&self) -> StoreSnapshot<R::Item> {
        let state = self.state.read().await;
        StoreSnapshot {
            items: state.items.clone(),
            loading: state.in_flight > 0,
            loaded: state.loaded,
            error: state.error.as_ref().map(|failure| failure.message.clone()),
        }
    }

    pub async fn items(&self) -> Vec<R::Item> {
        self.state.read().await.items.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.in_flight > 0
    }

    pub async fn error(&self) -> Option<String> {
        self.state
            .read()
            .await
            .error
            .as_ref()
            .map(|failure| failure.message.clone())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Stop committing responses and drop pending removals; requests already sent are left to finish
    pub fn detach(&self) {
        if self.mounted.swap(false, Ordering::SeqCst) {
            let dropped = {
                let mut pending = self.pending();
                let dropped = pending.len();
                pending.clear();
                dropped
            };
            debug!(resource = R::PLURAL, dropped_removals = dropped, "Store unmounted");
        }
    }

    /// Number of removals awaiting confirmation
    pub fn pending_removals(&self) -> usize {
        self.pending().len()
    }

    /// Replace the list with the server's current list
    pub async fn fetch_all(&self) -> OpOutcome {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let endpoints = R::endpoints();
        debug!(resource = R::PLURAL, seq = seq, "Fetching list");

        self.state.write().await.in_flight += 1;
        let result = self.api.get_json::<ListEnvelope<R::Item>>(&endpoints.list).await;

        let mut state = self.state.write().await;
        if !self.is_mounted() {
            debug!(resource = R::PLURAL, seq = seq, "Dropping list response for unmounted store");
            return OpOutcome::Detached;
        }
        state.in_flight = state.in_flight.saturating_sub(1);

        // Only successes advance the committed sequence, so a newer failure never hides an older success
        if seq < state.committed_seq {
            debug!(resource = R::PLURAL, seq = seq, committed = state.committed_seq, "Dropping stale list response");
            return OpOutcome::Stale;
        }

        match result {
            Ok(envelope) => {
                let items = envelope.into_items();
                info!(resource = R::PLURAL, count = items.len(), "List loaded");
                state.committed_seq = seq;
                state.items = items;
                state.loaded = true;
                state.clear_error_from(&[Operation::Load]);
                OpOutcome::Applied
            }
            Err(e) => {
                warn!(resource = R::PLURAL, error = %e, "Failed to load list");
                state.error = Some(Failure {
                    operation: Operation::Load,
                    message: failure_message::<R>(Operation::Load, &e),
                });
                OpOutcome::Failed(e)
            }
        }
    }

    /// Create an item from a draft, then refetch the list
    pub async fn create(&self, draft: &R::Draft) -> OpOutcome {
        let endpoints = R::endpoints();
        debug!(resource = R::PLURAL, "Creating item");

        self.state.write().await.in_flight += 1;
        let result = self.api.post(&endpoints.create, R::body(draft)).await;

        let outcome = match result {
            Ok(()) => {
                self.log_action("create", None);
                if self.is_mounted() {
                    self.state.write().await.clear_error_from(&[Operation::Create, Operation::Delete]);
                    self.fetch_all().await;
                }
                OpOutcome::Applied
            }
            Err(e) => {
                self.record_failure(Operation::Create, &e).await;
                OpOutcome::Failed(e)
            }
        };

        self.finish().await;
        outcome
    }

    /// First step of a removal: hand out a token to confirm or cancel
    pub async fn request_removal(&self, id: i64) -> PendingRemoval {
        let pending = PendingRemoval::new(id, R::SINGULAR);
        if self.is_mounted() {
            self.pending().insert(pending.token, id);
        }
        debug!(resource = R::PLURAL, id = id, token = %pending.token, "Removal awaiting confirmation");
        pending
    }

    /// Discard a pending removal without sending anything
    pub async fn cancel_removal(&self, pending: &PendingRemoval) -> bool {
        let cancelled = self.pending().remove(&pending.token).is_some();
        debug!(resource = R::PLURAL, id = pending.id, cancelled = cancelled, "Removal cancelled");
        cancelled
    }

    /// Second step of a removal: issue the DELETE, then refetch the list
    pub async fn confirm_removal(&self, pending: PendingRemoval) -> OpOutcome {
        let taken = self.pending().remove(&pending.token);
        let id = match taken {
            Some(id) => id,
            None => {
                warn!(resource = R::PLURAL, token = %pending.token, "Removal token is not pending");
                return OpOutcome::NotPending;
            }
        };
        self.state.write().await.in_flight += 1;

        let path = R::endpoints().delete(id);
        let result = self.api.delete(&path).await;

        let outcome = match result {
            Ok(()) => {
                self.log_action("delete", Some(id));
                if self.is_mounted() {
                    self.state.write().await.clear_error_from(&[Operation::Create, Operation::Delete]);
                    self.fetch_all().await;
                }
                OpOutcome::Applied
            }
            Err(e) => {
                self.record_failure(Operation::Delete, &e).await;
                OpOutcome::Failed(e)
            }
        };

        self.finish().await;
        outcome
    }

    /// Remove an item after asking `confirm`; a declined prompt sends nothing
    pub async fn remove(&self, id: i64, confirm: &impl Confirm) -> OpOutcome {
        let pending = self.request_removal(id).await;
        if !confirm.confirm(&pending.prompt) {
            self.cancel_removal(&pending).await;
            return OpOutcome::Declined;
        }
        self.confirm_removal(pending).await
    }

    async fn record_failure(&self, operation: Operation, error: &ApiError) {
        warn!(resource = R::PLURAL, operation = ?operation, error = %error, "Store operation failed");
        if self.is_mounted() {
            self.state.write().await.error = Some(Failure {
                operation,
                message: failure_message::<R>(operation, error),
            });
        }
    }

    async fn finish(&self) {
        let mut state = self.state.write().await;
        if self.is_mounted() {
            state.in_flight = state.in_flight.saturating_sub(1);
        }
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<Uuid, i64>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn log_action(&self, action: &str, target_id: Option<i64>) {
        let role = self.api.auth().role().unwrap_or_default();
        log_admin_action(&role, action, R::SINGULAR, target_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::resources::{Categories, Team};

    #[test]
    fn test_failure_messages_distinguish_unauthorized() {
        let unauthorized = failure_message::<Team>(Operation::Load, &ApiError::Unauthorized(401));
        let failed = failure_message::<Team>(
            Operation::Load,
            &ApiError::Failed { status: 500, detail: "boom".to_string() },
        );

        assert!(unauthorized.starts_with("Unauthorized"));
        assert_eq!(failed, "Failed to load team members.");
        assert_ne!(unauthorized, failed);
    }

    #[test]
    fn test_failure_messages_use_singular_for_mutations() {
        let message = failure_message::<Categories>(Operation::Delete, &ApiError::Network("reset".into()));
        assert_eq!(message, "Failed to delete category.");
        let message = failure_message::<Categories>(Operation::Create, &ApiError::MissingCredential);
        assert_eq!(message, "Unauthorized: could not create category. Please sign in again.");
    }
}
