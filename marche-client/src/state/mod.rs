//! Status state holders
//!
//! A [`StatusStore`] keeps the last snapshot the server confirmed for one
//! role and derives filtered views from it. Writes never patch the
//! snapshot: a confirmed write marks it stale and triggers a full reload.
//!
//! Mutating methods take `&mut self`, so one holder can never have two
//! operations in flight. Screens observe the holder through
//! [`StatusStore::subscribe`].

mod missions;
mod sources;

pub use missions::{MissionBoard, MissionState};
pub use sources::{CancelOrder, ClientOrderSource, CourierBonSource, VendorOrderSource};

use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::models::{BonStatus, DeliveryBon, Order, OrderStatus};
use shared::{FieldErrors, Locale};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tokio::sync::watch;

/// Entity with an id and a server-owned status
pub trait StatusTracked: Clone + Send + Sync + 'static {
    type Status: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static;

    fn id(&self) -> &str;
    fn status(&self) -> Self::Status;
}

impl StatusTracked for Order {
    type Status = OrderStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> OrderStatus {
        self.status
    }
}

impl StatusTracked for DeliveryBon {
    type Status = BonStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> BonStatus {
        self.status
    }
}

/// Remote collection a [`StatusStore`] synchronizes with
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    type Item: StatusTracked;
    type Action: fmt::Debug + Send + Sync;

    /// Full collection for the current user and role
    async fn fetch_all(&self) -> ClientResult<Vec<Self::Item>>;

    /// Send a single-item transition; returns the server's copy
    async fn transition(&self, id: &str, action: &Self::Action) -> ClientResult<Self::Item>;

    /// Local shape check, run before anything is sent
    fn check(&self, _action: &Self::Action) -> Result<(), FieldErrors> {
        Ok(())
    }
}

type StatusOf<T> = <T as StatusTracked>::Status;

/// Observable state of a [`StatusStore`]
#[derive(Debug, Clone)]
pub struct StoreState<T: StatusTracked> {
    /// Last successfully loaded snapshot
    pub items: Vec<T>,
    /// Selected filter chip; `None` shows everything
    pub filter: Option<StatusOf<T>>,
    pub loading: bool,
    /// Id of the item whose transition is awaiting the server
    pub in_flight: Option<String>,
    /// User-readable message of the last failure
    pub error: Option<String>,
    /// A write was confirmed after `items` was loaded
    pub stale: bool,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl<T: StatusTracked> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            filter: None,
            loading: false,
            in_flight: None,
            error: None,
            stale: false,
            loaded_at: None,
        }
    }
}

impl<T: StatusTracked> StoreState<T> {
    /// Items matching the selected filter chip
    pub fn visible(&self) -> Vec<T> {
        filter_items(&self.items, self.filter)
    }
}

fn filter_items<T: StatusTracked>(items: &[T], status: Option<StatusOf<T>>) -> Vec<T> {
    match status {
        None => items.to_vec(),
        Some(status) => items
            .iter()
            .filter(|item| item.status() == status)
            .cloned()
            .collect(),
    }
}

/// Status state holder for one role's collection
pub struct StatusStore<S: SnapshotSource> {
    source: S,
    locale: Locale,
    state: watch::Sender<StoreState<S::Item>>,
}

impl<S: SnapshotSource> fmt::Debug for StatusStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("StatusStore")
            .field("items", &state.items.len())
            .field("loading", &state.loading)
            .field("error", &state.error)
            .finish()
    }
}

impl<S: SnapshotSource> StatusStore<S> {
    pub fn new(source: S, locale: Locale) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            source,
            locale,
            state,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Receiver that sees every state change
    pub fn subscribe(&self) -> watch::Receiver<StoreState<S::Item>> {
        self.state.subscribe()
    }

    /// Copy of the current state
    pub fn state(&self) -> StoreState<S::Item> {
        self.state.borrow().clone()
    }

    /// Full last snapshot
    pub fn snapshot(&self) -> Vec<S::Item> {
        self.state.borrow().items.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn is_stale(&self) -> bool {
        self.state.borrow().stale
    }

    /// Items of the last snapshot with the given status; `None` means all
    pub fn filter(&self, status: Option<StatusOf<S::Item>>) -> Vec<S::Item> {
        filter_items(&self.state.borrow().items, status)
    }

    /// Number of items per status, for filter chip badges
    pub fn counts(&self) -> HashMap<StatusOf<S::Item>, usize> {
        let mut counts = HashMap::new();
        for item in &self.state.borrow().items {
            *counts.entry(item.status()).or_insert(0) += 1;
        }
        counts
    }

    /// Select the filter chip shown by [`StoreState::visible`]
    pub fn set_filter(&mut self, status: Option<StatusOf<S::Item>>) {
        self.state.send_modify(|s| s.filter = status);
    }

    pub fn clear_error(&mut self) {
        self.state.send_modify(|s| s.error = None);
    }

    /// Replace the snapshot with the server's full collection.
    ///
    /// On failure the previous snapshot is kept and the error message is
    /// published for display.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.state.send_modify(|s| s.loading = true);

        match self.source.fetch_all().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "Snapshot reloaded");
                self.state.send_modify(|s| {
                    s.items = items;
                    s.loading = false;
                    s.error = None;
                    s.stale = false;
                    s.loaded_at = Some(Utc::now());
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Snapshot reload failed");
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Ask the server to transition one item, then reload everything.
    ///
    /// A rejected transition leaves the snapshot untouched. When the server
    /// confirms but the follow-up reload fails, the reload error is returned
    /// and the snapshot stays stale until the next successful `load`.
    pub async fn apply_transition(&mut self, id: &str, action: S::Action) -> ClientResult<()> {
        if let Err(errors) = self.source.check(&action) {
            let e = ClientError::Validation(errors);
            self.fail(&e);
            return Err(e);
        }

        self.state.send_modify(|s| s.in_flight = Some(id.to_string()));

        match self.source.transition(id, &action).await {
            Ok(confirmed) => {
                tracing::info!(
                    id,
                    ?action,
                    status = ?confirmed.status(),
                    "Transition confirmed"
                );
                self.state.send_modify(|s| {
                    s.in_flight = None;
                    s.stale = true;
                });
                self.load().await
            }
            Err(e) => {
                tracing::warn!(id, ?action, error = %e, "Transition rejected");
                self.fail(&e);
                Err(e)
            }
        }
    }

    fn fail(&mut self, e: &ClientError) {
        let message = e.user_message(self.locale);
        self.state.send_modify(|s| {
            s.loading = false;
            s.in_flight = None;
            s.error = Some(message);
        });
    }
}

/// Orders seen by a client
pub type ClientOrders = StatusStore<ClientOrderSource>;
/// Orders received by a vendor's boutique
pub type VendorOrders = StatusStore<VendorOrderSource>;
/// Bons assigned to a courier
pub type CourierBons = StatusStore<CourierBonSource>;
