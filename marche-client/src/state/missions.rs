//! Mission board for couriers
//!
//! Missions carry no status of their own, so the board only keeps the
//! current listing. Accepting or refusing reloads it from the server.

use crate::repository::MissionRepository;
use crate::{ClientError, ClientResult};
use chrono::{DateTime, Utc};
use shared::Locale;
use shared::models::{DeliveryBon, Mission};
use tokio::sync::watch;

#[derive(Debug, Clone, Default)]
pub struct MissionState {
    pub missions: Vec<Mission>,
    pub loading: bool,
    /// Bon id of the mission being accepted or refused
    pub in_flight: Option<String>,
    pub error: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct MissionBoard {
    missions: MissionRepository,
    locale: Locale,
    state: watch::Sender<MissionState>,
}

impl MissionBoard {
    pub fn new(missions: MissionRepository, locale: Locale) -> Self {
        let (state, _) = watch::channel(MissionState::default());
        Self {
            missions,
            locale,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<MissionState> {
        self.state.subscribe()
    }

    pub fn missions(&self) -> Vec<Mission> {
        self.state.borrow().missions.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Replace the listing; keeps the previous one on failure
    pub async fn load(&mut self) -> ClientResult<()> {
        self.state.send_modify(|s| s.loading = true);
        match self.missions.list().await {
            Ok(missions) => {
                tracing::info!(count = missions.len(), "Missions reloaded");
                self.state.send_modify(|s| {
                    s.missions = missions;
                    s.loading = false;
                    s.error = None;
                    s.loaded_at = Some(Utc::now());
                });
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Mission reload failed");
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Accept a mission and return the bon now assigned to the courier.
    ///
    /// A successful accept reloads the listing. A failed reload is
    /// published as the board error and does not undo the accepted bon.
    pub async fn accept(&mut self, bon_id: &str) -> ClientResult<DeliveryBon> {
        self.state
            .send_modify(|s| s.in_flight = Some(bon_id.to_string()));
        match self.missions.accept(bon_id).await {
            Ok(bon) => {
                tracing::info!(bon = %bon.id, "Mission accepted");
                self.state.send_modify(|s| s.in_flight = None);
                if let Err(e) = self.load().await {
                    tracing::debug!(bon = %bon.id, error = %e, "Mission listing stale after accept");
                }
                Ok(bon)
            }
            Err(e) => {
                tracing::warn!(bon_id, error = %e, "Mission accept rejected");
                self.fail(&e);
                Err(e)
            }
        }
    }

    /// Refuse a mission, then reload the listing
    pub async fn refuse(&mut self, bon_id: &str) -> ClientResult<()> {
        self.state
            .send_modify(|s| s.in_flight = Some(bon_id.to_string()));
        match self.missions.refuse(bon_id).await {
            Ok(()) => {
                tracing::info!(bon_id, "Mission refused");
                self.state.send_modify(|s| s.in_flight = None);
                self.load().await
            }
            Err(e) => {
                tracing::warn!(bon_id, error = %e, "Mission refuse rejected");
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
