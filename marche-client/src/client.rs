//! Client entry point and signed-in session

use crate::credential::Credential;
use crate::http::{ApiClient, HttpClient, NetworkHttpClient, OneshotHttpClient};
use crate::repository::{
    AuthRepository, CartRepository, CatalogRepository, DeliveryRepository, MissionRepository,
    NotificationRepository, OrderRepository, RepoContext, ReviewRepository,
};
use crate::resource::{Resource, track};
use crate::state::{
    ClientOrderSource, ClientOrders, CourierBonSource, CourierBons, MissionBoard,
    VendorOrderSource, VendorOrders,
};
use crate::{ClientConfig, ClientResult};
use futures::Stream;
use shared::Locale;
use std::future::Future;
use std::sync::Arc;

/// Marketplace API client
///
/// Holds the transport and configuration. It never stores a token:
/// protected calls go through a [`Session`] built from a [`Credential`].
///
/// # Example
///
/// ```no_run
/// use marche_client::{ClientConfig, MarcheClient};
///
/// # async fn example() -> Result<(), marche_client::ClientError> {
/// let client = MarcheClient::new(ClientConfig::from_env()?)?;
/// let session = client.login("amina@souk.ma", "secret").await?;
///
/// let mut orders = session.client_orders();
/// orders.load().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarcheClient {
    api: ApiClient,
    config: ClientConfig,
}

impl MarcheClient {
    /// Client over the network transport
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let transport = NetworkHttpClient::new(&config)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Client calling an axum `Router` in process
    pub fn in_process(router: axum::Router, config: ClientConfig) -> Self {
        Self::with_transport(Arc::new(OneshotHttpClient::new(router)), config)
    }

    pub fn with_transport(transport: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            api: ApiClient::new(transport),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn auth(&self) -> AuthRepository {
        AuthRepository::new(RepoContext::new(self.api.clone(), None))
    }

    /// Log in and open a session for the returned credential
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let credential = self.auth().login(email, password).await?;
        Ok(self.session(Arc::new(credential)))
    }

    /// Session for an existing credential
    pub fn session(&self, credential: Arc<Credential>) -> Session {
        Session {
            ctx: RepoContext::new(self.api.clone(), Some(credential)),
            locale: self.config.locale,
        }
    }

    /// Session without a credential; only public endpoints succeed
    pub fn guest(&self) -> Session {
        Session {
            ctx: RepoContext::new(self.api.clone(), None),
            locale: self.config.locale,
        }
    }
}

/// Repositories and state holders sharing one credential
#[derive(Debug, Clone)]
pub struct Session {
    ctx: RepoContext,
    locale: Locale,
}

impl Session {
    pub fn credential(&self) -> Option<&Credential> {
        self.ctx.credential()
    }

    pub fn is_logged_in(&self) -> bool {
        self.ctx.optional_credential().is_some()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    // ========== Repositories ==========

    pub fn auth(&self) -> AuthRepository {
        AuthRepository::new(self.ctx.clone())
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.ctx.clone())
    }

    pub fn deliveries(&self) -> DeliveryRepository {
        DeliveryRepository::new(self.ctx.clone())
    }

    pub fn missions(&self) -> MissionRepository {
        MissionRepository::new(self.ctx.clone())
    }

    pub fn catalog(&self) -> CatalogRepository {
        CatalogRepository::new(self.ctx.clone())
    }

    pub fn cart(&self) -> CartRepository {
        CartRepository::new(self.ctx.clone())
    }

    pub fn notifications(&self) -> NotificationRepository {
        NotificationRepository::new(self.ctx.clone())
    }

    pub fn reviews(&self) -> ReviewRepository {
        ReviewRepository::new(self.ctx.clone())
    }

    // ========== State holders ==========

    pub fn client_orders(&self) -> ClientOrders {
        ClientOrders::new(ClientOrderSource::new(self.orders()), self.locale)
    }

    pub fn vendor_orders(&self) -> VendorOrders {
        VendorOrders::new(VendorOrderSource::new(self.orders()), self.locale)
    }

    pub fn courier_bons(&self) -> CourierBons {
        CourierBons::new(CourierBonSource::new(self.deliveries()), self.locale)
    }

    pub fn mission_board(&self) -> MissionBoard {
        MissionBoard::new(self.missions(), self.locale)
    }

    /// Observe a facade call as `Loading` then one terminal state
    pub fn track<T, F>(&self, call: F) -> impl Stream<Item = Resource<T>>
    where
        F: Future<Output = ClientResult<T>>,
    {
        track(call, self.locale)
    }
}
