//! In-memory marketplace data
//!
//! Every rule the backend enforces lives here: status graphs, ownership,
//! stock and cart constraints. Handlers only extract, authorize by role
//! and delegate.

use crate::error::{ApiError, ApiResult};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use shared::ErrorCode;
use shared::client::{LoginResponse, RegisterRequest, UserInfo};
use shared::models::{
    AddCartItem, BonAction, BonStatus, Boutique, Cart, CartItem, DeliveryBon, Mission,
    Notification, NotificationKind, Order, OrderLine, OrderStatus, Product, ProductQuery, Review,
    ReviewRequest, Role, UpdateCartItem,
};
use shared::Validate;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Flat fee offered to couriers for one delivery
pub fn mission_fee() -> Decimal {
    Decimal::new(2500, 2)
}

fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Registered user with its (plain, mock-only) password
#[derive(Debug, Clone)]
pub struct Account {
    pub info: UserInfo,
    pub password: String,
}

#[derive(Debug, Clone)]
struct Session {
    user_id: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Store {
    pub accounts: Vec<Account>,
    sessions: HashMap<String, Session>,
    pub boutiques: Vec<Boutique>,
    pub products: Vec<Product>,
    /// Cart lines per client id
    pub carts: HashMap<String, Vec<CartItem>>,
    pub orders: Vec<Order>,
    pub bons: Vec<DeliveryBon>,
    /// (courier id, bon id) pairs a courier declined
    refusals: HashSet<(String, String)>,
    /// Notifications with their recipient id
    pub notifications: Vec<(String, Notification)>,
    pub reviews: Vec<Review>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Accounts ==========

    pub fn login(&mut self, email: &str, password: &str, ttl: Duration) -> ApiResult<LoginResponse> {
        let account = self
            .accounts
            .iter()
            .find(|a| a.info.email.eq_ignore_ascii_case(email.trim()))
            .filter(|a| a.password == password)
            .ok_or_else(|| ApiError::new(ErrorCode::InvalidCredentials))?;
        let user = account.info.clone();
        Ok(self.open_session(user, ttl))
    }

    pub fn register(&mut self, req: RegisterRequest, ttl: Duration) -> ApiResult<LoginResponse> {
        req.validate().map_err(|e| ApiError::validation(&e))?;
        let email = req.email.trim().to_lowercase();
        if self.accounts.iter().any(|a| a.info.email == email) {
            return Err(ApiError::with_message(
                ErrorCode::AlreadyExists,
                "Email already registered",
            ));
        }

        let user_id = new_id("u");
        let boutique_id = (req.role == Role::Vendor).then(|| {
            let id = new_id("b");
            self.boutiques.push(Boutique {
                id: id.clone(),
                name: format!("Boutique {}", req.name.trim()),
                vendor_id: user_id.clone(),
                description: None,
                address: String::new(),
            });
            id
        });

        let info = UserInfo {
            id: user_id,
            name: req.name.trim().to_string(),
            email,
            role: req.role,
            boutique_id,
        };
        self.accounts.push(Account {
            info: info.clone(),
            password: req.password,
        });
        tracing::info!(user_id = %info.id, role = %info.role, "Account registered");
        Ok(self.open_session(info, ttl))
    }

    fn open_session(&mut self, user: UserInfo, ttl: Duration) -> LoginResponse {
        let token = Uuid::new_v4().simple().to_string();
        let expires_at = Utc::now() + ttl;
        self.sessions.insert(
            token.clone(),
            Session {
                user_id: user.id.clone(),
                expires_at,
            },
        );
        LoginResponse {
            token,
            expires_at: Some(expires_at),
            user,
        }
    }

    /// Resolve a bearer token to its user
    pub fn authenticate(&self, token: &str) -> ApiResult<UserInfo> {
        let session = self
            .sessions
            .get(token)
            .ok_or_else(|| ApiError::new(ErrorCode::TokenInvalid))?;
        if Utc::now() >= session.expires_at {
            return Err(ApiError::new(ErrorCode::TokenExpired));
        }
        self.accounts
            .iter()
            .find(|a| a.info.id == session.user_id)
            .map(|a| a.info.clone())
            .ok_or_else(|| ApiError::new(ErrorCode::TokenInvalid))
    }

    // ========== Catalog ==========

    pub fn product(&self, id: &str) -> ApiResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::new(ErrorCode::ProductNotFound))
    }

    pub fn search_products(&self, query: &ProductQuery) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect()
    }

    fn boutique_address(&self, boutique_id: Option<&str>) -> String {
        boutique_id
            .and_then(|id| self.boutiques.iter().find(|b| b.id == id))
            .map(|b| b.address.clone())
            .unwrap_or_default()
    }

    fn vendor_of(&self, boutique_id: &str) -> Option<String> {
        self.boutiques
            .iter()
            .find(|b| b.id == boutique_id)
            .map(|b| b.vendor_id.clone())
    }

    // ========== Cart ==========

    pub fn cart(&self, user_id: &str) -> Cart {
        let items = self.carts.get(user_id).cloned().unwrap_or_default();
        let total_amount = items.iter().map(CartItem::subtotal).sum();
        Cart {
            items,
            total_amount,
        }
    }

    pub fn add_to_cart(&mut self, user_id: &str, req: &AddCartItem) -> ApiResult<Cart> {
        req.validate().map_err(|e| ApiError::validation(&e))?;
        let product = self.product(&req.product_id)?.clone();

        let items = self.carts.entry(user_id.to_string()).or_default();
        if let Some(first) = items.first()
            && let Some(other) = self.products.iter().find(|p| p.id == first.product_id)
            && other.boutique_id != product.boutique_id
        {
            return Err(ApiError::with_message(
                ErrorCode::InvalidRequest,
                "Cart already holds products from another boutique",
            ));
        }

        let existing = items.iter().position(|i| i.product_id == product.id);
        let wanted = existing.map_or(0, |idx| items[idx].quantity) + req.quantity;
        if wanted > product.stock {
            return Err(ApiError::with_message(
                ErrorCode::OutOfStock,
                format!("Only {} left for {}", product.stock, product.name),
            ));
        }

        match existing {
            Some(idx) => items[idx].quantity = wanted,
            None => items.push(CartItem {
                product_id: product.id,
                product_name: product.name,
                quantity: req.quantity,
                unit_price: product.price,
            }),
        }
        Ok(self.cart(user_id))
    }

    pub fn update_cart_item(&mut self, user_id: &str, product_id: &str, quantity: u32) -> ApiResult<Cart> {
        UpdateCartItem { quantity }
            .validate()
            .map_err(|e| ApiError::validation(&e))?;
        let stock = self.product(product_id)?.stock;
        let item = self
            .carts
            .get_mut(user_id)
            .and_then(|items| items.iter_mut().find(|i| i.product_id == product_id))
            .ok_or_else(|| ApiError::with_message(ErrorCode::NotFound, "Product is not in the cart"))?;
        if quantity > stock {
            return Err(ApiError::new(ErrorCode::OutOfStock));
        }
        item.quantity = quantity;
        Ok(self.cart(user_id))
    }

    pub fn remove_cart_item(&mut self, user_id: &str, product_id: &str) -> ApiResult<Cart> {
        let items = self.carts.entry(user_id.to_string()).or_default();
        let before = items.len();
        items.retain(|i| i.product_id != product_id);
        if items.len() == before {
            return Err(ApiError::with_message(
                ErrorCode::NotFound,
                "Product is not in the cart",
            ));
        }
        Ok(self.cart(user_id))
    }

    /// Turn the client's cart into a PENDING order and reserve stock
    pub fn checkout(&mut self, user_id: &str, delivery_address: &str) -> ApiResult<Order> {
        let items = self.carts.get(user_id).cloned().unwrap_or_default();
        if items.is_empty() {
            return Err(ApiError::new(ErrorCode::OrderEmptyCart));
        }

        for item in &items {
            let product = self.product(&item.product_id)?;
            if item.quantity > product.stock {
                return Err(ApiError::with_message(
                    ErrorCode::OutOfStock,
                    format!("Only {} left for {}", product.stock, product.name),
                ));
            }
        }

        let mut boutique_id = None;
        for item in &items {
            if let Some(product) = self.products.iter_mut().find(|p| p.id == item.product_id) {
                product.stock -= item.quantity;
                boutique_id = Some(product.boutique_id.clone());
            }
        }

        let lines: Vec<OrderLine> = items
            .iter()
            .map(|i| OrderLine::new(&i.product_id, &i.product_name, i.quantity, i.unit_price))
            .collect();
        let now = Utc::now();
        let order = Order {
            id: new_id("o"),
            status: OrderStatus::Pending,
            total_amount: lines.iter().map(|l| l.subtotal).sum(),
            lines,
            delivery_address: delivery_address.trim().to_string(),
            created_at: now,
            updated_at: now,
            client_id: Some(user_id.to_string()),
            boutique_id,
        };
        self.orders.push(order.clone());
        self.carts.remove(user_id);

        let vendor = order.boutique_id.as_deref().and_then(|b| self.vendor_of(b));
        if let Some(vendor) = vendor {
            self.notify(
                &vendor,
                NotificationKind::OrderUpdate,
                "Nouvelle commande",
                format!("Commande {} à préparer", order.id),
                Some(&order.id),
            );
        }
        tracing::info!(order_id = %order.id, total = %order.total_amount, "Order placed");
        Ok(order)
    }

    // ========== Orders ==========

    fn can_see_order(&self, user: &UserInfo, order: &Order) -> bool {
        match user.role {
            Role::Client => order.client_id.as_deref() == Some(user.id.as_str()),
            Role::Vendor => {
                user.boutique_id.is_some() && order.boutique_id == user.boutique_id
            }
            Role::Courier => self
                .bons
                .iter()
                .any(|b| b.order_id == order.id && b.courier_id.as_deref() == Some(user.id.as_str())),
        }
    }

    pub fn orders_for(&self, user: &UserInfo) -> Vec<Order> {
        self.orders
            .iter()
            .filter(|o| self.can_see_order(user, o))
            .cloned()
            .collect()
    }

    pub fn order_for(&self, user: &UserInfo, id: &str) -> ApiResult<Order> {
        self.orders
            .iter()
            .find(|o| o.id == id && self.can_see_order(user, o))
            .cloned()
            .ok_or_else(|| ApiError::new(ErrorCode::OrderNotFound))
    }

    /// Move an order along its status graph.
    ///
    /// Clients may only cancel their own orders; vendors drive their
    /// boutique's orders up to READY, which publishes a delivery mission.
    pub fn update_order_status(
        &mut self,
        user: &UserInfo,
        id: &str,
        target: OrderStatus,
    ) -> ApiResult<Order> {
        let current = self.order_for(user, id)?;
        match user.role {
            Role::Client if target != OrderStatus::Cancelled => {
                return Err(ApiError::with_message(
                    ErrorCode::PermissionDenied,
                    "Clients can only cancel their orders",
                ));
            }
            Role::Courier => {
                return Err(ApiError::with_message(
                    ErrorCode::PermissionDenied,
                    "Couriers update orders through their delivery bons",
                ));
            }
            _ => {}
        }
        if !current.status.can_transition_to(target) {
            return Err(ApiError::with_message(
                ErrorCode::OrderInvalidTransition,
                format!(
                    "Cannot move order from {:?} to {:?}",
                    current.status, target
                ),
            ));
        }
        if matches!(target, OrderStatus::Shipped | OrderStatus::Delivered)
            && self.has_open_bon(id)
        {
            return Err(ApiError::with_message(
                ErrorCode::OrderInvalidTransition,
                "Order is handled by a courier",
            ));
        }

        let order = self.set_order_status(id, target)?;

        if target == OrderStatus::Cancelled {
            for line in &order.lines {
                if let Some(product) = self.products.iter_mut().find(|p| p.id == line.product_id) {
                    product.stock += line.quantity;
                }
            }
        }
        if target == OrderStatus::Ready {
            self.publish_mission(&order);
        }
        if let Some(client) = order.client_id.clone() {
            self.notify(
                &client,
                NotificationKind::OrderUpdate,
                "Commande mise à jour",
                format!("Commande {} : {:?}", order.id, order.status),
                Some(&order.id),
            );
        }
        tracing::info!(order_id = %order.id, status = ?order.status, "Order status updated");
        Ok(order)
    }

    /// A delivery bon for the order is still offered or on its way
    fn has_open_bon(&self, order_id: &str) -> bool {
        self.bons
            .iter()
            .any(|b| b.order_id == order_id && !b.status.is_terminal())
    }

    fn set_order_status(&mut self, id: &str, status: OrderStatus) -> ApiResult<Order> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ApiError::new(ErrorCode::OrderNotFound))?;
        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    fn publish_mission(&mut self, order: &Order) {
        let bon = DeliveryBon {
            id: new_id("bon"),
            status: BonStatus::PendingPickup,
            order_id: order.id.clone(),
            courier_id: None,
            created_at: Utc::now(),
            failure_reason: None,
        };
        let couriers: Vec<String> = self
            .accounts
            .iter()
            .filter(|a| a.info.role == Role::Courier)
            .map(|a| a.info.id.clone())
            .collect();
        for courier in couriers {
            self.notify(
                &courier,
                NotificationKind::NewMission,
                "Nouvelle mission",
                format!("Livraison de la commande {}", order.id),
                Some(&bon.id),
            );
        }
        self.bons.push(bon);
    }

    // ========== Delivery bons ==========

    pub fn bons_for(&self, courier_id: &str) -> Vec<DeliveryBon> {
        self.bons
            .iter()
            .filter(|b| b.courier_id.as_deref() == Some(courier_id))
            .cloned()
            .collect()
    }

    /// Apply a courier action to one of the courier's own bons
    pub fn advance_bon(&mut self, courier_id: &str, id: &str, action: &BonAction) -> ApiResult<DeliveryBon> {
        action.validate().map_err(|e| ApiError::validation(&e))?;
        let bon = self
            .bons
            .iter_mut()
            .find(|b| b.id == id && b.courier_id.as_deref() == Some(courier_id))
            .ok_or_else(|| ApiError::new(ErrorCode::BonNotFound))?;

        let target = action.target();
        if !bon.status.can_transition_to(target) {
            return Err(ApiError::with_message(
                ErrorCode::BonInvalidTransition,
                format!("Cannot move bon from {:?} to {:?}", bon.status, target),
            ));
        }
        bon.status = target;
        if let BonAction::Fail { reason } = action {
            bon.failure_reason = Some(reason.trim().to_string());
        }
        let bon = bon.clone();

        let order_status = match target {
            BonStatus::InTransit => Some(OrderStatus::Shipped),
            BonStatus::Delivered => Some(OrderStatus::Delivered),
            _ => None,
        };
        // The order only follows the bon forward
        let order = self.orders.iter().find(|o| o.id == bon.order_id).cloned();
        let order = match (order, order_status) {
            (Some(o), Some(status)) if o.status.can_transition_to(status) => {
                Some(self.set_order_status(&o.id, status)?)
            }
            (order, _) => order,
        };
        if let Some(client) = order.and_then(|o| o.client_id) {
            self.notify(
                &client,
                NotificationKind::DeliveryUpdate,
                "Suivi de livraison",
                format!("Commande {} : {:?}", bon.order_id, bon.status),
                Some(&bon.order_id),
            );
        }
        tracing::info!(bon_id = %bon.id, status = ?bon.status, "Bon advanced");
        Ok(bon)
    }

    // ========== Missions ==========

    fn is_offered_to(&self, courier_id: &str, bon: &DeliveryBon) -> bool {
        bon.courier_id.is_none()
            && bon.status == BonStatus::PendingPickup
            && !self
                .refusals
                .contains(&(courier_id.to_string(), bon.id.clone()))
    }

    pub fn missions_for(&self, courier_id: &str) -> Vec<Mission> {
        self.bons
            .iter()
            .filter(|b| self.is_offered_to(courier_id, b))
            .map(|bon| {
                let order = self.orders.iter().find(|o| o.id == bon.order_id);
                Mission {
                    bon_id: bon.id.clone(),
                    order_id: bon.order_id.clone(),
                    pickup_address: self
                        .boutique_address(order.and_then(|o| o.boutique_id.as_deref())),
                    delivery_address: order
                        .map(|o| o.delivery_address.clone())
                        .unwrap_or_default(),
                    fee: mission_fee(),
                    offered_at: bon.created_at,
                }
            })
            .collect()
    }

    pub fn accept_mission(&mut self, courier_id: &str, bon_id: &str) -> ApiResult<DeliveryBon> {
        let refused = self
            .refusals
            .contains(&(courier_id.to_string(), bon_id.to_string()));
        let bon = self
            .bons
            .iter_mut()
            .find(|b| b.id == bon_id && !refused)
            .ok_or_else(|| ApiError::new(ErrorCode::MissionNotFound))?;
        if bon.courier_id.is_some() || bon.status != BonStatus::PendingPickup {
            return Err(ApiError::new(ErrorCode::MissionTaken));
        }
        bon.courier_id = Some(courier_id.to_string());
        tracing::info!(bon_id, courier_id, "Mission accepted");
        Ok(bon.clone())
    }

    pub fn refuse_mission(&mut self, courier_id: &str, bon_id: &str) -> ApiResult<()> {
        let offered = self
            .bons
            .iter()
            .any(|b| b.id == bon_id && self.is_offered_to(courier_id, b));
        if !offered {
            return Err(ApiError::new(ErrorCode::MissionNotFound));
        }
        self.refusals
            .insert((courier_id.to_string(), bon_id.to_string()));
        Ok(())
    }

    // ========== Notifications ==========

    pub fn notify(
        &mut self,
        user_id: &str,
        kind: NotificationKind,
        title: &str,
        body: String,
        reference_id: Option<&str>,
    ) {
        self.notifications.push((
            user_id.to_string(),
            Notification {
                id: new_id("n"),
                kind,
                title: title.to_string(),
                body,
                read: false,
                created_at: Utc::now(),
                reference_id: reference_id.map(str::to_string),
            },
        ));
    }

    /// Newest first
    pub fn notifications_for(&self, user_id: &str) -> Vec<Notification> {
        let mut list: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, n)| n.clone())
            .collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        list
    }

    pub fn mark_read(&mut self, user_id: &str, id: &str) -> ApiResult<Notification> {
        let (_, notification) = self
            .notifications
            .iter_mut()
            .find(|(owner, n)| owner == user_id && n.id == id)
            .ok_or_else(|| ApiError::with_message(ErrorCode::NotFound, "Notification not found"))?;
        notification.read = true;
        Ok(notification.clone())
    }

    // ========== Reviews ==========

    pub fn reviews_for(&self, product_id: &str) -> ApiResult<Vec<Review>> {
        self.product(product_id)?;
        Ok(self
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    pub fn post_review(&mut self, user: &UserInfo, product_id: &str, req: ReviewRequest) -> ApiResult<Review> {
        req.validate().map_err(|e| ApiError::validation(&e))?;
        self.product(product_id)?;
        if self
            .reviews
            .iter()
            .any(|r| r.product_id == product_id && r.author_id == user.id)
        {
            return Err(ApiError::with_message(
                ErrorCode::AlreadyExists,
                "Product already reviewed",
            ));
        }

        let review = Review {
            id: new_id("r"),
            product_id: product_id.to_string(),
            author_id: user.id.clone(),
            author_name: user.name.clone(),
            rating: req.rating,
            comment: req.comment.filter(|c| !c.trim().is_empty()),
            created_at: Utc::now(),
        };
        self.reviews.push(review.clone());
        self.refresh_rating(product_id);

        let vendor = self
            .products
            .iter()
            .find(|p| p.id == product_id)
            .and_then(|p| self.vendor_of(&p.boutique_id));
        if let Some(vendor) = vendor {
            self.notify(
                &vendor,
                NotificationKind::Review,
                "Nouvel avis",
                format!("{} a noté un produit {}/5", review.author_name, review.rating),
                Some(product_id),
            );
        }
        Ok(review)
    }

    fn refresh_rating(&mut self, product_id: &str) {
        let ratings: Vec<f32> = self
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .map(|r| f32::from(r.rating))
            .collect();
        if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
            product.rating =
                (!ratings.is_empty()).then(|| ratings.iter().sum::<f32>() / ratings.len() as f32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn user(store: &Store, id: &str) -> UserInfo {
        store
            .accounts
            .iter()
            .find(|a| a.info.id == id)
            .map(|a| a.info.clone())
            .unwrap()
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let mut store = seed::demo();
        let err = store
            .login(seed::CLIENT_EMAIL, "wrong", Duration::hours(1))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCredentials);

        let resp = store
            .login(seed::CLIENT_EMAIL, seed::PASSWORD, Duration::hours(1))
            .unwrap();
        assert_eq!(store.authenticate(&resp.token).unwrap().id, seed::CLIENT_ID);
    }

    #[test]
    fn test_expired_session() {
        let mut store = seed::demo();
        let resp = store
            .login(seed::COURIER_EMAIL, seed::PASSWORD, Duration::seconds(-1))
            .unwrap();
        let err = store.authenticate(&resp.token).unwrap_err();
        assert_eq!(err.code, ErrorCode::TokenExpired);
    }

    #[test]
    fn test_client_can_only_cancel() {
        let mut store = seed::demo();
        let client = user(&store, seed::CLIENT_ID);

        let err = store
            .update_order_status(&client, "o-1", OrderStatus::Processing)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PermissionDenied);

        let order = store
            .update_order_status(&client, "o-1", OrderStatus::Cancelled)
            .unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
    }

    #[test]
    fn test_invalid_order_transition() {
        let mut store = seed::demo();
        let vendor = user(&store, seed::VENDOR_ID);
        let err = store
            .update_order_status(&vendor, "o-3", OrderStatus::Pending)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidTransition);
    }

    #[test]
    fn test_ready_order_publishes_mission() {
        let mut store = seed::demo();
        let vendor = user(&store, seed::VENDOR_ID);
        let before = store.missions_for(seed::COURIER_ID).len();

        store
            .update_order_status(&vendor, "o-1", OrderStatus::Processing)
            .unwrap();
        store
            .update_order_status(&vendor, "o-1", OrderStatus::Ready)
            .unwrap();

        let missions = store.missions_for(seed::COURIER_ID);
        assert_eq!(missions.len(), before + 1);
        assert!(missions.iter().any(|m| m.order_id == "o-1"));
    }

    #[test]
    fn test_bon_progression_updates_order() {
        let mut store = seed::demo();
        let bon = store
            .advance_bon(seed::COURIER_ID, "bon-1", &BonAction::Deliver)
            .unwrap();
        assert_eq!(bon.status, BonStatus::Delivered);
        let order = store.orders.iter().find(|o| o.id == "o-2").unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_vendor_cannot_ship_order_with_open_bon() {
        let mut store = seed::demo();
        let vendor = user(&store, seed::VENDOR_ID);
        store
            .update_order_status(&vendor, "o-1", OrderStatus::Processing)
            .unwrap();
        store
            .update_order_status(&vendor, "o-1", OrderStatus::Ready)
            .unwrap();

        let err = store
            .update_order_status(&vendor, "o-1", OrderStatus::Shipped)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidTransition);

        let err = store
            .update_order_status(&vendor, "o-2", OrderStatus::Delivered)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderInvalidTransition);

        let mission = store
            .missions_for(seed::COURIER_ID)
            .into_iter()
            .find(|m| m.order_id == "o-1")
            .unwrap();
        store.accept_mission(seed::COURIER_ID, &mission.bon_id).unwrap();
        store
            .advance_bon(seed::COURIER_ID, &mission.bon_id, &BonAction::Pickup)
            .unwrap();
        let order = store.orders.iter().find(|o| o.id == "o-1").unwrap();
        assert_eq!(order.status, OrderStatus::Shipped);
    }

    #[test]
    fn test_bon_never_moves_order_backwards() {
        let mut store = seed::demo();
        if let Some(order) = store.orders.iter_mut().find(|o| o.id == "o-4") {
            order.status = OrderStatus::Returned;
        }

        let bon = store
            .advance_bon(seed::COURIER_ID, "bon-2", &BonAction::Pickup)
            .unwrap();
        assert_eq!(bon.status, BonStatus::InTransit);
        let order = store.orders.iter().find(|o| o.id == "o-4").unwrap();
        assert_eq!(order.status, OrderStatus::Returned);
    }

    #[test]
    fn test_bon_of_other_courier_is_not_found() {
        let mut store = seed::demo();
        let err = store
            .advance_bon(seed::OTHER_COURIER_ID, "bon-1", &BonAction::Deliver)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BonNotFound);
    }

    #[test]
    fn test_mission_taken_once() {
        let mut store = seed::demo();
        store.accept_mission(seed::COURIER_ID, "bon-3").unwrap();
        let err = store
            .accept_mission(seed::OTHER_COURIER_ID, "bon-3")
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissionTaken);
    }

    #[test]
    fn test_refused_mission_hidden() {
        let mut store = seed::demo();
        store.refuse_mission(seed::COURIER_ID, "bon-3").unwrap();
        assert!(store.missions_for(seed::COURIER_ID).is_empty());
        assert_eq!(store.missions_for(seed::OTHER_COURIER_ID).len(), 1);
    }

    #[test]
    fn test_checkout_reserves_stock() {
        let mut store = seed::demo();
        let stock = store.product("p-2").unwrap().stock;
        store
            .add_to_cart(
                seed::CLIENT_ID,
                &AddCartItem {
                    product_id: "p-2".into(),
                    quantity: 3,
                },
            )
            .unwrap();
        let order = store.checkout(seed::CLIENT_ID, "5 Avenue Hassan II").unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 3);
        assert_eq!(store.product("p-2").unwrap().stock, stock - 3);
        assert!(store.cart(seed::CLIENT_ID).is_empty());
    }

    #[test]
    fn test_cart_rejects_mixed_boutiques() {
        let mut store = seed::demo();
        let add = |product: &str| AddCartItem {
            product_id: product.into(),
            quantity: 1,
        };
        store.add_to_cart(seed::CLIENT_ID, &add("p-1")).unwrap();
        let err = store.add_to_cart(seed::CLIENT_ID, &add("p-4")).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }

    #[test]
    fn test_out_of_stock() {
        let mut store = seed::demo();
        let err = store
            .add_to_cart(
                seed::CLIENT_ID,
                &AddCartItem {
                    product_id: "p-3".into(),
                    quantity: 1,
                },
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OutOfStock);
    }

    #[test]
    fn test_review_updates_rating() {
        let mut store = seed::demo();
        let client = user(&store, seed::OTHER_CLIENT_ID);
        store
            .post_review(
                &client,
                "p-1",
                ReviewRequest {
                    rating: 3,
                    comment: None,
                },
            )
            .unwrap();
        assert_eq!(store.product("p-1").unwrap().rating, Some(4.0));
    }
}
