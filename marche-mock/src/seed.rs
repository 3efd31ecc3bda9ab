//! Demo data
//!
//! Fixed ids so tests and manual runs can address known records.

use crate::store::{Account, Store};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use shared::client::UserInfo;
use shared::models::{
    BonStatus, Boutique, DeliveryBon, Notification, NotificationKind, Order, OrderLine,
    OrderStatus, Product, Review, Role,
};

pub const PASSWORD: &str = "secret1";

pub const CLIENT_ID: &str = "u-client";
pub const CLIENT_EMAIL: &str = "amina@souk.ma";
pub const OTHER_CLIENT_ID: &str = "u-client2";
pub const VENDOR_ID: &str = "u-vendor";
pub const VENDOR_EMAIL: &str = "hassan@souk.ma";
pub const COURIER_ID: &str = "u-courier";
pub const COURIER_EMAIL: &str = "karim@souk.ma";
pub const OTHER_COURIER_ID: &str = "u-courier2";
pub const OTHER_COURIER_EMAIL: &str = "nadia@souk.ma";

fn account(id: &str, name: &str, email: &str, role: Role, boutique_id: Option<&str>) -> Account {
    Account {
        info: UserInfo {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
            boutique_id: boutique_id.map(str::to_string),
        },
        password: PASSWORD.into(),
    }
}

fn product(id: &str, boutique: &str, name: &str, cents: i64, stock: u32) -> Product {
    Product {
        id: id.into(),
        boutique_id: boutique.into(),
        name: name.into(),
        description: None,
        price: Decimal::new(cents, 2),
        stock,
        image_url: None,
        rating: None,
    }
}

fn order(id: &str, client: &str, boutique: &str, status: OrderStatus, lines: Vec<OrderLine>, days_ago: i64) -> Order {
    let created_at = Utc::now() - Duration::days(days_ago);
    Order {
        id: id.into(),
        status,
        total_amount: lines.iter().map(|l| l.subtotal).sum(),
        lines,
        delivery_address: "27 Rue Souika, Rabat".into(),
        created_at,
        updated_at: created_at,
        client_id: Some(client.into()),
        boutique_id: Some(boutique.into()),
    }
}

fn bon(id: &str, order_id: &str, status: BonStatus, courier: Option<&str>) -> DeliveryBon {
    DeliveryBon {
        id: id.into(),
        status,
        order_id: order_id.into(),
        courier_id: courier.map(str::to_string),
        created_at: Utc::now() - Duration::hours(6),
        failure_reason: None,
    }
}

/// Store populated with two boutiques, their customers and couriers.
///
/// Amina (`CLIENT_ID`) has exactly one PENDING, one SHIPPED and one
/// DELIVERED order. Karim (`COURIER_ID`) holds one bon in each of
/// PENDING_PICKUP, IN_TRANSIT and DELIVERED; `bon-3` is an open mission.
pub fn demo() -> Store {
    let mut store = Store::new();

    store.accounts = vec![
        account(CLIENT_ID, "Amina Benali", CLIENT_EMAIL, Role::Client, None),
        account(OTHER_CLIENT_ID, "Salma Idrissi", "salma@souk.ma", Role::Client, None),
        account(VENDOR_ID, "Hassan Tazi", VENDOR_EMAIL, Role::Vendor, Some("b-1")),
        account("u-vendor2", "Omar Fassi", "omar@souk.ma", Role::Vendor, Some("b-2")),
        account(COURIER_ID, "Karim Alaoui", COURIER_EMAIL, Role::Courier, None),
        account(OTHER_COURIER_ID, "Nadia Berrada", OTHER_COURIER_EMAIL, Role::Courier, None),
    ];

    store.boutiques = vec![
        Boutique {
            id: "b-1".into(),
            name: "Dar Argan".into(),
            vendor_id: VENDOR_ID.into(),
            description: Some("Cosmétiques naturels".into()),
            address: "12 Rue des Consuls, Rabat".into(),
        },
        Boutique {
            id: "b-2".into(),
            name: "Poterie de Safi".into(),
            vendor_id: "u-vendor2".into(),
            description: None,
            address: "4 Place Kechla, Safi".into(),
        },
    ];

    store.products = vec![
        product("p-1", "b-1", "Huile d'argan 250ml", 12000, 40),
        product("p-2", "b-1", "Savon noir", 3550, 100),
        product("p-3", "b-1", "Ghassoul", 4500, 0),
        product("p-4", "b-2", "Tajine en terre cuite", 18000, 12),
        product("p-5", "b-2", "Assiette peinte", 9500, 30),
    ];

    let argan = |qty| OrderLine::new("p-1", "Huile d'argan 250ml", qty, Decimal::new(12000, 2));
    let savon = |qty| OrderLine::new("p-2", "Savon noir", qty, Decimal::new(3550, 2));
    store.orders = vec![
        order("o-1", CLIENT_ID, "b-1", OrderStatus::Pending, vec![argan(1)], 0),
        order("o-2", CLIENT_ID, "b-1", OrderStatus::Shipped, vec![savon(2)], 2),
        order("o-3", CLIENT_ID, "b-1", OrderStatus::Delivered, vec![argan(2)], 9),
        order("o-4", OTHER_CLIENT_ID, "b-1", OrderStatus::Ready, vec![savon(1)], 1),
        order(
            "o-5",
            OTHER_CLIENT_ID,
            "b-2",
            OrderStatus::Ready,
            vec![OrderLine::new("p-4", "Tajine en terre cuite", 1, Decimal::new(18000, 2))],
            1,
        ),
    ];

    store.bons = vec![
        bon("bon-0", "o-3", BonStatus::Delivered, Some(COURIER_ID)),
        bon("bon-1", "o-2", BonStatus::InTransit, Some(COURIER_ID)),
        bon("bon-2", "o-4", BonStatus::PendingPickup, Some(COURIER_ID)),
        bon("bon-3", "o-5", BonStatus::PendingPickup, None),
    ];

    store.reviews = vec![Review {
        id: "r-1".into(),
        product_id: "p-1".into(),
        author_id: CLIENT_ID.into(),
        author_name: "Amina Benali".into(),
        rating: 5,
        comment: Some("Très bonne qualité".into()),
        created_at: Utc::now() - Duration::days(8),
    }];
    if let Some(p) = store.products.iter_mut().find(|p| p.id == "p-1") {
        p.rating = Some(5.0);
    }

    store.notifications = vec![(
        CLIENT_ID.into(),
        Notification {
            id: "n-1".into(),
            kind: NotificationKind::DeliveryUpdate,
            title: "Commande expédiée".into(),
            body: "Votre commande o-2 est en route".into(),
            read: false,
            created_at: Utc::now() - Duration::days(1),
            reference_id: Some("o-2".into()),
        },
    )];

    store
}
