// marche-client/tests/sync_loop.rs
// State holders against the in-process mock backend

use marche_client::{CancelOrder, ClientConfig, ClientError, MarcheClient, Session};
use marche_mock::seed;
use shared::Locale;
use shared::models::{BonAction, BonStatus, OrderStatus};

fn client() -> MarcheClient {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    MarcheClient::in_process(
        marche_mock::demo_router(),
        ClientConfig::default().with_locale(Locale::En),
    )
}

async fn sign_in(client: &MarcheClient, email: &str) -> Session {
    client.login(email, seed::PASSWORD).await.unwrap()
}

#[tokio::test]
async fn test_client_filter_returns_only_matching_orders() {
    let client = client();
    let session = sign_in(&client, seed::CLIENT_EMAIL).await;
    let mut orders = session.client_orders();
    orders.load().await.unwrap();

    assert_eq!(orders.snapshot().len(), 3);
    let pending = orders.filter(Some(OrderStatus::Pending));
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, "o-1");
    assert_eq!(orders.filter(None).len(), 3);
    assert!(orders.filter(Some(OrderStatus::Cancelled)).is_empty());
}

#[tokio::test]
async fn test_deliver_shows_delivered_after_reload() {
    let client = client();
    let session = sign_in(&client, seed::COURIER_EMAIL).await;
    let mut bons = session.courier_bons();
    bons.load().await.unwrap();

    bons.apply_transition("bon-1", BonAction::Deliver)
        .await
        .unwrap();

    let bon = bons
        .snapshot()
        .into_iter()
        .find(|b| b.id == "bon-1")
        .unwrap();
    assert_eq!(bon.status, BonStatus::Delivered);
    assert!(!bons.is_stale());
    assert!(bons.error().is_none());
    assert_eq!(bons.filter(Some(BonStatus::InTransit)).len(), 0);
}

#[tokio::test]
async fn test_unknown_bon_leaves_snapshot_untouched() {
    let client = client();
    let session = sign_in(&client, seed::COURIER_EMAIL).await;
    let mut bons = session.courier_bons();
    bons.load().await.unwrap();
    let before = bons.snapshot();

    let err = bons
        .apply_transition("bon-404", BonAction::Deliver)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotFound(_)));
    assert_eq!(bons.snapshot(), before);
    assert_eq!(bons.error().as_deref(), Some("Delivery bon not found"));
}

#[tokio::test]
async fn test_rejected_transition_is_not_applied() {
    let client = client();
    let session = sign_in(&client, seed::COURIER_EMAIL).await;
    let mut bons = session.courier_bons();
    bons.load().await.unwrap();
    let before = bons.snapshot();

    let err = bons
        .apply_transition("bon-0", BonAction::Pickup)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Conflict(_)));
    assert_eq!(bons.snapshot(), before);
    assert!(bons.error().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_fail_without_reason_is_rejected_locally() {
    let client = client();
    let session = sign_in(&client, seed::COURIER_EMAIL).await;
    let mut bons = session.courier_bons();
    bons.load().await.unwrap();

    let err = bons
        .apply_transition(
            "bon-2",
            BonAction::Fail {
                reason: String::new(),
            },
        )
        .await
        .unwrap_err();

    let fields = err.field_errors().unwrap();
    assert!(fields.get("reason").is_some());
    let bon = bons.snapshot().into_iter().find(|b| b.id == "bon-2").unwrap();
    assert_eq!(bon.status, BonStatus::PendingPickup);
}

#[tokio::test]
async fn test_failed_bon_keeps_reason() {
    let client = client();
    let session = sign_in(&client, seed::COURIER_EMAIL).await;
    let mut bons = session.courier_bons();
    bons.load().await.unwrap();

    bons.apply_transition(
        "bon-2",
        BonAction::Fail {
            reason: "Boutique fermée".into(),
        },
    )
    .await
    .unwrap();

    let bon = bons.snapshot().into_iter().find(|b| b.id == "bon-2").unwrap();
    assert_eq!(bon.status, BonStatus::Failed);
    assert_eq!(bon.failure_reason.as_deref(), Some("Boutique fermée"));
}

#[tokio::test]
async fn test_client_cancel() {
    let client = client();
    let session = sign_in(&client, seed::CLIENT_EMAIL).await;
    let mut orders = session.client_orders();
    orders.load().await.unwrap();

    orders.apply_transition("o-1", CancelOrder).await.unwrap();
    assert_eq!(orders.filter(Some(OrderStatus::Cancelled)).len(), 1);
    assert!(orders.filter(Some(OrderStatus::Pending)).is_empty());

    let err = orders.apply_transition("o-2", CancelOrder).await.unwrap_err();
    assert!(matches!(err, ClientError::Conflict(_)));
    assert_eq!(orders.filter(Some(OrderStatus::Shipped)).len(), 1);
}

#[tokio::test]
async fn test_vendor_ready_publishes_mission() {
    let client = client();
    let vendor = sign_in(&client, seed::VENDOR_EMAIL).await;
    let mut orders = vendor.vendor_orders();
    orders.load().await.unwrap();
    assert_eq!(orders.snapshot().len(), 4);

    orders
        .apply_transition("o-1", OrderStatus::Processing)
        .await
        .unwrap();
    orders.apply_transition("o-1", OrderStatus::Ready).await.unwrap();
    assert_eq!(orders.counts().get(&OrderStatus::Ready), Some(&2));

    let courier = sign_in(&client, seed::OTHER_COURIER_EMAIL).await;
    let mut board = courier.mission_board();
    board.load().await.unwrap();
    assert!(board.missions().iter().any(|m| m.order_id == "o-1"));
}

#[tokio::test]
async fn test_vendor_cannot_target_pending() {
    let client = client();
    let vendor = sign_in(&client, seed::VENDOR_EMAIL).await;
    let mut orders = vendor.vendor_orders();
    orders.load().await.unwrap();

    let err = orders
        .apply_transition("o-3", OrderStatus::Pending)
        .await
        .unwrap_err();
    assert!(err.field_errors().is_some());
}

#[tokio::test]
async fn test_mission_accept_moves_bon_to_courier() {
    let client = client();
    let session = sign_in(&client, seed::OTHER_COURIER_EMAIL).await;
    let mut board = session.mission_board();
    board.load().await.unwrap();
    assert_eq!(board.missions().len(), 1);

    let bon = board.accept("bon-3").await.unwrap();
    assert_eq!(bon.status, BonStatus::PendingPickup);
    assert!(board.missions().is_empty());

    let mut bons = session.courier_bons();
    bons.load().await.unwrap();
    assert_eq!(bons.snapshot().len(), 1);

    let other = sign_in(&client, seed::COURIER_EMAIL).await;
    let err = other.mission_board().accept("bon-3").await.unwrap_err();
    assert!(matches!(err, ClientError::Conflict(_)));
}

#[tokio::test]
async fn test_mission_refuse_hides_offer() {
    let client = client();
    let session = sign_in(&client, seed::COURIER_EMAIL).await;
    let mut board = session.mission_board();
    board.load().await.unwrap();

    board.refuse("bon-3").await.unwrap();
    assert!(board.missions().is_empty());
    assert!(board.error().is_none());
}

#[tokio::test]
async fn test_guest_cannot_load_orders() {
    let client = client();
    let mut orders = client.guest().client_orders();

    let err = orders.load().await.unwrap_err();
    assert!(matches!(err, ClientError::NotLoggedIn));
    assert!(orders.snapshot().is_empty());
    assert!(orders.error().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn test_subscriber_sees_reload() {
    let client = client();
    let session = sign_in(&client, seed::CLIENT_EMAIL).await;
    let mut orders = session.client_orders();
    let mut rx = orders.subscribe();

    orders.load().await.unwrap();
    assert!(rx.has_changed().unwrap());
    let state = rx.borrow_and_update().clone();
    assert_eq!(state.items.len(), 3);
    assert!(!state.loading);
    assert!(state.loaded_at.is_some());
}
