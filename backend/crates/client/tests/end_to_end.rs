//! Client against an in-process server on an ephemeral port

use std::sync::Arc;
use std::time::Duration;

use api::app::build_router;
use auth::{AuthConfig, MemoryAccountRepository};
use client::{ApiClient, DuplicateWatcher, MemoryTokenStore, Registration, Session};
use customer::presentation::dto::SearchParams;
use customer::{CustomerConfig, MemoryCustomerRepository};
use kernel::id::CustomerId;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let router = build_router(
        MemoryAccountRepository::new(),
        MemoryCustomerRepository::new(),
        Arc::new(AuthConfig::new(b"e2e-secret".to_vec()).with_admin_key("K1")),
        Arc::new(CustomerConfig::default()),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

fn registration(admin_key: &str) -> Registration {
    Registration {
        user_name: "admin".into(),
        password: "secret1".into(),
        admin_key: admin_key.into(),
        full_name: "grace hopper".into(),
    }
}

async fn logged_in(api: &ApiClient) -> Session<MemoryTokenStore> {
    api.register(&registration("K1")).await.unwrap();
    let token = api.login("admin", "secret1").await.unwrap();

    let mut session = Session::init(MemoryTokenStore::new()).unwrap();
    session.login(token).unwrap();
    session
}

#[tokio::test]
async fn test_auth_errors_surface_as_api_errors() {
    let api = ApiClient::new(spawn_server().await);

    let err = api.register(&registration("K2")).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "API error (400): Invalid admin key.");

    api.register(&registration("K1")).await.unwrap();
    let err = api.login("admin", "wrong-password").await.unwrap_err();
    assert_eq!(err.to_string(), "API error (400): Invalid credentials.");
}

#[tokio::test]
async fn test_customer_round_trip() {
    let api = ApiClient::new(spawn_server().await);

    let anonymous = Session::init(MemoryTokenStore::new()).unwrap();
    assert!(api.customers(&anonymous).is_err());

    let session = logged_in(&api).await;
    assert_eq!(session.claims().unwrap().full_name, "Grace Hopper");
    let customers = api.customers(&session).unwrap();

    let john = customers.create("John", "Doe").await.unwrap();
    assert_eq!(john.full_name, "John Doe");
    assert_eq!(john.last_modified_by, session.claims().unwrap().user_id);

    let err = customers.create("john", " doe").await.unwrap_err();
    assert!(err.is_conflict());

    let err = customers
        .update(CustomerId::from_uuid(Default::default()), "Jane", "Doe")
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let renamed = customers.update(john.id, "Johnny", "Doe").await.unwrap();
    assert_eq!(renamed.full_name, "Johnny Doe");
    assert_eq!(renamed.created_at, john.created_at);

    let found = customers
        .search(&SearchParams {
            full_name: Some("ohnny".into()),
            limit: None,
        })
        .await
        .unwrap();
    assert_eq!(found.len(), 1);

    let err = customers.search(&SearchParams::default()).await.unwrap_err();
    assert_eq!(err.to_string(), "API error (400): Please provide query");

    assert_eq!(customers.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_watcher_against_server() {
    let api = ApiClient::new(spawn_server().await);
    let session = logged_in(&api).await;
    let customers = api.customers(&session).unwrap();

    for (first, last) in [("John", "Doe"), ("Jon", "Dow"), ("Mark", "Doe")] {
        customers.create(first, last).await.unwrap();
    }

    let candidates = customers.fetch_candidates("j", "d").await.unwrap();
    assert_eq!(candidates.len(), 2);

    let mut watcher = DuplicateWatcher::new(customers).with_quiet_period(Duration::from_millis(20));
    let mut rx = watcher.subscribe();

    watcher.input_changed("Jonh", "Doe");
    rx.changed().await.unwrap();
    let matches: Vec<String> = rx
        .borrow_and_update()
        .iter()
        .map(|c| format!("{} {}", c.first_name, c.last_name))
        .collect();
    assert_eq!(matches, vec!["John Doe"]);
}
