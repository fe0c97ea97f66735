use std::net::SocketAddr;
use std::sync::Arc;

use axum::Server;
use tenant_directory::api::graphql::create_schema;
use tenant_directory::client::{ClientConfig, ClientError, ClientProvider, TENANTS_QUERY};
use tenant_directory::storage::MemoryTenantStore;
use tenant_directory::{bootstrap, router};

async fn spawn_service(store: Arc<MemoryTenantStore>) -> SocketAddr {
    let app = router(create_schema(store));
    let server = Server::bind(&"127.0.0.1:0".parse().unwrap()).serve(app.into_make_service());
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

fn provider_for(addr: SocketAddr) -> ClientProvider {
    ClientProvider::new(ClientConfig::new(format!("http://{addr}/graphql"))).unwrap()
}

#[tokio::test]
async fn client_reads_seeded_tenants_over_http() {
    let store = Arc::new(MemoryTenantStore::new());
    bootstrap(store.as_ref()).await.unwrap();
    let addr = spawn_service(store).await;

    let client = provider_for(addr).client();
    let tenants = client.tenants().await.unwrap();

    assert_eq!(tenants.len(), 11);
    assert_eq!(tenants[0].id, "1");
    assert_eq!(tenants[0].name, "John Doe");
    assert_eq!(tenants[1].phone.as_deref(), Some("(234) 567-8901"));
}

#[tokio::test]
async fn listener_survives_storage_outage() {
    let store = Arc::new(MemoryTenantStore::new());
    bootstrap(store.as_ref()).await.unwrap();
    let addr = spawn_service(store.clone()).await;
    let client = provider_for(addr).client();

    store.set_available(false).await;
    let err = client.tenants().await.unwrap_err();
    match err {
        ClientError::GraphQL(messages) => {
            assert!(messages[0].contains("storage unavailable"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.cache().is_empty().await);

    store.set_available(true).await;
    let tenants = client.tenants().await.unwrap();
    assert_eq!(tenants.len(), 11);
}

#[tokio::test]
async fn cache_first_until_refetch() {
    let store = Arc::new(MemoryTenantStore::new());
    bootstrap(store.as_ref()).await.unwrap();
    let addr = spawn_service(store.clone()).await;
    let client = provider_for(addr).client();

    assert_eq!(client.tenants().await.unwrap().len(), 11);

    // a restart re-runs the seed step
    bootstrap(store.as_ref()).await.unwrap();

    assert_eq!(client.tenants().await.unwrap().len(), 11);
    assert_eq!(client.cache().len().await, 1);

    let fresh: tenant_directory::client::TenantsData =
        client.refetch(TENANTS_QUERY, None).await.unwrap();
    assert_eq!(fresh.tenants.len(), 22);
    assert_eq!(client.tenants().await.unwrap().len(), 22);
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = provider_for(addr).client();

    assert!(matches!(
        client.tenants().await,
        Err(ClientError::Transport(_))
    ));
}

#[tokio::test]
async fn failed_read_keeps_tenants_key_in_response() {
    let store = Arc::new(MemoryTenantStore::new());
    bootstrap(store.as_ref()).await.unwrap();
    let addr = spawn_service(store.clone()).await;
    store.set_available(false).await;

    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let body: serde_json::Value = http
        .post(format!("http://{addr}/graphql"))
        .json(&serde_json::json!({ "query": TENANTS_QUERY }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["data"], serde_json::json!({ "tenants": null }));
    assert_eq!(body["errors"][0]["path"], serde_json::json!(["tenants"]));
}
