//! Tests for the pinning client

use super::*;
use crate::aggregator::PinListing;
use crate::config::PinataConfig;
use crate::error::Error;
use crate::pagination::PageRequest;
use crate::types::{PinMetadata, UploadFile};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> PinataConfig {
    PinataConfig {
        api_url: server.uri(),
        gateway_url: server.uri(),
        api_key: Some("key".to_string()),
        secret_key: Some("secret".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_new_requires_credentials() {
    let err = PinataClient::new(&PinataConfig::default()).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_list_pins_sends_paging_and_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .and(query_param("status", "pinned"))
        .and(query_param("pageLimit", "10"))
        .and(query_param("pageOffset", "20"))
        .and(header("pinata_api_key", "key"))
        .and(header("pinata_secret_api_key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 21,
            "rows": [{"ipfs_pin_hash": "QmLast", "mime_type": "image/jpeg"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PinataClient::new(&config_for(&mock_server)).unwrap();
    let page = client
        .list_pins(PageRequest {
            offset: 20,
            limit: 10,
        })
        .await
        .unwrap();

    assert_eq!(page.count, Some(21));
    assert_eq!(page.rows.len(), 1);
    assert_eq!(page.rows[0].ipfs_pin_hash, "QmLast");
}

#[tokio::test]
async fn test_list_page_propagates_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&mock_server)
        .await;

    let client = PinataClient::new(&config_for(&mock_server)).unwrap();
    let err = client
        .list_page(PageRequest {
            offset: 0,
            limit: 10,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
}

#[tokio::test]
async fn test_list_page_missing_rows_is_empty_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 0})))
        .mount(&mock_server)
        .await;

    let client = PinataClient::new(&config_for(&mock_server)).unwrap();
    let rows = client
        .list_page(PageRequest {
            offset: 0,
            limit: 10,
        })
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_pin_file_multipart_with_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pinning/pinFileToIPFS"))
        .and(header("pinata_api_key", "key"))
        .and(body_string_contains("filename=\"cat.png\""))
        .and(body_string_contains("name=\"pinataMetadata\""))
        .and(body_string_contains("\"category\":\"art\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "IpfsHash": "QmCat",
            "PinSize": 4,
            "Timestamp": "2024-03-01T10:00:00.000Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PinataClient::new(&config_for(&mock_server)).unwrap();
    let file = UploadFile::new("cat.png", "image/png", b"meow".to_vec());
    let response = client
        .pin_file(&file, Some(&PinMetadata::with_category("art")))
        .await
        .unwrap();

    assert_eq!(response.ipfs_hash, "QmCat");
    assert_eq!(response.pin_size, Some(4));
}

#[tokio::test]
async fn test_fetch_content_skips_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ipfs/QmDoc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"name": "Pinnie NFT", "description": "A Pinnie"})),
        )
        .mount(&mock_server)
        .await;

    let client = PinataClient::new(&config_for(&mock_server)).unwrap();
    let content = client.fetch_content("QmDoc").await.unwrap();
    assert_eq!(content["name"], "Pinnie NFT");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("pinata_api_key"));
}

#[tokio::test]
async fn test_gateway_client_needs_no_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ipfs/bafyMeta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Open"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = PinataConfig {
        gateway_url: mock_server.uri(),
        ..Default::default()
    };
    assert!(config.validate().is_err());

    let client = GatewayClient::new(&config).unwrap();
    let content = client.fetch_content("bafyMeta").await.unwrap();
    assert_eq!(content["name"], "Open");
}

#[tokio::test]
async fn test_bearer_config_sends_jwt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/pinList"))
        .and(header("Authorization", "Bearer scoped-jwt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rows": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = PinataConfig {
        api_url: mock_server.uri(),
        jwt: Some("scoped-jwt".to_string()),
        ..Default::default()
    };
    let client = PinataClient::new(&config).unwrap();
    client
        .list_page(PageRequest {
            offset: 0,
            limit: 10,
        })
        .await
        .unwrap();
}
