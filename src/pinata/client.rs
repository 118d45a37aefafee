//! Pinata API client

use crate::aggregator::PinListing;
use crate::config::PinataConfig;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::PageRequest;
use crate::types::{PinFileResponse, PinListResponse, PinMetadata, PinRow, UploadFile};
use crate::upload::PinUpload;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use tracing::debug;

/// Listing endpoint, relative to the API base
pub const PIN_LIST_PATH: &str = "data/pinList";

/// Upload endpoint, relative to the API base
pub const PIN_FILE_PATH: &str = "pinning/pinFileToIPFS";

/// Unauthenticated reader for pinned content served by the gateway
#[derive(Debug)]
pub struct GatewayClient {
    http: HttpClient,
    gateway: Gateway,
}

impl GatewayClient {
    /// Build a gateway reader. Only the gateway URL and timeout are used.
    pub fn new(config: &PinataConfig) -> Result<Self> {
        let mut http_config = HttpClientConfig::builder();
        if let Some(timeout) = config.timeout() {
            http_config = http_config.timeout(timeout);
        }
        Ok(Self {
            http: HttpClient::with_config(http_config.build())?,
            gateway: config.gateway()?,
        })
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Fetch a pinned JSON document
    pub async fn fetch_content(&self, content_id: &str) -> Result<Value> {
        let url = self.gateway.url_for(content_id);
        debug!(%url, "Fetching pinned content");
        self.http.get_json(&url).await
    }
}

/// Client for the pinning API and its gateway
#[derive(Debug)]
pub struct PinataClient {
    api: HttpClient,
    content: GatewayClient,
}

impl PinataClient {
    /// Build a client from a validated config
    pub fn new(config: &PinataConfig) -> Result<Self> {
        config.validate()?;

        let mut api_config = HttpClientConfig::builder().base_url(&config.api_url);
        if let Some(timeout) = config.timeout() {
            api_config = api_config.timeout(timeout);
        }

        // Credentials go to the API only, never to the gateway host
        let auth = config.auth()?;
        debug!(api = %config.api_url, auth = auth.kind(), "Creating pinning client");
        let api = HttpClient::with_auth(api_config.build(), auth)?;

        Ok(Self {
            api,
            content: GatewayClient::new(config)?,
        })
    }

    pub fn gateway(&self) -> &Gateway {
        self.content.gateway()
    }

    /// Fetch one page of pinned objects
    pub async fn list_pins(&self, request: PageRequest) -> Result<PinListResponse> {
        let config = RequestConfig::new()
            .query("status", "pinned")
            .query("pageLimit", request.limit.to_string())
            .query("pageOffset", request.offset.to_string());

        let response: PinListResponse = self.api.get_json_with_config(PIN_LIST_PATH, config).await?;
        debug!(
            offset = request.offset,
            rows = response.rows.len(),
            total = ?response.count,
            "Fetched pin list page"
        );
        Ok(response)
    }

    /// Upload a single file
    pub async fn pin_file(
        &self,
        file: &UploadFile,
        metadata: Option<&PinMetadata>,
    ) -> Result<PinFileResponse> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(file.media_type_or_default())?;
        let mut form = Form::new().part("file", part);
        if let Some(metadata) = metadata {
            form = form.text("pinataMetadata", serde_json::to_string(metadata)?);
        }

        let response: PinFileResponse = self
            .api
            .post_multipart_json(PIN_FILE_PATH, form, RequestConfig::new())
            .await?;
        debug!(file = %file.name, cid = %response.ipfs_hash, "Pinned file");
        Ok(response)
    }

    /// Fetch a pinned JSON document through the gateway
    pub async fn fetch_content(&self, content_id: &str) -> Result<Value> {
        self.content.fetch_content(content_id).await
    }
}

#[async_trait]
impl PinListing for PinataClient {
    async fn list_page(&self, request: PageRequest) -> Result<Vec<PinRow>> {
        Ok(self.list_pins(request).await?.rows)
    }
}

#[async_trait]
impl PinUpload for PinataClient {
    async fn pin_file(
        &self,
        file: &UploadFile,
        metadata: Option<&PinMetadata>,
    ) -> Result<PinFileResponse> {
        PinataClient::pin_file(self, file, metadata).await
    }
}
