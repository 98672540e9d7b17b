//! HTTP client for the warehouse catalog endpoints.
//!
//! Wraps the warehouse REST API (product list, single product, nested
//! feature and menu collections) using [`reqwest`]. Every request
//! carries the shared-secret header and is bounded by the configured
//! timeout; any transport failure or non-2xx answer becomes a
//! [`WarehouseError`], which the sync engine surfaces as
//! upstream-unavailable.

use serde::de::DeserializeOwned;

use crate::config::WarehouseConfig;
use crate::payload::{
    FeaturePayload, ItemEnvelope, ListEnvelope, MenuPayload, ProductPayload,
};
use crate::sync::ProductFilter;

/// Header identifying this caller to the warehouse.
pub const SHARED_SECRET_HEADER: &str = "x-warehouse-key";

/// Errors from the warehouse REST layer.
#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The warehouse returned a non-2xx status code.
    #[error("Warehouse API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("Malformed warehouse response: {0}")]
    Decode(String),
}

impl WarehouseError {
    /// HTTP status of an API-level error, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            WarehouseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// HTTP client for one warehouse catalog source.
pub struct WarehouseClient {
    client: reqwest::Client,
    config: WarehouseConfig,
}

impl WarehouseClient {
    /// Build a client from explicit configuration.
    ///
    /// The timeout applies per request; there is no retry here.
    pub fn new(config: WarehouseConfig) -> Result<Self, WarehouseError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// GET `/catalog/products` with optional search / pagination query.
    pub async fn list_products(
        &self,
        filter: &ProductFilter,
    ) -> Result<Vec<ProductPayload>, WarehouseError> {
        let mut request = self
            .request(&format!("{}/catalog/products", self.config.base_url));
        if let Some(q) = &filter.q {
            request = request.query(&[("q", q.as_str())]);
        }
        if let Some(page) = filter.page {
            request = request.query(&[("page", page)]);
        }
        if let Some(per_page) = filter.per_page {
            request = request.query(&[("per_page", per_page)]);
        }

        let envelope: ListEnvelope<ProductPayload> = Self::send(request).await?;
        Ok(envelope.into_items())
    }

    /// GET `/catalog/products/{idOrCode}`.
    pub async fn get_product(
        &self,
        id_or_code: &str,
    ) -> Result<ProductPayload, WarehouseError> {
        let request = self.request(&format!(
            "{}/catalog/products/{id_or_code}",
            self.config.base_url
        ));
        let envelope: ItemEnvelope<ProductPayload> = Self::send(request).await?;
        Ok(envelope.into_item())
    }

    /// GET `/catalog/products/{idOrCode}/features`.
    pub async fn list_features(
        &self,
        id_or_code: &str,
    ) -> Result<Vec<FeaturePayload>, WarehouseError> {
        let request = self.request(&format!(
            "{}/catalog/products/{id_or_code}/features",
            self.config.base_url
        ));
        let envelope: ListEnvelope<FeaturePayload> = Self::send(request).await?;
        Ok(envelope.into_items())
    }

    /// GET `/catalog/products/{idOrCode}/menus`.
    ///
    /// A 404 here means the product simply has no menu collection
    /// upstream and is treated as "no data", not an error.
    pub async fn list_menus(
        &self,
        id_or_code: &str,
    ) -> Result<Vec<MenuPayload>, WarehouseError> {
        let request = self.request(&format!(
            "{}/catalog/products/{id_or_code}/menus",
            self.config.base_url
        ));
        match Self::send::<ListEnvelope<MenuPayload>>(request).await {
            Ok(envelope) => Ok(envelope.into_items()),
            Err(err) if err.status() == Some(404) => Ok(Vec::new()),
            Err(err) => Err(err),
        }
    }

    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(SHARED_SECRET_HEADER, &self.config.shared_secret)
    }

    async fn send<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, WarehouseError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WarehouseError::Api {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WarehouseError::Decode(e.to_string()))
    }
}
