//! `ApiClient` and generic per-resource CRUD handles.
//!
//! Resources live under `{base}/items/{name}[/{id}]` and wrap both single
//! items and lists in a `{ "data": … }` envelope.

use std::marker::PhantomData;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use maintboard_core::config::ApiConfig;
use maintboard_core::machine::Machine;

use crate::error::{ClientError, Result};
use crate::query::ListQuery;

/// Response envelope used by the API for both lists and single items.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// Client for the dashboard REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    http: reqwest::Client,
}

impl ApiClient {
    /// Build a client from config. Fails only if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            http,
        })
    }

    /// Typed handle for a named resource collection.
    pub fn resource<T>(&self, name: &str) -> Resource<'_, T> {
        Resource {
            client: self,
            name: name.to_string(),
            _marker: PhantomData,
        }
    }

    /// The machine registry.
    pub fn machines(&self) -> Resource<'_, Machine> {
        self.resource("machines")
    }

    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }
}

/// CRUD operations for one resource collection.
pub struct Resource<'a, T> {
    client: &'a ApiClient,
    name: String,
    _marker: PhantomData<T>,
}

impl<'a, T> Resource<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    fn collection_url(&self) -> String {
        format!("{}/items/{}", self.client.base_url, self.name)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/items/{}/{}", self.client.base_url, self.name, id)
    }

    /// List items matching `query`.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<T>> {
        let url = self.collection_url();
        debug!(resource = %self.name, url = %url, "listing resource");
        let resp = self
            .client
            .request(Method::GET, &url)
            .query(&query.to_pairs())
            .send()
            .await?;
        decode(resp, &self.name).await
    }

    /// Fetch one item by id.
    pub async fn get(&self, id: &str) -> Result<T> {
        let resp = self
            .client
            .request(Method::GET, &self.item_url(id))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(self.not_found(id));
        }
        decode(resp, &self.name).await
    }

    /// Create an item; returns the stored representation.
    pub async fn create(&self, item: &T) -> Result<T> {
        let resp = self
            .client
            .request(Method::POST, &self.collection_url())
            .json(item)
            .send()
            .await?;
        decode(resp, &self.name).await
    }

    /// Patch an item with a partial JSON body; returns the updated
    /// representation.
    pub async fn update(&self, id: &str, patch: &serde_json::Value) -> Result<T> {
        let resp = self
            .client
            .request(Method::PATCH, &self.item_url(id))
            .json(patch)
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(self.not_found(id));
        }
        decode(resp, &self.name).await
    }

    /// Delete an item.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let resp = self
            .client
            .request(Method::DELETE, &self.item_url(id))
            .send()
            .await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(self.not_found(id));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api { status, body });
        }
        Ok(())
    }

    fn not_found(&self, id: &str) -> ClientError {
        ClientError::NotFound {
            resource: self.name.clone(),
            id: id.to_string(),
        }
    }
}

/// Check status, read the body, unwrap the data envelope.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response, context: &str) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;
    if !status.is_success() {
        return Err(ClientError::Api { status, body });
    }
    let envelope: DataEnvelope<T> =
        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            context: context.to_string(),
            message: e.to_string(),
        })?;
    Ok(envelope.data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://dashboard.local:8055/".to_string(),
            token: None,
            timeout_secs: 5,
        })
        .unwrap()
    }

    #[test]
    fn urls_are_rooted_at_items_with_trailing_slash_trimmed() {
        let client = make_client();
        let machines = client.machines();
        assert_eq!(
            machines.collection_url(),
            "http://dashboard.local:8055/items/machines"
        );
        assert_eq!(
            machines.item_url("m-7"),
            "http://dashboard.local:8055/items/machines/m-7"
        );
    }

    #[test]
    fn list_envelope_decodes_machines() {
        let raw = r#"{
            "data": [
                { "id": "m-1", "name": "Press" },
                { "id": "m-2", "name": "Lathe", "tasks": [
                    { "id": "t-1", "title": "Grease", "startDate": "2024-01-01", "recurrence": "daily" }
                ]}
            ]
        }"#;
        let envelope: DataEnvelope<Vec<Machine>> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[1].tasks.len(), 1);
    }

    #[test]
    fn item_envelope_decodes_single_machine() {
        let raw = r#"{ "data": { "id": "m-1", "name": "Press" } }"#;
        let envelope: DataEnvelope<Machine> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.id, "m-1");
    }
}
