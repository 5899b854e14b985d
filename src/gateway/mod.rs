//! HTTP gateway to the HR backend.
//!
//! One typed client per resource path; verbs map to list/create/update/
//! delete, each returning a single eventual outcome. Failures resolve to
//! [`GatewayError`] and are converted into error outcomes by the action
//! creators; nothing here retries or raises past the caller.

mod error;

pub use error::GatewayError;

use std::marker::PhantomData;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{BankEntry, Employee, Role};

/// Wire shape of every backend response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// Application-level status tag in a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ApiStatus {
    Success,
    Error,
}

impl<T> ApiEnvelope<T> {
    /// Narrow to the payload, or surface the envelope-level failure.
    pub fn into_parts(self, resource: &'static str) -> Result<(String, T), GatewayError> {
        match self.status {
            ApiStatus::Error => Err(GatewayError::Rejected {
                resource,
                message: self.message,
            }),
            ApiStatus::Success => match self.data {
                Some(data) => Ok((self.message, data)),
                None => Err(GatewayError::MissingData { resource }),
            },
        }
    }
}

/// Typed client for one backend resource path.
#[derive(Debug, Clone)]
pub struct ResourceClient<T> {
    http: reqwest::Client,
    base_url: String,
    resource: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ResourceClient<T>
where
    T: Serialize + DeserializeOwned,
{
    fn new(http: reqwest::Client, base_url: String, resource: &'static str) -> Self {
        Self {
            http,
            base_url,
            resource,
            _marker: PhantomData,
        }
    }

    fn url(&self) -> String {
        format!("{}/{}", self.base_url, self.resource)
    }

    /// `GET {base}/{resource}` — fetch the full collection.
    pub async fn list(&self) -> Result<(String, Vec<T>), GatewayError> {
        debug!(resource = self.resource, request_id = %Uuid::new_v4(), "GET");
        let response = self
            .http
            .get(self.url())
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                resource: self.resource,
                source,
            })?;
        self.settle(response).await
    }

    /// `POST {base}/{resource}` — persist a new record.
    pub async fn create(&self, record: &T) -> Result<(String, T), GatewayError> {
        debug!(resource = self.resource, request_id = %Uuid::new_v4(), "POST");
        let response = self
            .http
            .post(self.url())
            .json(record)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                resource: self.resource,
                source,
            })?;
        self.settle(response).await
    }

    /// `PUT {base}/{resource}` — update an existing record (id in the body).
    pub async fn update(&self, record: &T) -> Result<(String, T), GatewayError> {
        debug!(resource = self.resource, request_id = %Uuid::new_v4(), "PUT");
        let response = self
            .http
            .put(self.url())
            .json(record)
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                resource: self.resource,
                source,
            })?;
        self.settle(response).await
    }

    /// `DELETE {base}/{resource}/{id}` — declared capability; no creator
    /// currently drives it.
    pub async fn delete(&self, id: i64) -> Result<(String, T), GatewayError> {
        debug!(resource = self.resource, request_id = %Uuid::new_v4(), id, "DELETE");
        let response = self
            .http
            .delete(format!("{}/{}", self.url(), id))
            .send()
            .await
            .map_err(|source| GatewayError::Transport {
                resource: self.resource,
                source,
            })?;
        self.settle(response).await
    }

    async fn settle<U: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<(String, U), GatewayError> {
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                resource: self.resource,
                status: status.as_u16(),
            });
        }
        let envelope: ApiEnvelope<U> =
            response
                .json()
                .await
                .map_err(|source| GatewayError::Decode {
                    resource: self.resource,
                    source,
                })?;
        envelope.into_parts(self.resource)
    }
}

/// Gateway bundling one typed client per backend resource.
#[derive(Debug, Clone)]
pub struct Gateway {
    pub role: ResourceClient<Role>,
    pub employee: ResourceClient<Employee>,
    pub banking: ResourceClient<BankEntry>,
}

impl Gateway {
    /// Build the shared HTTP client and the per-resource handles.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(
                config.connect_timeout_seconds,
            )))
            .build()
            .expect("failed to build HTTP client");
        let base = config.base_url.trim_end_matches('/').to_string();
        Self {
            role: ResourceClient::new(http.clone(), base.clone(), "role"),
            employee: ResourceClient::new(http.clone(), base.clone(), "employee"),
            banking: ResourceClient::new(http, base, "banking"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_narrows_to_payload() {
        let envelope: ApiEnvelope<Vec<u32>> = serde_json::from_str(
            r#"{"status": "SUCCESS", "message": "ok", "data": [1, 2, 3]}"#,
        )
        .unwrap();
        let (message, data) = envelope.into_parts("role").unwrap();
        assert_eq!(message, "ok");
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn envelope_error_rejects() {
        let envelope: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"status": "ERROR", "message": "nope", "data": null}"#)
                .unwrap();
        let err = envelope.into_parts("role").unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { resource: "role", .. }));
    }

    #[test]
    fn envelope_success_without_data_is_missing() {
        let envelope: ApiEnvelope<u32> =
            serde_json::from_str(r#"{"status": "SUCCESS", "message": "ok", "data": null}"#)
                .unwrap();
        let err = envelope.into_parts("banking").unwrap_err();
        assert!(matches!(err, GatewayError::MissingData { resource: "banking" }));
    }
}
