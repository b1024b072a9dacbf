//! Client for the modal config API

use modalkit_common::ModalConfig;
use serde::{Deserialize, Serialize};

/// Response envelope shared by every API endpoint
#[derive(Deserialize)]
struct ApiEnvelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self.error.unwrap_or_else(|| "Unknown error".to_string())),
        }
    }
}

#[derive(Serialize)]
struct SaveRequest<'a> {
    config: &'a ModalConfig,
    publish: bool,
}

/// A saved config as returned by the API
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SavedConfig {
    pub id: String,
    pub created_at: String,
    pub config: ModalConfig,
    pub published: bool,
    #[serde(rename = "embedUrl", default)]
    pub embed_url: Option<String>,
}

/// `window.location.origin`, empty outside a browser
pub fn current_origin() -> String {
    web_sys_x::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Absolute URL for an API path on the current origin
fn api_url(path: &str) -> String {
    format!("{}{path}", current_origin())
}

/// `GET` for one config; the id is sent as an encoded query parameter
fn fetch_request(
    client: &reqwest::Client,
    origin: &str,
    id: &str,
) -> reqwest::Result<reqwest::Request> {
    client
        .get(format!("{origin}/api/modal-config"))
        .query(&[("id", id)])
        .build()
}

/// Save and publish a config
pub async fn publish_config(config: &ModalConfig) -> Result<SavedConfig, String> {
    let resp = reqwest::Client::new()
        .post(api_url("/api/modal-config"))
        .json(&SaveRequest {
            config,
            publish: true,
        })
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    let status = resp.status();
    let envelope: ApiEnvelope<SavedConfig> = resp
        .json()
        .await
        .map_err(|e| format!("Parse error ({status}): {e}"))?;
    envelope.into_result()
}

/// Load a saved config by id
pub async fn fetch_config(id: &str) -> Result<ModalConfig, String> {
    let client = reqwest::Client::new();
    let request = fetch_request(&client, &current_origin(), id)
        .map_err(|e| format!("Invalid request: {e}"))?;
    let resp = client
        .execute(request)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(format!("Modal config {id} not found"));
    }

    let envelope: ApiEnvelope<SavedConfig> =
        resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    envelope.into_result().map(|saved| saved.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_response_parses() {
        let body = r#"{
            "success": true,
            "data": {
                "id": "abc",
                "created_at": "2024-01-01T00:00:00Z",
                "config": {"headline": "Hi", "steps": []},
                "published": true,
                "embedUrl": "https://modals.example.com/embed/abc"
            }
        }"#;
        let envelope: ApiEnvelope<SavedConfig> = serde_json::from_str(body).unwrap();
        let saved = envelope.into_result().unwrap();
        assert_eq!(saved.id, "abc");
        assert_eq!(saved.config.headline, "Hi");
        assert_eq!(
            saved.embed_url.as_deref(),
            Some("https://modals.example.com/embed/abc")
        );
    }

    #[test]
    fn error_envelope_carries_message() {
        let body = r#"{"success": false, "error": "Missing config ID"}"#;
        let envelope: ApiEnvelope<SavedConfig> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.into_result().unwrap_err(), "Missing config ID");
    }

    #[test]
    fn config_id_is_query_encoded() {
        let client = reqwest::Client::new();
        let request = fetch_request(&client, "http://localhost:8080", "a b&c#d").unwrap();
        assert_eq!(request.url().path(), "/api/modal-config");
        assert_eq!(request.url().query(), Some("id=a+b%26c%23d"));

        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(pairs, vec![("id".to_string(), "a b&c#d".to_string())]);
    }
}
