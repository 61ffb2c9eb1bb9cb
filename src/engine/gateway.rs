use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::model::guest::{Guest, Rsvp};
use crate::model::party::{Party, PartyDraft};

pub const DEFAULT_API_URL: &str =
    "https://fsa-crud-2aa9294fe819.herokuapp.com/api/2510-FTB-CT-WEB-PT";

/// Name of the environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "PARTY_API_URL";

/// A gateway failure is terminal for that invocation: no retries, and the
/// caller performs no state mutation.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The remote events service. One network request per operation; the engine
/// holds this boxed so tests can substitute an in-memory stub.
#[async_trait]
pub trait PartyApi: Send {
    async fn list_parties(&self) -> Result<Vec<Party>, GatewayError>;
    async fn get_party(&self, id: i64) -> Result<Party, GatewayError>;
    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, GatewayError>;
    async fn list_guests(&self) -> Result<Vec<Guest>, GatewayError>;
    async fn create_party(&self, draft: &PartyDraft) -> Result<(), GatewayError>;
    async fn delete_party(&self, id: i64) -> Result<(), GatewayError>;
}

/// Every data-bearing response wraps its payload in `{ "data": ... }`.
#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

fn decode_data<T: DeserializeOwned>(body: &str) -> Result<T, GatewayError> {
    let envelope: Envelope<T> = serde_json::from_str(body)?;
    Ok(envelope.data)
}

pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        debug!(%base_url, "events API gateway configured");
        Self::new(base_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let body = self
            .client
            .get(self.url(path))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        decode_data(&body)
    }
}

#[async_trait]
impl PartyApi for HttpGateway {
    async fn list_parties(&self) -> Result<Vec<Party>, GatewayError> {
        self.fetch_data("/events").await
    }

    async fn get_party(&self, id: i64) -> Result<Party, GatewayError> {
        self.fetch_data(&format!("/events/{id}")).await
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, GatewayError> {
        self.fetch_data("/rsvps").await
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, GatewayError> {
        self.fetch_data("/guests").await
    }

    async fn create_party(&self, draft: &PartyDraft) -> Result<(), GatewayError> {
        // The created party in the response body is not consumed.
        self.client
            .post(self.url("/events"))
            .json(draft)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_party(&self, id: i64) -> Result<(), GatewayError> {
        self.client
            .delete(self.url(&format!("/events/{id}")))
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_party_list_envelope() {
        let body = r#"{
            "success": true,
            "data": [
                {"id":1,"name":"Gala","description":"d","date":"2025-06-01T18:30:00.000Z","location":"l"}
            ]
        }"#;

        let parties: Vec<Party> = decode_data(body).unwrap();
        assert_eq!(parties.len(), 1);
        assert_eq!(parties[0].name, "Gala");
    }

    #[test]
    fn decodes_a_single_party_envelope() {
        let body = r#"{"data":{"id":4,"name":"Mixer","description":"d","date":"2025-06-01T18:30:00.000Z","location":"l"}}"#;

        let party: Party = decode_data(body).unwrap();
        assert_eq!(party.id, 4);
    }

    #[test]
    fn a_missing_data_field_is_a_decode_failure() {
        let result: Result<Vec<Guest>, _> = decode_data(r#"{"guests":[]}"#);
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn malformed_json_is_a_decode_failure() {
        let result: Result<Vec<Rsvp>, _> = decode_data("<html>offline</html>");
        assert!(matches!(result, Err(GatewayError::Decode(_))));
    }

    #[test]
    fn urls_join_the_base_and_path() {
        let gateway = HttpGateway::new("http://localhost:9090/api/test");
        assert_eq!(gateway.url("/events/7"), "http://localhost:9090/api/test/events/7");
    }
}
