//! PokeAPI creature directory client (REST, no authentication)

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use zonedex_domain::{CreatureAttributes, CreatureEncounters, LocationAreaId, SpeciesDetail};

use crate::infrastructure::pokeapi_types::{LocationAreaResponse, PokemonResponse, SpeciesResponse};
use crate::infrastructure::ports::{CreatureDirectoryPort, DirectoryError};

/// Default PokeAPI base URL.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default request timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Client for the PokeAPI v2 REST interface
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Create client with custom timeout.
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, url: &str) -> Result<Response, DirectoryError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(DirectoryError::request_failed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::not_found(url, status.as_u16()));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DirectoryError> {
        self.get(url)
            .await?
            .json::<T>()
            .await
            .map_err(DirectoryError::invalid_response)
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEAPI_BASE_URL)
    }
}

#[async_trait]
impl CreatureDirectoryPort for PokeApiClient {
    async fn fetch_creature(&self, name: &str) -> Result<CreatureAttributes, DirectoryError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let response: PokemonResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn check_species(&self, species_url: &str) -> Result<(), DirectoryError> {
        self.get(species_url).await.map(|_| ())
    }

    async fn fetch_species(&self, name: &str) -> Result<SpeciesDetail, DirectoryError> {
        let url = format!("{}/pokemon-species/{}", self.base_url, name);
        let response: SpeciesResponse = self.get_json(&url).await?;
        Ok(response.into())
    }

    async fn fetch_location_encounters(
        &self,
        location_area: &LocationAreaId,
    ) -> Result<Vec<CreatureEncounters>, DirectoryError> {
        let url = format!("{}/location-area/{}", self.base_url, location_area);
        let response: LocationAreaResponse = self.get_json(&url).await?;
        Ok(response.into_encounters())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = PokeApiClient::new("https://pokeapi.co/api/v2/");

        assert_eq!(client.base_url(), DEFAULT_POKEAPI_BASE_URL);
    }

    #[tokio::test]
    async fn unreachable_directory_is_a_request_failure() {
        // Port 9 (discard) on localhost refuses connections
        let client = PokeApiClient::with_timeout("http://127.0.0.1:9", 2);

        let result = client.fetch_creature("zigzagoon").await;

        assert!(matches!(result, Err(DirectoryError::RequestFailed(_))));
    }
}
