//! HTTP Food Repository
//!
//! `FoodRepository` over a json-server style REST API, via reqwest.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::traits::FoodRepository;
use crate::config::ApiConfig;
use crate::domain::{FoodId, FoodPlate, FoodPlateInput, NewFoodPlate};
use crate::error::{RemoteError, RemoteResult};

/// Remote store accessor backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFoodRepository {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpFoodRepository {
    pub fn new(config: ApiConfig) -> RemoteResult<Self> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout());
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Turn non-2xx answers into `RemoteError::Status`
    fn check_status(response: reqwest::Response) -> RemoteResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(RemoteError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> RemoteResult<T> {
        let response = Self::check_status(response)?;
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FoodRepository for HttpFoodRepository {
    async fn list(&self) -> RemoteResult<Vec<FoodPlate>> {
        let url = self.config.foods_url();
        log::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::read_json(response).await
    }

    async fn create(&self, food: &NewFoodPlate) -> RemoteResult<FoodPlate> {
        let url = self.config.foods_url();
        log::debug!("POST {}", url);
        let response = self.client.post(&url).json(food).send().await?;
        Self::read_json(response).await
    }

    async fn update(&self, id: FoodId, food: &FoodPlateInput) -> RemoteResult<FoodPlate> {
        let url = self.config.food_url(id);
        log::debug!("PUT {}", url);
        let response = self.client.put(&url).json(food).send().await?;
        Self::read_json(response).await
    }

    async fn replace(&self, food: &FoodPlate) -> RemoteResult<FoodPlate> {
        let url = self.config.food_url(food.id);
        log::debug!("PUT {} (full record)", url);
        let response = self.client.put(&url).json(food).send().await?;
        Self::read_json(response).await
    }

    async fn delete(&self, id: FoodId) -> RemoteResult<()> {
        let url = self.config.food_url(id);
        log::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        Self::check_status(response)?;
        Ok(())
    }
}
