use crate::models::{DailyTotal, Food, ItemAdded, Meal, NewFood, NewItem, NewMeal};
use axum::async_trait;
use reqwest::{Client, Url};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {path} -> {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("{method} {path} failed: {source}")]
    Transport {
        method: &'static str,
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {path} returned an unexpected body: {source}")]
    Decode {
        method: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait CalorieApi: Send + Sync {
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError>;
    async fn meals_for(&self, day: &str) -> Result<Vec<Meal>, ApiError>;
    async fn total_for(&self, day: &str) -> Result<DailyTotal, ApiError>;
    async fn create_meal(&self, meal: &NewMeal) -> Result<Meal, ApiError>;
    async fn create_food(&self, food: &NewFood) -> Result<Food, ApiError>;
    async fn add_item(&self, meal_id: i64, item: &NewItem) -> Result<ItemAdded, ApiError>;
}

#[derive(Clone)]
pub struct HttpApi {
    base: Url,
    client: Client,
}

impl HttpApi {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: Client::new(),
        }
    }

    // keeps any path prefix of the base
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let request = self.client.get(self.url(path)).query(query);
        self.send("GET", path, request).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        // `.json()` also sets `content-type: application/json`.
        let request = self.client.post(self.url(path)).json(body);
        self.send("POST", path, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let transport = |source| ApiError::Transport {
            method,
            path: path.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                method,
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode {
            method,
            path: path.to_string(),
            source,
        })
    }
}

#[async_trait]
impl CalorieApi for HttpApi {
    async fn list_foods(&self) -> Result<Vec<Food>, ApiError> {
        self.get("/foods", &[]).await
    }

    async fn meals_for(&self, day: &str) -> Result<Vec<Meal>, ApiError> {
        self.get("/meals", &[("date", day)]).await
    }

    async fn total_for(&self, day: &str) -> Result<DailyTotal, ApiError> {
        self.get("/total", &[("date", day)]).await
    }

    async fn create_meal(&self, meal: &NewMeal) -> Result<Meal, ApiError> {
        self.post("/meals", meal).await
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, ApiError> {
        self.post("/foods", food).await
    }

    async fn add_item(&self, meal_id: i64, item: &NewItem) -> Result<ItemAdded, ApiError> {
        self.post(&format!("/meals/{meal_id}/items"), item).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let api = HttpApi::new(Url::parse("http://127.0.0.1:5000").unwrap());
        assert_eq!(api.url("/foods"), "http://127.0.0.1:5000/foods");

        let api = HttpApi::new(Url::parse("http://calories.local/api/").unwrap());
        assert_eq!(api.url("/meals/3/items"), "http://calories.local/api/meals/3/items");
    }

    #[test]
    fn status_error_names_method_path_and_status() {
        let err = ApiError::Status {
            method: "POST",
            path: "/meals".into(),
            status: 500,
        };
        assert_eq!(err.to_string(), "POST /meals -> 500");
    }
}
