use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::availability::Availability;
use crate::client::{ClientError, ClientResult};
use crate::entities::booking;
use crate::handlers::bookings::{CreateBookingResponse, MessageResponse};

/// Request body for `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    pub date: NaiveDate,
    /// Slot label, e.g. `"2:00 PM"`
    pub time: String,
    pub guests: i32,
    pub name: String,
    pub contact: String,
}

/// HTTP client for the booking API. No retries: failures are returned as-is.
#[derive(Debug, Clone)]
pub struct BookingApi {
    http: Client,
    base_url: String,
}

impl BookingApi {
    /// `base_url` is the server root, e.g. `http://localhost:4000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    pub async fn list_bookings(&self) -> ClientResult<Vec<booking::Model>> {
        let response = self.http.get(self.url("/bookings")).send().await?;
        decode(response).await
    }

    pub async fn create_booking(&self, draft: &BookingDraft) -> ClientResult<booking::Model> {
        let response = self
            .http
            .post(self.url("/bookings"))
            .json(draft)
            .send()
            .await?;
        let created: CreateBookingResponse = decode(response).await?;
        Ok(created.booking)
    }

    pub async fn availability(&self, date: NaiveDate) -> ClientResult<Availability> {
        let response = self
            .http
            .get(self.url("/availability"))
            .query(&[("date", date.to_string())])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_booking(&self, id: i32) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/bookings/{}", id)))
            .send()
            .await?;
        let _: MessageResponse = decode(response).await?;
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let message = match response.json::<MessageResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unexpected response")
            .to_string(),
    };
    Err(ClientError::Api { status, message })
}
