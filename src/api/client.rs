use crate::config::AppConfig;
use crate::domain::model::{BookingRequest, BookingResult, DateRange, Room, Session};
use crate::domain::ports::BookingService;
use crate::utils::error::{NestlyError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// Reqwest-backed adapter for the Nestly booking API.
pub struct HttpBookingService {
    client: Client,
    base_url: String,
    session: Option<Session>,
}

impl HttpBookingService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            session: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(NestlyError::ApiError)?;

        Ok(Self {
            client,
            base_url: config.api.base_url.clone(),
            session: None,
        })
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/api{}", self.base_url.trim_end_matches('/'), path);
        let builder = self.client.request(method, url);

        match &self.session {
            Some(session) => builder.bearer_auth(&session.token),
            None => builder,
        }
    }

    async fn handle<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        // Prefer the server's own message field when the error body is JSON.
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("API request failed ({})", status.as_u16()));

        tracing::error!("❌ API error ({}): {}", status.as_u16(), message);

        Err(NestlyError::ApiResponseError {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl BookingService for HttpBookingService {
    async fn list_rooms(&self) -> Result<Vec<Room>> {
        tracing::debug!("Fetching room listing");
        let response = self.request(Method::GET, "/rooms").send().await?;
        self.handle(response).await
    }

    async fn fetch_room(&self, room_id: i64) -> Result<Room> {
        tracing::debug!("Fetching room details for id={}", room_id);
        let response = self
            .request(Method::GET, &format!("/rooms/{}", room_id))
            .send()
            .await?;
        self.handle(response).await
    }

    async fn booked_dates(&self, room_id: i64) -> Result<Vec<DateRange>> {
        tracing::debug!("Fetching booked dates for room id={}", room_id);
        let response = self
            .request(Method::GET, &format!("/bookings/room/{}/booked-dates", room_id))
            .send()
            .await?;
        self.handle(response).await
    }

    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingResult> {
        let response = self
            .request(Method::POST, "/bookings/create")
            .json(request)
            .send()
            .await?;
        self.handle(response).await
    }
}
