//! Reqwest-backed transport against the tutoring backend's HTTP API.
//!
//! Endpoint layout: every action lives under `/api/tutors/{id}/<action>/`
//! (trailing slash included). The transport optionally carries a bearer
//! token; obtaining and refreshing tokens is the token issuer's job, not
//! this crate's.

use async_trait::async_trait;
use chrono::NaiveDate;
use grid_engine::types::{BookingId, SessionSettings, StudentId, TutorId, WeekGrid};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::api::{
    AddAvailabilityRequest, BlockDayRequest, BookingRequest, CommitReply, CreatedReply,
    DeleteBookingRequest, RemoveByIdRequest, WeekResponse,
};
use crate::error::{ClientError, Result};
use crate::transport::ScheduleTransport;

#[derive(Debug, Clone)]
pub struct ReqwestScheduleTransport {
    base: Url,
    client: Client,
    bearer: Option<String>,
}

impl ReqwestScheduleTransport {
    pub fn new(base: Url) -> Self {
        ReqwestScheduleTransport {
            base,
            client: Client::new(),
            bearer: None,
        }
    }

    /// Attach a bearer token to every request.
    pub fn with_bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer = Some(token.into());
        self
    }

    fn action_url(&self, tutor: TutorId, action: &str) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::Network("base URL cannot be a base".to_string()))?;
            segments.pop_if_empty();
            segments.push("api");
            segments.push("tutors");
            segments.push(&tutor.0.to_string());
            segments.push(action);
            // The backend routes all carry a trailing slash.
            segments.push("");
        }
        Ok(url)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "backend request failed");
        Err(ClientError::Http {
            status: status.as_u16(),
            message: message.trim().to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self.authed(self.client.get(url)).send().await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        url: Url,
        body: &B,
    ) -> Result<T> {
        tracing::debug!(%url, "POST");
        let response = self.authed(self.client.post(url)).json(body).send().await?;
        Ok(Self::check_status(response).await?.json().await?)
    }
}

#[async_trait]
impl ScheduleTransport for ReqwestScheduleTransport {
    async fn fetch_week(
        &self,
        tutor: TutorId,
        week_start: NaiveDate,
        student: Option<StudentId>,
    ) -> Result<WeekGrid> {
        let mut url = self.action_url(tutor, "weekly_slots")?;
        url.query_pairs_mut()
            .append_pair("week_start", &week_start.to_string());
        if let Some(student) = student {
            url.query_pairs_mut()
                .append_pair("student", &student.0.to_string());
        }
        let response: WeekResponse = self.get_json(url).await?;
        Ok(response.week)
    }

    async fn session_settings(&self, tutor: TutorId) -> Result<SessionSettings> {
        let url = self.action_url(tutor, "session_settings")?;
        self.get_json(url).await
    }

    async fn commit_booking(
        &self,
        tutor: TutorId,
        request: &BookingRequest,
    ) -> Result<CommitReply> {
        let url = self.action_url(tutor, "check_and_book")?;
        self.post_json(url, request).await
    }

    async fn delete_booking(&self, tutor: TutorId, booking: BookingId) -> Result<CommitReply> {
        let url = self.action_url(tutor, "delete_booking")?;
        self.post_json(url, &DeleteBookingRequest {
            booking_id: booking,
        })
        .await
    }

    async fn add_availability(
        &self,
        tutor: TutorId,
        request: &AddAvailabilityRequest,
    ) -> Result<i64> {
        let url = self.action_url(tutor, "add_availability")?;
        let reply: CreatedReply = self.post_json(url, request).await?;
        Ok(reply.id)
    }

    async fn remove_availability(&self, tutor: TutorId, id: i64) -> Result<()> {
        let url = self.action_url(tutor, "remove_availability")?;
        let _: serde_json::Value = self.post_json(url, &RemoveByIdRequest { id }).await?;
        Ok(())
    }

    async fn block_day(&self, tutor: TutorId, date: NaiveDate) -> Result<i64> {
        let url = self.action_url(tutor, "block_day")?;
        let reply: CreatedReply = self.post_json(url, &BlockDayRequest { date }).await?;
        Ok(reply.id)
    }

    async fn unblock_day(&self, tutor: TutorId, id: i64) -> Result<()> {
        let url = self.action_url(tutor, "unblock_day")?;
        let _: serde_json::Value = self.post_json(url, &RemoveByIdRequest { id }).await?;
        Ok(())
    }
}
