//! HTTP client for the event service.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{AuthService, EventRepository};
use crate::error::{ProximoError, ProximoResult};
use crate::event::{Event, EventDraft};
use crate::protocol::{ApiResponse, Deleted, Health};
use crate::session::{LoginRequest, Session, SignupRequest};

/// Repository backed by the event service's `/api` routes.
#[derive(Clone)]
pub struct HttpRepository {
    http: reqwest::Client,
    base_url: String,
}

impl HttpRepository {
    pub fn new(base_url: &str) -> Self {
        HttpRepository {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /health
    pub async fn health(&self) -> ProximoResult<Health> {
        self.send(self.http.get(self.url(&["health"])?)).await
    }

    /// The base URL with `segments` appended, each percent-encoded as a
    /// single path segment.
    fn url(&self, segments: &[&str]) -> ProximoResult<Url> {
        let invalid = || ProximoError::Config(format!("Invalid API URL '{}'", self.base_url));

        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    /// Send a request and unwrap the service's envelope.
    ///
    /// Transport failures become `Network`. A failure payload keeps the
    /// service's message and is classified by HTTP status.
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> ProximoResult<T> {
        let resp = request
            .send()
            .await
            .map_err(|e| ProximoError::Network(e.to_string()))?;

        let status = resp.status();
        let url = resp.url().clone();
        tracing::debug!(%url, %status, "event service response");

        let body: ApiResponse<T> = resp.json().await.map_err(|e| {
            if status.is_success() {
                ProximoError::Serialization(e.to_string())
            } else {
                ProximoError::Service(format!("Event service returned {status}"))
            }
        })?;

        if body.success {
            return body.into_result();
        }

        let message = body
            .error
            .unwrap_or_else(|| format!("Event service returned {status}"));
        tracing::warn!(%url, %status, %message, "event service rejected request");

        Err(error_for_status(status, message))
    }
}

fn error_for_status(status: StatusCode, message: String) -> ProximoError {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            ProximoError::Validation(message)
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProximoError::Auth(message),
        StatusCode::NOT_FOUND => ProximoError::NotFound(message),
        _ => ProximoError::Service(message),
    }
}

#[async_trait]
impl EventRepository for HttpRepository {
    /// GET /api/events
    async fn list_all(&self) -> ProximoResult<Vec<Event>> {
        let url = self.url(&["api", "events"])?;
        self.send(self.http.get(url)).await
    }

    /// GET /api/events/organizer/{identity}
    async fn list_by_owner(&self, identity: &str) -> ProximoResult<Vec<Event>> {
        let url = self.url(&["api", "events", "organizer", identity])?;
        self.send(self.http.get(url)).await
    }

    /// POST /api/events
    async fn create(&self, draft: EventDraft) -> ProximoResult<Event> {
        let url = self.url(&["api", "events"])?;
        self.send(self.http.post(url).json(&draft)).await
    }

    /// PUT /api/events/{id}
    async fn update(&self, id: &str, draft: EventDraft) -> ProximoResult<Event> {
        let url = self.url(&["api", "events", id])?;
        self.send(self.http.put(url).json(&draft)).await
    }

    /// DELETE /api/events/{id}
    async fn delete(&self, id: &str) -> ProximoResult<()> {
        let url = self.url(&["api", "events", id])?;
        let _: Deleted = self.send(self.http.delete(url)).await?;
        Ok(())
    }
}

#[async_trait]
impl AuthService for HttpRepository {
    /// POST /api/login
    async fn login(&self, request: LoginRequest) -> ProximoResult<Session> {
        let url = self.url(&["api", "login"])?;
        self.send(self.http.post(url).json(&request)).await
    }

    /// POST /api/signup
    async fn signup(&self, request: SignupRequest) -> ProximoResult<Session> {
        let url = self.url(&["api", "signup"])?;
        self.send(self.http.post(url).json(&request)).await
    }
}
