//! HTTP client for the calendar backend.
//!
//! The backend is the application's event source and sink: a REST gateway
//! in front of the auth/event services. Events and categories travel as
//! the camelCase DTOs defined in calgrid-core; auth is a JWT bearer token.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use calgrid_core::{Category, EventDraft, EventRecord};

use crate::config::Config;

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthResponse {
    token: String,
}

#[derive(Serialize)]
struct CategoryRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Surface the backend's error body on non-2xx responses.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .or_else(|| v.get("error"))
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or(body);

        if message.is_empty() {
            anyhow::bail!("Server returned {}", status)
        }
        anyhow::bail!("Server returned {}: {}", status, message)
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// POST /auth/login — returns the JWT to persist in the config.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let resp = self
            .request(reqwest::Method::POST, "/auth/login")
            .json(&LoginRequest { username, password })
            .send()
            .await
            .context("Failed to connect to server")?;

        let auth: AuthResponse = Self::check(resp).await?.json().await?;
        Ok(auth.token)
    }

    /// POST /auth/register
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let resp = self
            .request(reqwest::Method::POST, "/auth/register")
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await
            .context("Failed to connect to server")?;

        Self::check(resp).await?;
        Ok(())
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// GET /events?start=..&end=.. — events whose start falls in the range.
    pub async fn fetch_events(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<EventRecord>> {
        let resp = self
            .request(reqwest::Method::GET, "/events")
            .query(&[
                ("start", start.format("%Y-%m-%dT%H:%M:%S").to_string()),
                ("end", end.format("%Y-%m-%dT%H:%M:%S").to_string()),
            ])
            .send()
            .await
            .context("Failed to connect to server")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// GET /events — the user's entire collection.
    pub async fn fetch_all_events(&self) -> Result<Vec<EventRecord>> {
        let resp = self
            .request(reqwest::Method::GET, "/events")
            .send()
            .await
            .context("Failed to connect to server")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /events — returns the persisted record with its assigned id.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<EventRecord> {
        let resp = self
            .request(reqwest::Method::POST, "/events")
            .json(draft)
            .send()
            .await
            .context("Failed to connect to server")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// PUT /events/{id}
    pub async fn update_event(&self, id: i64, draft: &EventDraft) -> Result<EventRecord> {
        let resp = self
            .request(reqwest::Method::PUT, &format!("/events/{id}"))
            .json(draft)
            .send()
            .await
            .context("Failed to connect to server")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// DELETE /events/{id}
    pub async fn delete_event(&self, id: i64) -> Result<()> {
        let resp = self
            .request(reqwest::Method::DELETE, &format!("/events/{id}"))
            .send()
            .await
            .context("Failed to connect to server")?;

        Self::check(resp).await?;
        Ok(())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// GET /categories
    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let resp = self
            .request(reqwest::Method::GET, "/categories")
            .send()
            .await
            .context("Failed to connect to server")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /categories
    pub async fn create_category(&self, name: &str, color: Option<&str>) -> Result<Category> {
        let resp = self
            .request(reqwest::Method::POST, "/categories")
            .json(&CategoryRequest { name, color })
            .send()
            .await
            .context("Failed to connect to server")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// PUT /categories/{id}
    pub async fn update_category(
        &self,
        id: i64,
        name: &str,
        color: Option<&str>,
    ) -> Result<Category> {
        let resp = self
            .request(reqwest::Method::PUT, &format!("/categories/{id}"))
            .json(&CategoryRequest { name, color })
            .send()
            .await
            .context("Failed to connect to server")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// DELETE /categories/{id}
    pub async fn delete_category(&self, id: i64) -> Result<()> {
        let resp = self
            .request(reqwest::Method::DELETE, &format!("/categories/{id}"))
            .send()
            .await
            .context("Failed to connect to server")?;

        Self::check(resp).await?;
        Ok(())
    }
}
