//! Remote memo table client (PostgREST dialect).
//!
//! The hosted store does the filtering, ordering and timestamp bookkeeping;
//! this module is a thin HTTP wrapper around its four row operations.

use async_trait::async_trait;
use memo_types::{Memo, MemoForm, MemoRow};

/// Store operations the route layer depends on. Implemented by [`RestStore`]
/// in production and by in-process doubles in tests.
#[async_trait]
pub trait MemoStore: Send + Sync {
    /// All memos, newest `updated_at` first.
    async fn list(&self) -> Result<Vec<Memo>, String>;
    /// Insert one row; the store assigns id and timestamps.
    async fn create(&self, form: &MemoForm) -> Result<Memo, String>;
    /// Replace all four mutable fields of the row matching `id`. A missing
    /// row is an error (message contains "not found"), never an empty success.
    async fn update(&self, id: &str, form: &MemoForm) -> Result<Memo, String>;
    /// Hard delete. Deleting an id that does not exist is not an error.
    async fn delete(&self, id: &str) -> Result<(), String>;
}

/// PostgREST-backed implementation over a shared reqwest client.
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// The mutable columns, serialized for insert and update bodies.
#[derive(serde::Serialize)]
struct MemoColumns<'a> {
    title: &'a str,
    content: &'a str,
    category: &'a str,
    tags: &'a [String],
}

impl<'a> MemoColumns<'a> {
    fn from_form(form: &'a MemoForm) -> Self {
        Self {
            title: &form.title,
            content: &form.content,
            category: &form.category,
            tags: form.tags.as_deref().unwrap_or(&[]),
        }
    }
}

impl RestStore {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/memos", self.base_url)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    async fn read_rows(&self, response: reqwest::Response) -> Result<Vec<MemoRow>, String> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read store response: {}", e))?;
        if !status.is_success() {
            return Err(store_error_message(status, &body));
        }
        serde_json::from_str(&body)
            .map_err(|e| format!("Unexpected store response shape: {}", e))
    }
}

/// Pull the `message` field out of a PostgREST error body, falling back to
/// the raw body text.
fn store_error_message(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_else(|| body.trim().to_string());
    format!("Store error ({}): {}", status, detail)
}

#[async_trait]
impl MemoStore for RestStore {
    async fn list(&self) -> Result<Vec<Memo>, String> {
        let response = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "*"), ("order", "updated_at.desc")])
            .send()
            .await
            .map_err(|e| format!("Store request failed: {}", e))?;

        let rows = self.read_rows(response).await?;
        Ok(rows.into_iter().map(Memo::from).collect())
    }

    async fn create(&self, form: &MemoForm) -> Result<Memo, String> {
        let response = self
            .authed(self.client.post(self.table_url()))
            .header("Prefer", "return=representation")
            .query(&[("select", "*")])
            .json(&[MemoColumns::from_form(form)])
            .send()
            .await
            .map_err(|e| format!("Store request failed: {}", e))?;

        let rows = self.read_rows(response).await?;
        rows.into_iter()
            .next()
            .map(Memo::from)
            .ok_or_else(|| "Store returned no row for insert".to_string())
    }

    async fn update(&self, id: &str, form: &MemoForm) -> Result<Memo, String> {
        let response = self
            .authed(self.client.patch(self.table_url()))
            .header("Prefer", "return=representation")
            .query(&[("id", format!("eq.{}", id).as_str()), ("select", "*")])
            .json(&MemoColumns::from_form(form))
            .send()
            .await
            .map_err(|e| format!("Store request failed: {}", e))?;

        let rows = self.read_rows(response).await?;
        rows.into_iter()
            .next()
            .map(Memo::from)
            .ok_or_else(|| format!("Memo not found: {}", id))
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        let response = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("id", format!("eq.{}", id).as_str())])
            .send()
            .await
            .map_err(|e| format!("Store request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            // PostgREST deletes zero rows without complaint.
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(store_error_message(status, &body))
    }
}
