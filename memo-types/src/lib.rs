//! Shared types for the memo service and its HTTP clients.

use serde::{Deserialize, Serialize};

// =====================================================
// Domain Types
// =====================================================

/// A memo as clients see it (camelCase, tags never null).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A memo row as the remote table returns it (snake_case, nullable tags).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoRow {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MemoRow> for Memo {
    fn from(row: MemoRow) -> Self {
        Memo {
            id: row.id,
            title: row.title,
            content: row.content,
            category: row.category,
            tags: row.tags.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// The four mutable fields, accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoForm {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    pub tags: Option<Vec<String>>,
}

// =====================================================
// Request / Response Envelopes
// =====================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct MemoEnvelope {
    pub memo: Memo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MemoListEnvelope {
    pub memos: Vec<Memo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteAck {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryEnvelope {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub running: bool,
    pub uptime_secs: u64,
}
