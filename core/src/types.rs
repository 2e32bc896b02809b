//! Domain DTOs for the blog API.
//!
//! # Design
//! These types mirror the service schema but are defined independently of
//! the mock-server crate; the integration tests catch schema drift. The
//! wire format uses camelCase (`createdAt`), mapped here via serde rename.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A server-confirmed blog post as returned by the API.
///
/// `id` and `created_at` are assigned by the service and immutable; a post
/// that has not been persisted yet exists only as a [`PostDraft`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The client-supplied fields of a post.
///
/// Serves as the request body for both create and update (update is a full
/// field replacement) and as the form's in-progress values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl PostDraft {
    /// True when every field is non-empty. Emptiness check only; a
    /// whitespace-only field counts as filled.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.content.is_empty() && !self.author.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
        self.author.clear();
    }
}

impl From<&Post> for PostDraft {
    /// Independent copy of the editable fields, taken at edit-entry time.
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
        }
    }
}
