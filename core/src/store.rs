//! Client-side snapshot of the remote post collection.
//!
//! # Design
//! `PostStore` owns a transport and the snapshot. Every operation runs a
//! full build-execute-parse round-trip; the snapshot changes only on a
//! successful response, so any failure leaves it at the last known-good
//! value. Create and update never touch `items` themselves — callers
//! reconcile with `refresh`, which replaces the sequence wholesale in
//! server response order. Delete is the one local mutation: once the
//! service has acknowledged the delete, re-querying it to learn the item
//! is gone would be a wasted round-trip.
//!
//! Failures of all three classes (transport, non-2xx status, decode) are
//! logged here at the store boundary and returned to the caller; none are
//! retried.

use log::{debug, error};
use uuid::Uuid;

use crate::client::BlogClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::{Post, PostDraft};

/// Interactive confirmation gate consulted before a delete is issued.
///
/// The blocking yes/no prompt lives in the UI; the store only enforces
/// that no delete proceeds without an affirmative answer.
pub trait DeleteGate {
    fn confirm(&self, id: Uuid) -> bool;
}

/// Result of a confirmed or declined delete attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The service acknowledged the delete and the post left the snapshot.
    Deleted,
    /// The gate declined; nothing was sent and nothing changed.
    Declined,
}

/// In-memory view of the post collection, synchronized via [`refresh`].
///
/// Constructed once at application start and passed by handle to whatever
/// renders it; there is no global instance.
///
/// [`refresh`]: PostStore::refresh
pub struct PostStore<T: Transport> {
    client: BlogClient,
    transport: T,
    items: Vec<Post>,
}

impl<T: Transport> PostStore<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            client: BlogClient::new(base_url),
            transport,
            items: Vec::new(),
        }
    }

    /// The snapshot as of the last successful refresh, in server response
    /// order.
    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn find(&self, id: Uuid) -> Option<&Post> {
        self.items.iter().find(|post| post.id == id)
    }

    /// Fetch the full collection and replace the snapshot wholesale.
    ///
    /// On any failure the snapshot is left unchanged and the error is
    /// logged and returned; no retry is attempted.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let request = self.client.build_list_posts();
        let outcome = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_list_posts(response),
            Err(err) => Err(err.into()),
        };
        match outcome {
            Ok(posts) => {
                debug!("refreshed snapshot: {} posts", posts.len());
                self.items = posts;
                Ok(())
            }
            Err(err) => {
                error!("error fetching blogs: {err}");
                Err(err)
            }
        }
    }

    /// Persist a new post. Returns the server-assigned post on success.
    ///
    /// The snapshot is not modified here; the caller is expected to
    /// [`refresh`](PostStore::refresh) afterward.
    pub async fn create(&self, draft: &PostDraft) -> Result<Post, ApiError> {
        let outcome = match self.client.build_create_post(draft) {
            Ok(request) => match self.transport.execute(request).await {
                Ok(response) => self.client.parse_create_post(response),
                Err(err) => Err(err.into()),
            },
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            error!("error creating blog: {err}");
        }
        outcome
    }

    /// Send a full field replacement for `id`. Success carries no body;
    /// the caller refreshes to observe the change.
    pub async fn update(&self, id: Uuid, draft: &PostDraft) -> Result<(), ApiError> {
        let outcome = match self.client.build_update_post(id, draft) {
            Ok(request) => match self.transport.execute(request).await {
                Ok(response) => self.client.parse_update_post(response),
                Err(err) => Err(err.into()),
            },
            Err(err) => Err(err),
        };
        if let Err(err) = &outcome {
            error!("error updating blog {id}: {err}");
        }
        outcome
    }

    /// Delete `id` after consulting the confirmation gate.
    ///
    /// A declined gate aborts with no side effects and no network call.
    /// On confirmed success the post is removed from the snapshot by id
    /// equality, without a refresh. On failure the snapshot is unchanged.
    pub async fn delete(&mut self, id: Uuid, gate: &dyn DeleteGate) -> Result<DeleteOutcome, ApiError> {
        if !gate.confirm(id) {
            debug!("delete of {id} declined by user");
            return Ok(DeleteOutcome::Declined);
        }
        let request = self.client.build_delete_post(id);
        let outcome = match self.transport.execute(request).await {
            Ok(response) => self.client.parse_delete_post(response),
            Err(err) => Err(err.into()),
        };
        match outcome {
            Ok(()) => {
                self.items.retain(|post| post.id != id);
                Ok(DeleteOutcome::Deleted)
            }
            Err(err) => {
                error!("error deleting blog {id}: {err}");
                Err(err)
            }
        }
    }
}
