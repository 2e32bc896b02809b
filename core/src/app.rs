//! Wires the post store and the form session together.
//!
//! # Design
//! The UI talks only to `BlogApp`. The one nontrivial piece is the submit
//! contract: a valid submission runs the mutating call, then resets the
//! form, then refreshes — in that order, and the reset and refresh happen
//! even when the mutation failed. The list therefore always shows latest
//! server truth after a submit attempt, and the form never stays open
//! with stale data.

use uuid::Uuid;

use crate::error::ApiError;
use crate::form::{FormSession, SubmitAction};
use crate::http::Transport;
use crate::store::{DeleteGate, DeleteOutcome, PostStore};
use crate::types::Post;

/// Application state: one store, one form, constructed at startup.
pub struct BlogApp<T: Transport> {
    store: PostStore<T>,
    form: FormSession,
}

impl<T: Transport> BlogApp<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            store: PostStore::new(base_url, transport),
            form: FormSession::new(),
        }
    }

    pub fn posts(&self) -> &[Post] {
        self.store.items()
    }

    pub fn form(&self) -> &FormSession {
        &self.form
    }

    /// Mutable access for field input while the form is open.
    pub fn form_mut(&mut self) -> &mut FormSession {
        &mut self.form
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.store.refresh().await
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Enter edit mode for a post in the current snapshot.
    ///
    /// An id that is not in the snapshot (a stale click) is a no-op; the
    /// form only ever opens with a draft copied from a known post.
    pub fn open_edit(&mut self, id: Uuid) -> bool {
        let Some(post) = self.store.find(id).cloned() else {
            return false;
        };
        self.form.open_edit(&post);
        true
    }

    /// Close the form without submitting. The store is untouched.
    pub fn cancel(&mut self) {
        self.form.reset();
    }

    /// Run the submit contract.
    ///
    /// Returns `false` when validation rejects the submission: nothing is
    /// sent and the form keeps its state. Otherwise the create or update
    /// is issued, and regardless of its outcome the form is reset and the
    /// snapshot refreshed; failures were already reported at the store
    /// boundary.
    pub async fn submit(&mut self) -> bool {
        let Some(action) = self.form.action() else {
            return false;
        };
        match action {
            SubmitAction::Create(draft) => {
                let _ = self.store.create(&draft).await;
            }
            SubmitAction::Update(id, draft) => {
                let _ = self.store.update(id, &draft).await;
            }
        }
        self.form.reset();
        let _ = self.store.refresh().await;
        true
    }

    pub async fn delete(&mut self, id: Uuid, gate: &dyn DeleteGate) -> Result<DeleteOutcome, ApiError> {
        self.store.delete(id, gate).await
    }
}
