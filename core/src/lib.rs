//! Client core for the blog service.
//!
//! # Overview
//! Keeps an in-memory snapshot of the remote post collection in sync with
//! the server across create/update/delete, and drives the single
//! create-or-edit form as an explicit state machine.
//!
//! # Design
//! - `BlogClient` is stateless — it builds `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network.
//! - `PostStore` owns a `Transport` implementation and executes the actual
//!   round-trips; its snapshot only ever changes on a successful response.
//! - Mutations are reconciled by a full refresh rather than by merging
//!   returned bodies, so the snapshot never holds shapes the list endpoint
//!   did not produce. Delete is the one local mutation.
//! - `FormSession` holds the draft as an independent copy; a refresh that
//!   lands while the form is open never touches an open draft.
//! - `BlogApp` ties the two together and owns the submit contract.

pub mod app;
pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use app::BlogApp;
pub use client::BlogClient;
pub use error::ApiError;
pub use form::{FormSession, Mode, SubmitAction};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use store::{DeleteGate, DeleteOutcome, PostStore};
pub use types::{Post, PostDraft};
