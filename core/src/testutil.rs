//! Shared test doubles: a scripted transport and canned response bodies.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use uuid::Uuid;

use crate::http::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::store::DeleteGate;

/// Transport that replays scripted responses and records every request.
///
/// Cloning shares the script and the request log, so tests keep a handle
/// while the store owns its own copy.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: VecDeque<Result<HttpResponse, TransportError>>,
    requests: Vec<HttpRequest>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_ok(&self, status: u16, body: &str) {
        self.inner.borrow_mut().responses.push_back(Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }));
    }

    pub(crate) fn push_transport_err(&self, message: &str) {
        self.inner
            .borrow_mut()
            .responses
            .push_back(Err(TransportError::new(message)));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.inner.borrow().requests.clone()
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::new("no scripted response left")))
    }
}

/// Gate with a fixed answer, standing in for the interactive prompt.
pub(crate) enum Gate {
    Approve,
    Decline,
}

impl DeleteGate for Gate {
    fn confirm(&self, _id: Uuid) -> bool {
        matches!(self, Gate::Approve)
    }
}

/// Stable id for test fixtures, derived from a small number.
pub(crate) fn test_id(n: u32) -> Uuid {
    Uuid::from_u128(n as u128)
}

/// JSON body of a single post in the service's wire shape.
pub(crate) fn post_json(n: u32, title: &str, content: &str, author: &str) -> String {
    format!(
        r#"{{"id":"{}","title":"{title}","content":"{content}","author":"{author}","createdAt":"2024-05-01T12:00:00Z"}}"#,
        test_id(n)
    )
}

/// JSON body of a post collection, in the given order.
pub(crate) fn posts_json(posts: &[(u32, &str, &str, &str)]) -> String {
    let items: Vec<String> = posts
        .iter()
        .map(|(n, title, content, author)| post_json(*n, title, content, author))
        .collect();
    format!("[{}]", items.join(","))
}
