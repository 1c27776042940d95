//! Scripted in-memory transport shared by the net and session unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::net::client::{ApiError, ApiRequest, ApiResponse, Transport};

/// One recorded transport call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Transport fake that replays a scripted response queue and records every
/// call it sees. An exhausted script answers `200 {}`.
#[derive(Clone, Default)]
pub struct FakeTransport {
    calls: Rc<RefCell<Vec<RecordedCall>>>,
    script: Rc<RefCell<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn push_err(&self, err: ApiError) {
        self.script.borrow_mut().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, path: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.path == path).count()
    }
}

impl Transport for FakeTransport {
    async fn execute(
        &self,
        req: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, ApiError> {
        self.calls.borrow_mut().push(RecordedCall {
            path: req.path.clone(),
            bearer: bearer.map(str::to_owned),
            body: req.body.clone(),
        });
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: "{}".to_owned() }))
    }
}
