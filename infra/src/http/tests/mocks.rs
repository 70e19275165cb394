//! Scripted transport for exercising the client without a network.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::http::transport::{
    HttpTransport, TransportError, TransportRequest, TransportResponse,
};

/// Transport replaying a fixed script of outcomes
///
/// Each executed request pops the next scripted outcome and is recorded
/// for later inspection. Running past the end of the script is a test bug
/// and panics.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<TransportResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn request(&self, index: usize) -> TransportRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport script exhausted")
    }
}

/// Shorthand for a scripted JSON response
pub fn json_response(status: u16, body: &str) -> Result<TransportResponse, TransportError> {
    Ok(TransportResponse::new(status, body))
}

/// Transport whose requests never complete
///
/// Counts executions, then parks forever; the attempt only ends when the
/// client's own timeout cancels it.
pub struct HangingTransport {
    calls: Mutex<usize>,
}

impl HangingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(0),
        })
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl HttpTransport for HangingTransport {
    async fn execute(
        &self,
        _request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        *self.calls.lock().unwrap() += 1;
        std::future::pending().await
    }
}
