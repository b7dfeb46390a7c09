//! Common test utilities for integration tests.

use std::{
    convert::Infallible,
    future::{ready, Future},
    sync::Mutex,
};

use cloud_bindings::dns::HttpTransport;
use http::{Request, Response, StatusCode};

/// Transport that records every request and answers with a canned response.
pub struct RecordingTransport {
    status: StatusCode,
    body: Vec<u8>,
    requests: Mutex<Vec<Request<Vec<u8>>>>,
}

impl RecordingTransport {
    pub fn responding(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        RecordingTransport {
            status,
            body: body.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Drain the requests seen so far.
    pub fn take_requests(&self) -> Vec<Request<Vec<u8>>> {
        std::mem::take(&mut *self.requests.lock().expect("request log poisoned"))
    }
}

impl HttpTransport for RecordingTransport {
    type Error = Infallible;

    fn send(
        &self,
        request: Request<Vec<u8>>,
    ) -> impl Future<Output = Result<Response<Vec<u8>>, Self::Error>> + Send {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request);
        let response = Response::builder()
            .status(self.status)
            .body(self.body.clone())
            .expect("canned response should build");
        ready(Ok(response))
    }
}

/// Transport whose every call fails.
pub struct FailingTransport;

impl HttpTransport for FailingTransport {
    type Error = std::io::Error;

    fn send(
        &self,
        _request: Request<Vec<u8>>,
    ) -> impl Future<Output = Result<Response<Vec<u8>>, Self::Error>> + Send {
        ready(Err(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}
