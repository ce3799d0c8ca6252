use http::{
    header::{HeaderName, HeaderValue},
    status::StatusCode,
    Response as HttpResponse,
};

use crate::body::Body;
use crate::error::Result;

/// Currently, Response is not generic over Body type
pub type Response = HttpResponse<Body>;

/// An http response treated as a value.
///
/// Every method consumes the response and returns the changed one, so a caller holding an
/// older value never sees it change underneath them. This is the surface `ResponseBuilder`
/// needs; implement it to drive the builder over another response type.
pub trait ResponseValue: Sized {
    /// Replace the status. The reason phrase is the status code's canonical one.
    fn with_status(self, status: StatusCode) -> Self;

    /// Append a header value, keeping any values already under `name`.
    fn with_added_header(self, name: HeaderName, value: HeaderValue) -> Self;

    /// Remove all values under `name`. Absent headers are not an error.
    fn without_header(self, name: &HeaderName) -> Self;

    /// Write bytes to the end of the body. Implementations backed by a stream or a sealed
    /// body report refusal as `Error::BodyWrite`.
    fn write(self, buf: &[u8]) -> Result<Self>;
}

impl ResponseValue for Response {
    fn with_status(mut self, status: StatusCode) -> Self {
        *self.status_mut() = status;
        self
    }

    fn with_added_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers_mut().append(name, value);
        self
    }

    fn without_header(mut self, name: &HeaderName) -> Self {
        self.headers_mut().remove(name);
        self
    }

    /// Never fails: the body is an in-memory buffer.
    fn write(mut self, buf: &[u8]) -> Result<Self> {
        self.body_mut().append(buf);
        Ok(self)
    }
}
