//! Fluent building of a response inside a handler.
//!
//! A `ResponseBuilder` holds one response value at a time. Each chained call hands the held
//! value to a `ResponseValue` transformation and keeps the result, so a chain like
//!
//! ```
//! # use respond::{Body, Response, ResponseBuilder};
//! # fn main() -> respond::Result<()> {
//! let mut builder = ResponseBuilder::new();
//! builder.set(Response::new(Body::empty()));
//!
//! let resp = builder
//!     .without_server()?
//!     .with_status_created()?
//!     .as_json_utf8(&[1, 2, 3])?
//!     .end()?;
//!
//! assert_eq!(resp.status(), 201);
//! assert_eq!(resp.body().as_bytes(), b"[1,2,3]");
//! # Ok(())
//! # }
//! ```
//!
//! reads top to bottom. The framework usually calls `set` before the handler runs.
//!
//! Nothing here validates input itself: a bad mime string, a compression level out of range,
//! or a value json can't represent all come back as the `Error` of the collaborator that
//! refused it. Json and gzip encoding run before the held response is touched, so their
//! failures leave it in place. A failing `ResponseValue` call consumes the held response and
//! leaves the builder unset. Either way the chain is over.

use http::{
    header::{self, HeaderName, HeaderValue},
    status::StatusCode,
};
use mime::Mime;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::response::{Response, ResponseValue};
use crate::{gzip, json};

const GZIP: &str = "gzip";

/// Builder options.
#[derive(Debug, Clone, Copy)]
pub struct ResponseOpts {
    /// gzip level used when none is given, 0-9
    pub compression_level: u32,
    /// write `/` as `\/` in json output
    pub escape_slashes: bool,
}

impl Default for ResponseOpts {
    fn default() -> Self {
        Self {
            compression_level: gzip::DEFAULT_LEVEL,
            escape_slashes: true,
        }
    }
}

#[derive(Debug)]
pub struct ResponseBuilder<R = Response> {
    response: Option<R>,
    opts: ResponseOpts,
}

impl<R> Default for ResponseBuilder<R> {
    fn default() -> Self {
        Self {
            response: None,
            opts: ResponseOpts::default(),
        }
    }
}

impl<R: ResponseValue> ResponseBuilder<R> {
    /// An empty builder. Call `set` before anything else.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_opts(opts: ResponseOpts) -> Self {
        Self {
            response: None,
            opts,
        }
    }

    pub fn opts(&self) -> &ResponseOpts {
        &self.opts
    }

    // Terminals and access

    /// The held response, if set.
    pub fn get(&self) -> Option<&R> {
        self.response.as_ref()
    }

    /// Same as `get`.
    pub fn response(&self) -> Option<&R> {
        self.get()
    }

    /// Hand out the held response, ending the chain. The builder is unset afterwards.
    pub fn end(&mut self) -> Result<R> {
        self.response.take().ok_or(Error::Unset)
    }

    /// Same as `get`. Reads well mid-chain; the response stays in place.
    pub fn then(&self) -> Option<&R> {
        self.get()
    }

    /// Replace the held response.
    pub fn set(&mut self, response: R) -> &mut Self {
        self.response = Some(response);
        self
    }

    /// Same as `set`.
    pub fn with(&mut self, response: R) -> &mut Self {
        self.set(response)
    }

    fn map<F>(&mut self, f: F) -> Result<&mut Self>
    where
        F: FnOnce(R) -> Result<R>,
    {
        let response = self.response.take().ok_or(Error::Unset)?;
        self.response = Some(f(response)?);
        Ok(self)
    }

    // Terminals with status

    /// 400, no body.
    pub fn bad(&mut self) -> Result<R> {
        self.with_status_bad_request()?.end()
    }

    /// 400, with `content` as a json body.
    pub fn bad_json<T: Serialize + ?Sized>(&mut self, content: &T) -> Result<R> {
        self.with_status_bad_request()?.as_json_utf8(content)?.end()
    }

    /// 200, no body.
    pub fn ok(&mut self) -> Result<R> {
        self.with_status_ok()?.end()
    }

    /// 200, with `content` as a json body.
    pub fn ok_json<T: Serialize + ?Sized>(&mut self, content: &T) -> Result<R> {
        self.with_status_ok()?.as_json_utf8(content)?.end()
    }

    /// 201, no body.
    pub fn created(&mut self) -> Result<R> {
        self.with_status_created()?.end()
    }

    /// 201, with `content` as a json body.
    pub fn created_json<T: Serialize + ?Sized>(&mut self, content: &T) -> Result<R> {
        self.with_status_created()?.as_json_utf8(content)?.end()
    }

    /// 204. Leaves the body alone.
    pub fn no_content(&mut self) -> Result<R> {
        self.with_status_no_content()?.end()
    }

    // Status

    pub fn with_status(&mut self, status: StatusCode) -> Result<&mut Self> {
        self.map(|resp| Ok(resp.with_status(status)))
    }

    pub fn with_status_ok(&mut self) -> Result<&mut Self> {
        self.with_status(StatusCode::OK)
    }

    pub fn with_status_created(&mut self) -> Result<&mut Self> {
        self.with_status(StatusCode::CREATED)
    }

    pub fn with_status_no_content(&mut self) -> Result<&mut Self> {
        self.with_status(StatusCode::NO_CONTENT)
    }

    pub fn with_status_bad_request(&mut self) -> Result<&mut Self> {
        self.with_status(StatusCode::BAD_REQUEST)
    }

    pub fn with_status_unauthorized(&mut self) -> Result<&mut Self> {
        self.with_status(StatusCode::UNAUTHORIZED)
    }

    pub fn with_status_forbidden(&mut self) -> Result<&mut Self> {
        self.with_status(StatusCode::FORBIDDEN)
    }

    // Headers

    /// Adds `content-type: <mime>; charset=<charset>`.
    ///
    /// Adds, does not replace: setting a content type twice leaves two headers.
    pub fn with_header_content_type(&mut self, mime: &str, charset: &str) -> Result<&mut Self> {
        let value = HeaderValue::from_str(&format!("{}; charset={}", mime, charset))?;
        self.with_added_header(header::CONTENT_TYPE, value)
    }

    pub fn with_header_text_utf8(&mut self) -> Result<&mut Self> {
        self.with_header_utf8(&mime::TEXT_PLAIN)
    }

    /// The default content type: `text/html; charset=utf-8`.
    pub fn with_header_html_utf8(&mut self) -> Result<&mut Self> {
        self.with_header_utf8(&mime::TEXT_HTML)
    }

    pub fn with_header_json_utf8(&mut self) -> Result<&mut Self> {
        self.with_header_utf8(&mime::APPLICATION_JSON)
    }

    fn with_header_utf8(&mut self, essence: &Mime) -> Result<&mut Self> {
        self.with_header_content_type(essence.essence_str(), mime::UTF_8.as_str())
    }

    /// Adds `content-encoding: <encoding>`. Adds, does not replace.
    pub fn with_header_content_encoding(&mut self, encoding: &str) -> Result<&mut Self> {
        let value = HeaderValue::from_str(encoding)?;
        self.with_added_header(header::CONTENT_ENCODING, value)
    }

    fn with_added_header(&mut self, name: HeaderName, value: HeaderValue) -> Result<&mut Self> {
        self.map(|resp| Ok(resp.with_added_header(name, value)))
    }

    pub fn with_header_gziped(&mut self) -> Result<&mut Self> {
        self.with_header_content_encoding(GZIP)
    }

    /// Drop the `server` header.
    pub fn without_server(&mut self) -> Result<&mut Self> {
        self.without_header(header::SERVER)
    }

    /// Drop the `x-powered-by` header.
    pub fn without_x_powered_by(&mut self) -> Result<&mut Self> {
        self.without_header(HeaderName::from_static("x-powered-by"))
    }

    fn without_header(&mut self, name: HeaderName) -> Result<&mut Self> {
        self.map(|resp| {
            tracing::debug!(header = %name, "without header");
            Ok(resp.without_header(&name))
        })
    }

    // Body

    /// Write `body` as is.
    pub fn with_body<B: AsRef<[u8]>>(&mut self, body: B) -> Result<&mut Self> {
        self.map(|resp| resp.write(body.as_ref()))
    }

    /// Write `body` gzip compressed at the configured level. Headers are untouched.
    pub fn with_body_gziped<B: AsRef<[u8]>>(&mut self, body: B) -> Result<&mut Self> {
        let level = self.opts.compression_level;
        self.with_body_gziped_level(body, level)
    }

    pub fn with_body_gziped_level<B: AsRef<[u8]>>(
        &mut self,
        body: B,
        level: u32,
    ) -> Result<&mut Self> {
        if self.response.is_none() {
            return Err(Error::Unset);
        }
        let compressed = gzip::compress(body.as_ref(), level)?;
        self.with_body(compressed)
    }

    // Header and body together

    /// Json content type, then `value` encoded as the body.
    pub fn as_json_utf8<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        let body = json::to_json(value, self.opts.escape_slashes)?;
        self.with_header_json_utf8()?.with_body(body)
    }

    /// Gzip content encoding, then `body` compressed at the configured level.
    pub fn as_gziped<B: AsRef<[u8]>>(&mut self, body: B) -> Result<&mut Self> {
        let level = self.opts.compression_level;
        self.as_gziped_level(body, level)
    }

    pub fn as_gziped_level<B: AsRef<[u8]>>(&mut self, body: B, level: u32) -> Result<&mut Self> {
        let compressed = gzip::compress(body.as_ref(), level)?;
        self.with_header_gziped()?.with_body(compressed)
    }

    /// Json content type and gzip content encoding, then `value` encoded and compressed.
    pub fn as_gziped_json_utf8<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<&mut Self> {
        let level = self.opts.compression_level;
        self.as_gziped_json_utf8_level(value, level)
    }

    pub fn as_gziped_json_utf8_level<T: Serialize + ?Sized>(
        &mut self,
        value: &T,
        level: u32,
    ) -> Result<&mut Self> {
        let body = json::to_json(value, self.opts.escape_slashes)?;
        let compressed = gzip::compress(&body, level)?;
        self.with_header_json_utf8()?
            .with_header_gziped()?
            .with_body(compressed)
    }
}
