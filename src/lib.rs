#![deny(unsafe_code)]

//! # respond
//!
//! A fluent builder for http responses.
//!
//! - a `respond::Response` is just an alias for an `http::Response<Body>`, where `Body` is a
//! buffered body that grows with each write.
//! - `ResponseBuilder` holds one response and chains status, header and body changes onto it,
//! ending with the response to return from a handler.
//! - bodies can be written raw, as json (`serde`), or gzip compressed (`flate2`).
//! - any type implementing `ResponseValue` can stand in for `Response`.

mod body;
mod builder;
mod error;
mod gzip;
mod json;
mod response;

pub use body::Body;
pub use builder::{ResponseBuilder, ResponseOpts};
pub use error::{Error, Result};
pub use http;
pub use mime;
pub use response::{Response, ResponseValue};
