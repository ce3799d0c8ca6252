use crate::error::Error;

/// A buffered body for use with responses.
///
/// Writes append, like writing to a body stream. Includes a few convenience methods for
/// converting to and from body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    bytes: Vec<u8>,
}

impl Body {
    /// Create an empty Body
    pub fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Create a Body from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes Body.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Read a Body into a String. Consumes Body.
    pub fn into_string(self) -> Result<String, Error> {
        Ok(String::from_utf8(self.bytes)?)
    }

    /// Append to the end of the body.
    pub(crate) fn append(&mut self, buf: &[u8]) {
        self.bytes.extend_from_slice(buf);
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Self::from_bytes(s.into_bytes())
    }
}

impl<'a> From<&'a str> for Body {
    fn from(s: &'a str) -> Self {
        Self::from_bytes(s.as_bytes().to_vec())
    }
}
