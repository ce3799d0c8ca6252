use serde::Serialize;
use serde_json::ser::{CompactFormatter, Formatter, Serializer};
use std::io;

use crate::error::Result;

/// Encode `value` as compact utf-8 json.
///
/// With `escape_slashes`, every `/` inside a string (keys included) is written as `\/`, which
/// keeps a `</script>` in the data from closing an inline script block.
pub(crate) fn to_json<T>(value: &T, escape_slashes: bool) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(128);
    if escape_slashes {
        let mut ser = Serializer::with_formatter(&mut buf, EscapeSlashes);
        value.serialize(&mut ser)?;
    } else {
        let mut ser = Serializer::with_formatter(&mut buf, CompactFormatter);
        value.serialize(&mut ser)?;
    }

    tracing::trace!(len = buf.len(), "json body");
    Ok(buf)
}

struct EscapeSlashes;

impl Formatter for EscapeSlashes {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut parts = fragment.split('/');
        if let Some(first) = parts.next() {
            writer.write_all(first.as_bytes())?;
        }
        for part in parts {
            writer.write_all(b"\\/")?;
            writer.write_all(part.as_bytes())?;
        }
        Ok(())
    }
}
