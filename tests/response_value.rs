//! The builder over a response type other than `http::Response`.

use http::{
    header::{HeaderName, HeaderValue},
    StatusCode,
};
use respond::{Error, ResponseBuilder, ResponseValue};

/// Response that logs every transformation, and refuses writes once sealed.
#[derive(Debug, Default)]
struct Recorded {
    ops: Vec<String>,
    sealed: bool,
}

impl ResponseValue for Recorded {
    fn with_status(mut self, status: StatusCode) -> Self {
        self.ops.push(format!("status {}", status.as_u16()));
        self
    }

    fn with_added_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        let op = format!("add {}: {}", name, value.to_str().unwrap());
        self.ops.push(op);
        self
    }

    fn without_header(mut self, name: &HeaderName) -> Self {
        self.ops.push(format!("remove {}", name));
        self
    }

    fn write(mut self, buf: &[u8]) -> respond::Result<Self> {
        if self.sealed {
            return Err(Error::BodyWrite(std::io::Error::new(
                std::io::ErrorKind::Other,
                "body sealed",
            )));
        }
        self.ops.push(format!("write {}", buf.len()));
        Ok(self)
    }
}

#[test]
fn test_gziped_json_order() {
    let mut builder = ResponseBuilder::new();
    builder.set(Recorded::default());

    let resp = builder
        .without_server()
        .unwrap()
        .with_status_ok()
        .unwrap()
        .as_gziped_json_utf8(&"x")
        .unwrap()
        .end()
        .unwrap();

    assert_eq!(resp.ops.len(), 5);
    assert_eq!(
        &resp.ops[..4],
        &[
            "remove server",
            "status 200",
            "add content-type: application/json; charset=utf-8",
            "add content-encoding: gzip",
        ]
    );
    assert!(resp.ops[4].starts_with("write "));
}

#[test]
fn test_failed_write_unsets() {
    let mut builder = ResponseBuilder::new();
    builder.set(Recorded {
        ops: Vec::new(),
        sealed: true,
    });

    let res = builder.ok_json(&[1, 2]);
    assert!(matches!(res, Err(Error::BodyWrite(_))));
    assert!(builder.get().is_none());
}
