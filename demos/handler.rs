use http::{header, StatusCode};
use respond::{Body, Response, ResponseBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct User {
    id: u64,
    name: String,
    homepage: String,
}

// What a framework would do before and after a handler: hand over a fresh response, then
// send whatever comes back.
fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    for path in &["/users/5", "/users/5.gz", "/users/x", "/ping"] {
        let mut resp_bldr = ResponseBuilder::new();
        let mut resp = Response::new(Body::empty());
        let server: header::HeaderValue = "respond-demo".parse()?;
        resp.headers_mut().insert(header::SERVER, server);
        resp_bldr.set(resp);

        let resp = handle(path, &mut resp_bldr)?;
        print(path, &resp);
    }

    Ok(())
}

fn handle(path: &str, resp_bldr: &mut ResponseBuilder) -> respond::Result<Response> {
    resp_bldr.without_server()?;

    let user = |id| User {
        id,
        name: "walther".to_owned(),
        homepage: "https://example.org/~walther".to_owned(),
    };

    match path {
        "/ping" => resp_bldr.no_content(),
        "/users/5" => resp_bldr.ok_json(&user(5)),
        "/users/5.gz" => resp_bldr
            .with_status_ok()?
            .as_gziped_json_utf8_level(&user(5), 9)?
            .end(),
        _ => resp_bldr.bad_json(&["no such user"]),
    }
}

fn print(path: &str, resp: &Response) {
    println!("{} -> {}", path, resp.status());
    for (name, value) in resp.headers() {
        println!("  {}: {:?}", name, value);
    }
    match resp.headers().get(header::CONTENT_ENCODING) {
        Some(_) => println!("  <{} compressed bytes>", resp.body().len()),
        None => println!("  {}", String::from_utf8_lossy(resp.body().as_bytes())),
    }
    if resp.status() == StatusCode::NO_CONTENT {
        println!("  (no content)");
    }
}
