//! # Photo Gallery Demo
//!
//! Seeds a gallery, registers it as RESTful resources and replays a handful of
//! requests against the in-memory host, logging every response.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run   # also shows route mapping and matches
//! ```

use http::header::{HeaderValue, ACCEPT};
use http::Method;
use photo_sample::routes::build_app;
use photo_sample::store::PhotoStore;
use rest_resource::tracing::setup_tracing;
use rest_resource::Request;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() {
    setup_tracing();

    let store = PhotoStore::new();
    let sunset = async {
        let sunset = store.insert("Sunset").await;
        store.insert("Harbour").await;
        store.comment(sunset.id, "Lovely colours").await;
        sunset
    }
    .instrument(tracing::info_span!("seeding"))
    .await;

    let app = build_app(store);
    for route in app.route_table() {
        info!(%route, "Registered");
    }

    let requests = vec![
        Request::new(Method::GET, "/photos.json"),
        Request::new(Method::GET, "/photos").with_header(ACCEPT, HeaderValue::from_static("text/html")),
        Request::new(Method::GET, format!("/photos/{}.html", sunset.id)),
        Request::new(Method::GET, format!("/photos/{}", sunset.id))
            .with_header(ACCEPT, HeaderValue::from_static("application/json")),
        Request::new(Method::GET, format!("/photos/{}/title", sunset.id)),
        Request::new(Method::GET, format!("/photos/{}/comments", sunset.id)),
        Request::new(Method::GET, "/photos/99"),
        Request::new(Method::GET, "/photos/abc"),
        Request::new(Method::DELETE, format!("/photos/{}", sunset.id)),
        Request::new(Method::GET, "/photos.json"),
    ];

    for req in requests {
        let span = tracing::info_span!("request", method = %req.method(), path = req.path());
        let res = app.dispatch(req).instrument(span.clone()).await;
        let _enter = span.enter();
        if res.status().is_success() {
            info!(status = %res.status(), body = res.body(), "Response");
        } else {
            warn!(status = %res.status(), body = res.body(), "Response");
        }
    }

    info!("Demo completed");
}
