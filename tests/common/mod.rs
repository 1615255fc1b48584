// SPDX-License-Identifier: MPL-2.0
//! Minimal HTTP responder for fetch tests.

#![allow(dead_code)]

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves `body` with `status` to every connection and returns the base URL.
pub async fn serve(status: u16, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {status} {reason}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {length}\r\n\
                 Connection: close\r\n\r\n{body}",
                reason = reason(status),
                length = body.len(),
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{addr}")
}

/// Returns a URL on a port nothing listens on.
pub async fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    drop(listener);
    format!("http://{addr}/api")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    }
}

pub const GALLERY_JSON: &str = r#"[
    {"url": "https://cdn.example.com/front.jpg"},
    {"url": "https://cdn.example.com/back.jpg"},
    {"url": "https://cdn.example.com/side.jpg"}
]"#;

pub const PRODUCT_JSON: &str = r#"{
    "title": "Daily Greens",
    "rating": 4.6,
    "reviews": 1284,
    "description": "A superfood blend for every morning.",
    "plans": [
        {"id": "single", "label": "Single Flavor", "price": 49.5, "originalPrice": 60},
        {"id": "double", "label": "Double Flavor", "price": 89, "originalPrice": 119.99}
    ],
    "flavors": [
        {"id": "f0", "label": "Mango", "image": ""},
        {"id": "f1", "label": "Berry", "image": ""},
        {"id": "f2", "label": "Lemon", "image": ""}
    ]
}"#;
