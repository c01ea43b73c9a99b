#![allow(dead_code)]

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::thread;

use sdump::clients::{Endpoints, SpotifyClient};
use serde_json::{Value, json};
use tiny_http::{Header, Response, Server};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub url: String,
    pub host: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    /// Absolute URL on the same server for `path`
    pub fn same_origin(&self, path: &str) -> String {
        format!("http://{}{path}", self.host.as_deref().unwrap_or("localhost"))
    }

    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    pub fn query(&self, key: &str) -> Option<String> {
        let (_, query) = self.url.split_once('?')?;
        query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }

    pub fn offset(&self) -> usize {
        self.query("offset")
            .and_then(|o| o.parse().ok())
            .unwrap_or(0)
    }
}

/// Local HTTP server answering every request through `handler`
pub struct MockServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    pub fn start<F>(handler: F) -> MockServer
    where
        F: Fn(&RecordedRequest) -> (u16, String) + Send + 'static,
    {
        let server = Server::http("127.0.0.1:0").expect("mock server should bind");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock server should listen on tcp");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        thread::spawn(move || {
            for mut request in server.incoming_requests() {
                let mut body = String::new();
                let _ = request.as_reader().read_to_string(&mut body);
                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv(name))
                        .map(|h| h.value.as_str().to_string())
                };
                let host = header("Host");
                let authorization = header("Authorization");
                let incoming = RecordedRequest {
                    method: request.method().to_string(),
                    url: request.url().to_string(),
                    host,
                    authorization,
                    body,
                };

                let (status, payload) = handler(&incoming);
                recorded.lock().unwrap().push(incoming);

                let content_type =
                    Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
                let response = Response::from_string(payload)
                    .with_status_code(status)
                    .with_header(content_type);
                let _ = request.respond(response);
            }
        });

        MockServer {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(self.base_url.clone(), self.url("/v1"))
    }

    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::new(self.endpoints()).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

pub fn ok(body: Value) -> (u16, String) {
    (200, body.to_string())
}

pub fn playlist(name: &str, id: &str, href: &str) -> Value {
    json!({ "name": name, "id": id, "tracks": { "href": href } })
}

pub fn playlist_track(name: &str, artist: &str) -> Value {
    json!({ "track": { "name": name, "artists": [{ "name": artist }] } })
}

pub fn page(items: &[Value], total: usize) -> Value {
    json!({ "items": items, "total": total })
}

/// Serves `items` from `offset` in pages of at most `page_size`
pub fn paged(items: &[Value], offset: usize, page_size: usize) -> Value {
    let start = offset.min(items.len());
    let end = (start + page_size).min(items.len());
    page(&items[start..end], items.len())
}
