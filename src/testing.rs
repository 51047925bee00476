// src/testing.rs
// =============================================================================
// Shared fixtures for unit tests: a repository builder, an in-memory
// GithubApi and a tiny local HTTP server. Only compiled for `cargo test`.
// =============================================================================

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use url::Url;

use crate::github::{FetchError, GithubApi, Profile, RepositoryRecord};

// A real reqwest::Error without touching the network:
// building a request for an unparseable URL fails immediately.
pub fn offline_error() -> FetchError {
    let source = Client::new().get("not a url").build().unwrap_err();
    FetchError::Transport {
        url: "not a url".to_string(),
        source,
    }
}

pub fn repo(name: &str, stars: u64) -> RepositoryRecord {
    RepositoryRecord {
        name: name.to_string(),
        html_url: format!("https://github.com/someone/{name}"),
        homepage: None,
        description: Some(format!("{name} description")),
        language: Some("Rust".to_string()),
        stargazers_count: stars,
        forks_count: 0,
        fork: false,
        topics: Vec::new(),
        updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn fork(name: &str, stars: u64) -> RepositoryRecord {
    RepositoryRecord {
        fork: true,
        ..repo(name, stars)
    }
}

pub fn updated(name: &str, year: i32, month: u32, day: u32) -> RepositoryRecord {
    RepositoryRecord {
        updated_at: Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap(),
        ..repo(name, 0)
    }
}

pub fn names<'a, I>(repos: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    repos.into_iter().map(|r| r.name.as_str()).collect()
}

pub enum Reply {
    Found(RepositoryRecord),
    NotFound,
    Offline,
}

// Answers from a map and counts repository calls
#[derive(Default)]
pub struct FakeApi {
    pub repos: HashMap<String, Reply>,
    pub listing: Option<Vec<RepositoryRecord>>,
    pub profile: Option<Profile>,
    pub calls: AtomicUsize,
}

impl FakeApi {
    pub fn with(mut self, name: &str, reply: Reply) -> Self {
        self.repos.insert(name.to_string(), reply);
        self
    }
}

#[async_trait]
impl GithubApi for FakeApi {
    async fn repository(&self, _account: &str, name: &str) -> Result<Option<RepositoryRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.repos.get(name) {
            Some(Reply::Found(repo)) => Ok(Some(repo.clone())),
            Some(Reply::NotFound) | None => Ok(None),
            Some(Reply::Offline) => Err(offline_error()),
        }
    }

    async fn account_repositories(&self, account: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.listing.clone().ok_or_else(|| FetchError::Status {
            url: format!("/users/{account}/repos"),
            status: 404,
        })
    }

    async fn profile(&self, _account: &str) -> Result<Profile, FetchError> {
        self.profile.clone().ok_or_else(offline_error)
    }
}

// Minimal HTTP/1.1 server on 127.0.0.1 for exercising HttpApi for real.
// Answers each request from a (path+query → status, body) table, 404 otherwise,
// and remembers every request head it saw.
pub struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start(routes: Vec<(&str, u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let routes: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(path, status, body)| (path.to_string(), (status, body)))
            .collect();
        let seen = Arc::clone(&requests);

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                let head = read_head(&mut socket).await;
                let target = head.split_whitespace().nth(1).unwrap_or_default().to_string();
                seen.lock().unwrap().push(head);

                let (status, body) = routes
                    .get(&target)
                    .cloned()
                    .unwrap_or((404, r#"{"message":"Not Found"}"#.to_string()));
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { addr, requests }
    }

    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).unwrap()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

// Reads up to the blank line that ends the request head (GETs have no body)
async fn read_head(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
