//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;

use anidle::anilist::FetchError;
use anidle::models::{MediaFormat, WatchEntry};
use anidle::pool::ListSource;
use tempfile::TempDir;

/// In-memory watch lists keyed by username
#[derive(Default)]
pub struct FakeSource {
    lists: HashMap<String, Result<Vec<WatchEntry>, FetchError>>,
    calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(mut self, user: &str, entries: Vec<WatchEntry>) -> Self {
        self.lists.insert(user.to_string(), Ok(entries));
        self
    }

    pub fn with_failure(mut self, user: &str, error: FetchError) -> Self {
        self.lists.insert(user.to_string(), Err(error));
        self
    }

    /// Users fetched so far, sorted
    pub fn calls(&self) -> Vec<String> {
        let mut calls = self.calls.lock().unwrap().clone();
        calls.sort();
        calls
    }
}

impl ListSource for FakeSource {
    fn fetch_entries(&self, user: &str) -> Result<Vec<WatchEntry>, FetchError> {
        self.calls.lock().unwrap().push(user.to_string());
        self.lists
            .get(user)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Status { status: 404, message: "Not Found.".into() }))
    }
}

/// Builder for watch-list entries
pub struct EntryBuilder {
    entry: WatchEntry,
}

impl EntryBuilder {
    /// A TV entry on the CURRENT list with no year or popularity
    pub fn new(id: i64) -> Self {
        Self {
            entry: WatchEntry {
                id,
                format: Some(MediaFormat::Tv),
                status: "CURRENT".to_string(),
                year: None,
                popularity: None,
            },
        }
    }

    pub fn format(mut self, format: Option<MediaFormat>) -> Self {
        self.entry.format = format;
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.entry.status = status.to_string();
        self
    }

    pub fn year(mut self, year: i64) -> Self {
        self.entry.year = Some(year);
        self
    }

    pub fn popularity(mut self, popularity: i64) -> Self {
        self.entry.popularity = Some(popularity);
        self
    }

    pub fn build(self) -> WatchEntry {
        self.entry
    }
}

/// TV/CURRENT entries with the given ids
pub fn current_entries(ids: &[i64]) -> Vec<WatchEntry> {
    ids.iter().map(|id| EntryBuilder::new(*id).build()).collect()
}

/// Builder for a temporary config directory
pub struct ConfigDirBuilder {
    temp_dir: TempDir,
}

impl ConfigDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write settings.json verbatim
    pub fn with_settings(self, json: &str) -> Self {
        fs::write(self.temp_dir.path().join("settings.json"), json)
            .expect("Failed to write settings.json");
        self
    }

    /// Write catalog.json verbatim
    pub fn with_catalog(self, json: &str) -> Self {
        fs::write(self.catalog_path(), json).expect("Failed to write catalog.json");
        self
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.temp_dir.path().join("catalog.json")
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ConfigDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Small catalog covering the ranking cases used across tests
pub const SAMPLE_CATALOG: &str = r#"[
  {"id": 16498, "romaji": "Shingeki no Kyojin", "english": "Attack on Titan"},
  {"id": 1, "romaji": "Cowboy Bebop", "english": "Cowboy Bebop"},
  {"id": 5114, "romaji": "Hagane no Renkinjutsushi: FULLMETAL ALCHEMIST", "english": "Fullmetal Alchemist: Brotherhood"},
  {"id": 20, "romaji": "NARUTO", "english": "Naruto"},
  {"id": 21, "romaji": "ONE PIECE", "english": ""}
]"#;

/// Canned reply for requests whose body contains `needle`
pub struct Route {
    pub needle: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn new(needle: &str, status: u16, body: &str) -> Self {
        Self { needle: needle.to_string(), status, body: body.to_string() }
    }
}

/// Minimal HTTP/1.1 server answering POSTs from a fixed route table.
///
/// The first route whose needle appears in the request body wins; anything
/// else gets a 500. Every response closes the connection.
pub struct MockServer {
    pub url: String,
}

impl MockServer {
    pub fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Failed to read mock server address");

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let _ = handle_connection(stream, &routes);
            }
        });

        Self { url: format!("http://{}/", addr) }
    }
}

fn handle_connection(mut stream: TcpStream, routes: &[Route]) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut content_length = 0;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':')
            && name.eq_ignore_ascii_case("content-length")
        {
            content_length = value.trim().parse().unwrap_or(0);
        }
    }

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body)?;
    let body = String::from_utf8_lossy(&body);

    let (status, reply) = routes
        .iter()
        .find(|route| body.contains(&route.needle))
        .map(|route| (route.status, route.body.as_str()))
        .unwrap_or((500, r#"{"errors":[{"message":"no route"}]}"#));

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        reply.len(),
        reply
    );
    stream.write_all(response.as_bytes())?;
    stream.flush()
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        _ => "Internal Server Error",
    }
}

/// AniList-shaped MediaListCollection body for `(id, format, status, year, popularity)` rows
pub fn media_list_body(rows: &[(i64, &str, &str, Option<i64>, Option<i64>)]) -> String {
    let entries: Vec<String> = rows
        .iter()
        .map(|(id, format, status, year, popularity)| {
            format!(
                r#"{{"status":"{}","media":{{"id":{},"format":"{}","startDate":{{"year":{}}},"popularity":{}}}}}"#,
                status,
                id,
                format,
                year.map_or("null".to_string(), |y| y.to_string()),
                popularity.map_or("null".to_string(), |p| p.to_string()),
            )
        })
        .collect();
    format!(
        r#"{{"data":{{"MediaListCollection":{{"lists":[{{"entries":[{}]}}]}}}}}}"#,
        entries.join(",")
    )
}

/// Needle matching the list query for `user`
pub fn list_needle(user: &str) -> String {
    format!(r#""userName":"{}""#, user)
}

/// Needle matching the existence query for `user`
pub fn user_needle(user: &str) -> String {
    format!(r#""name":"{}""#, user)
}
