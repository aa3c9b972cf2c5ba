// src/ingest/providers/http.rs
//! Collaborator backed by an HTTP endpoint that serves the raw labeled pairs of a page as JSON
//! (`GET <base_url>/<TICKER>` → `[{"label": "...", "value": "..."}]`).
//!
//! Requests are sequential. Each attempt waits `attempt × backoff` first. When API keys are
//! configured they are sent as bearer tokens and rotated: a key rejected with 401/402/403/429
//! is retired for the rest of the run; once all are retired the fetch reports
//! [`FetchError::QuotaExhausted`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::ingest::types::{FetchError, RawField, SourceScraper};
use crate::sources::SourceSchema;

const DEFAULT_ATTEMPTS: u32 = 3;
const DEFAULT_BACKOFF: Duration = Duration::from_secs(1);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

pub struct HttpScraper {
    schema: &'static SourceSchema,
    base_url: String,
    client: Client,
    api_keys: Vec<String>,
    // Index of the first key not yet retired. Keys retire in order, so this only grows.
    key_cursor: AtomicUsize,
    max_attempts: u32,
    backoff: Duration,
    timeout: Duration,
}

impl HttpScraper {
    pub fn new(schema: &'static SourceSchema, base_url: &str) -> Self {
        Self {
            schema,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            client: Client::new(),
            api_keys: Vec::new(),
            key_cursor: AtomicUsize::new(0),
            max_attempts: DEFAULT_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Share one connection pool across scrapers.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_api_keys(mut self, keys: Vec<String>) -> Self {
        self.api_keys = keys;
        self
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url_for(&self, ticker: &str) -> String {
        format!("{}/{}", self.base_url, ticker.to_uppercase())
    }

    /// Key to use for the next request; `Err` when every key is retired.
    fn current_key(&self) -> Result<Option<&str>, FetchError> {
        if self.api_keys.is_empty() {
            return Ok(None);
        }
        let idx = self.key_cursor.load(Ordering::SeqCst);
        self.api_keys
            .get(idx)
            .map(|k| Some(k.as_str()))
            .ok_or(FetchError::QuotaExhausted)
    }

    fn retire_key(&self, idx: usize) {
        self.key_cursor.fetch_max(idx + 1, Ordering::SeqCst);
    }
}

fn is_key_rejection(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::UNAUTHORIZED
            | StatusCode::PAYMENT_REQUIRED
            | StatusCode::FORBIDDEN
            | StatusCode::TOO_MANY_REQUESTS
    )
}

#[async_trait]
impl SourceScraper for HttpScraper {
    fn schema(&self) -> &'static SourceSchema {
        self.schema
    }

    async fn fetch(&self, ticker: &str) -> Result<Vec<RawField>, FetchError> {
        let url = self.url_for(ticker);
        let mut last_error = String::new();

        for attempt in 1..=self.max_attempts {
            tokio::time::sleep(self.backoff * attempt).await;

            // Key rotation does not spend an attempt.
            let response = loop {
                let key = self.current_key()?;
                let mut req = self.client.get(&url).timeout(self.timeout);
                if let Some(k) = key {
                    req = req.bearer_auth(k);
                }
                match req.send().await {
                    Ok(rsp) if key.is_some() && is_key_rejection(rsp.status()) => {
                        let idx = self.key_cursor.load(Ordering::SeqCst);
                        tracing::warn!(
                            source = self.schema.name,
                            status = %rsp.status(),
                            key_index = idx,
                            "api key rejected, rotating"
                        );
                        self.retire_key(idx);
                    }
                    other => break other,
                }
            };

            let rsp = match response {
                Ok(rsp) => rsp,
                Err(e) => {
                    tracing::debug!(source = self.schema.name, attempt, error = %e, "request failed");
                    last_error = e.to_string();
                    continue;
                }
            };

            let status = rsp.status();
            if status == StatusCode::NOT_FOUND {
                return Err(FetchError::Fatal(format!("{ticker} not found at {url}")));
            }
            if !status.is_success() {
                last_error = format!("HTTP {status}");
                continue;
            }

            let body = match rsp.text().await {
                Ok(b) => b,
                Err(e) => {
                    last_error = e.to_string();
                    continue;
                }
            };
            if body.to_lowercase().contains("captcha") {
                last_error = "blocked by captcha".to_string();
                continue;
            }
            match serde_json::from_str::<Vec<RawField>>(&body) {
                Ok(raw) => return Ok(raw),
                Err(e) => last_error = format!("invalid payload: {e}"),
            }
        }

        Err(FetchError::Source(format!(
            "failed after {} attempts: {last_error}",
            self.max_attempts
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::statusinvest;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const PAYLOAD: &str = r#"[{"label":"P/L","value":"5,04"}]"#;

    /// Local server answering each connection with the next scripted `(status, body)`.
    /// Returns the base URL and the `Authorization` header seen on each request.
    async fn scripted(responses: Vec<(u16, &'static str)>) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);

        tokio::spawn(async move {
            for (status, body) in responses {
                let (mut sock, _) = listener.accept().await.unwrap();
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    let n = sock.read(&mut chunk).await.unwrap();
                    if n == 0 {
                        break;
                    }
                    buf.extend_from_slice(&chunk[..n]);
                }
                let head = String::from_utf8_lossy(&buf).to_string();
                let auth = head
                    .lines()
                    .find_map(|l| {
                        let (name, value) = l.split_once(':')?;
                        name.eq_ignore_ascii_case("authorization")
                            .then(|| value.trim().to_string())
                    })
                    .unwrap_or_default();
                log.lock().unwrap().push(auth);

                let rsp = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                sock.write_all(rsp.as_bytes()).await.unwrap();
                sock.shutdown().await.ok();
            }
        });
        (format!("http://{addr}/si"), seen)
    }

    fn scraper(base: &str) -> HttpScraper {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpScraper::new(&statusinvest::SCHEMA, base)
            .with_client(client)
            .with_backoff(Duration::from_millis(1))
            .with_timeout(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn rejected_keys_rotate_without_spending_attempts() {
        let (base, seen) = scripted(vec![(403, ""), (200, PAYLOAD)]).await;
        let s = scraper(&base)
            .with_api_keys(vec!["k1".into(), "k2".into()])
            .with_attempts(1);

        let raw = s.fetch("petr4").await.unwrap();
        assert_eq!(raw, vec![RawField::text("P/L", "5,04")]);
        assert_eq!(*seen.lock().unwrap(), vec!["Bearer k1", "Bearer k2"]);
        // k1 stays retired for the rest of the run.
        assert_eq!(s.current_key().unwrap(), Some("k2"));
    }

    #[tokio::test]
    async fn every_key_rejected_reports_exhaustion() {
        let (base, seen) = scripted(vec![(429, ""), (401, "")]).await;
        let s = scraper(&base).with_api_keys(vec!["k1".into(), "k2".into()]);

        assert_eq!(s.fetch("PETR4").await, Err(FetchError::QuotaExhausted));
        assert_eq!(seen.lock().unwrap().len(), 2);
        // Later tickers fail fast without a request.
        assert_eq!(s.fetch("VALE3").await, Err(FetchError::QuotaExhausted));
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn not_found_is_fatal() {
        let (base, _) = scripted(vec![(404, "")]).await;
        let res = scraper(&base).fetch("XPTO3").await;
        assert!(matches!(res, Err(FetchError::Fatal(_))), "{res:?}");
    }

    #[tokio::test]
    async fn captcha_page_is_retried() {
        let (base, seen) = scripted(vec![(200, "<html>Captcha required</html>"), (200, PAYLOAD)]).await;
        let raw = scraper(&base).with_attempts(2).fetch("PETR4").await.unwrap();
        assert_eq!(raw.len(), 1);
        assert_eq!(seen.lock().unwrap().len(), 2);
        // Without keys no Authorization header is sent.
        assert!(seen.lock().unwrap().iter().all(String::is_empty));
    }

    #[tokio::test]
    async fn retries_wait_longer_each_attempt_then_give_up() {
        let (base, seen) = scripted(vec![(500, ""), (503, ""), (200, "not json")]).await;
        let s = scraper(&base)
            .with_attempts(3)
            .with_backoff(Duration::from_millis(20));

        let t0 = Instant::now();
        let res = s.fetch("PETR4").await;
        // 20 + 40 + 60 ms of backoff before the three attempts.
        assert!(t0.elapsed() >= Duration::from_millis(120), "{:?}", t0.elapsed());
        match res {
            Err(FetchError::Source(msg)) => {
                assert!(msg.contains("3 attempts"), "{msg}");
                assert!(msg.contains("invalid payload"), "{msg}");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(seen.lock().unwrap().len(), 3);
    }

    #[test]
    fn base_url_is_trimmed() {
        let s = HttpScraper::new(&statusinvest::SCHEMA, " http://localhost:9000/si/ ");
        assert_eq!(s.url_for("petr4"), "http://localhost:9000/si/PETR4");
    }

    #[test]
    fn keys_retire_in_order_until_exhausted() {
        let s = HttpScraper::new(&statusinvest::SCHEMA, "http://localhost")
            .with_api_keys(vec!["a".into(), "b".into()]);
        assert_eq!(s.current_key().unwrap(), Some("a"));
        s.retire_key(0);
        assert_eq!(s.current_key().unwrap(), Some("b"));
        // A stale index does not move the cursor back.
        s.retire_key(0);
        assert_eq!(s.current_key().unwrap(), Some("b"));
        s.retire_key(1);
        assert_eq!(s.current_key(), Err(FetchError::QuotaExhausted));
    }

    #[test]
    fn no_keys_means_anonymous() {
        let s = HttpScraper::new(&statusinvest::SCHEMA, "http://localhost");
        assert_eq!(s.current_key().unwrap(), None);
    }
}
