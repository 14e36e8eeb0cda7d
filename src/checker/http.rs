// src/checker/http.rs
// =============================================================================
// This module is the only place that talks to the network.
//
// Key functionality:
// - GET a page and return its body (pages need their links extracted)
// - HEAD an image (lightweight, no body download)
// - Classify every failure, keeping "404 Not Found" apart from everything
//   else because it is the only outcome that ends up in the report
//
// The crawler never uses reqwest directly. It goes through the `Transport`
// trait, so the whole crawl can be driven by an in-memory site in tests.
// =============================================================================

use reqwest::{Client, ClientBuilder, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::CrawlConfig;

/// Why a request did not produce a usable response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP 404: the only reportable outcome
    #[error("HTTP 404 Not Found")]
    NotFound,
    /// Any other non-success final status (after redirects)
    #[error("HTTP {}", .0.as_u16())]
    Status(StatusCode),
    #[error("Request timed out")]
    Timeout,
    #[error("Too many redirects")]
    TooManyRedirects,
    #[error("Could not resolve hostname")]
    Dns,
    #[error("SSL certificate error")]
    Ssl,
    #[error("Connection failed")]
    Connect,
    #[error("{0}")]
    Other(String),
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound)
    }
}

/// The HTTP collaborator used by the crawler.
///
/// Both methods follow redirects and succeed only on a 2xx final status.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Full retrieval (GET) of `url`, returning the decoded body.
    async fn get_text(&self, url: &Url) -> Result<String, FetchError>;

    /// Existence check (HEAD) of `url`; never downloads the body.
    async fn head(&self, url: &Url) -> Result<(), FetchError>;
}

// Lets a crawler borrow a transport instead of owning it
impl<T: Transport + ?Sized> Transport for &T {
    async fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        (**self).get_text(url).await
    }

    async fn head(&self, url: &Url) -> Result<(), FetchError> {
        (**self).head(url).await
    }
}

/// `Transport` over a shared reqwest client.
///
/// The client is built once; reqwest pools connections across requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &CrawlConfig) -> anyhow::Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    // Applies the crawl settings on top of a caller-provided builder
    fn with_builder(config: &CrawlConfig, builder: ClientBuilder) -> anyhow::Result<Self> {
        let client = builder
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(categorize_error)?;

        classify_status(response.status())?;

        response.text().await.map_err(categorize_error)
    }

    async fn head(&self, url: &Url) -> Result<(), FetchError> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(categorize_error)?;

        classify_status(response.status())
    }
}

// Maps a final response status to success or a FetchError
//
// HTTP status codes:
// - 200-299: Success
// - 404: Not found (reportable)
// - anything else left after redirects: a non-reportable failure
pub fn classify_status(status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::NOT_FOUND {
        Err(FetchError::NotFound)
    } else {
        Err(FetchError::Status(status))
    }
}

// Categorizes different error types from reqwest
fn categorize_error(error: reqwest::Error) -> FetchError {
    let error_string = error.to_string().to_lowercase();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            FetchError::Dns
        } else {
            FetchError::Connect
        }
    } else if error_string.contains("certificate") || error_string.contains("ssl") {
        FetchError::Ssl
    } else {
        FetchError::Other(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait instead of calling reqwest everywhere?
//    - The crawler only needs "get this page" and "does this exist?"
//    - Tests implement the same trait with a HashMap of fake pages
//    - No network, no flaky tests, and we can count every request made
//
// 2. What does #[derive(Error)] do?
//    - thiserror generates the std::error::Error and Display impls
//    - The #[error("...")] attribute is the Display message
//
// 3. Why HEAD for images?
//    - HEAD asks for the headers only, so a 5 MB image costs a few bytes
//    - That is all we need to know whether it answers 404
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses() {
        assert!(classify_status(StatusCode::OK).is_ok());
        assert!(classify_status(StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn test_not_found_is_reportable() {
        let err = classify_status(StatusCode::NOT_FOUND).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn test_other_statuses_are_not_reportable() {
        for status in [
            StatusCode::GONE,
            StatusCode::FORBIDDEN,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::MOVED_PERMANENTLY,
        ] {
            let err = classify_status(status).unwrap_err();
            assert!(!err.is_not_found(), "{} must not be reportable", status);
        }
    }

    #[test]
    fn test_status_error_message() {
        let err = classify_status(StatusCode::SERVICE_UNAVAILABLE).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 503");
    }

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn test_config(root: &Url) -> CrawlConfig {
        CrawlConfig {
            root_url: root.clone(),
            output_path: std::path::PathBuf::from("unused.csv"),
            format: crate::cli::ReportFormat::Csv,
            timeout: std::time::Duration::from_secs(5),
            max_redirects: 5,
            concurrency: 4,
            user_agent: crate::cli::DEFAULT_USER_AGENT.to_string(),
        }
    }

    // A one-shot HTTP server on a loopback port.
    //
    // It answers a single request with `status` and, for GET only, `body`,
    // then hands back the raw request head so the test can inspect the
    // method, path and headers that were actually sent.
    async fn serve_once(status: &'static str, body: &'static str) -> (Url, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();

            // Read until the blank line that ends the request head
            let mut request: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == &b"\r\n\r\n"[..]) {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request).to_string();

            // A HEAD response advertises a length but carries no body
            let mut response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            if request.starts_with("GET ") {
                response.push_str(body);
            }
            // The client may hang up as soon as it has the status line
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;

            request
        });

        (Url::parse(&format!("http://{}/", addr)).unwrap(), handle)
    }

    // Loopback requests must not be routed through an HTTP(S)_PROXY from the
    // environment
    fn loopback_transport(base: &Url) -> HttpTransport {
        HttpTransport::with_builder(&test_config(base), Client::builder().no_proxy()).unwrap()
    }

    fn sent_user_agent(request: &str) -> Option<String> {
        request.lines().find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("user-agent")
                .then(|| value.trim().to_string())
        })
    }

    #[tokio::test]
    async fn test_get_returns_body_and_sends_user_agent() {
        let (base, server) = serve_once("200 OK", "<title>Hi</title>").await;
        let url = base.join("page").unwrap();
        let transport = loopback_transport(&base);

        let body = transport.get_text(&url).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(body, "<title>Hi</title>");
        assert!(request.starts_with("GET /page HTTP/1.1\r\n"), "{}", request);
        assert_eq!(sent_user_agent(&request).as_deref(), Some(crate::cli::DEFAULT_USER_AGENT));
    }

    #[tokio::test]
    async fn test_get_404_is_not_found() {
        let (base, server) = serve_once("404 Not Found", "gone").await;
        let url = base.join("missing").unwrap();
        let transport = loopback_transport(&base);

        let err = transport.get_text(&url).await.unwrap_err();
        let request = server.await.unwrap();

        assert!(err.is_not_found());
        assert!(request.starts_with("GET /missing HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_get_500_is_not_reportable() {
        let (base, server) = serve_once("500 Internal Server Error", "oops").await;
        let transport = loopback_transport(&base);

        let err = transport.get_text(&base).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, FetchError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_head_uses_head_method() {
        let (base, server) = serve_once("200 OK", "large image bytes").await;
        let url = base.join("img/logo.png").unwrap();
        let transport = loopback_transport(&base);

        transport.head(&url).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("HEAD /img/logo.png HTTP/1.1\r\n"), "{}", request);
        assert_eq!(sent_user_agent(&request).as_deref(), Some(crate::cli::DEFAULT_USER_AGENT));
    }

    #[tokio::test]
    async fn test_head_404_is_not_found() {
        let (base, server) = serve_once("404 Not Found", "").await;
        let url = base.join("missing.png").unwrap();
        let transport = loopback_transport(&base);

        let err = transport.head(&url).await.unwrap_err();
        let request = server.await.unwrap();

        assert!(err.is_not_found());
        assert!(request.starts_with("HEAD /missing.png HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_closed_port_is_not_reportable() {
        // Bind to learn a free port, then close it so nothing is listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/", addr)).unwrap();
        let transport = loopback_transport(&url);
        let err = transport.head(&url).await.unwrap_err();

        assert!(matches!(err, FetchError::Connect), "{:?}", err);
        assert!(!err.is_not_found());
    }
}
