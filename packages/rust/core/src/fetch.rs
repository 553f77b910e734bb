//! Page fetching for classification.
//!
//! Two client policies: fundraising metadata fetches follow redirects, while
//! classification fetches do not — a redirecting server yields whatever
//! partial body it returns for that status, and the link is classified on
//! that content. Response status is intentionally not checked: error pages
//! are classified like any other body.

use reqwest::redirect;
use url::Url;

use linkdigest_shared::{LinkDigestError, Result};

/// Fetches pages for metadata extraction and classification.
pub struct PageFetcher {
    redirecting: reqwest::Client,
    no_redirects: reqwest::Client,
}

impl PageFetcher {
    /// Build both clients with the given User-Agent.
    pub fn new(user_agent: &str) -> Result<Self> {
        let redirecting = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| LinkDigestError::Network(format!("failed to build HTTP client: {e}")))?;

        let no_redirects = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| LinkDigestError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            redirecting,
            no_redirects,
        })
    }

    /// Fetch a page body, following redirects (fundraising path).
    pub async fn fetch_following_redirects(&self, url: &str) -> Result<String> {
        fetch_body(&self.redirecting, url).await
    }

    /// Fetch a page body without following redirects (classification path).
    pub async fn fetch_no_redirects(&self, url: &str) -> Result<String> {
        fetch_body(&self.no_redirects, url).await
    }
}

/// GET the URL and return its body text, whatever the status.
///
/// An unparseable URL is the one recoverable failure ([`LinkDigestError::InvalidLink`]);
/// transport errors are fatal.
async fn fetch_body(client: &reqwest::Client, url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|_| LinkDigestError::InvalidLink(url.to_string()))?;

    let response = client
        .get(parsed)
        .send()
        .await
        .map_err(|e| LinkDigestError::Network(format!("{url}: {e}")))?;

    response
        .text()
        .await
        .map_err(|e| LinkDigestError::Network(format!("{url}: body read failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn invalid_url_is_recoverable() {
        let fetcher = PageFetcher::new("linkdigest-test").unwrap();
        let err = fetcher.fetch_no_redirects("relative/not-a-url").await.unwrap_err();
        assert!(matches!(err, LinkDigestError::InvalidLink(_)));
    }

    #[tokio::test]
    async fn redirect_is_not_followed_for_classification() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/moved"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", "/elsewhere"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<title>real</title>"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new("linkdigest-test").unwrap();
        let body = fetcher
            .fetch_no_redirects(&format!("{}/moved", server.uri()))
            .await
            .unwrap();
        // The partial redirect body, not the target page.
        assert!(!body.contains("real"));
    }

    #[tokio::test]
    async fn redirect_is_followed_for_fundraising() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/moved"))
            .respond_with(
                ResponseTemplate::new(302).insert_header("Location", "/elsewhere"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/elsewhere"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<title>real</title>"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new("linkdigest-test").unwrap();
        let body = fetcher
            .fetch_following_redirects(&format!("{}/moved", server.uri()))
            .await
            .unwrap();
        assert!(body.contains("real"));
    }

    #[tokio::test]
    async fn error_status_body_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("gone"))
            .mount(&server)
            .await;

        let fetcher = PageFetcher::new("linkdigest-test").unwrap();
        let body = fetcher
            .fetch_no_redirects(&format!("{}/x", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "gone");
    }
}
