// src/checker/page.rs
// Fetch one page (GET) and extract its title, links and images.

use url::Url;

use super::html::{extract_page, PageContent};
use super::http::{FetchError, Transport};

/// Retrieves `url` and parses the body as HTML.
///
/// A single attempt is made; the caller decides which failures are
/// reportable (`FetchError::is_not_found`).
pub async fn fetch_and_extract<T: Transport>(
    transport: &T,
    url: &Url,
) -> Result<PageContent, FetchError> {
    let body = transport.get_text(url).await?;
    Ok(extract_page(&body, url))
}
