// src/checker/verify.rs
// =============================================================================
// Existence checks for embedded images.
//
// The checker is deliberately conservative: only an unambiguous 404 counts
// as missing. Timeouts, DNS failures, 403s and 500s all leave the image
// presumed fine, because none of them prove the reference is wrong.
// =============================================================================

use futures::stream::{self, StreamExt};
use tracing::debug;
use url::Url;

use super::http::Transport;

/// Outcome of one image existence check.
#[derive(Debug)]
pub enum ImageStatus {
    Exists,
    NotFound,
    /// The check failed for a reason other than 404; presumed fine.
    Unverified,
}

impl ImageStatus {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ImageStatus::NotFound)
    }
}

/// HEAD `image_url` once and classify the answer.
pub async fn check_exists<T: Transport>(transport: &T, image_url: &Url) -> ImageStatus {
    match transport.head(image_url).await {
        Ok(()) => ImageStatus::Exists,
        Err(e) if e.is_not_found() => ImageStatus::NotFound,
        Err(e) => {
            debug!("Image check for {} inconclusive: {}", image_url, e);
            ImageStatus::Unverified
        }
    }
}

// Checks every image of one page concurrently and waits for all of them
//
// At most `concurrency` HEAD requests are in flight at once. Every check is
// awaited whatever its outcome, so one slow image never drops the others'
// results. The returned pairs are in completion order, not input order.
pub async fn check_all<T: Transport>(
    transport: &T,
    images: Vec<Url>,
    concurrency: usize,
) -> Vec<(Url, ImageStatus)> {
    let checks = images.into_iter().map(move |url| async move {
        let status = check_exists(transport, &url).await;
        (url, status)
    });

    stream::iter(checks)
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why buffer_unordered and not tokio::spawn?
//    - spawn would start detached tasks that outlive this function
//    - buffer_unordered keeps every check inside this one future, so when
//      check_all returns, every check is guaranteed to have finished
//    - It's like Promise.all() with a limit on how many run at once
//
// 2. Why `move |url| async move { ... }`?
//    - The closure copies the `&T` reference into each future
//    - The async block takes ownership of its own `url`
//    - Each future is independent; none of them borrow each other
//
// 3. Why does Unverified carry no error?
//    - The error has already been logged at debug level
//    - The crawler only ever asks "was it a 404?"
// -----------------------------------------------------------------------------
