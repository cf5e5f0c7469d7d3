//! HTTP response checks for remote sources.
//!
//! Maps 429 (with `Retry-After`) to [`SourceError::RateLimited`] and any other
//! non-success status to [`SourceError::Api`], so the loaders only deal with
//! successful bodies.

use crate::error::SourceError;

/// Return the response unchanged on success, or the matching error.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if resp.status() == 429 {
        return Err(SourceError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(SourceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// `Retry-After` in seconds, 60 when absent or unparseable.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn retry_after_defaults_when_missing_or_garbage() {
        assert_eq!(parse_retry_after(&mock_response(429, "")), 60);

        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "soon")
                .body("")
                .unwrap(),
        );
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn rate_limited_reads_header() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", "30")
                .body("")
                .unwrap(),
        );
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::RateLimited {
                retry_after_secs: 30
            }
        ));
    }

    #[tokio::test]
    async fn not_found_keeps_body() {
        let err = check_response(mock_response(404, "no such file"))
            .await
            .unwrap_err();
        match err {
            SourceError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "no such file");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }
}
