/// Errors from the enrichment client layer.
///
/// These all describe an unavailable or misbehaving upstream service.
/// Handlers degrade locally on any of them; none is fatal to a request.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Upstream error ({status}): {body}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response decoded but did not have the expected shape.
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or [`EnrichError::Upstream`] with the status
/// and body text on failure.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, EnrichError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(EnrichError::Upstream {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}
