//! Client wrappers for the question-generation endpoints. Each wrapper is a
//! thin pass-through: build the payload, await the response, hand the result
//! back untouched. Question payloads are opaque to this client.

use crate::api::{ApiClient, ApiError, Download};
use crate::features::questions::types::{
    AbTestReport, AnswerKeyRequest, GenerationRequest, MixedAnswerKeyRequest, MixedPdfRequest,
    MixedRequest, PdfRequest, Provider, ProviderRun,
};
use reqwest::Method;
use serde_json::Value;
use std::time::Instant;
use tracing::debug;

/// Generate a question set and return the backend's payload as-is.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn generate(
    client: &ApiClient,
    request: &GenerationRequest,
) -> Result<Value, ApiError> {
    Ok(client
        .post("/v1/questions/generate", request)
        .await?
        .into_value())
}

/// Render a question paper PDF.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn generate_pdf(client: &ApiClient, request: &PdfRequest) -> Result<Download, ApiError> {
    let payload = serde_json::to_value(request)?;
    client
        .fetch_binary(Method::POST, "/v1/questions/generate-pdf", Some(&payload))
        .await
}

/// Render an answer-key PDF for the same parameters.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn generate_answer_key(
    client: &ApiClient,
    request: &AnswerKeyRequest,
) -> Result<Download, ApiError> {
    let payload = serde_json::to_value(request)?;
    client
        .fetch_binary(
            Method::POST,
            "/v1/questions/generate-answer-key",
            Some(&payload),
        )
        .await
}

/// Generate a mixed-type question set.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn generate_mixed(
    client: &ApiClient,
    request: &MixedRequest,
) -> Result<Value, ApiError> {
    Ok(client
        .post("/v1/questions/generate-mixed", request)
        .await?
        .into_value())
}

/// Render a mixed-type question paper PDF.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn generate_mixed_pdf(
    client: &ApiClient,
    request: &MixedPdfRequest,
) -> Result<Download, ApiError> {
    let payload = serde_json::to_value(request)?;
    client
        .fetch_binary(
            Method::POST,
            "/v1/questions/generate-mixed-pdf",
            Some(&payload),
        )
        .await
}

/// Render a mixed-type answer-key PDF.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn generate_mixed_answer_key(
    client: &ApiClient,
    request: &MixedAnswerKeyRequest,
) -> Result<Download, ApiError> {
    let payload = serde_json::to_value(request)?;
    client
        .fetch_binary(
            Method::POST,
            "/v1/questions/generate-mixed-answer-key",
            Some(&payload),
        )
        .await
}

/// Fetch a previously generated PDF by its server-side filename.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn download_pdf(client: &ApiClient, filename: &str) -> Result<Download, ApiError> {
    let path = format!("/v1/questions/download-pdf/{filename}");
    client.fetch_binary(Method::GET, &path, None).await
}

/// Run the same request against both providers and time each run.
///
/// The comparison is client-composed: one `generate` call per provider, in a
/// fixed order, no scoring. A failure from either provider fails the whole
/// comparison.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn ab_test(
    client: &ApiClient,
    request: &GenerationRequest,
) -> Result<AbTestReport, ApiError> {
    let mut runs = Vec::with_capacity(2);

    for provider in [Provider::Gemini, Provider::Openai] {
        let request = request.clone().with_provider(provider);
        debug!("ab-test run: provider={provider}");

        let started = Instant::now();
        let result = generate(client, &request).await?;
        runs.push(ProviderRun {
            provider,
            elapsed: started.elapsed(),
            result,
        });
    }

    Ok(AbTestReport { runs })
}
