//! Client wrappers for the diagram-template and image endpoints.
//!
//! These endpoints wrap their payloads inconsistently: sometimes the result
//! sits under a `data` envelope, sometimes at the top level. `unwrap_data`
//! accepts both so callers never see the difference.

use crate::api::{ApiClient, ApiError};
use crate::features::images::types::{ImageRequest, Template};
use reqwest::Method;
use serde_json::Value;

/// Generate an image for a question and return the backend's payload.
///
/// # Errors
/// Propagates the API client's failure surface.
pub async fn generate_image(
    client: &ApiClient,
    request: &ImageRequest,
) -> Result<Value, ApiError> {
    let value = client.post("/images/generate", request).await?.into_value();
    Ok(unwrap_data(value))
}

/// List diagram templates for a subject, optionally filtered by keywords.
///
/// # Errors
/// Propagates the API client's failure surface; a malformed template list is
/// a decode error.
pub async fn list_templates(
    client: &ApiClient,
    subject: &str,
    keywords: &[String],
) -> Result<Vec<Template>, ApiError> {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair("subject", subject);
    if !keywords.is_empty() {
        query.append_pair("keywords", &keywords.join(","));
    }

    let path = format!("/images/templates?{}", query.finish());
    let value = unwrap_data(client.get(&path).await?.into_value());

    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value(value)?)
}

/// Render a preview for a template and return its image URL.
///
/// # Errors
/// A successful response without an image URL is a
/// [`ApiError::MissingField`] failure.
pub async fn preview_template(
    client: &ApiClient,
    template_id: &str,
) -> Result<String, ApiError> {
    let path = format!(
        "/images/templates/{}/preview",
        encode_segment(template_id)
    );
    let body = serde_json::json!({ "parameters": {} });
    let value = client
        .request(Method::POST, &path, Some(&body))
        .await?
        .into_value();

    value
        .pointer("/data/imageUrl")
        .and_then(Value::as_str)
        .or_else(|| value.get("imageUrl").and_then(Value::as_str))
        .map(ToString::to_string)
        .ok_or(ApiError::MissingField("imageUrl"))
}

// The `data` envelope counts as absent when null, matching the backend's
// looser responses.
fn unwrap_data(value: Value) -> Value {
    if let Value::Object(map) = &value {
        if let Some(data) = map.get("data") {
            if !data.is_null() {
                return data.clone();
            }
        }
    }
    value
}

fn encode_segment(value: &str) -> String {
    // form_urlencoded turns spaces into '+', which is not valid in a path
    // segment; every literal '+' is already escaped to %2B at this point.
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::images::types::{Complexity, PreferredType};
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri(), None).expect("client should build")
    }

    #[test]
    fn unwrap_data_prefers_the_envelope() {
        assert_eq!(unwrap_data(json!({"data": {"a": 1}})), json!({"a": 1}));
        assert_eq!(unwrap_data(json!({"a": 1})), json!({"a": 1}));
        assert_eq!(unwrap_data(json!({"data": null, "a": 1})), json!({"data": null, "a": 1}));
        assert_eq!(unwrap_data(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn encode_segment_escapes_path_hostile_characters() {
        assert_eq!(encode_segment("plain-id"), "plain-id");
        assert_eq!(encode_segment("a b"), "a%20b");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("a+b"), "a%2Bb");
    }

    #[tokio::test]
    async fn list_templates_accepts_the_data_envelope() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/images/templates"))
            .and(query_param("subject", "mathematics"))
            .and(query_param("keywords", "graph,line"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "t-1", "name": "Line graph"}]
            })))
            .mount(&server)
            .await;

        let templates = list_templates(
            &client(&server),
            "mathematics",
            &["graph".to_string(), "line".to_string()],
        )
        .await
        .expect("listing should succeed");

        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].id, "t-1");
    }

    #[tokio::test]
    async fn list_templates_accepts_a_bare_array() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/images/templates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "t-2", "name": "Axes"}
            ])))
            .mount(&server)
            .await;

        let templates = list_templates(&client(&server), "physics", &[])
            .await
            .expect("listing should succeed");
        assert_eq!(templates[0].name, "Axes");
    }

    #[tokio::test]
    async fn preview_reads_the_image_url_from_either_shape() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/templates/t-1/preview"))
            .and(body_json(json!({"parameters": {}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"imageUrl": "https://cdn.example/t-1.png"}
            })))
            .mount(&server)
            .await;

        let url = preview_template(&client(&server), "t-1")
            .await
            .expect("preview should succeed");
        assert_eq!(url, "https://cdn.example/t-1.png");
    }

    #[tokio::test]
    async fn preview_without_an_image_url_is_a_missing_field() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/templates/t-9/preview"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .mount(&server)
            .await;

        let err = preview_template(&client(&server), "t-9")
            .await
            .expect_err("expected error");
        assert!(matches!(err, ApiError::MissingField("imageUrl")));
    }

    #[tokio::test]
    async fn generate_image_unwraps_the_result() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/images/generate"))
            .and(body_json(json!({
                "questionContent": "Draw a triangle",
                "subject": "mathematics",
                "complexity": "simple",
                "preferredType": "template"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"imageUrl": "https://cdn.example/tri.png", "type": "template"}
            })))
            .mount(&server)
            .await;

        let request = ImageRequest {
            question_content: "Draw a triangle".to_string(),
            subject: "mathematics".to_string(),
            complexity: Complexity::Simple,
            preferred_type: PreferredType::Template,
        };
        let result = generate_image(&client(&server), &request)
            .await
            .expect("generation should succeed");
        assert_eq!(result["imageUrl"], json!("https://cdn.example/tri.png"));
    }
}
