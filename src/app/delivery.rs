//! Transport-neutral request handlers for the describe and install endpoints.

use serde::Serialize;

use crate::app::services::ResolutionService;
use crate::domain::{GenerationResult, RawRequest, ResolveError, Summary};
use crate::ports::{ScreenCatalog, TemplateSource};

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const SCRIPT_CONTENT_TYPE: &str = "text/x-shellscript; charset=utf-8";
pub const NO_STORE: &str = "no-store";

/// An HTTP-shaped response, independent of any server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub cache_control: Option<&'static str>,
    pub body: String,
}

impl DeliveryResponse {
    fn json(status: u16, body: String) -> Self {
        Self { status, content_type: JSON_CONTENT_TYPE, cache_control: None, body }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self::json(status, body)
    }

    pub fn not_found() -> Self {
        Self::error(404, "not found")
    }

    pub fn method_not_allowed() -> Self {
        Self::error(405, "method not allowed")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Read `id`, `rot`, `os` and `lang` from a URL query string.
///
/// Percent-encoding is decoded and the first occurrence of a repeated key wins.
pub fn raw_request_from_query(query: &str) -> RawRequest {
    let mut raw = RawRequest::default();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        let slot = match &*key {
            "id" => &mut raw.id,
            "rot" => &mut raw.rot,
            "os" => &mut raw.os,
            "lang" => &mut raw.lang,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }
    raw
}

/// Describe response body.
#[derive(Debug, Serialize)]
pub struct DescribeBody<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub os: &'static str,
    pub lang: &'static str,
    pub scenario: &'static str,
    pub rot: u16,
    pub summary: &'a Summary,
    pub script: &'a str,
}

impl<'a> From<&'a GenerationResult> for DescribeBody<'a> {
    fn from(result: &'a GenerationResult) -> Self {
        Self {
            id: &result.screen.id,
            name: &result.name,
            os: result.os.as_str(),
            lang: result.language.as_str(),
            scenario: result.scenario,
            rot: result.rotation.degrees(),
            summary: &result.summary,
            script: &result.script,
        }
    }
}

/// Resolve `raw` and answer with the JSON description or an `{error}` body.
pub fn describe<C, T>(service: &ResolutionService<C, T>, raw: &RawRequest) -> DeliveryResponse
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let response = match service.resolve(raw) {
        Ok(result) => match serde_json::to_string(&DescribeBody::from(&result)) {
            Ok(body) => DeliveryResponse::json(200, body),
            Err(err) => DeliveryResponse::error(400, &err.to_string()),
        },
        Err(err) => resolve_failure(&err),
    };
    tracing::debug!(status = response.status, "describe");
    response
}

/// Resolve `raw` and answer with the bare script.
///
/// Failures pass the describe status and body through unchanged.
pub fn install<C, T>(service: &ResolutionService<C, T>, raw: &RawRequest) -> DeliveryResponse
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let response = match service.resolve(raw) {
        Ok(result) => DeliveryResponse {
            status: 200,
            content_type: SCRIPT_CONTENT_TYPE,
            cache_control: Some(NO_STORE),
            body: result.script,
        },
        Err(err) => resolve_failure(&err),
    };
    tracing::debug!(status = response.status, "install");
    response
}

fn resolve_failure(err: &ResolveError) -> DeliveryResponse {
    let status = err.outcome().status_code();
    if matches!(err, ResolveError::TemplateUnavailable { .. }) {
        tracing::warn!(error = %err, "template unavailable");
    }
    DeliveryResponse::error(status, &err.to_string())
}

/// Route a GET request by path to the matching handler.
pub fn route<C, T>(
    service: &ResolutionService<C, T>,
    method: &str,
    path: &str,
    query: &str,
) -> DeliveryResponse
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let handler: fn(&ResolutionService<C, T>, &RawRequest) -> DeliveryResponse =
        match path.trim_end_matches('/') {
            "/api/generate" | "/generate" => describe,
            "/api/install" | "/install" => install,
            _ => return DeliveryResponse::not_found(),
        };
    if !method.eq_ignore_ascii_case("GET") {
        return DeliveryResponse::method_not_allowed();
    }
    handler(service, &raw_request_from_query(query))
}

/// Serialize a response in CGI form: headers, blank line, body.
pub fn cgi_response(response: &DeliveryResponse) -> String {
    let mut out = format!(
        "Status: {} {}\r\nContent-Type: {}\r\n",
        response.status,
        reason_phrase(response.status),
        response.content_type
    );
    if let Some(cache_control) = response.cache_control {
        out.push_str(&format!("Cache-Control: {}\r\n", cache_control));
    }
    out.push_str("\r\n");
    out.push_str(&response.body);
    out
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "",
    }
}
