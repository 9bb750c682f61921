//! `cgi`: serve one request under a CGI-capable web server.

use crate::app::AppContext;
use crate::app::delivery::{cgi_response, route};
use crate::ports::{ScreenCatalog, TemplateSource};

/// The parts of a CGI request the routes look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgiRequest {
    pub method: String,
    pub path: String,
    pub query: String,
}

impl CgiRequest {
    /// Read `REQUEST_METHOD`, `PATH_INFO` and `QUERY_STRING`.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        let method = var("REQUEST_METHOD");
        Self {
            method: if method.is_empty() { "GET".to_string() } else { method },
            path: var("PATH_INFO"),
            query: var("QUERY_STRING"),
        }
    }
}

pub fn execute<C, T>(ctx: &AppContext<C, T>, request: &CgiRequest) -> String
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let response = route(ctx.service(), &request.method, &request.path, &request.query);
    tracing::info!(
        method = %request.method,
        path = %request.path,
        status = response.status,
        "served cgi request"
    );
    cgi_response(&response)
}
