//! `command`: the one-line `curl … | sudo bash` install command.

use url::Url;

use crate::app::AppContext;
use crate::domain::{AppError, RawRequest, RequestParameters};
use crate::ports::{ScreenCatalog, TemplateSource};

/// Build the install URL for validated parameters.
///
/// `install_path` is appended to any path already on `base_url`.
pub fn install_url(base_url: &Url, install_path: &str, params: &RequestParameters) -> Url {
    let mut url = base_url.clone();
    let path = format!("{}{}", base_url.path().trim_end_matches('/'), install_path);
    url.set_path(&path);
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair("id", &params.screen_id)
        .append_pair("rot", &params.rotation.to_string())
        .append_pair("os", params.os.as_str())
        .append_pair("lang", params.language.as_str());
    url
}

pub fn curl_pipe(url: &Url) -> String {
    format!("curl -sL \"{}\" | sudo bash", url)
}

/// Validate `raw` and print the command for the configured or given base URL.
pub fn execute<C, T>(
    ctx: &AppContext<C, T>,
    raw: &RawRequest,
    base_url: Option<&Url>,
) -> Result<String, AppError>
where
    C: ScreenCatalog,
    T: TemplateSource,
{
    let (_, params) = ctx.service().parameters(raw)?;
    let delivery = ctx.delivery();
    let base = base_url.unwrap_or(&delivery.base_url);
    Ok(curl_pipe(&install_url(base, &delivery.install_path, &params)))
}
