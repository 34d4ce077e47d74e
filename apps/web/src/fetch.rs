use portfolio_core::github::{profile_api_url, GitHubStats};
use portfolio_core::loader::{check_status, settle_projects};
use portfolio_core::{Error, ProjectRecord, Result};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(context: &str, value: &JsValue) -> Error {
    Error::Network(format!("{context}: {value:?}"))
}

/// GETs `url` and decodes the JSON body into `T`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str, mode: RequestMode) -> Result<T> {
    let window = web_sys::window().ok_or_else(|| Error::Network("no window".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(mode);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| js_error("invalid request", &e))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch failed", &e))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|e| js_error("not a response", &e))?;

    check_status(response.ok(), &format!("{} {}", response.status(), response.status_text()))?;

    let body = response.json().map_err(|e| js_error("unreadable body", &e))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| js_error("unreadable body", &e))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| Error::Parse(e.to_string()))
}

/// Loads the project list; a failure is logged to the console and yields no data.
pub async fn load_projects(url: &str) -> Vec<ProjectRecord> {
    let result = fetch_json(url, RequestMode::SameOrigin).await;
    if let Err(error) = &result {
        web_sys::console::error_1(&format!("Error fetching or parsing JSON data: {error}").into());
    }
    settle_projects(url, result)
}

pub async fn load_github_stats(user: &str) -> Option<GitHubStats> {
    match fetch_json(&profile_api_url(user), RequestMode::Cors).await {
        Ok(stats) => Some(stats),
        Err(error) => {
            web_sys::console::error_1(&format!("Error fetching GitHub stats: {error}").into());
            None
        }
    }
}
