use property_map_core::{parse_records, LoadError, PropertyRecord};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn fetch_error(context: &str, error: &wasm_bindgen::JsValue) -> LoadError {
    let detail = error.as_string().unwrap_or_else(|| format!("{error:?}"));
    LoadError::Fetch(format!("{context}: {detail}"))
}

/// One GET for the property file. No retry and no timeout.
pub async fn fetch_records(url: &str) -> Result<Vec<PropertyRecord>, LoadError> {
    let window =
        web_sys::window().ok_or_else(|| LoadError::Fetch("no window available".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|error| fetch_error("invalid request", &error))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|error| fetch_error("network error", &error))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|error| fetch_error("unexpected response object", &error))?;

    if !response.ok() {
        return Err(LoadError::Fetch(format!(
            "{url} answered {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let body_promise = response
        .text()
        .map_err(|error| fetch_error("unreadable body", &error))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|error| fetch_error("unreadable body", &error))?
        .as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".to_string()))?;

    parse_records(&body)
}
