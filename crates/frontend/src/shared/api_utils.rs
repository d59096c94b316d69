/// Port the backend listens on, next to whatever serves the frontend.
const API_PORT: u16 = 3000;

/// `http(s)://<page host>:3000`, or an empty string outside a browser.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".into());
    let host = location.hostname().unwrap_or_else(|_| "127.0.0.1".into());
    format!("{protocol}//{host}:{API_PORT}")
}

/// Absolute URL of an API path such as `/api/banks`.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
