//! API Address Configuration
//!
//! Resolves the backend base URL. Compile-time defaults come from
//! environment variables (mirroring the Vite setup the backend expects);
//! a localStorage override lets a deployed dashboard point at another
//! backend without a rebuild.

/// Backend host baked in at compile time
const BACKEND_HOST: &str = match option_env!("INJECTWATCH_BACKEND_HOST") {
    Some(host) => host,
    None => "localhost",
};

/// Backend port baked in at compile time
const BACKEND_PORT: &str = match option_env!("INJECTWATCH_BACKEND_PORT") {
    Some(port) => port,
    None => "8000",
};

/// API path prefix baked in at compile time
const API_PATH: &str = match option_env!("INJECTWATCH_API_PATH") {
    Some(path) => path,
    None => "/api/v1",
};

/// localStorage key for the runtime base-URL override
const API_URL_KEY: &str = "injectwatch_api_url";

/// Base URL of the backend service (no API path)
pub fn api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_KEY) {
                url
            } else {
                default_api_base()
            }
        } else {
            default_api_base()
        }
    } else {
        default_api_base()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Full URL of the versioned REST API
pub fn api_url() -> String {
    format!("{}{}", api_base(), API_PATH)
}

fn default_api_base() -> String {
    format!("http://{}:{}", BACKEND_HOST, BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_shape() {
        let base = default_api_base();
        assert!(base.starts_with("http://"));
        assert!(!base.ends_with('/'));
    }

    #[test]
    fn test_api_path_has_leading_slash() {
        assert!(API_PATH.starts_with('/'));
    }
}
