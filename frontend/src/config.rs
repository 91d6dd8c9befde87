
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const AUTO_ADVANCE_MS: u32 = 3_500;
pub const VISIBILITY_THRESHOLD: f64 = 0.4;
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;
pub const TYPEWRITER_TICK_MS: u32 = 90;

/// Where lead submissions are posted. `None` keeps the log-only transport.
///
/// Set `LEAD_ENDPOINT` at build time for a full URL, or `LEAD_TRANSPORT=http`
/// to post to the backend's `/api/leads`.
pub fn lead_endpoint() -> Option<String> {
    resolve_lead_endpoint(
        option_env!("LEAD_ENDPOINT"),
        option_env!("LEAD_TRANSPORT"),
        get_backend_url(),
    )
}

fn resolve_lead_endpoint(
    endpoint: Option<&str>,
    transport: Option<&str>,
    backend_url: &str,
) -> Option<String> {
    if let Some(url) = endpoint.map(str::trim).filter(|u| !u.is_empty()) {
        return Some(url.to_string());
    }
    match transport {
        Some(t) if t.eq_ignore_ascii_case("http") => Some(format!("{}/api/leads", backend_url)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_endpoint_wins() {
        assert_eq!(
            resolve_lead_endpoint(Some(" https://mail.example/api "), Some("http"), ""),
            Some("https://mail.example/api".to_string())
        );
    }

    #[test]
    fn http_transport_posts_to_backend() {
        assert_eq!(
            resolve_lead_endpoint(None, Some("HTTP"), "http://localhost:3001"),
            Some("http://localhost:3001/api/leads".to_string())
        );
        assert_eq!(resolve_lead_endpoint(Some(""), Some("http"), ""), Some("/api/leads".to_string()));
    }

    #[test]
    fn nothing_configured_means_stub() {
        assert_eq!(resolve_lead_endpoint(None, None, "http://localhost:3001"), None);
        assert_eq!(resolve_lead_endpoint(None, Some("log"), ""), None);
    }
}
