use reqwest::Url;

const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
const FAVICON_SIZE: u32 = 64;

/// Favicon URL for the host of `url`, or an empty string when `url` has no host.
pub fn favicon_url(url: &str) -> String {
    match Url::parse(url.trim()) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => format!("{FAVICON_SERVICE}?domain={host}&sz={FAVICON_SIZE}"),
            None => String::new(),
        },
        Err(_) => String::new(),
    }
}

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}
