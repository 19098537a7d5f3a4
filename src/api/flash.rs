//! One-shot flash messages carried in a signed cookie

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};

pub const FLASH_COOKIE: &str = "flash";

/// Read and clear pending messages
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Vec::new());
    };
    let messages = decode(cookie.value());
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}

/// Store messages for the next rendered page
pub fn store(jar: SignedCookieJar, messages: &[String]) -> SignedCookieJar {
    if messages.is_empty() {
        return jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    }
    let cookie = Cookie::build((FLASH_COOKIE, encode(messages)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    jar.add(cookie)
}

fn encode(messages: &[String]) -> String {
    // A Vec<String> always serializes
    serde_json::to_string(messages).unwrap_or_else(|_| "[]".to_string())
}

fn decode(value: &str) -> Vec<String> {
    match serde_json::from_str(value) {
        Ok(messages) => messages,
        Err(e) => {
            tracing::warn!("Discarding malformed flash cookie: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::Key;

    fn jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::from(&[7u8; 64]))
    }

    #[test]
    fn test_store_then_take() {
        let messages = vec!["Item created.".to_string(), "编译原理, \"quoted\"".to_string()];
        let jar = store(jar(), &messages);

        let (jar, taken) = take(jar);
        assert_eq!(taken, messages);

        let (_, again) = take(jar);
        assert!(again.is_empty());
    }

    #[test]
    fn test_take_without_cookie() {
        let (_, taken) = take(jar());
        assert!(taken.is_empty());
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode("not json").is_empty());
        assert_eq!(decode(r#"["a","b"]"#), vec!["a", "b"]);
    }
}
