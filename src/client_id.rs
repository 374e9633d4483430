use axum::http::HeaderMap;
use std::net::SocketAddr;

const FORWARDED_FOR: &str = "x-forwarded-for";
pub const UNKNOWN_CLIENT: &str = "unknown";

// Rate limit key: first X-Forwarded-For hop, else the peer ip, else "unknown"
pub fn client_identifier(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get(FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|hop| !hop.is_empty());

    if let Some(hop) = forwarded {
        return hop.to_string();
    }

    peer.map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some(SocketAddr::from(([10, 0, 0, 7], 51234)))
    }

    #[test]
    fn forwarded_for_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR, HeaderValue::from_static(" 1.2.3.4 , 10.0.0.1"));

        assert_eq!(client_identifier(&headers, peer()), "1.2.3.4");
    }

    #[test]
    fn falls_back_to_peer_ip() {
        assert_eq!(client_identifier(&HeaderMap::new(), peer()), "10.0.0.7");

        let mut headers = HeaderMap::new();
        headers.insert(FORWARDED_FOR, HeaderValue::from_static(""));
        assert_eq!(client_identifier(&headers, peer()), "10.0.0.7");
    }

    #[test]
    fn unknown_without_any_source() {
        assert_eq!(client_identifier(&HeaderMap::new(), None), UNKNOWN_CLIENT);
    }
}
