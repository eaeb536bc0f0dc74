//! The session rides along in a cookie as unpadded base64url JSON.

use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use coursefind_core::Session;
use thiserror::Error;
use tracing::debug;

pub const COOKIE_NAME: &str = "coursefind_session";

#[derive(Debug, Error)]
pub enum SessionCookieError {
	#[error("session cookie is not valid base64: {0}")]
	Encoding(#[from] base64::DecodeError),
	#[error("session cookie does not hold a session: {0}")]
	Payload(#[from] serde_json::Error),
}

pub fn encode(session: &Session) -> Result<String, SessionCookieError> {
	let json = serde_json::to_vec(session)?;
	Ok(URL_SAFE_NO_PAD.encode(json))
}

pub fn decode(value: &str) -> Result<Session, SessionCookieError> {
	let json = URL_SAFE_NO_PAD.decode(value.trim())?;
	Ok(serde_json::from_slice(&json)?)
}

/// `Set-Cookie` value carrying `session`.
pub fn set_cookie(session: &Session) -> Result<String, SessionCookieError> {
	Ok(format!(
		"{COOKIE_NAME}={}; Path=/; HttpOnly; SameSite=Lax",
		encode(session)?
	))
}

/// Session carried by the request, or a fresh one when absent or unreadable.
pub fn from_headers(headers: &HeaderMap) -> Session {
	let value = headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|header| header.to_str().ok())
		.flat_map(|header| header.split(';'))
		.filter_map(|pair| pair.trim().split_once('='))
		.find_map(|(name, value)| (name == COOKIE_NAME).then_some(value));

	match value.map(decode) {
		Some(Ok(session)) => session,
		Some(Err(err)) => {
			debug!(error = %err, "discarding unreadable session cookie");
			Session::default()
		}
		None => Session::default(),
	}
}

#[cfg(test)]
mod tests {
	use axum::http::HeaderValue;
	use coursefind_core::Event;

	use super::*;

	#[test]
	fn encoded_sessions_decode_back() {
		let session = Session::new().apply(Event::Select("Data Science".into()));
		let encoded = encode(&session).unwrap();
		assert!(!encoded.contains('='));
		assert_eq!(decode(&encoded).unwrap(), session);
	}

	#[test]
	fn set_cookie_names_the_session() {
		let cookie = set_cookie(&Session::new()).unwrap();
		assert!(cookie.starts_with("coursefind_session="));
		assert!(cookie.contains("HttpOnly"));
	}

	#[test]
	fn reads_cookie_among_others() {
		let session = Session::new().apply(Event::Select("SQL".into()));
		let mut headers = HeaderMap::new();
		let value = format!("theme=dark; {COOKIE_NAME}={}; other=1", encode(&session).unwrap());
		headers.insert(COOKIE, HeaderValue::from_str(&value).unwrap());

		assert_eq!(from_headers(&headers), session);
	}

	#[test]
	fn garbage_cookie_yields_fresh_session() {
		let mut headers = HeaderMap::new();
		headers.insert(COOKIE, HeaderValue::from_static("coursefind_session=%%%"));
		assert_eq!(from_headers(&headers), Session::new());

		assert!(matches!(decode("e30"), Ok(_)));
		assert!(matches!(decode("bm90IGpzb24"), Err(SessionCookieError::Payload(_))));
	}

	#[test]
	fn absent_cookie_yields_fresh_session() {
		assert_eq!(from_headers(&HeaderMap::new()), Session::new());
	}
}
