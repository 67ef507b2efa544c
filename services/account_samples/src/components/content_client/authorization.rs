use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::error::{ClientError, Result};

///
/// Default headers attached to every request: `Authorization: Bearer <token>`.
///
pub fn authorization_headers<S: AsRef<str>>(auth_token: S) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", auth_token.as_ref().trim()))
        .map_err(|_| ClientError::InvalidAuthToken)?;
    value.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, value);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_bearer_header() {
        let headers = authorization_headers(" ya29.token\n").unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();

        assert_eq!(value, "Bearer ya29.token");
        assert!(value.is_sensitive());
    }

    #[test]
    fn rejects_control_characters() {
        assert!(matches!(
            authorization_headers("abc\r\ndef"),
            Err(ClientError::InvalidAuthToken)
        ));
    }
}
