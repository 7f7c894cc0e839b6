use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::{Client, header::AUTHORIZATION};

use crate::{
    config::Config,
    spotify::{SpotifyError, read_body},
    types::{Token, TokenResponse},
};

/// Exchanges the configured client credentials for an app token.
///
/// Sends one `POST` to `config.token_url` with a Basic authorization header
/// built from `client_id:client_secret` and the form body
/// `grant_type=client_credentials`.
///
/// # Errors
///
/// - [`SpotifyError::Request`] on transport failure
/// - [`SpotifyError::Status`] on any non-2xx response
/// - [`SpotifyError::Payload`] if the body is not JSON
/// - [`SpotifyError::MissingAccessToken`] if `access_token` is absent or empty
///
/// No retry is attempted in any of these cases.
pub async fn acquire_token(client: &Client, config: &Config) -> Result<Token, SpotifyError> {
    let res = client
        .post(&config.token_url)
        .header(AUTHORIZATION, basic_auth_header(config))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let body = read_body(res).await?;
    let payload: TokenResponse = serde_json::from_str(&body)?;

    let token = token_from_response(payload)?;
    tracing::debug!(
        "obtained {} token at {} valid for {}s",
        token.token_type,
        token.obtained_at,
        token.expires_in
    );
    Ok(token)
}

/// `Basic base64(client_id:client_secret)`
pub fn basic_auth_header(config: &Config) -> String {
    let credentials = format!("{}:{}", config.client_id, config.client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

fn token_from_response(payload: TokenResponse) -> Result<Token, SpotifyError> {
    let access_token = payload
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(SpotifyError::MissingAccessToken)?;

    Ok(Token {
        access_token,
        token_type: payload.token_type.unwrap_or_else(|| "Bearer".to_string()),
        expires_in: payload.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_access_token_is_an_error() {
        let payload = TokenResponse {
            access_token: None,
            token_type: Some("Bearer".into()),
            expires_in: Some(3600),
        };
        assert!(matches!(
            token_from_response(payload),
            Err(SpotifyError::MissingAccessToken)
        ));

        let payload = TokenResponse {
            access_token: Some(String::new()),
            token_type: None,
            expires_in: None,
        };
        assert!(matches!(
            token_from_response(payload),
            Err(SpotifyError::MissingAccessToken)
        ));
    }

    #[test]
    fn token_defaults_when_optional_fields_absent() {
        let payload = TokenResponse {
            access_token: Some("abc".into()),
            token_type: None,
            expires_in: None,
        };
        let token = token_from_response(payload).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert!((Utc::now().timestamp() - token.obtained_at).abs() <= 5);
    }
}
