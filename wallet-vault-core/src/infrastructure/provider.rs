//! HTTP wallet generation provider
//!
//! `POST {base_url}/wallets/generate` with `{"network": "<id>"}`; the reply
//! carries `address`, `privateKey` and optionally `mnemonic`.

use crate::core::crypto::keys::{SecurePrivateKey, SecureSeedPhrase};
use crate::core::wallet::provider::{GeneratedWallet, WalletGenerationProvider};
use crate::shared::config::VaultConfig;
use crate::shared::constants::PROVIDER_GENERATE_PATH;
use crate::shared::error::WalletError;
use crate::shared::types::Network;
use crate::shared::WalletResult;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    address: Option<String>,
    #[serde(default, alias = "private_key")]
    private_key: Option<String>,
    #[serde(default)]
    mnemonic: Option<String>,
}

impl GenerateResponse {
    fn into_generated(mut self) -> WalletResult<GeneratedWallet> {
        let address = self
            .address
            .take()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .ok_or_else(|| WalletError::malformed_response("missing address"))?;

        let private_key = self
            .private_key
            .take()
            .map(SecurePrivateKey::new)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| WalletError::malformed_response("missing private key"))?;

        let mnemonic = self
            .mnemonic
            .take()
            .map(SecureSeedPhrase::new)
            .filter(|m| !m.is_empty());

        Ok(GeneratedWallet {
            address,
            private_key,
            mnemonic,
        })
    }
}

/// Provider reached over HTTP(S)
pub struct HttpGenerationProvider {
    client: Client,
    base_url: String,
}

impl HttpGenerationProvider {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> WalletResult<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(WalletError::config("Provider URL cannot be empty"));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WalletError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client, base_url })
    }

    /// Provider from configuration, if a URL is configured
    pub fn from_config(config: &VaultConfig) -> WalletResult<Option<Self>> {
        config
            .provider_url
            .as_deref()
            .map(|url| Self::new(url, config.provider_timeout))
            .transpose()
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PROVIDER_GENERATE_PATH)
    }
}

#[async_trait]
impl WalletGenerationProvider for HttpGenerationProvider {
    async fn generate(&self, network: Network) -> WalletResult<GeneratedWallet> {
        log::debug!("Requesting {} wallet from provider", network);

        let response = self
            .client
            .post(self.endpoint())
            .json(&serde_json::json!({ "network": network.id() }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WalletError::provider(format!("Provider returned HTTP {}", status)));
        }

        let mut body = response.bytes().await?.to_vec();
        let parsed = serde_json::from_slice::<GenerateResponse>(&body);
        body.zeroize();

        parsed
            .map_err(|e| WalletError::malformed_response(format!("Invalid JSON: {}", e)))?
            .into_generated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one HTTP response on a local port; returns the base URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            // Drain the request: headers, then the JSON body
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let headers_done = request.windows(4).any(|w| w == b"\r\n\r\n");
                if headers_done && request.ends_with(b"}") {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}", addr)
    }

    fn provider(url: &str) -> HttpGenerationProvider {
        HttpGenerationProvider::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_response_with_all_fields() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"address":"0xabc","privateKey":"0xkey","mnemonic":"w1 w2 w3"}"#,
        )
        .unwrap();
        let generated = response.into_generated().unwrap();
        assert_eq!(generated.address, "0xabc");
        assert_eq!(generated.private_key.expose_secret(), "0xkey");
        assert_eq!(generated.mnemonic.unwrap().as_words().len(), 3);
    }

    #[test]
    fn test_response_without_private_key_is_malformed() {
        for json in [
            r#"{"address":"0xabc"}"#,
            r#"{"address":"0xabc","privateKey":"   "}"#,
            r#"{"privateKey":"0xkey"}"#,
        ] {
            let response: GenerateResponse = serde_json::from_str(json).unwrap();
            assert!(matches!(response.into_generated(), Err(WalletError::MalformedResponse(_))));
        }
    }

    #[test]
    fn test_blank_mnemonic_is_dropped() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"address":"0xabc","private_key":"0xkey","mnemonic":""}"#).unwrap();
        assert!(response.into_generated().unwrap().mnemonic.is_none());
    }

    #[test]
    fn test_endpoint_and_config() {
        let p = provider("https://keys.example.com/");
        assert_eq!(p.endpoint(), "https://keys.example.com/wallets/generate");

        assert!(HttpGenerationProvider::from_config(&VaultConfig::default()).unwrap().is_none());
        assert!(HttpGenerationProvider::new("  ", Duration::from_secs(1)).is_err());
    }

    #[tokio::test]
    async fn test_generate_over_http() {
        let url = serve_once("200 OK", r#"{"address":"0xabc","privateKey":"0xkey"}"#).await;
        let generated = provider(&url).generate(Network::Ethereum).await.unwrap();
        assert_eq!(generated.address, "0xabc");
        assert!(generated.mnemonic.is_none());
    }

    #[tokio::test]
    async fn test_http_error_status_is_provider_error() {
        let url = serve_once("503 Service Unavailable", "{}").await;
        let result = provider(&url).generate(Network::Ethereum).await;
        assert!(matches!(result, Err(WalletError::Provider(_))));
    }

    #[tokio::test]
    async fn test_garbage_body_is_malformed() {
        let url = serve_once("200 OK", "not json").await;
        let result = provider(&url).generate(Network::Polygon).await;
        assert!(matches!(result, Err(WalletError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_provider_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let result = provider(&url).generate(Network::Ethereum).await;
        assert!(matches!(result, Err(WalletError::Provider(_))));
    }
}
