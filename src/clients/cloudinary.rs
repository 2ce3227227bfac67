use crate::services::image::ImageHost;
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,

    pub api_key: String,

    pub api_secret: String,

    pub api_base: String,

    pub timeout: Duration,
}

impl Default for CloudinaryConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            api_base: "https://api.cloudinary.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CloudinaryConfig {
    /// Names of the credentials that are still empty.
    #[must_use]
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.cloud_name.trim().is_empty() {
            missing.push("cloud_name");
        }
        if self.api_key.trim().is_empty() {
            missing.push("api_key");
        }
        if self.api_secret.trim().is_empty() {
            missing.push("api_secret");
        }
        missing
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Client for the Cloudinary image upload API.
pub struct CloudinaryClient {
    client: Client,
    config: CloudinaryConfig,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent("Bookboard/1.0")
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))?;

        Ok(Self { client, config })
    }

    fn upload_url(&self) -> Result<Url> {
        let api_base = &self.config.api_base;
        let mut url = Url::parse(api_base)
            .with_context(|| format!("Invalid image host base URL: {api_base}"))?;
        url.path_segments_mut()
            .map_err(|()| anyhow!("Image host base URL cannot be a base: {api_base}"))?
            .pop_if_empty()
            .extend(["v1_1", self.config.cloud_name.as_str(), "image", "upload"]);
        Ok(url)
    }
}

#[async_trait]
impl ImageHost for CloudinaryClient {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
        folder: &str,
        public_id: &str,
    ) -> Result<String> {
        let missing = self.config.missing_credentials();
        if !missing.is_empty() {
            bail!(
                "Image host is not configured (missing {})",
                missing.join(", ")
            );
        }

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let params = [
            ("folder", folder.to_string()),
            ("overwrite", "true".to_string()),
            ("public_id", public_id.to_string()),
            ("signature_algorithm", "sha256".to_string()),
            ("timestamp", timestamp),
        ];
        let signature = sign_params(&params, &self.config.api_secret);

        let file = Part::bytes(bytes)
            .file_name(public_id.to_string())
            .mime_str(content_type)
            .context("Invalid image content type")?;

        let mut form = Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature);
        for (key, value) in params {
            form = form.text(key, value);
        }

        let url = self.upload_url()?;
        debug!(url = %url, public_id, "Uploading image");

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .context("Image upload request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ErrorResponse>(&body)
                .map_or_else(|_| format!("HTTP {status}"), |e| e.error.message);
            bail!("Image upload rejected: {reason}");
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .context("Failed to parse image host response")?;

        info!(public_id, url = %uploaded.secure_url, "Image uploaded");
        Ok(uploaded.secure_url)
    }
}

/// Signs upload parameters: `k=v` pairs sorted by key, joined with `&`,
/// followed by the API secret, hashed with SHA-256 and hex encoded.
#[must_use]
pub fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = hmac_sha256::Hash::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_params_sorts_and_appends_secret() {
        let unordered = [
            ("timestamp", "1315060510".to_string()),
            ("public_id", "sample".to_string()),
        ];
        let ordered = [
            ("public_id", "sample".to_string()),
            ("timestamp", "1315060510".to_string()),
        ];

        let a = sign_params(&unordered, "abcd");
        let b = sign_params(&ordered, "abcd");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);

        let expected = hex::encode(hmac_sha256::Hash::hash(
            b"public_id=sample&timestamp=1315060510abcd",
        ));
        assert_eq!(a, expected);
    }

    #[test]
    fn test_sign_params_skips_empty_values() {
        let with_empty = [
            ("folder", String::new()),
            ("timestamp", "1".to_string()),
        ];
        let without = [("timestamp", "1".to_string())];
        assert_eq!(sign_params(&with_empty, "s"), sign_params(&without, "s"));
    }

    #[test]
    fn test_missing_credentials() {
        let config = CloudinaryConfig {
            cloud_name: "demo".into(),
            ..Default::default()
        };
        assert_eq!(config.missing_credentials(), vec!["api_key", "api_secret"]);
    }

    #[test]
    fn test_upload_url() {
        let client = CloudinaryClient::new(CloudinaryConfig {
            cloud_name: "demo".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.upload_url().unwrap().as_str(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[test]
    fn test_upload_url_keeps_base_path() {
        for api_base in [
            "https://proxy.example/cloudinary",
            "https://proxy.example/cloudinary/",
        ] {
            let client = CloudinaryClient::new(CloudinaryConfig {
                cloud_name: "demo".into(),
                api_base: api_base.into(),
                ..Default::default()
            })
            .unwrap();
            assert_eq!(
                client.upload_url().unwrap().as_str(),
                "https://proxy.example/cloudinary/v1_1/demo/image/upload"
            );
        }
    }

    #[test]
    fn test_upload_url_escapes_cloud_name() {
        let client = CloudinaryClient::new(CloudinaryConfig {
            cloud_name: "a/b".into(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.upload_url().unwrap().as_str(),
            "https://api.cloudinary.com/v1_1/a%2Fb/image/upload"
        );
    }

    #[tokio::test]
    async fn test_upload_without_credentials_fails() {
        let client = CloudinaryClient::new(CloudinaryConfig::default()).unwrap();
        let err = client
            .upload(vec![1, 2, 3], "image/png", "books", "book_1")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not configured"));
    }
}
