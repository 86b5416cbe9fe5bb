use async_trait::async_trait;

use crate::core::error::AppError;

/// Write-once blob storage that can hand out public retrieval URLs.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Build the full object key for a path under the publicly readable prefix.
    fn public_key(&self, path: &str) -> String;

    /// Store `data` under `key`. Errors are reported as [`AppError::Upload`].
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> Result<String, AppError>;

    /// Public URL for an uploaded object.
    fn public_url(&self, key: &str) -> String;
}
