//! Storage module for profile photos
//!
//! Provides the [`ObjectStore`] seam used by the registration workflow and
//! its MinIO/S3-compatible implementation.

mod minio_client;
mod object_store;

pub use minio_client::MinIOClient;
pub use object_store::ObjectStore;
