#![allow(dead_code)]

//! S3-compatible object storage for uploaded resumes.

use std::time::Duration;

use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ServerSideEncryption;
use bytes::Bytes;
use uuid::Uuid;

use crate::errors::AppError;

/// Thin wrapper around the S3 client bound to the configured bucket.
#[derive(Clone)]
pub struct ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

/// Key layout for uploaded resumes: `resumes/{user_id}/{filename}`.
pub fn resume_key(user_id: Uuid, filename: &str) -> String {
    format!("resumes/{user_id}/{filename}")
}

impl ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Uploads an object with AES256 server-side encryption.
    pub async fn put(&self, key: &str, body: Bytes) -> Result<(), AppError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .server_side_encryption(ServerSideEncryption::Aes256)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("put {key}: {e}")))?;
        Ok(())
    }

    pub async fn get(&self, key: &str) -> Result<Bytes, AppError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("get {key}: {e}")))?;
        let data = output
            .body
            .collect()
            .await
            .map_err(|e| AppError::S3(format!("read {key}: {e}")))?;
        Ok(data.into_bytes())
    }

    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| AppError::S3(format!("delete {key}: {e}")))?;
        Ok(())
    }

    /// Existence check via HEAD; any error (including 404) reads as absent.
    pub async fn exists(&self, key: &str) -> bool {
        self.client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .is_ok()
    }

    /// Presigned GET URL for temporary direct access.
    pub async fn presigned_url(&self, key: &str, expires_in: Duration) -> Result<String, AppError> {
        let config = PresigningConfig::expires_in(expires_in)
            .map_err(|e| AppError::S3(format!("presign config: {e}")))?;
        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(|e| AppError::S3(format!("presign {key}: {e}")))?;
        Ok(presigned.uri().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_key_layout() {
        let user_id = Uuid::nil();
        assert_eq!(
            resume_key(user_id, "cv.pdf"),
            "resumes/00000000-0000-0000-0000-000000000000/cv.pdf"
        );
    }
}
