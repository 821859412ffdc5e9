use anyhow::{Result, anyhow};
use axum::extract::multipart::Field;
use futures_util::StreamExt;
use std::path::{Path, PathBuf};

/// A fully received multipart file field: the caller-supplied filename and
/// the raw bytes. Uploads are buffered in memory before staging; the request
/// body limit bounds how large they can get.
pub struct UploadedFile {
    pub file_name: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    /// Write the upload into `dir` under its original filename.
    ///
    /// Only the final path component of the client filename is used, so a
    /// name like `../../x.png` cannot escape the job directory.
    pub async fn persist(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let dest = dir.join(sanitize_file_name(&self.file_name));
        tokio::fs::write(&dest, &self.data).await?;
        Ok(dest)
    }
}

/// Drain a multipart field into an `UploadedFile`.
pub async fn read_field(mut field: Field<'_>, default_name: &str) -> Result<UploadedFile> {
    let file_name = field
        .file_name()
        .filter(|n| !n.is_empty())
        .unwrap_or(default_name)
        .to_string();

    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| anyhow!("Stream interrupted: {}", e))?;
        data.extend_from_slice(&chunk);
    }

    Ok(UploadedFile { file_name, data })
}

pub fn sanitize_file_name(name: &str) -> String {
    Path::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload.bin".to_string())
}
