use std::path::PathBuf;
use tokio::fs::File as TokioFile;
use tokio::io::{AsyncWriteExt, BufWriter as TokioBufWriter};
use tracing::info;
use crate::config::ExportConfig;
use crate::error::Result;

/// Writes exported artifacts under a fixed file stem, e.g. `vendor-details.pdf`.
pub struct ArtifactWriter {
    output_dir: PathBuf,
    file_stem: String,
}

impl ArtifactWriter {
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            file_stem: config.file_stem.clone(),
        }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.file_stem, extension)
    }

    pub fn path_for(&self, extension: &str) -> PathBuf {
        self.output_dir.join(self.file_name(extension))
    }

    /// Replaces any previous artifact with the same extension.
    pub async fn write(&self, extension: &str, bytes: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.path_for(extension);
        let file = TokioFile::create(&path).await?;
        let mut writer = TokioBufWriter::new(file);
        writer.write_all(bytes).await?;
        writer.flush().await?;

        info!(
            path = %path.display(),
            bytes = bytes.len(),
            "Artifact written"
        );

        Ok(path)
    }
}
