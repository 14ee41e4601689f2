use std::path::PathBuf;

/// Everything that can end a snapshot run early. Each variant is local to
/// one job; nothing here ever escapes `run_snapshot` as a panic.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error("writing {path} failed: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
