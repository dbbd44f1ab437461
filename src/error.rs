use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl RenderError {
    pub(crate) fn io(path: PathBuf, source: io::Error) -> Self {
        Self::Io { path, source }
    }

    /// True when the underlying read failed because the file was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}
