use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read directory '{path}': {source}")]
    DirRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to stat file '{path}': {source}")]
    FileStat {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename '{from}' -> '{to}': {source}")]
    Rename {
        from: std::path::PathBuf,
        to: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing file '{0}'")]
    TargetExists(std::path::PathBuf),

    #[error("No usable timestamp for '{0}'")]
    NoTimestamp(std::path::PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(std::path::PathBuf),

    #[error("File name is not valid UTF-8: {0}")]
    NonUtf8Name(std::path::PathBuf),
}

pub type Result<T> = std::result::Result<T, EngineError>;
