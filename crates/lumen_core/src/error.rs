use thiserror::Error;

/// Errors raised while loading scene, config, camera, or mesh files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("OBJ error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("no models found in OBJ file: {0}")]
    EmptyObj(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;
