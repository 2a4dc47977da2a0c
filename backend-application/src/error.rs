use thiserror::Error;

use backend_domain::RegistryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("inactive target: {0}")]
    InactiveTarget(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::EmptyName => AppError::Validation(err.to_string()),
            RegistryError::NotFound(id) => AppError::NotFound(format!("qr code '{}'", id)),
            RegistryError::InactiveTarget(id) => {
                AppError::InactiveTarget(format!("qr code '{}'", id))
            }
        }
    }
}
