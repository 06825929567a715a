use crate::contrast::ContrastError;
use crate::export::ExportError;
use crate::preset::PresetError;
use crate::storage::StorageError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Contrast(#[from] ContrastError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
