use std::path::Path;

use thiserror::Error;

use crate::core::data::colour_field::ColourField;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] image::ImageError),
}

/// Writes a finished colour field to a file in some image format.
pub trait FilePresenterPort {
    fn present(&self, field: &ColourField, filepath: &Path) -> Result<(), PresentError>;

    /// Short name of the file format, for logging.
    fn format_name(&self) -> &'static str;
}

impl<P: FilePresenterPort + ?Sized> FilePresenterPort for Box<P> {
    fn present(&self, field: &ColourField, filepath: &Path) -> Result<(), PresentError> {
        (**self).present(field, filepath)
    }

    fn format_name(&self) -> &'static str {
        (**self).format_name()
    }
}
