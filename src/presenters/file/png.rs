use std::path::Path;

use image::{ExtendedColorType, ImageFormat};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::colour_field::ColourField;
use crate::storage::output_path::ensure_parent_dir;

/// Lossless 8-bit RGB PNG with the top image row at `imag_max`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFilePresenter {}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, field: &ColourField, filepath: &Path) -> Result<(), PresentError> {
        ensure_parent_dir(filepath)?;

        let resolution = field.resolution();
        image::save_buffer_with_format(
            filepath,
            &field.to_top_down_bytes(),
            resolution.width(),
            resolution.height(),
            ExtendedColorType::Rgb8,
            ImageFormat::Png,
        )?;

        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "png"
    }
}
