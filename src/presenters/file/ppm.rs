use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::colour_field::ColourField;
use crate::storage::output_path::ensure_parent_dir;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, field: &ColourField, filepath: &Path) -> Result<(), PresentError> {
        ensure_parent_dir(filepath)?;

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);
        let width = field.resolution().width();
        let height = field.resolution().height();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", width, height)?;
        writeln!(file, "255")?;

        for row in field.rows_top_down() {
            file.write_all(row)?;
        }
        file.flush()?;

        Ok(())
    }

    fn format_name(&self) -> &'static str {
        "ppm"
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
