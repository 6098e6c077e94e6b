use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render_mandelbrot::render_mandelbrot::{
    RenderStats, Rendered, render_mandelbrot,
};
use crate::core::data::colour_field::ColourField;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::fractals::mandelbrot::mandelbrot_config::{ConfigError, RenderConfig};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Mandelbrot(#[from] MandelbrotError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Present(#[from] PresentError),

    #[error("nothing has been rendered yet")]
    NothingRendered,
}

/// Renders a configured view and hands the result to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    rendered: Option<Rendered>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            rendered: None,
        }
    }

    pub fn generate(&mut self, config: &RenderConfig) -> Result<&RenderStats, RenderError> {
        info!(
            width = config.width,
            height = config.height,
            max_iterations = config.max_iterations,
            palette = %config.palette,
            execution = %config.execution,
            "rendering Mandelbrot set"
        );

        let rendered = self.rendered.insert(render_mandelbrot(config)?);

        info!(
            duration = ?rendered.stats.duration,
            steps = rendered.stats.steps,
            escaped = rendered.stats.escaped,
            stable = rendered.stats.stable,
            "render finished"
        );

        Ok(&rendered.stats)
    }

    pub fn write(&self, filepath: &Path) -> Result<(), RenderError> {
        let rendered = self.rendered.as_ref().ok_or(RenderError::NothingRendered)?;

        self.presenter.present(&rendered.field, filepath)?;
        info!(
            path = %filepath.display(),
            format = self.presenter.format_name(),
            "saved image"
        );

        Ok(())
    }

    #[must_use]
    pub fn field(&self) -> Option<&ColourField> {
        self.rendered.as_ref().map(|rendered| &rendered.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        calls: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, field: &ColourField, filepath: &Path) -> Result<(), PresentError> {
            self.calls
                .borrow_mut()
                .push((filepath.to_path_buf(), field.as_bytes().len()));
            Ok(())
        }

        fn format_name(&self) -> &'static str {
            "recording"
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 16,
            height: 12,
            max_iterations: 20,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_fails() {
        let controller = RenderController::new(RecordingPresenter::default());

        let result = controller.write(Path::new("never.png"));

        assert!(matches!(result, Err(RenderError::NothingRendered)));
        assert!(controller.presenter.calls.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_field() {
        let mut controller = RenderController::new(RecordingPresenter::default());

        let stats = *controller.generate(&small_config()).unwrap();
        controller.write(Path::new("out.png")).unwrap();

        assert_eq!(stats.escaped + stats.stable, 16 * 12);
        assert!(controller.field().is_some());
        assert_eq!(
            *controller.presenter.calls.borrow(),
            vec![(PathBuf::from("out.png"), 16 * 12 * 3)]
        );
    }

    #[test]
    fn test_render_error_displays_underlying_message() {
        let err = RenderError::from(MandelbrotError::ZeroMaxIterations);

        assert_eq!(err.to_string(), "maximum iterations must be greater than zero");
        assert_eq!(
            RenderError::NothingRendered.to_string(),
            "nothing has been rendered yet"
        );
    }

    #[test]
    fn test_generate_propagates_invalid_config() {
        let mut controller = RenderController::new(RecordingPresenter::default());
        let config = RenderConfig {
            max_iterations: 0,
            ..small_config()
        };

        let result = controller.generate(&config);

        assert!(matches!(
            result,
            Err(RenderError::Mandelbrot(MandelbrotError::ZeroMaxIterations))
        ));
        assert!(controller.field().is_none());
    }
}
