//! Rendering of shape programs into vector paths
//!
//! [`render_shapes`] renders a sequence of shape numbers with one shared
//! [`ShapeRenderer`], the end point of one shape is the start point of the
//! next. Use [`render_shapes_with`] and a [`RenderConfiguration`] to change
//! the initial vector length or the sub-shape nesting limit.

mod renderer;

pub use renderer::ShapeRenderer;

use crate::error::Result;
use crate::font::CodeSource;
use crate::geometry::Path;
use crate::types::Vector2;

/// Default nesting limit of sub-shape references (code 7)
pub const DEFAULT_MAX_SUBSHAPE_DEPTH: usize = 64;

/// Renderer setup
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfiguration {
    /// Render vertical text, code 14 has no effect if `true`
    pub stacked: bool,
    /// Start location of the output path
    pub start: Vector2,
    /// Move the pen back to the baseline after each rendered shape
    pub reset_to_baseline: bool,
    /// Initial vector length
    pub vector_length: f64,
    /// Maximum nesting depth of sub-shapes
    pub max_subshape_depth: usize,
}

impl Default for RenderConfiguration {
    fn default() -> Self {
        Self {
            stacked: false,
            start: Vector2::ZERO,
            reset_to_baseline: false,
            vector_length: 1.0,
            max_subshape_depth: DEFAULT_MAX_SUBSHAPE_DEPTH,
        }
    }
}

impl RenderConfiguration {
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    pub fn with_start(mut self, start: Vector2) -> Self {
        self.start = start;
        self
    }

    pub fn with_reset_to_baseline(mut self, reset: bool) -> Self {
        self.reset_to_baseline = reset;
        self
    }

    pub fn with_vector_length(mut self, vector_length: f64) -> Self {
        self.vector_length = vector_length;
        self
    }

    pub fn with_max_subshape_depth(mut self, depth: usize) -> Self {
        self.max_subshape_depth = depth;
        self
    }
}

/// Render `numbers` one after another into a single path starting at `start`.
///
/// Render state (vector length, pen state, location stack) is shared by all
/// shapes of the sequence. A stack underflow reports the shape number of the
/// sequence that was being rendered.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use shx_fonts::{render_shapes, Vector2};
///
/// let mut shapes = HashMap::new();
/// shapes.insert(65, vec![8, 5, 0, 0]);
///
/// let path = render_shapes(&[65, 65], &shapes, false, Vector2::ZERO, false).unwrap();
/// assert_eq!(path.end(), Vector2::new(10.0, 0.0));
/// ```
pub fn render_shapes<S: CodeSource + ?Sized>(
    numbers: &[i32],
    source: &S,
    stacked: bool,
    start: Vector2,
    reset_to_baseline: bool,
) -> Result<Path> {
    let config = RenderConfiguration {
        stacked,
        start,
        reset_to_baseline,
        ..Default::default()
    };
    render_shapes_with(numbers, source, &config)
}

/// Render `numbers` with the given configuration
pub fn render_shapes_with<S: CodeSource + ?Sized>(
    numbers: &[i32],
    source: &S,
    config: &RenderConfiguration,
) -> Result<Path> {
    let mut renderer = ShapeRenderer::new(Path::new(config.start), source, config);
    for &number in numbers {
        renderer
            .render(number, config.reset_to_baseline)
            .map_err(|e| e.with_shape_number(number))?;
    }
    Ok(renderer.into_path())
}
