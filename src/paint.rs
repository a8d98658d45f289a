//! Interface between brushes and the fill engine
use crate::{CanvasError, ColorStop, Error, Point, Rect, Scalar, Transform, deg2rad};
use std::fmt;

/// Linear color ramp paint, the first pass of a gradient brush setup
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPaint {
    /// Start of the gradient axis, offset `0`
    pub start: Point,
    /// End of the gradient axis, offset `1`
    pub end: Point,
    /// Color stops in emission order
    pub stops: Vec<ColorStop>,
    /// Region covered by the paint
    pub rect: Rect,
    /// Rotation of the paint around the origin in degrees
    pub angle: Scalar,
}

impl LinearPaint {
    /// Transformation from the paint space into the user space
    pub fn rotation(&self) -> Transform {
        Transform::new_rotate(deg2rad(self.angle))
    }

    /// Gradient parameter at the point given in the user space
    ///
    /// Parameter is not restricted to `[0, 1]`, degenerated axis always yields `0`.
    pub fn offset(&self, point: Point) -> Scalar {
        let point = Transform::new_rotate(-deg2rad(self.angle)).apply(point);
        let dir = self.end - self.start;
        let length2 = dir.dot(dir);
        if length2 < crate::EPSILON {
            return 0.0;
        }
        // t = (point - start).dot(end - start) / |end - start| ^ 2
        (point - self.start).dot(dir) / length2
    }
}

/// How pattern is extended outside of its rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extend {
    /// Nothing is painted outside of the rectangle
    #[default]
    None,
    /// Rectangle content is repeated
    Repeat,
}

impl Extend {
    /// Map coordinate relative to the pattern origin into `[0, size)`
    pub fn at(&self, value: Scalar, size: Scalar) -> Option<Scalar> {
        match self {
            Extend::None => (0.0..size).contains(&value).then_some(value),
            Extend::Repeat => Some(value.rem_euclid(size)),
        }
    }
}

/// Pattern created from the filled pixels, the second pass of a gradient brush setup
#[derive(Debug, Clone, PartialEq)]
pub struct TilePattern {
    /// Filled region used as a tile
    pub rect: Rect,
    pub extend: Extend,
    /// Transformation from the user space into the pattern space
    pub transform: Transform,
}

/// Fill engine consumed by brushes
pub trait Canvas {
    /// Fill `paint.rect` with the linear paint
    fn fill_linear(&mut self, paint: &LinearPaint) -> Result<(), CanvasError>;

    /// Use pixels produced by the last fill as the current source pattern
    fn set_tile(&mut self, pattern: &TilePattern) -> Result<(), CanvasError>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_linear(&mut self, paint: &LinearPaint) -> Result<(), CanvasError> {
        (**self).fill_linear(paint)
    }

    fn set_tile(&mut self, pattern: &TilePattern) -> Result<(), CanvasError> {
        (**self).set_tile(pattern)
    }
}

/// Kind of a brush
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrushType {
    SolidColor,
    HatchFill,
    TextureFill,
    PathGradient,
    LinearGradient,
}

/// Paint descriptor consulted whenever a region is filled
pub trait Brush: fmt::Debug + Send + Sync {
    fn brush_type(&self) -> BrushType;

    /// Configure canvas source so the following fills use this brush
    fn setup(&self, canvas: &mut dyn Canvas) -> Result<(), Error>;

    /// Clone brush behind a trait object
    fn clone_brush(&self) -> Box<dyn Brush>;
}
