//! Linear gradient brush for a device independent 2D imaging API.
//!
//! Main features:
//!  - Blend curves and preset color ramps
//!  - Optional gamma correct interpolation
//!  - Tiling of the gradient rectangle with an affine transform
//!  - Software canvas evaluating brushes per pixel
//!
#![deny(warnings)]

mod brush;
mod canvas;
mod color;
mod error;
mod geometry;
mod image;
mod paint;
mod ramp;
mod utils;

pub use brush::{LinearGradientBrush, LinearGradientMode, WrapMode};
pub use canvas::ImageCanvas;
pub use color::{Argb, ColorError, StopColor, linear_to_srgb, srgb_to_linear};
pub use error::{CanvasError, Error, Status};
pub use geometry::{
    EPSILON, MatrixOrder, PI, Point, PointI, Rect, RectI, Scalar, Transform, deg2rad, scalar_fmt,
};
pub use image::{Image, ImageMut, ImageOwned, Shape};
pub use paint::{Brush, BrushType, Canvas, Extend, LinearPaint, TilePattern};
pub use ramp::{BlendCurve, BlendPoint, ColorRamp, ColorStop, ColorStops, PresetPoint, PresetRamp};
