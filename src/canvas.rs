//! Software canvas which evaluates paints per pixel
//!
//! Pixel `(row, col)` covers the unit square with the top-left corner at
//! `(col, row)` in user space and is evaluated at its center. Filled layers
//! are not rasterized upfront, tiles sample the last paint on demand.
use crate::{
    Argb, Canvas, CanvasError, ColorStops, Extend, Image, ImageMut, ImageOwned, LinearPaint,
    Point, Rect, Scalar, TilePattern, Transform,
};

/// Last linear fill
#[derive(Debug, Clone)]
struct Layer {
    paint: LinearPaint,
    stops: ColorStops,
}

impl Layer {
    /// Color of the layer pixel containing `point`, transparent outside of the fill
    fn at(&self, point: Point) -> Argb {
        let rect = self.paint.rect;
        let Point([x, y]) = point - rect.min();
        let center = rect.min() + Point::new(x.floor() + 0.5, y.floor() + 0.5);
        if !rect.contains(center) {
            return Argb::TRANSPARENT;
        }
        Argb::from(self.stops.at(self.paint.offset(center)))
    }
}

/// Current source pattern
#[derive(Debug, Clone)]
struct Source {
    layer: Layer,
    rect: Rect,
    extend: Extend,
    // user space to pattern space
    transform: Transform,
}

/// Canvas backed by an owned image
#[derive(Debug, Clone)]
pub struct ImageCanvas {
    target: ImageOwned<Argb>,
    layer: Option<Layer>,
    source: Option<Source>,
}

impl ImageCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            target: ImageOwned::new_default(height, width),
            layer: None,
            source: None,
        }
    }

    pub fn target(&self) -> &ImageOwned<Argb> {
        &self.target
    }

    /// Target pixels as bytes (native endian `u32` per pixel)
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.target.data())
    }

    pub fn clear(&mut self) {
        self.target.clear();
        self.layer = None;
        self.source = None;
    }

    /// Whether a source pattern is set
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Color of the source pattern at the point given in user space
    pub fn source_at(&self, point: Point) -> Option<Argb> {
        let source = self.source.as_ref()?;
        let Point([x, y]) = source.transform.apply(point);
        let rect = source.rect;
        let x = source.extend.at(x - rect.x, rect.width)?;
        let y = source.extend.at(y - rect.y, rect.height)?;
        Some(source.layer.at(rect.min() + Point::new(x, y)))
    }

    /// Fill `region` of the target with the current source pattern
    pub fn fill(&mut self, region: Rect) -> Result<(), CanvasError> {
        if self.source.is_none() {
            return Err(CanvasError::EmptySurface);
        }
        let _span = tracing::trace_span!("[fill]", ?region).entered();
        let shape = self.target.shape();
        for row in 0..shape.height {
            for col in 0..shape.width {
                let center = pixel_center(row, col);
                if !region.contains(center) {
                    continue;
                }
                if let Some(color) = self.source_at(center) {
                    if let Some(pixel) = self.target.get_mut(row, col) {
                        *pixel = color;
                    }
                }
            }
        }
        Ok(())
    }
}

impl Canvas for ImageCanvas {
    fn fill_linear(&mut self, paint: &LinearPaint) -> Result<(), CanvasError> {
        let stops = ColorStops::new(&paint.stops).ok_or(CanvasError::PatternAlloc)?;
        let rect = paint.rect;
        if rect.is_empty() {
            return Err(CanvasError::EmptySurface);
        }
        let _span =
            tracing::trace_span!("[fill_linear]", ?rect, stops = paint.stops.len()).entered();

        // fill covers only target pixels with centers inside of the rectangle
        let shape = self.target.shape();
        for row in 0..shape.height {
            for col in 0..shape.width {
                let center = pixel_center(row, col);
                if !rect.contains(center) {
                    continue;
                }
                let color = Argb::from(stops.at(paint.offset(center)));
                if let Some(pixel) = self.target.get_mut(row, col) {
                    *pixel = color;
                }
            }
        }

        self.layer = Some(Layer {
            paint: paint.clone(),
            stops,
        });
        Ok(())
    }

    /// Tile `pattern.rect` of the last fill, pixels outside of the fill are transparent
    fn set_tile(&mut self, pattern: &TilePattern) -> Result<(), CanvasError> {
        let layer = self.layer.clone().ok_or(CanvasError::EmptySurface)?;
        if pattern.rect.is_empty() {
            return Err(CanvasError::EmptySurface);
        }
        tracing::trace!(rect = ?pattern.rect, extend = ?pattern.extend, "[set_tile]");
        self.source = Some(Source {
            layer,
            rect: pattern.rect,
            extend: pattern.extend,
            transform: pattern.transform,
        });
        Ok(())
    }
}

fn pixel_center(row: usize, col: usize) -> Point {
    Point::new(col as Scalar + 0.5, row as Scalar + 0.5)
}
