//! Color ramps of the linear gradient brush
//!
//! A brush describes colors along its axis either with a blend curve, which
//! mixes the two endpoint colors at each offset, or with a preset ramp which
//! lists explicit colors. Only one of them can be active, [`ColorRamp`] holds
//! whichever is.
use crate::{Argb, Scalar, StopColor};
use std::cmp::Ordering;

/// Control point of a blend curve
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendPoint {
    /// Offset along the gradient axis
    pub position: f32,
    /// Weight of the start color, `1 - factor` is the weight of the end color
    pub factor: f32,
}

/// Weighted interpolation between the two endpoint colors
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlendCurve {
    points: Vec<BlendPoint>,
}

impl Default for BlendCurve {
    /// Single point with the start color at offset zero
    fn default() -> Self {
        Self {
            points: vec![BlendPoint {
                position: 0.0,
                factor: 1.0,
            }],
        }
    }
}

impl BlendCurve {
    /// Create curve from parallel slices of factors and positions
    ///
    /// Returns `None` if slices have different lengths. Values are not
    /// checked for range or ordering.
    pub fn new(factors: &[f32], positions: &[f32]) -> Option<Self> {
        if factors.len() != positions.len() {
            return None;
        }
        let points = factors
            .iter()
            .zip(positions)
            .map(|(&factor, &position)| BlendPoint { position, factor })
            .collect();
        Some(Self { points })
    }

    pub fn points(&self) -> &[BlendPoint] {
        &self.points
    }

    pub fn factors(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.factor).collect()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.position).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Color stops produced by weighting `colors[0]` and `colors[1]`
    ///
    /// With `gamma_correction` color channels are blended in linear light and
    /// converted back to sRGB, alpha is always blended as is.
    pub fn stops(&self, colors: [Argb; 2], gamma_correction: bool) -> Vec<ColorStop> {
        let start = StopColor::from(colors[0]);
        let end = StopColor::from(colors[1]);
        self.points
            .iter()
            .map(|point| {
                let factor = point.factor as Scalar;
                let color = if gamma_correction {
                    let color = start.into_linear().weighted(end.into_linear(), factor);
                    color.into_srgb()
                } else {
                    start.weighted(end, factor)
                };
                ColorStop::new(point.position as Scalar, color)
            })
            .collect()
    }
}

/// Control point of a preset ramp
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetPoint {
    pub position: f32,
    pub color: Argb,
}

/// Explicit multi-color ramp
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresetRamp {
    points: Vec<PresetPoint>,
}

impl PresetRamp {
    /// Create ramp from parallel slices of colors and positions
    ///
    /// Returns `None` if slices have different lengths.
    pub fn new(colors: &[Argb], positions: &[f32]) -> Option<Self> {
        if colors.len() != positions.len() {
            return None;
        }
        let points = colors
            .iter()
            .zip(positions)
            .map(|(&color, &position)| PresetPoint { position, color })
            .collect();
        Some(Self { points })
    }

    pub fn points(&self) -> &[PresetPoint] {
        &self.points
    }

    pub fn colors(&self) -> Vec<Argb> {
        self.points.iter().map(|p| p.color).collect()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.points.iter().map(|p| p.position).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Color stops with stored colors as is
    pub fn stops(&self) -> Vec<ColorStop> {
        self.points
            .iter()
            .map(|point| ColorStop::new(point.position as Scalar, point.color.into()))
            .collect()
    }
}

/// Active color ramp of the brush
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorRamp {
    Blend(BlendCurve),
    Preset(PresetRamp),
}

impl Default for ColorRamp {
    fn default() -> Self {
        Self::Blend(BlendCurve::default())
    }
}

impl ColorRamp {
    /// Color stops in the stored order
    ///
    /// Empty result means the ramp provides no colors at all.
    pub fn stops(&self, colors: [Argb; 2], gamma_correction: bool) -> Vec<ColorStop> {
        match self {
            ColorRamp::Blend(curve) => curve.stops(colors, gamma_correction),
            ColorRamp::Preset(ramp) => ramp.stops(),
        }
    }

    pub fn blend(&self) -> Option<&BlendCurve> {
        match self {
            ColorRamp::Blend(curve) => Some(curve),
            ColorRamp::Preset(_) => None,
        }
    }

    pub fn preset(&self) -> Option<&PresetRamp> {
        match self {
            ColorRamp::Blend(_) => None,
            ColorRamp::Preset(ramp) => Some(ramp),
        }
    }
}

/// Specifies color at a particular parameter offset of the gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub offset: Scalar,
    pub color: StopColor,
}

impl ColorStop {
    pub fn new(offset: Scalar, color: StopColor) -> Self {
        Self { offset, color }
    }
}

/// Stops sorted by offset, used to evaluate the ramp at an arbitrary offset
#[derive(Debug, Clone)]
pub struct ColorStops {
    stops: Vec<ColorStop>,
}

impl ColorStops {
    /// Returns `None` if there are no stops
    ///
    /// Sorting is stable, so stops sharing an offset keep their relative order
    /// and produce a hard color transition.
    pub fn new(stops: &[ColorStop]) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        let mut stops = stops.to_vec();
        stops.sort_by(|s0, s1| {
            s0.offset
                .partial_cmp(&s1.offset)
                .unwrap_or(Ordering::Greater)
        });
        Some(Self { stops })
    }

    /// Color at offset `t`, offsets outside of the stops take the edge colors
    pub fn at(&self, t: Scalar) -> StopColor {
        let index = self.stops.binary_search_by(|stop| {
            if stop.offset < t {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        });
        let index = match index {
            Ok(index) => index,
            Err(index) => index,
        };
        let size = self.stops.len();
        if index == 0 {
            self.stops[index].color
        } else if index == size {
            self.stops[size - 1].color
        } else {
            let p0 = &self.stops[index - 1];
            let p1 = &self.stops[index];
            let span = p1.offset - p0.offset;
            if span <= 0.0 {
                return p1.color;
            }
            p0.color.lerp(p1.color, (t - p0.offset) / span)
        }
    }
}
