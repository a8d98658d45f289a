use crate::{
    Argb, BlendCurve, Brush, BrushType, Canvas, ColorRamp, Error, Extend, LinearPaint,
    MatrixOrder, Point, PointI, PresetRamp, Rect, RectI, Scalar, TilePattern, Transform,
};

/// How a gradient is extended to cover a region larger than its rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WrapMode {
    /// Repeat gradient rectangle
    #[default]
    Tile,
    /// Repeat gradient rectangle, flipping every other tile horizontally
    TileFlipX,
    /// Repeat gradient rectangle, flipping every other tile vertically
    TileFlipY,
    /// Repeat gradient rectangle, flipping tiles in both directions
    TileFlipXY,
    /// No tiling
    Clamp,
}

/// Orientation of a gradient constructed from a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinearGradientMode {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
    /// Top-left to bottom-right
    ForwardDiagonal,
    /// Top-right to bottom-left
    BackwardDiagonal,
}

impl LinearGradientMode {
    /// Rotation angle in degrees
    pub fn angle(self) -> Scalar {
        match self {
            LinearGradientMode::Horizontal => 0.0,
            LinearGradientMode::Vertical => 90.0,
            LinearGradientMode::ForwardDiagonal => 45.0,
            LinearGradientMode::BackwardDiagonal => 135.0,
        }
    }
}

/// Brush painting a color transition along a line
///
/// Colors along the gradient axis come either from a blend curve weighting
/// two endpoint colors, or from a preset ramp of explicit colors. Painted
/// rectangle is tiled over the filled region according to the wrap mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearGradientBrush {
    colors: [Argb; 2],
    points: [Point; 2],
    rect: Rect,
    wrap_mode: WrapMode,
    /// Rotation in degrees
    angle: Scalar,
    angle_scalable: bool,
    gamma_correction: bool,
    transform: Transform,
    ramp: ColorRamp,
}

impl LinearGradientBrush {
    /// Gradient from `p0` with color `c0` to `p1` with color `c1`
    pub fn new(
        p0: impl Into<Point>,
        p1: impl Into<Point>,
        c0: Argb,
        c1: Argb,
        wrap_mode: WrapMode,
    ) -> Self {
        let p0 = p0.into();
        let p1 = p1.into();
        Self {
            colors: [c0, c1],
            points: [p0, p1],
            rect: Rect::from_line(p0, p1),
            wrap_mode,
            angle: 0.0,
            angle_scalable: false,
            gamma_correction: false,
            transform: Transform::identity(),
            ramp: ColorRamp::default(),
        }
    }

    pub fn new_i(p0: PointI, p1: PointI, c0: Argb, c1: Argb, wrap_mode: WrapMode) -> Self {
        Self::new(p0, p1, c0, c1, wrap_mode)
    }

    /// Gradient across the rectangle in the direction given by `mode`
    pub fn from_rect(
        rect: Rect,
        c0: Argb,
        c1: Argb,
        mode: LinearGradientMode,
        wrap_mode: WrapMode,
    ) -> Self {
        Self::from_rect_with_angle(rect, c0, c1, mode.angle(), false, wrap_mode)
    }

    pub fn from_rect_i(
        rect: RectI,
        c0: Argb,
        c1: Argb,
        mode: LinearGradientMode,
        wrap_mode: WrapMode,
    ) -> Self {
        Self::from_rect(rect.into(), c0, c1, mode, wrap_mode)
    }

    /// Gradient along the horizontal mid-line of the rectangle, rotated by `angle` degrees
    pub fn from_rect_with_angle(
        rect: Rect,
        c0: Argb,
        c1: Argb,
        angle: Scalar,
        angle_scalable: bool,
        wrap_mode: WrapMode,
    ) -> Self {
        Self {
            colors: [c0, c1],
            points: [rect.left_mid(), rect.right_mid()],
            rect,
            wrap_mode,
            angle,
            angle_scalable,
            gamma_correction: false,
            transform: Transform::identity(),
            ramp: ColorRamp::default(),
        }
    }

    pub fn from_rect_with_angle_i(
        rect: RectI,
        c0: Argb,
        c1: Argb,
        angle: Scalar,
        angle_scalable: bool,
        wrap_mode: WrapMode,
    ) -> Self {
        Self::from_rect_with_angle(rect.into(), c0, c1, angle, angle_scalable, wrap_mode)
    }

    pub fn colors(&self) -> [Argb; 2] {
        self.colors
    }

    pub fn set_colors(&mut self, c0: Argb, c1: Argb) {
        self.colors = [c0, c1];
    }

    /// Start and end of the gradient axis
    pub fn points(&self) -> [Point; 2] {
        self.points
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Bounding rectangle with components truncated to integers
    pub fn rect_i(&self) -> RectI {
        self.rect.into()
    }

    /// Rotation angle in degrees
    pub fn angle(&self) -> Scalar {
        self.angle
    }

    pub fn is_angle_scalable(&self) -> bool {
        self.angle_scalable
    }

    pub fn gamma_correction(&self) -> bool {
        self.gamma_correction
    }

    pub fn set_gamma_correction(&mut self, gamma_correction: bool) {
        self.gamma_correction = gamma_correction;
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Set wrap mode, `WrapMode::Clamp` is rejected
    pub fn set_wrap_mode(&mut self, wrap_mode: WrapMode) -> Result<(), Error> {
        if wrap_mode == WrapMode::Clamp {
            return Err(Error::InvalidArgument("clamp wrap mode is not allowed"));
        }
        self.wrap_mode = wrap_mode;
        Ok(())
    }

    pub fn ramp(&self) -> &ColorRamp {
        &self.ramp
    }

    /// Blend curve, unless preset ramp is in use
    pub fn blend(&self) -> Option<&BlendCurve> {
        self.ramp.blend()
    }

    pub fn blend_count(&self) -> Option<usize> {
        self.ramp.blend().map(BlendCurve::len)
    }

    /// Replace color ramp with a blend curve
    ///
    /// Factors and positions are stored as is, values out of `[0, 1]` or
    /// unordered positions are not rejected. Preset ramp is dropped.
    pub fn set_blend(&mut self, factors: &[f32], positions: &[f32]) -> Result<(), Error> {
        let curve = BlendCurve::new(factors, positions).ok_or(Error::InvalidArgument(
            "blend factors and positions differ in length",
        ))?;
        tracing::debug!(count = curve.len(), "[set_blend]");
        self.ramp = ColorRamp::Blend(curve);
        Ok(())
    }

    /// Preset ramp, if it is in use
    pub fn preset_blend(&self) -> Option<&PresetRamp> {
        self.ramp.preset()
    }

    pub fn preset_blend_count(&self) -> Option<usize> {
        self.ramp.preset().map(PresetRamp::len)
    }

    /// Replace color ramp with a preset ramp, blend curve is dropped
    pub fn set_preset_blend(&mut self, colors: &[Argb], positions: &[f32]) -> Result<(), Error> {
        let ramp = PresetRamp::new(colors, positions).ok_or(Error::InvalidArgument(
            "preset colors and positions differ in length",
        ))?;
        tracing::debug!(count = ramp.len(), "[set_preset_blend]");
        self.ramp = ColorRamp::Preset(ramp);
        Ok(())
    }

    /// Blend curve with a triangular shape peaking at `focus`
    pub fn set_linear_blend(&mut self, _focus: f32, _scale: f32) -> Result<(), Error> {
        Err(Error::NotImplemented("linear blend"))
    }

    /// Blend curve with a bell shape peaking at `focus`
    pub fn set_sigma_blend(&mut self, _focus: f32, _scale: f32) -> Result<(), Error> {
        Err(Error::NotImplemented("sigma blend"))
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Replace transform mapping the user space into the pattern space
    ///
    /// Any matrix is stored, a singular one collapses the tiling.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.transform = Transform::identity();
    }

    pub fn multiply_transform(&mut self, transform: Transform, order: MatrixOrder) {
        self.transform = self.transform.multiply(transform, order);
    }

    /// Combine transform with rotation by `angle` degrees
    pub fn rotate_transform(&mut self, angle: Scalar, order: MatrixOrder) {
        self.transform = self.transform.rotate(angle, order);
    }

    pub fn scale_transform(&mut self, sx: Scalar, sy: Scalar, order: MatrixOrder) {
        self.transform = self.transform.scale(sx, sy, order);
    }

    pub fn translate_transform(&mut self, dx: Scalar, dy: Scalar, order: MatrixOrder) {
        self.transform = self.transform.translate(dx, dy, order);
    }

    /// Linear paint filling the gradient rectangle
    pub fn paint(&self) -> Result<LinearPaint, Error> {
        let stops = self.ramp.stops(self.colors, self.gamma_correction);
        if stops.is_empty() {
            tracing::warn!("[paint] color ramp has no stops");
            return Err(Error::InvalidArgument("color ramp has no stops"));
        }
        tracing::trace!(count = stops.len(), "[paint] stops");
        let [start, end] = self.points;
        Ok(LinearPaint {
            start,
            end,
            stops,
            rect: self.rect,
            angle: self.angle,
        })
    }

    /// Tile pattern covering the fill region
    pub fn pattern(&self) -> TilePattern {
        TilePattern {
            rect: self.rect,
            extend: Extend::Repeat,
            transform: self.transform,
        }
    }

    fn setup_tile(&self, canvas: &mut dyn Canvas) -> Result<(), Error> {
        let paint = self.paint()?;
        canvas.fill_linear(&paint)?;
        canvas.set_tile(&self.pattern())?;
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    #[cfg(feature = "serde")]
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl Brush for LinearGradientBrush {
    fn brush_type(&self) -> BrushType {
        BrushType::LinearGradient
    }

    fn setup(&self, canvas: &mut dyn Canvas) -> Result<(), Error> {
        let _span = tracing::debug_span!("[setup]", wrap_mode = ?self.wrap_mode).entered();
        match self.wrap_mode {
            // flipping along the gradient axis has no visible effect
            WrapMode::Tile | WrapMode::TileFlipY => self.setup_tile(canvas),
            WrapMode::TileFlipX | WrapMode::TileFlipXY => {
                tracing::warn!("[setup] mirrored tiling is not supported");
                Err(Error::NotImplemented("mirrored tiling"))
            }
            WrapMode::Clamp => {
                tracing::warn!("[setup] clamp wrap mode");
                Err(Error::InvalidArgument("clamp wrap mode"))
            }
        }
    }

    fn clone_brush(&self) -> Box<dyn Brush> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        CanvasError, ColorStop, Image, ImageCanvas, Status, StopColor, assert_approx_eq,
    };

    /// Canvas recording what brush sends to it
    #[derive(Default)]
    struct Recorder {
        paints: Vec<LinearPaint>,
        tiles: Vec<TilePattern>,
        fail_tile: bool,
    }

    impl Canvas for Recorder {
        fn fill_linear(&mut self, paint: &LinearPaint) -> Result<(), CanvasError> {
            self.paints.push(paint.clone());
            Ok(())
        }

        fn set_tile(&mut self, pattern: &TilePattern) -> Result<(), CanvasError> {
            if self.fail_tile {
                return Err(CanvasError::PatternAlloc);
            }
            self.tiles.push(pattern.clone());
            Ok(())
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn brush() -> LinearGradientBrush {
        LinearGradientBrush::new(
            (0.0, 0.0),
            (10.0, 0.0),
            Argb::BLACK,
            Argb::WHITE,
            WrapMode::Tile,
        )
    }

    #[test]
    fn test_new() {
        let brush = brush();
        assert_eq!(brush.colors(), [Argb::BLACK, Argb::WHITE]);
        assert_eq!(brush.points(), [Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
        assert_eq!(brush.rect(), Rect::new(0.0, -5.0, 10.0, 10.0));
        assert_eq!(brush.wrap_mode(), WrapMode::Tile);
        assert_eq!(brush.angle(), 0.0);
        assert!(!brush.is_angle_scalable());
        assert!(!brush.gamma_correction());
        assert!(brush.transform().is_identity());
        assert_eq!(brush.blend(), Some(&BlendCurve::default()));
        assert_eq!(brush.preset_blend(), None);
        assert_eq!(brush.brush_type(), BrushType::LinearGradient);

        let brush_i = LinearGradientBrush::new_i(
            PointI::new(0, 0),
            PointI::new(10, 0),
            Argb::BLACK,
            Argb::WHITE,
            WrapMode::Tile,
        );
        assert_eq!(brush_i, brush);
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let brush = LinearGradientBrush::from_rect(
            rect,
            Argb::BLACK,
            Argb::WHITE,
            LinearGradientMode::Vertical,
            WrapMode::TileFlipY,
        );
        assert_eq!(brush.angle(), 90.0);
        assert!(!brush.is_angle_scalable());
        assert_eq!(brush.rect(), rect);
        assert_eq!(
            brush.points(),
            [Point::new(10.0, 45.0), Point::new(110.0, 45.0)]
        );

        let angles: Vec<_> = [
            LinearGradientMode::Horizontal,
            LinearGradientMode::Vertical,
            LinearGradientMode::ForwardDiagonal,
            LinearGradientMode::BackwardDiagonal,
        ]
        .iter()
        .map(|mode| mode.angle())
        .collect();
        assert_eq!(angles, vec![0.0, 90.0, 45.0, 135.0]);

        let brush = LinearGradientBrush::from_rect_with_angle_i(
            RectI::new(1, 2, 3, 4),
            Argb::BLACK,
            Argb::WHITE,
            30.0,
            true,
            WrapMode::Tile,
        );
        assert_eq!(brush.rect(), Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(brush.angle(), 30.0);
        assert!(brush.is_angle_scalable());

        let brush = LinearGradientBrush::from_rect_i(
            RectI::new(0, 0, 4, 2),
            Argb::BLACK,
            Argb::WHITE,
            LinearGradientMode::BackwardDiagonal,
            WrapMode::Tile,
        );
        assert_eq!(brush.angle(), 135.0);
        assert_eq!(brush.points(), [Point::new(0.0, 1.0), Point::new(4.0, 1.0)]);
    }

    #[test]
    fn test_rect_i() {
        let brush = LinearGradientBrush::new(
            (0.5, 0.0),
            (0.5, 3.0),
            Argb::BLACK,
            Argb::WHITE,
            WrapMode::Tile,
        );
        assert_eq!(brush.rect(), Rect::new(-1.0, 0.0, 3.0, 3.0));
        assert_eq!(brush.rect_i(), RectI::new(-1, 0, 3, 3));

        let brush = LinearGradientBrush::new(
            (0.0, 0.0),
            (2.5, 7.9),
            Argb::BLACK,
            Argb::WHITE,
            WrapMode::Tile,
        );
        assert_eq!(brush.rect_i(), RectI::new(0, 0, 2, 7));
    }

    #[test]
    fn test_set_blend() -> Result<(), Error> {
        let mut brush = brush();
        brush.set_preset_blend(&[Argb::BLACK, Argb::WHITE], &[0.0, 1.0])?;

        let factors: [f32; 3] = [0.0, 0.3, 1.0];
        let positions: [f32; 3] = [0.0, 0.7, 1.0];
        brush.set_blend(&factors, &positions)?;
        let curve = brush.blend().expect("blend curve is active");
        assert_eq!(curve.factors(), factors.to_vec());
        assert_eq!(curve.positions(), positions.to_vec());
        assert_eq!(brush.blend_count(), Some(3));
        assert_eq!(brush.preset_blend(), None);
        assert_eq!(brush.preset_blend_count(), None);

        // unordered and out of range values are accepted
        brush.set_blend(&[2.0, -1.0], &[0.9, 0.1])?;
        assert_eq!(brush.blend_count(), Some(2));
        Ok(())
    }

    #[test]
    fn test_set_preset_blend() -> Result<(), Error> {
        let mut brush = brush();
        let colors = [Argb(0xffff0000), Argb(0xff00ff00), Argb(0xff0000ff)];
        let positions: [f32; 3] = [0.0, 0.5, 1.0];
        brush.set_preset_blend(&colors, &positions)?;
        let ramp = brush.preset_blend().expect("preset ramp is active");
        assert_eq!(ramp.colors(), colors.to_vec());
        assert_eq!(ramp.positions(), positions.to_vec());
        assert_eq!(brush.preset_blend_count(), Some(3));
        assert_eq!(brush.blend(), None);
        assert_eq!(brush.blend_count(), None);
        Ok(())
    }

    #[test]
    fn test_invalid_ramp_keeps_state() -> Result<(), Error> {
        let mut brush = brush();
        brush.set_blend(&[0.5], &[0.5])?;
        let before = brush.clone();

        assert!(matches!(
            brush.set_blend(&[0.5, 1.0], &[0.5]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            brush.set_preset_blend(&[Argb::BLACK], &[0.0, 1.0]),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(brush, before);
        Ok(())
    }

    #[test]
    fn test_exclusive_ramps() -> Result<(), Error> {
        let mut brush = brush();
        for step in 0..4 {
            if step % 2 == 0 {
                brush.set_blend(&[1.0, 0.0], &[0.0, 1.0])?;
            } else {
                brush.set_preset_blend(&[Argb::WHITE, Argb::BLACK], &[0.0, 1.0])?;
            }
            assert_ne!(brush.blend().is_some(), brush.preset_blend().is_some());
        }
        Ok(())
    }

    #[test]
    fn test_wrap_mode() -> Result<(), Error> {
        let mut brush = brush();
        brush.set_wrap_mode(WrapMode::TileFlipX)?;
        let result = brush.set_wrap_mode(WrapMode::Clamp);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
        assert_eq!(Status::from(&result), Status::InvalidParameter);
        assert_eq!(brush.wrap_mode(), WrapMode::TileFlipX);
        Ok(())
    }

    #[test]
    fn test_not_implemented() {
        let mut brush = brush();
        let before = brush.clone();
        assert_eq!(
            brush.set_linear_blend(0.5, 1.0),
            Err(Error::NotImplemented("linear blend"))
        );
        assert_eq!(
            brush.set_sigma_blend(0.5, 1.0),
            Err(Error::NotImplemented("sigma blend"))
        );
        assert_eq!(brush, before);
    }

    #[test]
    fn test_transform() {
        let mut brush = brush();
        brush.translate_transform(10.0, 0.0, MatrixOrder::Prepend);
        brush.scale_transform(2.0, 2.0, MatrixOrder::Append);
        let p = brush.transform().apply(Point::new(1.0, 1.0));
        assert!(p.is_close_to(Point::new(22.0, 2.0)));

        brush.rotate_transform(90.0, MatrixOrder::Prepend);
        brush.multiply_transform(Transform::new_scale(0.5, 0.5), MatrixOrder::Append);
        let p = brush.transform().apply(Point::new(1.0, 0.0));
        assert_approx_eq!(p.x(), 10.0, 1e-9);
        assert_approx_eq!(p.y(), 1.0, 1e-9);

        // singular matrices are stored as is
        brush.scale_transform(0.0, 1.0, MatrixOrder::Prepend);
        assert!(brush.transform().invert().is_none());
        brush.set_transform(Transform::new_scale(1.0, 0.0));
        assert_eq!(brush.transform(), Transform::new_scale(1.0, 0.0));

        brush.set_transform(Transform::new_translate(1.0, 2.0));
        assert_eq!(brush.transform(), Transform::new_translate(1.0, 2.0));
        brush.reset_transform();
        assert!(brush.transform().is_identity());
    }

    #[test]
    fn test_clone_is_deep() -> Result<(), Error> {
        let mut source = brush();
        source.set_blend(&[0.0, 1.0], &[0.0, 1.0])?;
        source.set_gamma_correction(true);
        source.translate_transform(3.0, 4.0, MatrixOrder::Prepend);

        let mut clone = source.clone();
        assert_eq!(clone, source);

        clone.set_blend(&[0.25], &[0.5])?;
        clone.translate_transform(1.0, 1.0, MatrixOrder::Prepend);
        assert_eq!(source.blend_count(), Some(2));
        assert_eq!(source.transform(), Transform::new_translate(3.0, 4.0));

        let boxed = source.clone_brush();
        assert_eq!(boxed.brush_type(), BrushType::LinearGradient);
        Ok(())
    }

    #[test]
    fn test_paint_blend() -> Result<(), Error> {
        let mut brush = brush();
        brush.set_blend(&[0.5], &[0.5])?;
        let paint = brush.paint()?;
        assert_eq!(paint.start, Point::new(0.0, 0.0));
        assert_eq!(paint.end, Point::new(10.0, 0.0));
        assert_eq!(paint.rect, brush.rect());
        assert_eq!(
            paint.stops,
            vec![ColorStop::new(0.5, StopColor::new(127.5, 127.5, 127.5, 255.0))]
        );
        Ok(())
    }

    #[test]
    fn test_paint_preset() -> Result<(), Error> {
        let mut brush = brush();
        brush.set_preset_blend(&[Argb(0x80102030), Argb(0xff000000)], &[0.2, 0.8])?;
        brush.set_gamma_correction(true);
        let paint = brush.paint()?;
        assert_eq!(
            paint.stops,
            vec![
                ColorStop::new(0.2f32 as Scalar, StopColor::new(16.0, 32.0, 48.0, 128.0)),
                ColorStop::new(0.8f32 as Scalar, StopColor::new(0.0, 0.0, 0.0, 255.0)),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_paint_empty_ramp() -> Result<(), Error> {
        let mut brush = brush();
        brush.set_blend(&[], &[])?;
        assert!(matches!(brush.paint(), Err(Error::InvalidArgument(_))));
        brush.set_preset_blend(&[], &[])?;
        let mut canvas = Recorder::default();
        assert!(matches!(
            brush.setup(&mut canvas),
            Err(Error::InvalidArgument(_))
        ));
        assert!(canvas.paints.is_empty());
        Ok(())
    }

    #[test]
    fn test_setup_tile() -> Result<(), Error> {
        let mut brush = brush();
        brush.scale_transform(2.0, 1.0, MatrixOrder::Prepend);
        for wrap_mode in [WrapMode::Tile, WrapMode::TileFlipY] {
            brush.set_wrap_mode(wrap_mode)?;
            let mut canvas = Recorder::default();
            brush.setup(&mut canvas)?;
            assert_eq!(canvas.paints, vec![brush.paint()?]);
            assert_eq!(
                canvas.tiles,
                vec![TilePattern {
                    rect: brush.rect(),
                    extend: Extend::Repeat,
                    transform: Transform::new_scale(2.0, 1.0),
                }]
            );
        }
        Ok(())
    }

    #[test]
    fn test_setup_errors() -> Result<(), Error> {
        init_tracing();
        let mut brush = brush();
        for wrap_mode in [WrapMode::TileFlipX, WrapMode::TileFlipXY] {
            brush.set_wrap_mode(wrap_mode)?;
            let mut canvas = Recorder::default();
            let result = brush.setup(&mut canvas);
            assert_eq!(Status::from(&result), Status::NotImplemented);
            assert!(canvas.paints.is_empty());
        }

        let clamped = LinearGradientBrush::new(
            (0.0, 0.0),
            (1.0, 1.0),
            Argb::BLACK,
            Argb::WHITE,
            WrapMode::Clamp,
        );
        let result = clamped.setup(&mut Recorder::default());
        assert_eq!(Status::from(&result), Status::InvalidParameter);

        brush.set_wrap_mode(WrapMode::Tile)?;
        let mut canvas = Recorder {
            fail_tile: true,
            ..Default::default()
        };
        assert_eq!(brush.setup(&mut canvas), Err(Error::OutOfMemory));
        Ok(())
    }

    #[test]
    fn test_setup_image_canvas() -> Result<(), Error> {
        init_tracing();
        let mut brush = LinearGradientBrush::from_rect(
            Rect::new(0.0, 0.0, 4.0, 2.0),
            Argb::BLACK,
            Argb::WHITE,
            LinearGradientMode::Horizontal,
            WrapMode::Tile,
        );
        brush.set_blend(&[1.0, 0.0], &[0.0, 1.0])?;

        let mut canvas = ImageCanvas::new(12, 2);
        brush.setup(&mut canvas)?;
        canvas.fill(Rect::new(0.0, 0.0, 12.0, 2.0))?;
        let target = canvas.target();
        assert_eq!(target.get(0, 0), Some(&Argb(0xff202020)));
        assert_eq!(target.get(0, 3), Some(&Argb(0xffdfdfdf)));
        for col in 0..4 {
            assert_eq!(target.get(0, col), target.get(1, col + 4));
            assert_eq!(target.get(0, col), target.get(0, col + 8));
        }
        assert_eq!(canvas.as_bytes().len(), 12 * 2 * 4);
        Ok(())
    }

    #[test]
    fn test_setup_large_rect() -> Result<(), Error> {
        let mut brush = LinearGradientBrush::from_rect(
            Rect::new(0.0, 0.0, 5e9, 5e9),
            Argb::BLACK,
            Argb::WHITE,
            LinearGradientMode::Horizontal,
            WrapMode::Tile,
        );
        brush.set_blend(&[1.0, 0.0], &[0.0, 1.0])?;
        let mut canvas = ImageCanvas::new(4, 4);
        brush.setup(&mut canvas)?;
        canvas.fill(Rect::new(0.0, 0.0, 4.0, 4.0))?;
        assert_eq!(canvas.target().get(3, 3), Some(&Argb::BLACK));
        Ok(())
    }

    #[test]
    fn test_setup_scaled_tile() -> Result<(), Error> {
        let mut brush = LinearGradientBrush::from_rect(
            Rect::new(0.0, 0.0, 4.0, 1.0),
            Argb::BLACK,
            Argb::WHITE,
            LinearGradientMode::Horizontal,
            WrapMode::Tile,
        );
        brush.set_blend(&[1.0, 0.0], &[0.0, 1.0])?;
        // transform maps user space into the tile space
        brush.scale_transform(2.0, 1.0, MatrixOrder::Prepend);
        let mut canvas = ImageCanvas::new(8, 1);
        brush.setup(&mut canvas)?;
        assert_eq!(canvas.source_at(Point::new(0.25, 0.5)), Some(Argb(0xff202020)));
        assert_eq!(canvas.source_at(Point::new(1.5, 0.5)), Some(Argb(0xffdfdfdf)));
        canvas.fill(Rect::new(0.0, 0.0, 8.0, 1.0))?;
        assert_eq!(canvas.target().get(0, 1), Some(&Argb(0xffdfdfdf)));
        assert_eq!(canvas.target().get(0, 3), Some(&Argb(0xffdfdfdf)));

        // singular transform collapses the tile onto its first column
        brush.set_transform(Transform::new_scale(0.0, 1.0));
        brush.setup(&mut canvas)?;
        assert_eq!(canvas.source_at(Point::new(3.5, 0.5)), Some(Argb(0xff202020)));
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json() -> Result<(), Box<dyn std::error::Error>> {
        let mut brush = brush();
        brush.set_preset_blend(&[Argb(0xff102030), Argb(0x80ffffff)], &[0.0, 1.0])?;
        brush.scale_transform(2.0, 0.5, MatrixOrder::Append);
        let value = brush.to_json()?;
        assert_eq!(value["wrap_mode"], serde_json::json!("Tile"));
        assert_eq!(
            value["ramp"]["Preset"]["points"][1]["color"],
            serde_json::json!("#ffffff80")
        );
        let restored = LinearGradientBrush::from_json(value)?;
        assert_eq!(restored, brush);
        Ok(())
    }
}
