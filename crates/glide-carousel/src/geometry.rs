use glide_core::Size;

/// Measured layout input for the position engine.
///
/// All slides share one width. Slot `p` of the rendered strip (clones
/// included) starts at `p * (slide_width + spacing)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    pub slide_width: f32,
    pub spacing: f32,
    pub slides_per_view: usize,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::unmeasured(0.0, 1)
    }
}

impl Geometry {
    /// Non-finite or negative lengths are treated as `0` until layout catches up.
    pub fn new(slide_width: f32, spacing: f32, slides_per_view: usize) -> Self {
        Self {
            slide_width: sanitize(slide_width),
            spacing: sanitize(spacing),
            slides_per_view: slides_per_view.max(1),
        }
    }

    pub fn unmeasured(spacing: f32, slides_per_view: usize) -> Self {
        Self::new(0.0, spacing, slides_per_view)
    }

    /// Derives the slide width so `slides_per_view` slides and the gutters
    /// between them fill `viewport_width`.
    pub fn from_viewport(viewport_width: f32, spacing: f32, slides_per_view: usize) -> Self {
        let k = slides_per_view.max(1);
        let spacing = sanitize(spacing);
        let gutters = spacing * (k - 1) as f32;
        Self::new((sanitize(viewport_width) - gutters) / k as f32, spacing, k)
    }

    pub fn from_viewport_size(viewport: Size, spacing: f32, slides_per_view: usize) -> Self {
        Self::from_viewport(viewport.width, spacing, slides_per_view)
    }

    pub fn is_measured(&self) -> bool {
        self.slide_width > 0.0
    }

    /// Distance between the leading edges of two neighbouring slides.
    pub fn stride(&self) -> f32 {
        self.slide_width + self.spacing
    }

    pub fn slot_offset(&self, slot: usize) -> f32 {
        self.slide_width * slot as f32 + self.spacing * slot as f32
    }

    pub fn with_slide_width(mut self, slide_width: f32) -> Self {
        self.slide_width = sanitize(slide_width);
        self
    }
}

fn sanitize(px: f32) -> f32 {
    if px.is_finite() && px > 0.0 { px } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_offsets_include_spacing() {
        let g = Geometry::new(300.0, 10.0, 1);
        assert_eq!(g.slot_offset(0), 0.0);
        assert_eq!(g.slot_offset(1), 310.0);
        assert_eq!(g.slot_offset(6), 1860.0);
        assert_eq!(g.stride(), 310.0);
    }

    #[test]
    fn test_unmeasured_width_computes_zero_offsets() {
        let g = Geometry::new(f32::NAN, 0.0, 1);
        assert!(!g.is_measured());
        assert_eq!(g.slot_offset(4), 0.0);

        let g = Geometry::new(-20.0, 8.0, 0);
        assert_eq!(g.slide_width, 0.0);
        assert_eq!(g.slides_per_view, 1);
        assert_eq!(g.slot_offset(2), 16.0);
    }

    #[test]
    fn test_width_from_viewport() {
        let g = Geometry::from_viewport(300.0, 12.0, 3);
        assert_eq!(g.slide_width, 92.0);
        assert_eq!(g.slides_per_view, 3);

        let g = Geometry::from_viewport_size(Size::new(640.0, 360.0), 0.0, 1);
        assert_eq!(g.slide_width, 640.0);

        // gutters wider than the viewport
        let g = Geometry::from_viewport(10.0, 20.0, 2);
        assert_eq!(g.slide_width, 0.0);
    }
}
