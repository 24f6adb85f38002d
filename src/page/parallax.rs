use crate::config::PARALLAX_STRENGTH_STEP;

/// Maps the pointer to per-layer pixel offsets for floating decorations.
///
/// The pointer is normalized to [-1, 1] over the viewport (0 at the
/// center), and layer `i` shifts up to `(i + 1) * PARALLAX_STRENGTH_STEP`
/// pixels at the edges, so deeper layers drift farther.
pub struct PointerParallax {
    layer_count: usize,
    normalized: (f32, f32),
}

impl PointerParallax {
    pub fn new(layer_count: usize) -> Self {
        Self {
            layer_count,
            normalized: (0.0, 0.0),
        }
    }

    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Update from a pointer position in viewport pixels; last write wins
    pub fn set_pointer(&mut self, x: f32, y: f32, viewport: (f32, f32)) {
        self.normalized = (x / viewport.0 * 2.0 - 1.0, y / viewport.1 * 2.0 - 1.0);
    }

    /// Current offset for one layer, in pixels
    pub fn layer_offset(&self, layer: usize) -> (f32, f32) {
        let strength = (layer + 1) as f32 * PARALLAX_STRENGTH_STEP;
        (self.normalized.0 * strength, self.normalized.1 * strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_pointer_is_neutral() {
        let mut parallax = PointerParallax::new(3);
        parallax.set_pointer(400.0, 300.0, (800.0, 600.0));

        for layer in 0..3 {
            assert_eq!(parallax.layer_offset(layer), (0.0, 0.0));
        }
    }

    #[test]
    fn test_corner_pointer_scales_per_layer() {
        let mut parallax = PointerParallax::new(3);
        parallax.set_pointer(800.0, 600.0, (800.0, 600.0));

        assert_eq!(parallax.layer_offset(0), (20.0, 20.0));
        assert_eq!(parallax.layer_offset(1), (40.0, 40.0));
        assert_eq!(parallax.layer_offset(2), (60.0, 60.0));
    }

    #[test]
    fn test_opposite_corner_flips_sign() {
        let mut parallax = PointerParallax::new(1);
        parallax.set_pointer(0.0, 0.0, (800.0, 600.0));

        assert_eq!(parallax.layer_offset(0), (-20.0, -20.0));
    }
}
