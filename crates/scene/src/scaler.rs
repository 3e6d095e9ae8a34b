//! Affine 1-D range mapping with an exact inverse.

/// Linear mapping from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// No clamping is performed: values outside the input range extrapolate
/// linearly. Callers that need clamping clamp themselves.
///
/// Precondition: `in_min != in_max`. A zero-width input range makes the
/// mapping numerically undefined (`scale` returns NaN/Inf); it is never
/// silently clamped. `out_min == out_max` is allowed and degenerates to a
/// constant mapping (whose inverse is likewise undefined).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    in_min: f64,
    in_max: f64,
    out_min: f64,
    out_max: f64,
}

impl Scaler {
    pub fn new(in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> Self {
        Self {
            in_min,
            in_max,
            out_min,
            out_max,
        }
    }

    /// Map an input-range value to the output range.
    pub fn scale(&self, x: f64) -> f64 {
        let ratio = (self.out_max - self.out_min) / (self.in_max - self.in_min);
        ratio * (x - self.in_min) + self.out_min
    }

    /// Algebraic inverse of [`scale`](Self::scale):
    /// `invert(scale(x)) == x` up to floating-point error.
    pub fn invert(&self, y: f64) -> f64 {
        let ratio = (self.in_max - self.in_min) / (self.out_max - self.out_min);
        ratio * (y - self.out_min) + self.in_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_maps_endpoints() {
        let s = Scaler::new(0.0, 10.0, 100.0, 200.0);
        assert_eq!(s.scale(0.0), 100.0);
        assert_eq!(s.scale(10.0), 200.0);
        assert_eq!(s.scale(5.0), 150.0);
    }

    #[test]
    fn scale_extrapolates_outside_input_range() {
        let s = Scaler::new(0.0, 10.0, 0.0, 100.0);
        assert_eq!(s.scale(-1.0), -10.0);
        assert_eq!(s.scale(11.0), 110.0);
    }

    #[test]
    fn inverted_output_range_flips_axis() {
        // Screen y grows downward; the graph scene relies on this.
        let s = Scaler::new(-1.0, 1.0, 950.0, 50.0);
        assert_eq!(s.scale(-1.0), 950.0);
        assert_eq!(s.scale(1.0), 50.0);
    }

    #[test]
    fn zero_input_range_is_numerically_undefined() {
        let s = Scaler::new(3.0, 3.0, 0.0, 1.0);
        assert!(!s.scale(5.0).is_finite());
    }
}
