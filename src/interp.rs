//! Piecewise-linear interpolation over the shared energy grid.
//!
//! Cross-section tables are sampled at the discrete energies of
//! [`crate::data::ENERGY_GEV`]. Between samples the cross section is taken
//! to vary linearly; beyond the last sample the final segment is extended,
//! so queries above 2.5 GeV extrapolate rather than fail or clamp.

/// A piecewise-linear interpolator over a strictly increasing grid.
///
/// Both the grid and the sampled values are borrowed, so constructing one
/// of these over the embedded `'static` tables is free.
#[derive(Debug, Clone, Copy)]
pub struct LinearTable<'a> {
    /// Strictly increasing sample points (knots).
    xs: &'a [f64],
    /// Corresponding sampled values.
    ys: &'a [f64],
}

impl<'a> LinearTable<'a> {
    /// Construct an interpolator from grid and samples.
    ///
    /// # Panics
    /// Panics if `xs` and `ys` have different lengths, if fewer than 2
    /// points are provided, or if `xs` is not strictly increasing.
    pub fn new(xs: &'a [f64], ys: &'a [f64]) -> Self {
        assert_eq!(xs.len(), ys.len(), "xs and ys must have equal length");
        assert!(xs.len() >= 2, "Need at least 2 data points");
        for i in 1..xs.len() {
            assert!(
                xs[i] > xs[i - 1],
                "xs must be strictly increasing at index {}",
                i
            );
        }
        Self { xs, ys }
    }

    /// Index of the lower knot of the segment used to evaluate at `x`.
    ///
    /// This is the first `i` with `x <= xs[i + 1]`, saturating at the last
    /// interior segment (`xs.len() - 2`) so values above the grid evaluate
    /// on the final segment. An `x` exactly equal to an interior knot `k`
    /// therefore selects segment `k - 1` with fraction 1.
    pub fn lower_index(&self, x: f64) -> usize {
        let last = self.xs.len() - 2;
        // Count of interior knots strictly below x; the grid is sorted, so
        // this binary search picks the same segment a forward scan would.
        let below = self.xs[1..].partition_point(|&knot| knot < x);
        below.min(last)
    }

    /// Evaluate at `x`.
    ///
    /// The interpolation fraction is not clamped: `x` above the last knot
    /// extrapolates linearly off the final segment.
    pub fn evaluate(&self, x: f64) -> f64 {
        let ilow = self.lower_index(x);
        let frac = (x - self.xs[ilow]) / (self.xs[ilow + 1] - self.xs[ilow]);
        self.ys[ilow] + frac * (self.ys[ilow + 1] - self.ys[ilow])
    }
}
