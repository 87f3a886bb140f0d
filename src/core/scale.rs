use crate::error::{DashError, DashResult};

/// Linear mapping from a count domain onto an output range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> DashResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(DashError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(DashError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn map(self, value: f64) -> DashResult<f64> {
        if !value.is_finite() {
            return Err(DashError::InvalidData("value must be finite".to_owned()));
        }
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }
}

/// Square-root mapping from `[0, domain_max]` counts onto a radius range.
///
/// Sizing marks by the square root of the count keeps their area, not their
/// radius, proportional to the count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    domain_max: f64,
    range_min: f64,
    range_max: f64,
}

impl SqrtScale {
    pub fn new(domain_max: f64, range_min: f64, range_max: f64) -> DashResult<Self> {
        if !domain_max.is_finite() || domain_max < 0.0 {
            return Err(DashError::InvalidData(
                "sqrt scale domain max must be finite and non-negative".to_owned(),
            ));
        }
        if !range_min.is_finite() || !range_max.is_finite() || range_min > range_max {
            return Err(DashError::InvalidData(
                "sqrt scale range must be finite and ordered".to_owned(),
            ));
        }

        Ok(Self {
            domain_max,
            range_min,
            range_max,
        })
    }

    #[must_use]
    pub fn domain_max(self) -> f64 {
        self.domain_max
    }

    /// Maps a count to a radius; values clamp into the domain.
    #[must_use]
    pub fn radius(self, value: f64) -> f64 {
        if self.domain_max == 0.0 {
            return self.range_min;
        }
        let clamped = value.clamp(0.0, self.domain_max);
        let normalized = clamped.sqrt() / self.domain_max.sqrt();
        self.range_min + normalized * (self.range_max - self.range_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqrt_scale_maps_domain_ends_onto_range_ends() {
        let scale = SqrtScale::new(100.0, 5.0, 90.0).expect("valid scale");
        assert!((scale.radius(0.0) - 5.0).abs() < 1e-9);
        assert!((scale.radius(100.0) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn sqrt_scale_with_empty_domain_pins_to_minimum_radius() {
        let scale = SqrtScale::new(0.0, 5.0, 90.0).expect("valid scale");
        assert!((scale.radius(0.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn linear_scale_rejects_degenerate_domain() {
        assert!(LinearScale::new(1.0, 1.0, 0.0, 10.0).is_err());
    }
}
