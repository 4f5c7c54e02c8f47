//! Infection parameters and mask protection.

use mc_core::{DurationSpec, McError, McResult};

/// How infectious an ill individual is.
///
/// A healthy individual closer than `radius` to someone ill is exposed; it
/// falls ill when the time it spends inside that radius during a step
/// exceeds a duration drawn from `exposure` (normal, truncated at zero).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfectionSpec {
    pub radius:   f64,
    pub exposure: DurationSpec,
}

impl InfectionSpec {
    pub fn new(radius: f64, exposure_mean: f64, exposure_std: f64) -> McResult<Self> {
        let spec = Self { radius, exposure: DurationSpec::new(exposure_mean, exposure_std) };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> McResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(McError::InvalidParameter(format!(
                "infection radius must be positive and finite, got {}",
                self.radius
            )));
        }
        self.exposure.distribution().map(|_| ())
    }
}

impl Default for InfectionSpec {
    fn default() -> Self {
        Self { radius: 1.0, exposure: DurationSpec::new(0.25, 0.5) }
    }
}

/// Mask protection factor `m >= 1`; the infection radius shrinks to `r / m`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaskProtection(f64);

impl MaskProtection {
    /// No mask: factor 1.
    pub const NONE: MaskProtection = MaskProtection(1.0);

    pub fn new(factor: f64) -> McResult<Self> {
        if !factor.is_finite() || factor < 1.0 {
            return Err(McError::InvalidParameter(format!(
                "mask protection must be a finite value >= 1, got {factor}"
            )));
        }
        Ok(Self(factor))
    }

    /// `None` means nobody wears a mask.
    pub fn from_option(factor: Option<f64>) -> McResult<Self> {
        factor.map_or(Ok(Self::NONE), Self::new)
    }

    #[inline]
    pub fn factor(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn effective_radius(self, radius: f64) -> f64 {
        radius / self.0
    }
}

impl Default for MaskProtection {
    fn default() -> Self {
        Self::NONE
    }
}
