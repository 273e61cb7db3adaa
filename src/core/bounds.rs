use std::fmt::{Display, Formatter};

use crate::{prelude::*, quantity::current::Amperes};

/// Scalar current window, applied identically to every active phase.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LoadpointBounds {
    pub min: Amperes,
    pub max: Amperes,
}

impl LoadpointBounds {
    pub fn try_new(min: Amperes, max: Amperes) -> Result<Self> {
        ensure!(!min.is_negative(), "minimum current must not be negative, got {min}");
        ensure!(min <= max, "minimum current {min} exceeds maximum current {max}");
        Ok(Self { min, max })
    }
}

impl Display for LoadpointBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}
