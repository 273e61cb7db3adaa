use std::fmt::{Display, Formatter};

use crate::{
    api::emobility::CommunicationStandard,
    core::{currents::PhaseCurrents, limits::LimitSet},
    prelude::*,
    quantity::current::Amperes,
};

/// What the loadpoint asks the vehicle to do.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Suspend charging: every phase drops to its pause current.
    Pause,

    /// Charge with at most this current on every phase.
    Limit(Amperes),
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pause => write!(f, "pause"),
            Self::Limit(current) => write!(f, "limit to {current}"),
        }
    }
}

impl Command {
    /// Per-phase obligations implementing the command.
    ///
    /// A pause is refused until the communication standard is negotiated: a pause obligation
    /// sent earlier makes ISO 15118 vehicles fall back to IEC 61851.
    pub fn obligations(
        self,
        limits: &LimitSet,
        communication_standard: CommunicationStandard,
    ) -> Result<PhaseCurrents> {
        match self {
            Self::Pause => {
                ensure!(
                    communication_standard != CommunicationStandard::Unknown,
                    "communication standard is not negotiated yet, retry later",
                );
                Ok(limits.iter().map(|(phase, limit)| (phase, limit.pause)).collect())
            }
            Self::Limit(current) => {
                ensure!(!current.is_negative(), "current must not be negative, got {current}");
                Ok(limits.iter().map(|(phase, limit)| (phase, current.min(limit.max))).collect())
            }
        }
    }
}
