//! Vehicle-side capabilities as exposed by the EEBus e-mobility use cases.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    core::{currents::PhaseCurrents, limits::LimitSet},
    prelude::*,
    quantity::current::Amperes,
};

/// Per-phase current limits of the connected vehicle.
pub trait VehicleLimitSource {
    fn limits(&self) -> Result<LimitSet>;
}

/// Measured charging currents, ordered by phase, the first item being `L1`.
pub trait PhaseMeasurementSource {
    fn currents(&self) -> Result<Vec<Amperes>>;
}

/// Connection and charging state as reported by the vehicle.
pub trait VehicleStateSource {
    fn is_connected(&self) -> bool;

    fn charge_state(&self) -> Result<ChargeState>;

    fn communication_standard(&self) -> Result<CommunicationStandard>;
}

/// Accepts per-phase current obligations for the vehicle.
pub trait LimitWriter {
    fn write_obligations(&self, obligations: &PhaseCurrents) -> Result;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeState {
    #[default]
    Unknown,
    Unplugged,
    Active,
    Paused,
    Finished,
    Error,
}

impl Display for ChargeState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::Unplugged => write!(f, "Unplugged"),
            Self::Active => write!(f, "Active"),
            Self::Paused => write!(f, "Paused"),
            Self::Finished => write!(f, "Finished"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// How the vehicle talks to the charger.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum CommunicationStandard {
    /// Not negotiated yet.
    #[default]
    #[serde(rename = "unknown")]
    Unknown,

    /// Basic PWM signalling.
    #[serde(rename = "iec61851")]
    Iec61851,

    /// High-level communication.
    #[serde(rename = "iso15118-2")]
    Iso15118_2,
}

impl Display for CommunicationStandard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Iec61851 => write!(f, "IEC 61851"),
            Self::Iso15118_2 => write!(f, "ISO 15118-2"),
        }
    }
}
