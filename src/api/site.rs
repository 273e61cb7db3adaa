//! Site snapshot kept in a TOML file, standing in for the live vehicle and loadpoint.

use std::{cell::RefCell, fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    api::{
        emobility::{
            ChargeState,
            CommunicationStandard,
            LimitWriter,
            PhaseMeasurementSource,
            VehicleLimitSource,
            VehicleStateSource,
        },
        loadpoint::{ActionConfig, LoadpointGateway, Vehicle},
    },
    core::{
        bounds::LoadpointBounds,
        currents::PhaseCurrents,
        limits::{LimitSet, PhaseLimit},
        phase::Phase,
    },
    prelude::*,
    quantity::current::Amperes,
};

#[derive(Serialize, Deserialize)]
pub struct Site {
    pub vehicle: SiteVehicle,
    pub loadpoint: SiteLoadpoint,
}

impl Site {
    #[instrument(skip_all, fields(path = ?path))]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("failed to read `{}`", path.as_ref().display()))?;
        Self::parse(&contents)
    }

    #[instrument(skip_all, fields(path = ?path))]
    pub fn write_to<P: AsRef<Path> + Debug>(&self, path: P) -> Result {
        fs::write(path.as_ref(), toml::to_string(self)?)
            .with_context(|| format!("failed to write `{}`", path.as_ref().display()))?;
        debug!("written");
        Ok(())
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let site: Self = toml::from_str(contents)?;
        let bounds = site.loadpoint.bounds()?;
        debug!(%bounds, "parsed");
        Ok(site)
    }
}

/// Vehicle as seen through the EEBus e-mobility use cases.
#[derive(Serialize, Deserialize)]
pub struct SiteVehicle {
    #[serde(default = "default_connected")]
    pub connected: bool,

    #[serde(default)]
    pub charge_state: ChargeState,

    #[serde(default)]
    pub communication_standard: CommunicationStandard,

    #[serde(default)]
    pub limits: Vec<LimitEntry>,

    /// Measured currents, the first one being `L1`. Absent until the vehicle reports them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currents: Option<Vec<Amperes>>,

    /// Last obligations sent to the vehicle, the first one being `L1`.
    #[serde(default)]
    pub obligations: RefCell<Vec<Amperes>>,
}

const fn default_connected() -> bool {
    true
}

#[derive(Serialize, Deserialize)]
pub struct LimitEntry {
    /// Phase number, `1..=3`.
    pub phase: u8,

    pub min: Amperes,
    pub max: Amperes,

    #[serde(default)]
    pub pause: Amperes,
}

impl SiteVehicle {
    fn ensure_connected(&self) -> Result {
        ensure!(self.connected, "no vehicle connected");
        Ok(())
    }
}

impl VehicleLimitSource for SiteVehicle {
    fn limits(&self) -> Result<LimitSet> {
        self.ensure_connected()?;
        let entries = self
            .limits
            .iter()
            .map(|entry| {
                Ok((
                    Phase::from_number(entry.phase)?,
                    PhaseLimit::try_new(entry.min, entry.max, entry.pause)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        LimitSet::try_from_entries(entries)
    }
}

impl PhaseMeasurementSource for SiteVehicle {
    fn currents(&self) -> Result<Vec<Amperes>> {
        self.ensure_connected()?;
        self.currents.clone().context("no phase currents reported yet")
    }
}

impl VehicleStateSource for SiteVehicle {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn charge_state(&self) -> Result<ChargeState> {
        Ok(self.charge_state)
    }

    fn communication_standard(&self) -> Result<CommunicationStandard> {
        Ok(self.communication_standard)
    }
}

impl LimitWriter for SiteVehicle {
    fn write_obligations(&self, obligations: &PhaseCurrents) -> Result {
        self.ensure_connected()?;
        *self.obligations.borrow_mut() = obligations.to_sequence();
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
pub struct SiteLoadpoint {
    pub min_current: Amperes,
    pub max_current: Amperes,

    /// Vehicle identified at the loadpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleProfile>,
}

impl SiteLoadpoint {
    pub fn bounds(&self) -> Result<LoadpointBounds> {
        LoadpointBounds::try_new(self.min_current, self.max_current)
            .context("invalid loadpoint current window")
    }
}

impl LoadpointGateway for SiteLoadpoint {
    fn min_current(&self) -> Amperes {
        self.min_current
    }

    fn max_current(&self) -> Amperes {
        self.max_current
    }

    fn set_min_current(&mut self, current: Amperes) {
        self.min_current = current;
    }

    fn set_max_current(&mut self, current: Amperes) {
        self.max_current = current;
    }

    fn identified_vehicle(&self) -> Option<&dyn Vehicle> {
        self.vehicle.as_ref().map(|vehicle| vehicle as &dyn Vehicle)
    }
}

/// Stored vehicle profile. A negative current means «no preference».
#[derive(Serialize, Deserialize)]
pub struct VehicleProfile {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_current: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_current: Option<f64>,
}

impl Vehicle for VehicleProfile {
    fn title(&self) -> &str {
        &self.title
    }

    fn on_identified(&self) -> ActionConfig {
        ActionConfig::from_raw(self.min_current, self.max_current)
    }
}
