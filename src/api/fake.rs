//! Test doubles for the collaborator traits.

use std::cell::RefCell;

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
    core::{currents::PhaseCurrents, limits::LimitSet},
    prelude::*,
    quantity::current::Amperes,
};

/// Vehicle side with canned readings. A [`None`] reading fails.
pub struct FakeEmobility {
    pub limits: Option<LimitSet>,
    pub currents: Option<Vec<Amperes>>,
    pub connected: bool,
    pub charge_state: ChargeState,
    pub communication_standard: CommunicationStandard,
    pub written: RefCell<Vec<PhaseCurrents>>,
}

impl FakeEmobility {
    pub fn new(limits: LimitSet, currents: &[f64]) -> Self {
        Self {
            limits: Some(limits),
            currents: Some(currents.iter().copied().map(Amperes).collect()),
            connected: true,
            charge_state: ChargeState::Active,
            communication_standard: CommunicationStandard::Iec61851,
            written: RefCell::default(),
        }
    }
}

impl VehicleLimitSource for FakeEmobility {
    fn limits(&self) -> Result<LimitSet> {
        self.limits.clone().context("limits are not available")
    }
}

impl PhaseMeasurementSource for FakeEmobility {
    fn currents(&self) -> Result<Vec<Amperes>> {
        self.currents.clone().context("currents are not available")
    }
}

impl VehicleStateSource for FakeEmobility {
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

impl LimitWriter for FakeEmobility {
    fn write_obligations(&self, obligations: &PhaseCurrents) -> Result {
        self.written.borrow_mut().push(obligations.clone());
        Ok(())
    }
}

pub struct FakeVehicle(pub ActionConfig);

impl Vehicle for FakeVehicle {
    fn title(&self) -> &str {
        "fake"
    }

    fn on_identified(&self) -> ActionConfig {
        self.0
    }
}

/// Loadpoint that records every setter call.
pub struct RecordingLoadpoint {
    pub min_current: Amperes,
    pub max_current: Amperes,
    pub vehicle: Option<FakeVehicle>,
    pub set_min_calls: Vec<Amperes>,
    pub set_max_calls: Vec<Amperes>,
}

impl RecordingLoadpoint {
    pub const fn new(min_current: f64, max_current: f64) -> Self {
        Self {
            min_current: Amperes(min_current),
            max_current: Amperes(max_current),
            vehicle: None,
            set_min_calls: Vec::new(),
            set_max_calls: Vec::new(),
        }
    }

    pub fn with_vehicle(mut self, vehicle: FakeVehicle) -> Self {
        self.vehicle = Some(vehicle);
        self
    }

    pub fn n_calls(&self) -> usize {
        self.set_min_calls.len() + self.set_max_calls.len()
    }
}

impl LoadpointGateway for RecordingLoadpoint {
    fn min_current(&self) -> Amperes {
        self.min_current
    }

    fn max_current(&self) -> Amperes {
        self.max_current
    }

    fn set_min_current(&mut self, current: Amperes) {
        self.set_min_calls.push(current);
        self.min_current = current;
    }

    fn set_max_current(&mut self, current: Amperes) {
        self.set_max_calls.push(current);
        self.max_current = current;
    }

    fn identified_vehicle(&self) -> Option<&dyn Vehicle> {
        self.vehicle.as_ref().map(|vehicle| vehicle as &dyn Vehicle)
    }
}
