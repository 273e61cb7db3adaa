use crate::{
    api::{
        emobility::{LimitWriter, PhaseMeasurementSource, VehicleLimitSource, VehicleStateSource},
        loadpoint::LoadpointGateway,
    },
    core::{
        charging::ChargeStateEvaluator,
        command::Command,
        currents::PhaseCurrents,
        limits::LimitSet,
        reconciler::{LimitReconciler, Reconciliation},
        status::ChargeStatus,
    },
    prelude::*,
    quantity::current::Amperes,
};

/// Binds an EEBus-connected vehicle to a loadpoint.
///
/// Everything is read fresh from the vehicle on each call, the adapter keeps no state of its own.
pub struct Adapter<'a, E: ?Sized> {
    emobility: &'a E,
}

impl<'a, E: ?Sized> Adapter<'a, E> {
    pub const fn new(emobility: &'a E) -> Self {
        Self { emobility }
    }
}

impl<E: VehicleLimitSource + ?Sized> Adapter<'_, E> {
    pub fn limits(&self) -> Result<LimitSet> {
        self.emobility.limits().context("failed to read the vehicle current limits")
    }

    pub fn reconcile(&self, loadpoint: &mut dyn LoadpointGateway) -> Result<Reconciliation> {
        LimitReconciler::new(self.emobility).reconcile(loadpoint)
    }
}

impl<E: VehicleLimitSource + PhaseMeasurementSource + ?Sized> Adapter<'_, E> {
    pub fn is_charging(&self) -> Result<bool> {
        ChargeStateEvaluator::new(self.emobility).is_charging(&self.limits()?)
    }

    /// Measured currents on all three phases, zero where the vehicle reports nothing.
    pub fn currents(&self) -> Result<[Amperes; 3]> {
        let currents =
            self.emobility.currents().context("failed to read the phase currents")?;
        Ok(PhaseCurrents::from_sequence(&currents).padded())
    }
}

impl<E: VehicleLimitSource + PhaseMeasurementSource + VehicleStateSource + ?Sized> Adapter<'_, E> {
    #[instrument(skip_all)]
    pub fn status(&self) -> Result<ChargeStatus> {
        let status = ChargeStatus::derive(
            self.emobility.is_connected(),
            || self.emobility.charge_state().context("failed to read the charge state"),
            || self.is_charging(),
        )?;
        debug!(%status);
        Ok(status)
    }
}

impl<E: VehicleLimitSource + VehicleStateSource + LimitWriter + ?Sized> Adapter<'_, E> {
    /// Send the command to the vehicle, returning the obligations written.
    #[instrument(skip_all, fields(command = %command))]
    pub fn apply(&self, command: Command) -> Result<PhaseCurrents> {
        let communication_standard = self
            .emobility
            .communication_standard()
            .context("failed to read the communication standard")?;
        let obligations = command.obligations(&self.limits()?, communication_standard)?;
        self.emobility
            .write_obligations(&obligations)
            .context("failed to write the current obligations")?;
        info!(%obligations, "written");
        Ok(obligations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{
            emobility::{ChargeState, CommunicationStandard},
            fake::{FakeEmobility, RecordingLoadpoint},
        },
        core::limits::tests::limits,
    };

    #[test]
    fn is_charging_ok() -> Result {
        let emobility = FakeEmobility::new(limits(&[(6.0, 16.0, 0.0); 3]), &[6.0, 0.0, 1.0]);
        assert!(Adapter::new(&emobility).is_charging()?);
        Ok(())
    }

    #[test]
    fn is_charging_limit_failure_propagates() {
        let mut emobility = FakeEmobility::new(LimitSet::default(), &[6.0, 6.0, 6.0]);
        emobility.limits = None;
        assert!(Adapter::new(&emobility).is_charging().is_err());
    }

    #[test]
    fn currents_are_padded() -> Result {
        let emobility = FakeEmobility::new(limits(&[(6.0, 16.0, 0.0)]), &[7.5]);
        assert_eq!(Adapter::new(&emobility).currents()?, [Amperes(7.5), Amperes::ZERO, Amperes::ZERO]);
        Ok(())
    }

    #[test]
    fn status_charging() -> Result {
        let emobility = FakeEmobility::new(limits(&[(2.2, 16.0, 0.1); 3]), &[1.8, 1.0, 3.0]);
        assert_eq!(Adapter::new(&emobility).status()?, ChargeStatus::C);
        Ok(())
    }

    #[test]
    fn status_active_but_idle() -> Result {
        let emobility = FakeEmobility::new(limits(&[(2.2, 16.0, 0.1); 3]), &[1.0, 0.0, 0.0]);
        assert_eq!(Adapter::new(&emobility).status()?, ChargeStatus::B);
        Ok(())
    }

    #[test]
    fn status_disconnected_skips_readings() -> Result {
        let mut emobility = FakeEmobility::new(LimitSet::default(), &[]);
        emobility.connected = false;
        emobility.limits = None;
        emobility.currents = None;
        assert_eq!(Adapter::new(&emobility).status()?, ChargeStatus::A);
        Ok(())
    }

    #[test]
    fn status_error() -> Result {
        let mut emobility = FakeEmobility::new(limits(&[(6.0, 16.0, 0.0)]), &[0.0]);
        emobility.charge_state = ChargeState::Error;
        assert_eq!(Adapter::new(&emobility).status()?, ChargeStatus::F);
        Ok(())
    }

    #[test]
    fn reconcile_ok() -> Result {
        let emobility = FakeEmobility::new(limits(&[(6.0, 16.0, 0.0); 3]), &[]);
        let mut loadpoint = RecordingLoadpoint::new(2.0, 10.0);
        let reconciliation = Adapter::new(&emobility).reconcile(&mut loadpoint)?;
        assert_eq!(reconciliation.adjustments().min, Some(Amperes(6.0)));
        assert_eq!(loadpoint.min_current, Amperes(6.0));
        assert_eq!(loadpoint.max_current, Amperes(10.0));
        Ok(())
    }

    #[test]
    fn apply_limit_writes_obligations() -> Result {
        let emobility = FakeEmobility::new(limits(&[(6.0, 16.0, 0.0); 3]), &[]);
        let obligations = Adapter::new(&emobility).apply(Command::Limit(Amperes(20.0)))?;
        assert_eq!(obligations.padded(), [Amperes(16.0); 3]);
        assert_eq!(*emobility.written.borrow(), [obligations]);
        Ok(())
    }

    #[test]
    fn apply_pause_refused_writes_nothing() {
        let mut emobility = FakeEmobility::new(limits(&[(6.0, 16.0, 0.0); 3]), &[]);
        emobility.communication_standard = CommunicationStandard::Unknown;
        assert!(Adapter::new(&emobility).apply(Command::Pause).is_err());
        assert!(emobility.written.borrow().is_empty());
    }
}
