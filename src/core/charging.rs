use crate::{
    api::emobility::PhaseMeasurementSource,
    core::{currents::PhaseCurrents, limits::LimitSet},
    prelude::*,
};

/// Tells whether the vehicle draws charging current.
pub struct ChargeStateEvaluator<'a, M: ?Sized> {
    measurements: &'a M,
}

impl<'a, M: PhaseMeasurementSource + ?Sized> ChargeStateEvaluator<'a, M> {
    pub const fn new(measurements: &'a M) -> Self {
        Self { measurements }
    }

    /// The vehicle is charging as soon as any of its active phases draws at least the phase
    /// minimum. Phases may legitimately draw asymmetric currents, hence «any».
    ///
    /// A phase without a measurement counts as drawing nothing.
    #[instrument(skip_all)]
    pub fn is_charging(&self, limits: &LimitSet) -> Result<bool> {
        let currents = PhaseCurrents::from_sequence(
            &self.measurements.currents().context("failed to read the phase currents")?,
        );
        let is_charging = limits.iter().any(|(phase, limit)| currents.get(phase) >= limit.min);
        debug!(%currents, is_charging);
        Ok(is_charging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{api::fake::FakeEmobility, core::limits::tests::limits};

    fn is_charging(limit_triples: &[(f64, f64, f64)], currents: &[f64]) -> Result<bool> {
        let limits = limits(limit_triples);
        let emobility = FakeEmobility::new(limits.clone(), currents);
        ChargeStateEvaluator::new(&emobility).is_charging(&limits)
    }

    #[test]
    fn three_phase_iec() -> Result {
        let limits = [(6.0, 16.0, 0.0); 3];
        assert!(!is_charging(&limits, &[0.0, 3.0, 0.0])?);
        assert!(is_charging(&limits, &[6.0, 0.0, 1.0])?);
        Ok(())
    }

    #[test]
    fn single_phase_iec() -> Result {
        let limits = [(6.0, 16.0, 0.0)];
        assert!(!is_charging(&limits, &[2.0])?);
        assert!(is_charging(&limits, &[6.0])?);
        Ok(())
    }

    #[test]
    fn three_phase_iso() -> Result {
        let limits = [(2.2, 16.0, 0.1); 3];
        assert!(!is_charging(&limits, &[1.0, 0.0, 0.0])?);
        assert!(is_charging(&limits, &[1.8, 1.0, 3.0])?);
        Ok(())
    }

    #[test]
    fn exact_minimum_counts_as_charging() -> Result {
        assert!(is_charging(&[(6.0, 16.0, 0.0); 3], &[0.0, 0.0, 6.0])?);
        Ok(())
    }

    #[test]
    fn missing_measurement_reads_zero() -> Result {
        assert!(!is_charging(&[(6.0, 16.0, 0.0); 3], &[5.9])?);
        assert!(is_charging(&[(0.0, 16.0, 0.0); 3], &[])?);
        Ok(())
    }

    #[test]
    fn measurements_without_limits_are_ignored() -> Result {
        assert!(!is_charging(&[(6.0, 16.0, 0.0)], &[0.0, 10.0, 10.0])?);
        Ok(())
    }

    #[test]
    fn no_active_phases() -> Result {
        assert!(!is_charging(&[], &[16.0, 16.0, 16.0])?);
        Ok(())
    }

    #[test]
    fn measurement_failure_propagates() {
        let limits = limits(&[(6.0, 16.0, 0.0)]);
        let mut emobility = FakeEmobility::new(limits.clone(), &[]);
        emobility.currents = None;
        assert!(ChargeStateEvaluator::new(&emobility).is_charging(&limits).is_err());
    }
}
