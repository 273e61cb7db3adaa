use crate::{
    api::{emobility::VehicleLimitSource, loadpoint::LoadpointGateway},
    prelude::*,
    quantity::current::Amperes,
};

/// Setter calls issued during a reconciliation.
#[must_use]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Adjustments {
    /// Raised minimum, if any.
    pub min: Option<Amperes>,

    /// Lowered maximum, if any.
    pub max: Option<Amperes>,
}

impl Adjustments {
    pub const fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

#[must_use]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reconciliation {
    /// The identified vehicle's profile governs the loadpoint, nothing was touched.
    Suppressed { vehicle: String },

    /// The loadpoint was compared against the vehicle limits.
    Checked(Adjustments),
}

impl Reconciliation {
    pub const fn adjustments(&self) -> Adjustments {
        match self {
            Self::Suppressed { .. } => Adjustments { min: None, max: None },
            Self::Checked(adjustments) => *adjustments,
        }
    }
}

/// Narrows the loadpoint current window down to what the vehicle accepts.
pub struct LimitReconciler<'a, L: ?Sized> {
    limits: &'a L,
}

impl<'a, L: VehicleLimitSource + ?Sized> LimitReconciler<'a, L> {
    pub const fn new(limits: &'a L) -> Self {
        Self { limits }
    }

    /// Raise the loadpoint minimum and lower the loadpoint maximum where the vehicle requires it.
    ///
    /// The window is only ever tightened. An identified vehicle brings its own profile which
    /// takes precedence, so the loadpoint is left alone then. When the limits cannot be read,
    /// or the loadpoint window does not overlap the vehicle window at all, the error is returned
    /// before anything is written.
    #[instrument(skip_all)]
    pub fn reconcile(&self, loadpoint: &mut dyn LoadpointGateway) -> Result<Reconciliation> {
        if let Some(vehicle) = loadpoint.identified_vehicle() {
            debug!(
                vehicle = vehicle.title(),
                action = ?vehicle.on_identified(),
                "vehicle profile takes precedence",
            );
            return Ok(Reconciliation::Suppressed { vehicle: vehicle.title().to_owned() });
        }

        let limits = self.limits.limits().context("failed to read the vehicle current limits")?;
        let Some(effective) = limits.effective_bounds() else {
            debug!("no active phases");
            return Ok(Reconciliation::Checked(Adjustments::default()));
        };
        debug!(phases = ?limits.phases(), %limits, %effective);

        let min_current = loadpoint.min_current();
        let max_current = loadpoint.max_current();
        let adjustments = Adjustments {
            min: (min_current < effective.min).then_some(effective.min),
            max: (max_current > effective.max).then_some(effective.max),
        };

        // Tightening one side alone must not leave the loadpoint with an inverted window.
        let resulting_min = adjustments.min.unwrap_or(min_current);
        let resulting_max = adjustments.max.unwrap_or(max_current);
        ensure!(
            resulting_min <= resulting_max,
            "loadpoint window {min_current}..{max_current} does not overlap the vehicle window {effective}",
        );

        if let Some(min) = adjustments.min {
            info!(from = %min_current, to = %min, "raising the minimum current");
            loadpoint.set_min_current(min);
        }
        if let Some(max) = adjustments.max {
            info!(from = %max_current, to = %max, "lowering the maximum current");
            loadpoint.set_max_current(max);
        }

        Ok(Reconciliation::Checked(adjustments))
    }
}
