use std::{
    collections::{BTreeMap, btree_map::Entry},
    fmt::{Display, Formatter},
};

use itertools::Itertools;

use crate::{
    core::{
        bounds::LoadpointBounds,
        phase::{Phase, Phases},
    },
    prelude::*,
    quantity::current::Amperes,
};

/// Currents a vehicle accepts on one phase.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PhaseLimit {
    /// Lowest current the vehicle can charge with.
    pub min: Amperes,

    /// Highest current the vehicle can charge with.
    pub max: Amperes,

    /// Current the vehicle draws while charging is suspended.
    pub pause: Amperes,
}

impl PhaseLimit {
    pub fn try_new(min: Amperes, max: Amperes, pause: Amperes) -> Result<Self> {
        let limit = Self { min, max, pause };
        limit.validate()?;
        Ok(limit)
    }

    fn validate(&self) -> Result {
        ensure!(!self.min.is_negative(), "minimum current must not be negative, got {}", self.min);
        ensure!(
            self.min <= self.max,
            "minimum current {} exceeds maximum current {}",
            self.min,
            self.max,
        );
        ensure!(!self.pause.is_negative(), "pause current must not be negative, got {}", self.pause);
        Ok(())
    }
}

impl Display for PhaseLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} (pause {})", self.min, self.max, self.pause)
    }
}

/// Vehicle current limits, one entry per active phase.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LimitSet(BTreeMap<Phase, PhaseLimit>);

impl LimitSet {
    pub fn try_from_entries(entries: impl IntoIterator<Item = (Phase, PhaseLimit)>) -> Result<Self> {
        let mut limits = BTreeMap::new();
        for (phase, limit) in entries {
            limit.validate().with_context(|| format!("invalid limit on phase {phase}"))?;
            match limits.entry(phase) {
                Entry::Vacant(entry) => {
                    entry.insert(limit);
                }
                Entry::Occupied(_) => bail!("duplicate limit on phase {phase}"),
            }
        }
        Ok(Self(limits))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, &PhaseLimit)> {
        self.0.iter().map(|(phase, limit)| (*phase, limit))
    }

    pub fn phases(&self) -> Phases {
        self.0.keys().copied().collect()
    }

    /// Reduce the per-phase limits to the scalar window every phase can honour.
    ///
    /// The most demanding phase sets the floor and the most restrictive phase sets the cap.
    /// Should the floor end up above the cap, the cap wins: no phase may be commanded
    /// above its maximum.
    ///
    /// Returns [`None`] when no phase is active.
    pub fn effective_bounds(&self) -> Option<LoadpointBounds> {
        let min = self.0.values().map(|limit| limit.min).max()?;
        let max = self.0.values().map(|limit| limit.max).min()?;
        if min > max {
            warn!(%min, %max, "phase limits do not overlap, capping the minimum");
        }
        Some(LoadpointBounds { min: min.min(max), max })
    }
}

impl Display for LimitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().map(|(phase, limit)| format!("{phase}: {limit}")).join(", "))
    }
}
