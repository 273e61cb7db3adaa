use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use itertools::Itertools;

use crate::{
    core::phase::Phase,
    prelude::*,
    quantity::current::Amperes,
};

/// Current per phase: either measured on the vehicle side or written to it as an obligation.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PhaseCurrents(BTreeMap<Phase, Amperes>);

impl PhaseCurrents {
    /// Build from a sequence ordered by phase, the first item being `L1`.
    ///
    /// Items beyond the third phase have no phase to belong to and are dropped.
    pub fn from_sequence(currents: &[Amperes]) -> Self {
        if currents.len() > Phase::ALL.len() {
            debug!(n_currents = currents.len(), "ignoring currents beyond the third phase");
        }
        currents
            .iter()
            .enumerate()
            .filter_map(|(index, current)| Some((Phase::from_index(index)?, *current)))
            .collect()
    }

    /// Current on the phase, zero when the phase has no value.
    pub fn get(&self, phase: Phase) -> Amperes {
        self.0.get(&phase).copied().unwrap_or(Amperes::ZERO)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Phase, Amperes)> + '_ {
        self.0.iter().map(|(phase, current)| (*phase, *current))
    }

    /// All three phases, zero-padded.
    pub fn padded(&self) -> [Amperes; 3] {
        Phase::ALL.map(|phase| self.get(phase))
    }

    /// Sequence up to the highest phase present, gaps filled with zeros.
    #[must_use]
    pub fn to_sequence(&self) -> Vec<Amperes> {
        let len = self.0.keys().next_back().map_or(0, |phase| phase.index() + 1);
        Phase::ALL[..len].iter().map(|phase| self.get(*phase)).collect()
    }
}

impl FromIterator<(Phase, Amperes)> for PhaseCurrents {
    fn from_iter<T: IntoIterator<Item = (Phase, Amperes)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for PhaseCurrents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().map(|(phase, current)| format!("{phase}: {current}")).join(", "))
    }
}
