use std::fmt::{Display, Formatter};

use enumset::{EnumSet, EnumSetType};

use crate::prelude::*;

/// One conductor of an AC charging connection.
#[derive(Debug, Hash, PartialOrd, Ord, EnumSetType)]
pub enum Phase {
    L1,
    L2,
    L3,
}

impl Phase {
    pub const ALL: [Self; 3] = [Self::L1, Self::L2, Self::L3];

    /// Phase by its 1-based number.
    pub fn from_number(number: u8) -> Result<Self> {
        match number {
            1 => Ok(Self::L1),
            2 => Ok(Self::L2),
            3 => Ok(Self::L3),
            _ => bail!("phase number must be within 1..=3, got {number}"),
        }
    }

    /// Phase by its 0-based position in a per-phase sequence.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::L1 => 1,
            Self::L2 => 2,
            Self::L3 => 3,
        }
    }

    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.number())
    }
}

pub type Phases = EnumSet<Phase>;
