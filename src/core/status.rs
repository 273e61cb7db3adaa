use std::fmt::{Display, Formatter};

use crate::{api::emobility::ChargeState, prelude::*};

/// Charger status in IEC 61851 terms.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChargeStatus {
    /// No vehicle connected.
    A,

    /// Vehicle connected, not charging.
    B,

    /// Vehicle charging.
    C,

    /// Fault.
    F,
}

impl ChargeStatus {
    /// Derive the status from what the vehicle reports.
    ///
    /// `is_charging` is only consulted while the vehicle reports an active charge.
    pub fn derive(
        is_connected: bool,
        charge_state: impl FnOnce() -> Result<ChargeState>,
        is_charging: impl FnOnce() -> Result<bool>,
    ) -> Result<Self> {
        if !is_connected {
            return Ok(Self::A);
        }
        match charge_state()? {
            ChargeState::Unknown | ChargeState::Unplugged => Ok(Self::A),
            ChargeState::Paused | ChargeState::Finished => Ok(Self::B),
            ChargeState::Active => Ok(if is_charging()? { Self::C } else { Self::B }),
            ChargeState::Error => Ok(Self::F),
        }
    }
}

impl Display for ChargeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A (disconnected)"),
            Self::B => write!(f, "B (connected)"),
            Self::C => write!(f, "C (charging)"),
            Self::F => write!(f, "F (fault)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(is_connected: bool, charge_state: ChargeState, is_charging: bool) -> ChargeStatus {
        ChargeStatus::derive(is_connected, || Ok(charge_state), || Ok(is_charging)).unwrap()
    }

    #[test]
    fn disconnected() {
        assert_eq!(derive(false, ChargeState::Active, true), ChargeStatus::A);
        assert_eq!(derive(true, ChargeState::Unknown, false), ChargeStatus::A);
        assert_eq!(derive(true, ChargeState::Unplugged, false), ChargeStatus::A);
    }

    #[test]
    fn connected() {
        assert_eq!(derive(true, ChargeState::Paused, true), ChargeStatus::B);
        assert_eq!(derive(true, ChargeState::Finished, false), ChargeStatus::B);
        assert_eq!(derive(true, ChargeState::Active, false), ChargeStatus::B);
    }

    #[test]
    fn charging() {
        assert_eq!(derive(true, ChargeState::Active, true), ChargeStatus::C);
    }

    #[test]
    fn fault() {
        assert_eq!(derive(true, ChargeState::Error, false), ChargeStatus::F);
    }

    #[test]
    fn is_charging_not_consulted_unless_active() -> Result {
        let status = ChargeStatus::derive(
            true,
            || Ok(ChargeState::Paused),
            || bail!("must not read the currents"),
        )?;
        assert_eq!(status, ChargeStatus::B);
        Ok(())
    }

    #[test]
    fn is_charging_failure_propagates() {
        let status =
            ChargeStatus::derive(true, || Ok(ChargeState::Active), || bail!("currents unavailable"));
        assert!(status.is_err());
    }
}
