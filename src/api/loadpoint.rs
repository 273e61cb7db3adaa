//! Loadpoint-side capabilities: the current window and the vehicle assigned to the loadpoint.

use crate::quantity::current::Amperes;

/// Current preferences a vehicle profile applies once the vehicle is identified.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionConfig {
    pub min_current: Option<Amperes>,
    pub max_current: Option<Amperes>,
}

impl ActionConfig {
    /// Build from raw values where a negative number stands for «no preference».
    pub fn from_raw(min_current: Option<f64>, max_current: Option<f64>) -> Self {
        let preference = |value: f64| Some(Amperes(value)).filter(|current| !current.is_negative());
        Self {
            min_current: min_current.and_then(preference),
            max_current: max_current.and_then(preference),
        }
    }
}

/// Vehicle profile known to the site.
pub trait Vehicle {
    fn title(&self) -> &str;

    fn on_identified(&self) -> ActionConfig;
}

/// The loadpoint a charger is bound to.
///
/// The window applies to every active phase alike.
pub trait LoadpointGateway {
    fn min_current(&self) -> Amperes;

    fn max_current(&self) -> Amperes;

    fn set_min_current(&mut self, current: Amperes);

    fn set_max_current(&mut self, current: Amperes);

    /// Vehicle assigned to the loadpoint, if any.
    fn identified_vehicle(&self) -> Option<&dyn Vehicle>;
}
