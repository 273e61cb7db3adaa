pub mod bounds;
pub mod charging;
pub mod command;
pub mod currents;
pub mod limits;
pub mod phase;
pub mod reconciler;
pub mod status;
