//! Collaborators on both sides of the adapter: the vehicle reached over EEBus and the loadpoint.

pub mod emobility;
#[cfg(test)]
pub mod fake;
pub mod loadpoint;
pub mod site;
