mod command;
mod reconcile;
mod site;
mod status;
mod watch;

use clap::{Parser, Subcommand};

pub use self::{
    command::CommandArgs,
    reconcile::ReconcileArgs,
    status::StatusArgs,
    watch::WatchArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the vehicle limits, the measured currents, and the charger status.
    #[clap(name = "status")]
    Status(StatusArgs),

    /// Narrow the loadpoint current window down to the vehicle limits once.
    #[clap(name = "reconcile")]
    Reconcile(ReconcileArgs),

    /// Send a current limit or a pause to the vehicle.
    #[clap(name = "command")]
    Command(CommandArgs),

    /// Keep reconciling the loadpoint periodically.
    #[clap(name = "watch")]
    Watch(WatchArgs),
}
