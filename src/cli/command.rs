use clap::Parser;

use crate::{
    adapter::Adapter,
    cli::site::SiteArgs,
    core::command::Command,
    prelude::*,
    quantity::current::Amperes,
};

#[derive(Parser)]
#[command(group(clap::ArgGroup::new("action").required(true)))]
pub struct CommandArgs {
    #[clap(flatten)]
    site: SiteArgs,

    /// Limit every phase to this current in amperes.
    #[clap(long, group = "action")]
    current: Option<Amperes>,

    /// Suspend charging.
    #[clap(long, group = "action")]
    pause: bool,

    /// Do not write the obligations back to the site file.
    #[clap(long)]
    dry_run: bool,
}

impl CommandArgs {
    fn command(&self) -> Result<Command> {
        match (self.pause, self.current) {
            (true, _) => Ok(Command::Pause),
            (false, Some(current)) => Ok(Command::Limit(current)),
            (false, None) => bail!("either `--current` or `--pause` is required"),
        }
    }

    pub fn run(&self) -> Result {
        let site = self.site.read()?;
        let obligations = Adapter::new(&site.vehicle).apply(self.command()?)?;
        info!(%obligations, "sent");
        if !self.dry_run {
            self.site.write(&site)?;
        }
        Ok(())
    }
}
