use clap::Parser;

use crate::{adapter::Adapter, cli::site::SiteArgs, prelude::*, tables::build_phases_table};

#[derive(Parser)]
pub struct StatusArgs {
    #[clap(flatten)]
    site: SiteArgs,
}

impl StatusArgs {
    pub fn run(&self) -> Result {
        let site = self.site.read()?;
        let adapter = Adapter::new(&site.vehicle);

        let status = adapter.status()?;
        info!(
            %status,
            charge_state = %site.vehicle.charge_state,
            communication_standard = %site.vehicle.communication_standard,
            "gotcha",
        );
        if site.vehicle.connected {
            println!("{}", build_phases_table(&adapter.limits()?, &adapter.currents()?));
        }
        Ok(())
    }
}
