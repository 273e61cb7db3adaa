use clap::Parser;

use crate::{
    adapter::Adapter,
    cli::site::SiteArgs,
    core::reconciler::Reconciliation,
    prelude::*,
};

#[derive(Parser)]
pub struct ReconcileArgs {
    #[clap(flatten)]
    site: SiteArgs,

    /// Do not write the adjusted window back to the site file.
    #[clap(long)]
    dry_run: bool,
}

impl ReconcileArgs {
    pub fn run(&self) -> Result {
        let mut site = self.site.read()?;
        let reconciliation = Adapter::new(&site.vehicle).reconcile(&mut site.loadpoint)?;
        match &reconciliation {
            Reconciliation::Suppressed { vehicle } => {
                info!(vehicle, "the vehicle profile governs the loadpoint");
            }
            Reconciliation::Checked(adjustments) if adjustments.is_empty() => {
                info!(
                    min_current = %site.loadpoint.min_current,
                    max_current = %site.loadpoint.max_current,
                    "the loadpoint already fits the vehicle",
                );
            }
            Reconciliation::Checked(_) => {
                info!(
                    min_current = %site.loadpoint.min_current,
                    max_current = %site.loadpoint.max_current,
                    "adjusted",
                );
                if !self.dry_run {
                    self.site.write(&site)?;
                }
            }
        }
        Ok(())
    }
}
