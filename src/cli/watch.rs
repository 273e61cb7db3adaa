use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::sleep,
    time::Duration,
};

use bon::Builder;
use clap::Parser;

use crate::{
    adapter::Adapter,
    api::site::Site,
    cli::site::SiteArgs,
    core::{reconciler::Reconciliation, status::ChargeStatus},
    prelude::*,
};

#[derive(Parser)]
pub struct WatchArgs {
    #[clap(flatten)]
    site: SiteArgs,

    #[clap(long, env = "POLLING_INTERVAL", default_value = "5s")]
    polling_interval: humantime::Duration,

    /// Do not write the adjusted window back to the site file.
    #[clap(long)]
    dry_run: bool,
}

impl WatchArgs {
    pub fn run(self) -> Result {
        let should_terminate = Arc::new(AtomicBool::new(false));
        signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&should_terminate))?;
        signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&should_terminate))?;

        ControlLoop::builder()
            .path(self.site.path)
            .interval(self.polling_interval)
            .dry_run(self.dry_run)
            .should_terminate(should_terminate)
            .build()
            .run();
        Ok(())
    }
}

#[derive(Builder)]
struct ControlLoop {
    path: PathBuf,
    dry_run: bool,
    should_terminate: Arc<AtomicBool>,

    #[builder(into)]
    interval: Duration,
}

impl ControlLoop {
    fn run(self) {
        info!(interval = ?self.interval, "watching…");
        while !self.should_terminate.load(Ordering::Relaxed) {
            if let Err(error) = self.tick() {
                warn!("reconciliation skipped: {error:#}");
            }
            sleep(self.interval);
        }
        info!("terminated");
    }

    /// Run one reconciliation against the site file.
    ///
    /// Returns [`None`] when no vehicle is connected. A failed status read is only logged:
    /// it must not hold the loadpoint window back.
    #[instrument(skip_all)]
    fn tick(&self) -> Result<Option<Reconciliation>> {
        let mut site = Site::read_from(&self.path)?;
        let adapter = Adapter::new(&site.vehicle);
        match adapter.status() {
            Ok(ChargeStatus::A) => {
                info!(status = %ChargeStatus::A, "no vehicle");
                return Ok(None);
            }
            Ok(status) => {
                info!(%status, "polled");
            }
            Err(error) => {
                warn!("failed to read the charger status: {error:#}");
            }
        }

        let reconciliation = adapter.reconcile(&mut site.loadpoint)?;
        if !reconciliation.adjustments().is_empty() && !self.dry_run {
            site.write_to(&self.path)?;
        }
        Ok(Some(reconciliation))
    }
}
