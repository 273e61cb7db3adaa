use std::path::PathBuf;

use clap::Parser;

use crate::{api::site::Site, prelude::*};

#[derive(Parser)]
pub struct SiteArgs {
    /// Site snapshot file.
    #[clap(long = "site", env = "SITE_PATH", default_value = "site.toml")]
    pub path: PathBuf,
}

impl SiteArgs {
    pub fn read(&self) -> Result<Site> {
        Site::read_from(&self.path)
    }

    pub fn write(&self, site: &Site) -> Result {
        site.write_to(&self.path)
    }
}
