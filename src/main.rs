#![allow(clippy::doc_markdown)]

mod adapter;
mod api;
mod cli;
mod core;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Status(args) => args.run()?,
        Command::Reconcile(args) => args.run()?,
        Command::Command(args) => args.run()?,
        Command::Watch(args) => args.run()?,
    }

    info!("done!");
    Ok(())
}
