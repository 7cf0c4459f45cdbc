use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Chess rules engine.
///
/// Games are reported on stdout, diagnostics on stderr.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity of the diagnostics.
    #[clap(short, long, default_value_t = Level::WARN)]
    verbosity: Level,

    /// Disable colors in the diagnostics.
    #[clap(long)]
    no_color: bool,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    fn diagnostics(&self) {
        let filter = Targets::new()
            .with_target("cli", self.verbosity)
            .with_target("lib", self.verbosity)
            .with_default(min(Level::WARN, self.verbosity));

        let writer = layer()
            .pretty()
            .without_time()
            .with_ansi(!self.no_color)
            .with_span_events(FmtSpan::NONE)
            .with_writer(stderr);

        registry().with(filter).with(writer).init();
    }

    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.diagnostics();
        self.applet.unwrap_or_default().execute()
    }
}
