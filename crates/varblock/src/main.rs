use crate::prelude::*;
use clap::Parser;

mod error;
mod extract;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Extract <var> configuration options from a Hyvä UI component README block \
                  and print them as a text table, a Markdown table, or JSON"
)]
pub struct App {
    #[clap(flatten)]
    options: crate::extract::ExtractOptions,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "VARBLOCK_VERBOSE", default_value = "false")]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    crate::extract::run(app.options, app.global)
}
