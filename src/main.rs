mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod source;
#[cfg(test)]
mod test_support;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();

    let config = if cli.debug {
        Config::load()
    } else {
        Config::load_quiet()
    };
    let result = cli.with_config(&config).resolve().and_then(|settings| {
        set_debug(settings.debug);
        app::run(&settings)
    });
    match result {
        Ok(outcome) => app::print_outcome(&outcome),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
