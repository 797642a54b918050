use anyhow::Result;

mod cli;
mod options;

fn main() -> Result<()> {
    let (options, should_exit) = cli::resolve(std::env::args());
    if should_exit {
        std::process::exit(1);
    }

    let default_filter = if options.verbose {
        "debug"
    } else if options.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::debug!("resolved options: {:?}", options);
    Ok(())
}
