use clap::Parser;
use swisc::{
    cli::CLI,
    config::SwiscConfig,
    initializers::init_tracing,
};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let CLI { opts, command } = CLI::parse();

    init_tracing(&opts);

    let config = SwiscConfig::load(&opts)?;

    command.run(&config).await
}
