use anyhow::Context;
use clap::Parser;
use signup_form::cli::Cli;
use signup_form::{logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_file.as_deref());

    let config = cli
        .load_config()
        .context("failed to load configuration")?;
    tracing::info!(
        max_age = config.policy.max_age,
        min_password_length = config.policy.min_password_length,
        confirm_delay_ms = config.ui.confirm_delay_ms,
        "starting signup form"
    );

    ui::runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}
