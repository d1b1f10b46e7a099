use mspy_core::parser::{parse_args, CliOptions};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

fn main() -> ExitCode {
    let opts = parse_args(
        std::env::args_os()
            .skip(1)
            .map(|a| a.to_string_lossy().into_owned()),
    );
    init_logging(opts.log_level.as_deref());

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries only the report line.
fn init_logging(level: Option<&str>) {
    let level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(windows)]
fn run(opts: CliOptions) -> anyhow::Result<()> {
    use anyhow::Context;
    use mspy_core::send_input::SendInputInjector;
    use mspy_core::{pipeline, uia};

    let config = opts.into_config().context("invalid options")?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut injector = SendInputInjector;

    let outcome = pipeline::run(&config, uia::read_desktop_mode, &mut injector, &mut out)?;
    tracing::debug!(?outcome, "Run finished");
    Ok(())
}

#[cfg(not(windows))]
fn run(opts: CliOptions) -> anyhow::Result<()> {
    opts.into_config()?;
    anyhow::bail!("mspy reads the Windows taskbar and only runs on Windows")
}
