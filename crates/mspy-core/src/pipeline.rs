use crate::error::Result;
use crate::ime::{apply, KeyInjector};
use crate::parser::{parse_args, Configuration};
use crate::resolver::resolve;
use crate::types::Outcome;
use std::io::Write;
use tracing::debug;

/// One query-or-switch run against an already built configuration.
///
/// `read_mode` owns the provider session: it is expected to acquire and
/// release everything before returning, so nothing is held while keys are
/// injected or the report is written.
pub fn run<R, I, W>(
    config: &Configuration,
    read_mode: R,
    injector: &mut I,
    out: &mut W,
) -> Result<Outcome>
where
    R: FnOnce(&Configuration) -> Result<String>,
    I: KeyInjector + ?Sized,
    W: Write + ?Sized,
{
    let query = resolve(&config.mode, &config.ime_aliases);
    debug!("Resolved query: {:?}", query);

    let current = read_mode(config)?;
    let outcome = apply(&query, &current, config, injector)?;

    if let Some(line) = outcome.report() {
        writeln!(out, "{}", line)?;
        out.flush()?;
    }
    Ok(outcome)
}

/// Parse `args` (without the program name) and run.
pub fn run_args<A, S, R, I, W>(args: A, read_mode: R, injector: &mut I, out: &mut W) -> Result<Outcome>
where
    A: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: FnOnce(&Configuration) -> Result<String>,
    I: KeyInjector + ?Sized,
    W: Write + ?Sized,
{
    let config = parse_args(args).into_config()?;
    run(&config, read_mode, injector, out)
}
