use crate::error::Result;
use crate::keys::key_sequence;
use crate::parser::Configuration;
use crate::types::{KeyEvent, ModeQuery, Outcome};
use tracing::{info, warn};

/// Sink for synthesized key events.
pub trait KeyInjector {
    /// Submit the whole sequence as a single atomic injection.
    fn inject(&mut self, events: &[KeyEvent]) -> Result<()>;
}

/// Report the current mode or switch away from it.
///
/// A switch is fire-and-forget: once the sequence is submitted the run
/// counts as switched, the indicator is not read again.
pub fn apply<I>(
    query: &ModeQuery,
    current: &str,
    config: &Configuration,
    injector: &mut I,
) -> Result<Outcome>
where
    I: KeyInjector + ?Sized,
{
    match query {
        ModeQuery::Unset => Ok(report(current, &config.ime_aliases)),
        ModeQuery::Target(target) if target == current => {
            info!("Already in {:?}, nothing to do", current);
            Ok(Outcome::Unchanged(current.to_string()))
        }
        ModeQuery::Target(target) => {
            let events = key_sequence(&config.switch_keys);
            if events.is_empty() {
                warn!("Switch keys {:?} are empty, nothing injected", config.switch_keys);
            } else {
                info!(
                    "Switching {:?} -> {:?} with {:?}",
                    current, target, config.switch_keys
                );
                injector.inject(&events)?;
            }
            Ok(Outcome::Switched {
                from: current.to_string(),
                to: target.clone(),
            })
        }
    }
}

fn report(current: &str, aliases: &[String]) -> Outcome {
    if aliases.is_empty() {
        return Outcome::Current(current.to_string());
    }
    match aliases.iter().position(|a| a == current) {
        Some(idx) => Outcome::CurrentIndex(idx),
        None => {
            warn!("Current mode {:?} is not in the alias list {:?}", current, aliases);
            Outcome::Unlisted(current.to_string())
        }
    }
}
