pub mod error;
pub mod ime;
pub mod keys;
pub mod memory;
pub mod parser;
pub mod pipeline;
pub mod resolver;
pub mod taskbar;
pub mod types;

#[cfg(windows)]
pub mod send_input;
#[cfg(windows)]
pub mod uia;

pub use error::{Error, Result};
pub use parser::{parse_args, CliOptions, Configuration};
pub use types::{KeyEvent, KeyPhase, ModeQuery, Outcome};
