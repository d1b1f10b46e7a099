use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures that end a run. Silent fallbacks (unknown key tokens, an index
/// outside the alias list, a current mode missing from the alias list) are
/// not represented here; they are logged and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("automation session could not start: {0}")]
    SessionInit(String),

    #[error("automation provider call failed: {0}")]
    Provider(String),

    #[error("no child element named {name:?} under the desktop root")]
    ElementNotFound { name: String },

    #[error("none of {scanned} taskbar buttons matched {pattern:?}")]
    NoMatch { pattern: String, scanned: usize },

    #[error("capture pattern is empty")]
    EmptyPattern,

    #[error("capture pattern {pattern:?} does not compile")]
    PatternCompile {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("capture pattern {pattern:?} must have exactly one capture group, found {found}")]
    CaptureGroups { pattern: String, found: usize },

    #[error("input injection accepted {sent} of {expected} key events")]
    Inject { sent: usize, expected: usize },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
