use crate::error::{Error, Result};
use regex::Regex;
use tracing::{debug, warn};

/// Locale-specific defaults for the taskbar element name and indicator text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    SimplifiedChinese,
    English,
}

impl Preset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "chs" => Some(Self::SimplifiedChinese),
            "en" | "en-us" => Some(Self::English),
            _ => None,
        }
    }

    pub const fn taskbar_name(self) -> &'static str {
        match self {
            Self::SimplifiedChinese => "任务栏",
            Self::English => "Taskbar",
        }
    }

    pub const fn capture_pattern(self) -> &'static str {
        match self {
            Self::SimplifiedChinese => r"托盘输入指示器\s+(\w+)",
            Self::English => r"Tray Input Indicator\s+(\w+)",
        }
    }

    pub const fn switch_keys(self) -> &'static str {
        "shift"
    }
}

/// Command-line tokens as given, before defaults are applied and the
/// capture pattern is compiled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub mode: String,
    pub preset: Option<String>,
    pub switch_keys: Option<String>,
    pub taskbar_name: Option<String>,
    pub capture_pattern: Option<String>,
    pub aliases: Option<Vec<String>>,
    pub log_level: Option<String>,
    /// Arguments that looked like flags but were not recognised.
    pub ignored: Vec<String>,
}

/// Parse arguments (without the program name).
///
/// Flags are only recognised as `-key=value`; unknown keys and dash
/// arguments without `=` are collected in `ignored`. Every other argument
/// sets the mode, the last one winning.
pub fn parse_args<I, S>(args: I) -> CliOptions
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut opts = CliOptions::default();

    for arg in args {
        let arg = arg.as_ref();
        let Some(flag) = arg.strip_prefix('-') else {
            opts.mode = arg.to_string();
            continue;
        };

        let Some((key, value)) = flag.split_once('=') else {
            opts.ignored.push(arg.to_string());
            continue;
        };

        let value = value.to_string();
        match key {
            "k" => opts.switch_keys = Some(value),
            "t" => opts.taskbar_name = Some(value),
            "i" => opts.capture_pattern = Some(value),
            "l" => opts.aliases = Some(split_aliases(&value)),
            "p" => opts.preset = Some(value),
            "v" => opts.log_level = Some(value),
            _ => opts.ignored.push(arg.to_string()),
        }
    }

    opts
}

/// Comma split that keeps empty entries except a single trailing one,
/// so `"a,,b"` has three entries and `"a,b,"` has two.
pub fn split_aliases(raw: &str) -> Vec<String> {
    let mut items: Vec<String> = raw.split(',').map(str::to_string).collect();
    if items.last().is_some_and(|s| s.is_empty()) {
        items.pop();
    }
    items
}

/// Run configuration, immutable once built.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub mode: String,
    pub switch_keys: String,
    pub taskbar_name: String,
    pub ime_capture_pattern: String,
    /// `None` when the pattern is empty; the reader refuses to run then.
    pub ime_capture_regex: Option<Regex>,
    pub ime_aliases: Vec<String>,
}

impl CliOptions {
    /// Apply the overrides on top of the preset defaults and compile the
    /// capture pattern.
    pub fn into_config(self) -> Result<Configuration> {
        for arg in &self.ignored {
            debug!("Ignoring unrecognised flag: {}", arg);
        }

        let preset = match self.preset.as_deref() {
            None => Preset::default(),
            Some(name) => Preset::from_name(name).unwrap_or_else(|| {
                warn!("Unknown preset {:?}, using default", name);
                Preset::default()
            }),
        };

        let pattern = self
            .capture_pattern
            .unwrap_or_else(|| preset.capture_pattern().to_string());

        let config = Configuration {
            mode: self.mode,
            switch_keys: self
                .switch_keys
                .unwrap_or_else(|| preset.switch_keys().to_string()),
            taskbar_name: self
                .taskbar_name
                .unwrap_or_else(|| preset.taskbar_name().to_string()),
            ime_capture_regex: compile_capture(&pattern)?,
            ime_capture_pattern: pattern,
            ime_aliases: self.aliases.unwrap_or_default(),
        };

        debug!(
            "taskbar name: {:?}, ime capture: {:?}, switch keys: {:?}, mode: {:?}, ime list: {:?}",
            config.taskbar_name,
            config.ime_capture_pattern,
            config.switch_keys,
            config.mode,
            config.ime_aliases
        );
        Ok(config)
    }
}

/// Compile a capture pattern. Empty yields `None`; anything else must compile
/// and carry exactly one capture group.
pub fn compile_capture(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }

    let re = Regex::new(pattern).map_err(|source| Error::PatternCompile {
        pattern: pattern.to_string(),
        source,
    })?;

    // Group 0 is the whole match.
    let found = re.captures_len() - 1;
    if found != 1 {
        return Err(Error::CaptureGroups {
            pattern: pattern.to_string(),
            found,
        });
    }

    Ok(Some(re))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Configuration {
        parse_args(args).into_config().expect("config")
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[]);
        assert_eq!(cfg.mode, "");
        assert_eq!(cfg.switch_keys, "shift");
        assert_eq!(cfg.taskbar_name, "任务栏");
        assert_eq!(cfg.ime_capture_pattern, r"托盘输入指示器\s+(\w+)");
        assert!(cfg.ime_capture_regex.is_some());
        assert!(cfg.ime_aliases.is_empty());
    }

    #[test]
    fn test_flag_overrides() {
        let cfg = config(&["-k=ctrl+space", "-t=Taskbar", r"-i=ime\s+(\w+)", "-l=a,b"]);
        assert_eq!(cfg.switch_keys, "ctrl+space");
        assert_eq!(cfg.taskbar_name, "Taskbar");
        assert_eq!(cfg.ime_capture_pattern, r"ime\s+(\w+)");
        assert_eq!(cfg.ime_aliases, vec!["a", "b"]);
    }

    #[test]
    fn test_last_bare_argument_wins() {
        let cfg = config(&["0", "-k=alt", "english"]);
        assert_eq!(cfg.mode, "english");
    }

    #[test]
    fn test_unknown_and_valueless_flags_are_ignored() {
        let opts = parse_args(["-x=1", "-k", "-1", "--k=alt"]);
        assert_eq!(opts.ignored, vec!["-x=1", "-k", "-1", "--k=alt"]);
        assert_eq!(
            opts,
            CliOptions {
                ignored: opts.ignored.clone(),
                ..CliOptions::default()
            }
        );
        assert!(opts.into_config().is_ok());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let opts = parse_args(["-i=a=(b)"]);
        assert_eq!(opts.capture_pattern.as_deref(), Some("a=(b)"));
    }

    #[test]
    fn test_split_aliases() {
        assert_eq!(split_aliases("a,b"), vec!["a", "b"]);
        assert_eq!(split_aliases("a,b,"), vec!["a", "b"]);
        assert_eq!(split_aliases(",a,,a"), vec!["", "a", "", "a"]);
        assert!(split_aliases("").is_empty());
    }

    #[test]
    fn test_later_alias_list_replaces_earlier() {
        let cfg = config(&["-l=a,b", "-l=c"]);
        assert_eq!(cfg.ime_aliases, vec!["c"]);
    }

    #[test]
    fn test_preset_is_order_independent() {
        let a = config(&["-t=Shelf", "-p=en"]);
        let b = config(&["-p=en", "-t=Shelf"]);
        assert_eq!(a.taskbar_name, "Shelf");
        assert_eq!(b.taskbar_name, "Shelf");
        assert_eq!(a.ime_capture_pattern, r"Tray Input Indicator\s+(\w+)");
        assert_eq!(a.ime_capture_pattern, b.ime_capture_pattern);
    }

    #[test]
    fn test_unknown_preset_keeps_default() {
        let cfg = config(&["-p=klingon"]);
        assert_eq!(cfg.taskbar_name, "任务栏");
    }

    #[test]
    fn test_malformed_pattern_fails() {
        let err = parse_args(["-i=ime(("]).into_config().unwrap_err();
        assert!(matches!(err, Error::PatternCompile { .. }));
    }

    #[test]
    fn test_pattern_group_count() {
        let err = parse_args([r"-i=ime\s+\w+"]).into_config().unwrap_err();
        assert!(matches!(err, Error::CaptureGroups { found: 0, .. }));

        let err = parse_args([r"-i=(ime)\s+(\w+)"]).into_config().unwrap_err();
        assert!(matches!(err, Error::CaptureGroups { found: 2, .. }));

        assert!(compile_capture(r"(?:ime|IME)\s+(\w+)").unwrap().is_some());
    }

    #[test]
    fn test_empty_pattern_is_not_compiled() {
        let cfg = config(&["-i="]);
        assert_eq!(cfg.ime_capture_pattern, "");
        assert!(cfg.ime_capture_regex.is_none());
    }
}
