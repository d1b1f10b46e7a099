use crate::error::{Error, Result};
use crate::parser::Configuration;
use crate::types::ControlType;
use regex::Regex;
use tracing::{debug, info};

/// The slice of an accessibility provider the reader needs.
///
/// Elements are owned handles: dropping one releases it. The reader drops
/// them in reverse order of acquisition on every path out.
pub trait UiTree {
    type Element;

    fn root(&self) -> Result<Self::Element>;

    /// Direct child of `parent` whose name equals `name`.
    fn find_child_by_name(&self, parent: &Self::Element, name: &str)
        -> Result<Option<Self::Element>>;

    /// All descendants of `scope` with the given control type, in provider order.
    fn find_descendants_by_type(
        &self,
        scope: &Self::Element,
        control_type: ControlType,
    ) -> Result<Vec<Self::Element>>;

    /// Display name, empty if it cannot be read.
    fn read_name(&self, element: &Self::Element) -> String;
}

/// Read the mode shown by the taskbar input indicator.
///
/// Buttons are tested in provider order and the first capture wins, so the
/// pattern has to be specific enough not to hit an unrelated button first.
pub fn read_current_mode<T: UiTree>(config: &Configuration, tree: &T) -> Result<String> {
    let re = config
        .ime_capture_regex
        .as_ref()
        .ok_or(Error::EmptyPattern)?;

    let scan = with_taskbar_buttons(config, tree, |buttons| {
        first_capture(tree, buttons, re).ok_or(buttons.len())
    })?;

    match scan {
        Ok(mode) => {
            info!("Current mode: {:?}", mode);
            Ok(mode)
        }
        Err(scanned) => Err(Error::NoMatch {
            pattern: config.ime_capture_pattern.clone(),
            scanned,
        }),
    }
}

/// Names of every button under the taskbar element, in provider order.
pub fn taskbar_button_names<T: UiTree>(config: &Configuration, tree: &T) -> Result<Vec<String>> {
    with_taskbar_buttons(config, tree, |buttons| {
        buttons.iter().map(|b| tree.read_name(b)).collect()
    })
}

fn with_taskbar_buttons<T, R, F>(config: &Configuration, tree: &T, f: F) -> Result<R>
where
    T: UiTree,
    F: FnOnce(&[T::Element]) -> R,
{
    let root = tree.root()?;
    let taskbar = tree
        .find_child_by_name(&root, &config.taskbar_name)?
        .ok_or_else(|| Error::ElementNotFound {
            name: config.taskbar_name.clone(),
        })?;
    let buttons = tree.find_descendants_by_type(&taskbar, ControlType::Button)?;
    debug!(
        "Found {} buttons under {:?}",
        buttons.len(),
        config.taskbar_name
    );

    Ok(f(&buttons))
}

/// Capture group 1 of the first element name the pattern matches. A match
/// where the group did not participate still wins and yields `""`.
pub fn first_capture<T: UiTree>(tree: &T, elements: &[T::Element], re: &Regex) -> Option<String> {
    elements.iter().enumerate().find_map(|(idx, element)| {
        let name = tree.read_name(element);
        let captured = re
            .captures(&name)
            .map(|caps| caps.get(1).map_or("", |m| m.as_str()).to_string());
        if captured.is_some() {
            debug!("Button #{} {:?} matched", idx, name);
        }
        captured
    })
}
