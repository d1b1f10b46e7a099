//! In-memory stand-ins for the accessibility provider and the input
//! facility. They count handles and record injections so tests and benches
//! can check the pipeline without a desktop.

use crate::error::{Error, Result};
use crate::ime::KeyInjector;
use crate::taskbar::UiTree;
use crate::types::{ControlType, KeyEvent};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone)]
struct Node {
    name: String,
    control_type: ControlType,
    children: Vec<usize>,
}

/// Fabricated element tree. Node `0` is the desktop root.
#[derive(Debug)]
pub struct MemoryTree {
    nodes: Vec<Node>,
    live: Rc<Cell<usize>>,
    acquired: Cell<usize>,
    fail_descendant_search: bool,
}

/// Handle to a node; releases itself on drop.
#[derive(Debug)]
pub struct MemoryElement {
    id: usize,
    live: Rc<Cell<usize>>,
}

impl Drop for MemoryElement {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                name: "Desktop".to_string(),
                control_type: ControlType::Pane,
                children: Vec::new(),
            }],
            live: Rc::new(Cell::new(0)),
            acquired: Cell::new(0),
            fail_descendant_search: false,
        }
    }

    pub fn root_id(&self) -> usize {
        0
    }

    /// Append a child under `parent` and return its id.
    pub fn add(&mut self, parent: usize, name: &str, control_type: ControlType) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node {
            name: name.to_string(),
            control_type,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(id);
        id
    }

    /// Make every descendant search fail with a provider error.
    pub fn fail_descendant_search(&mut self) {
        self.fail_descendant_search = true;
    }

    /// Handles currently held by callers.
    pub fn live_handles(&self) -> usize {
        self.live.get()
    }

    /// Handles handed out since construction.
    pub fn acquired_handles(&self) -> usize {
        self.acquired.get()
    }

    fn acquire(&self, id: usize) -> MemoryElement {
        self.live.set(self.live.get() + 1);
        self.acquired.set(self.acquired.get() + 1);
        MemoryElement {
            id,
            live: Rc::clone(&self.live),
        }
    }

    fn collect_descendants(&self, id: usize, control_type: ControlType, out: &mut Vec<usize>) {
        for &child in &self.nodes[id].children {
            if self.nodes[child].control_type == control_type {
                out.push(child);
            }
            self.collect_descendants(child, control_type, out);
        }
    }
}

impl UiTree for MemoryTree {
    type Element = MemoryElement;

    fn root(&self) -> Result<MemoryElement> {
        Ok(self.acquire(self.root_id()))
    }

    fn find_child_by_name(&self, parent: &MemoryElement, name: &str) -> Result<Option<MemoryElement>> {
        Ok(self.nodes[parent.id]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c].name == name)
            .map(|c| self.acquire(c)))
    }

    fn find_descendants_by_type(
        &self,
        scope: &MemoryElement,
        control_type: ControlType,
    ) -> Result<Vec<MemoryElement>> {
        if self.fail_descendant_search {
            return Err(Error::Provider("descendant search failed".to_string()));
        }
        let mut ids = Vec::new();
        self.collect_descendants(scope.id, control_type, &mut ids);
        Ok(ids.into_iter().map(|id| self.acquire(id)).collect())
    }

    fn read_name(&self, element: &MemoryElement) -> String {
        self.nodes[element.id].name.clone()
    }
}

/// Injector that keeps every submitted batch.
#[derive(Debug, Default)]
pub struct RecordingInjector {
    pub calls: Vec<Vec<KeyEvent>>,
}

impl KeyInjector for RecordingInjector {
    fn inject(&mut self, events: &[KeyEvent]) -> Result<()> {
        self.calls.push(events.to_vec());
        Ok(())
    }
}
