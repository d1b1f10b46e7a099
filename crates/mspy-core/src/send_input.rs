use crate::error::{Error, Result};
use crate::ime::KeyInjector;
use crate::types::{KeyEvent, KeyPhase};
use tracing::debug;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, KEYEVENTF_KEYUP,
    VIRTUAL_KEY,
};

/// Marker carried in `dwExtraInfo` so keyboard hooks can tell our events apart.
pub const INJECTED_EXTRA_INFO: usize = 0x4D53_5059;

/// Injects through `SendInput`, one call per sequence so no user input can
/// interleave with the chord.
#[derive(Debug, Default)]
pub struct SendInputInjector;

impl KeyInjector for SendInputInjector {
    fn inject(&mut self, events: &[KeyEvent]) -> Result<()> {
        let inputs: Vec<INPUT> = events.iter().map(keyboard_input).collect();

        let sent = unsafe { SendInput(&inputs, std::mem::size_of::<INPUT>() as i32) } as usize;
        if sent != inputs.len() {
            return Err(Error::Inject {
                sent,
                expected: inputs.len(),
            });
        }
        debug!("Injected {} key events", sent);
        Ok(())
    }
}

fn keyboard_input(event: &KeyEvent) -> INPUT {
    let flags = match event.phase {
        KeyPhase::Down => KEYBD_EVENT_FLAGS(0),
        KeyPhase::Up => KEYEVENTF_KEYUP,
    };

    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(event.vk),
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: INJECTED_EXTRA_INFO,
            },
        },
    }
}
