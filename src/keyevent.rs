//! Toolkit-side key events.
//!
//! A `KeyPress` is the bridge's view of a physical (or injected) key event:
//! the native keysym, the raw hardware keycode, and the native modifier state
//! word. Events injected on behalf of the remote server carry the forwarded
//! marker bit in their state word so they are never routed back out.

/// Native modifier state bits, X-style.
pub mod native_mods {
    pub const SHIFT: u32 = 1 << 0;
    pub const LOCK: u32 = 1 << 1;
    pub const CONTROL: u32 = 1 << 2;
    pub const MOD1: u32 = 1 << 3;
    pub const MOD2: u32 = 1 << 4;
    pub const MOD3: u32 = 1 << 5;
    pub const MOD4: u32 = 1 << 6;
    pub const MOD5: u32 = 1 << 7;

    /// Marker bit for events that already went through the remote server.
    /// Routing treats such events as local-only.
    pub const FORWARDED: u32 = 1 << 25;
}

/// Press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Press,
    Release,
}

/// One key event as delivered by the toolkit adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub kind: KeyEventKind,
    /// Native keysym.
    pub keysym: u32,
    /// Raw hardware keycode, passed to the server for disambiguation.
    pub hardware_keycode: u16,
    /// Native modifier state word (`native_mods` bits).
    pub state: u32,
    /// Text produced by the event, if any.
    pub text: String,
    /// Toolkit event timestamp.
    pub timestamp: u32,
}

impl KeyPress {
    /// A plain key press with no modifiers, mostly useful in tests.
    pub fn press(keysym: u32, text: &str) -> Self {
        Self {
            kind: KeyEventKind::Press,
            keysym,
            hardware_keycode: 0,
            state: 0,
            text: text.to_owned(),
            timestamp: 0,
        }
    }

    /// Whether this event was already processed by the remote server.
    pub fn is_forwarded(&self) -> bool {
        self.state & native_mods::FORWARDED != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwarded_marker() {
        let mut ev = KeyPress::press(0x61, "a");
        assert!(!ev.is_forwarded());
        ev.state |= native_mods::FORWARDED;
        assert!(ev.is_forwarded());
    }
}
