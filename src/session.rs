//! Per-widget session state.
//!
//! One `Session` exists per attached input context. The bridge owns all
//! sessions in a registry and enforces that at most one of them holds
//! remote focus at a time; a session never mutates the focus slot itself.

use crate::preedit::PreeditBuffer;
use crate::Rect;

/// Handle into the bridge's session registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub(crate) u64);

/// State tracked for one input context.
#[derive(Debug, Clone)]
pub struct Session {
    /// Toolkit window handle the context currently targets, if any.
    pub(crate) client_window: Option<u64>,
    /// Last-known caret rectangle, window-relative.
    pub(crate) cursor_rect: Rect,
    /// Last-known on-screen-keyboard rectangle, for dedup only.
    pub(crate) keyboard_area: Rect,
    pub(crate) preedit: PreeditBuffer,
    /// True iff this session holds remote focus.
    pub(crate) focus_state: bool,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            client_window: None,
            cursor_rect: Rect {
                x: -1,
                y: -1,
                width: 0,
                height: 0,
            },
            keyboard_area: Rect::default(),
            preedit: PreeditBuffer::new(),
            focus_state: false,
        }
    }

    pub fn client_window(&self) -> Option<u64> {
        self.client_window
    }

    pub fn cursor_rect(&self) -> Rect {
        self.cursor_rect
    }

    pub fn preedit(&self) -> &PreeditBuffer {
        &self.preedit
    }

    pub fn focus_state(&self) -> bool {
        self.focus_state
    }
}
