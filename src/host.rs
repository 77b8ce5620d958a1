//! Toolkit adapter interface.
//!
//! Everything the bridge needs from the widget toolkit goes through this
//! trait: signal emission toward the focused widget, window and text
//! queries, key-event injection, and the attribute-extension registry.
//! The adapter lives on the toolkit's event loop; all calls are
//! single-threaded.

use crate::keyevent::KeyPress;
use crate::session::SessionId;
use crate::Rect;

pub trait ToolkitHost {
    /// The session's preedit changed; the widget should re-query and redraw.
    fn preedit_changed(&mut self, session: SessionId);

    /// Finalized text for the session's widget.
    fn commit(&mut self, session: SessionId, text: &str);

    /// The on-screen keyboard now occupies `keyboard`; `caret` is the caret
    /// rectangle in root coordinates so the widget can scroll clear of it.
    fn clear_area(&mut self, session: SessionId, keyboard: Rect, caret: Rect);

    /// Surrounding text and cursor index of the session's widget, when the
    /// widget supports the query.
    fn surrounding_text(&self, session: SessionId) -> Option<(String, i32)>;

    /// Attribute-extension id and filename attached to the session's
    /// widget, if any.
    fn attribute_extension(&self, session: SessionId) -> Option<(i32, String)>;

    /// Translate window-relative coordinates to root coordinates.
    fn root_coords(&self, window: u64, x: i32, y: i32) -> (i32, i32);

    /// Put a synthesized key event on the toolkit's event queue.
    fn inject_key_event(&mut self, session: SessionId, event: KeyPress);

    /// Clear input focus of the top-level window owning the session's
    /// widget. Returns false when no top-level ancestor exists.
    fn clear_toplevel_focus(&mut self, session: SessionId) -> bool;

    /// Trigger a named action on the session's widget. Returns false when
    /// the widget has no such action.
    fn activate_action(&mut self, session: SessionId, action: &str) -> bool;

    /// Forwarded verbatim to the attribute-extension registry.
    fn update_extension_attribute(
        &mut self,
        id: i32,
        target: &str,
        target_item: &str,
        attribute: &str,
        value: &serde_json::Value,
    );
}
