//! Widget-state snapshot: the attribute map shipped to the server on every
//! focus and update event.
//!
//! The map is string-keyed with typed values and serialized by the
//! transport; keys beyond `focusState` are only present while the session
//! is focused. It is built on demand and handed straight to the RPC call,
//! never cached or diffed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::host::ToolkitHost;
use crate::session::{Session, SessionId};

pub const FOCUS_STATE: &str = "focusState";
pub const WIN_ID: &str = "winId";
pub const ATTRIBUTE_EXTENSION_ID: &str = "toolbarId";
pub const ATTRIBUTE_EXTENSION_FILENAME: &str = "toolbar";
pub const SURROUNDING_TEXT: &str = "surroundingText";
pub const CURSOR_POSITION: &str = "cursorPosition";

/// Typed value in the widget-state map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i32),
    Uint(u64),
    Str(String),
}

pub type AttributeMap = BTreeMap<&'static str, AttributeValue>;

/// Serialize the session's current widget state.
pub fn widget_state<H: ToolkitHost>(session: &Session, id: SessionId, host: &H) -> AttributeMap {
    let mut map = AttributeMap::new();
    map.insert(FOCUS_STATE, AttributeValue::Bool(session.focus_state()));

    if !session.focus_state() {
        return map;
    }

    if let Some(window) = session.client_window() {
        map.insert(WIN_ID, AttributeValue::Uint(window));
    }

    if let Some((ext_id, filename)) = host.attribute_extension(id) {
        map.insert(ATTRIBUTE_EXTENSION_ID, AttributeValue::Int(ext_id));
        map.insert(ATTRIBUTE_EXTENSION_FILENAME, AttributeValue::Str(filename));
    }

    if let Some((text, cursor)) = host.surrounding_text(id) {
        map.insert(SURROUNDING_TEXT, AttributeValue::Str(text));
        map.insert(CURSOR_POSITION, AttributeValue::Int(cursor));
    }

    map
}
