//! The process-wide bridge: session registry, focus state machine, key
//! routing, and the inbound RPC handlers.
//!
//! All state lives on the toolkit's event loop thread. The bridge is the
//! only writer of the focused-session slot and of every session's preedit,
//! which is what upholds the single-focus invariant: `focus_in` drives the
//! previously focused session through its full focus-out sequence before
//! the new session is marked focused.
//!
//! Remote call failures are logged and never propagated; the local side of
//! every transition completes regardless of what the server leg did.

use ahash::AHashMap;
use tracing::{debug, warn};

use crate::config::BridgeConfig;
use crate::fallback::{ComposeOutcome, FallbackComposer};
use crate::host::ToolkitHost;
use crate::inbound::HandlerResult;
use crate::keyevent::{native_mods, KeyPress};
use crate::keymap;
use crate::preedit::{AttributeSpan, FormatSpan};
use crate::rpc::ServerProxy;
use crate::session::{Session, SessionId};
use crate::snapshot::{self, AttributeMap};
use crate::Rect;

/// Input-method client bridge.
///
/// `S` is the RPC transport toward the server, `H` the toolkit adapter.
/// `server` being `None` is degraded mode: every remote leg becomes a
/// no-op and the fallback composer handles all keys.
pub struct InputMethodBridge<S, H> {
    sessions: AHashMap<SessionId, Session>,
    next_id: u64,
    focused: Option<SessionId>,
    /// Session whose widget originated the most recent key event.
    last_event_session: Option<SessionId>,
    /// Process-wide routing flag, settable only by the server.
    redirect_enabled: bool,
    fallback: FallbackComposer,
    server: Option<S>,
    host: H,
    config: BridgeConfig,
}

impl<S: ServerProxy, H: ToolkitHost> InputMethodBridge<S, H> {
    pub fn new(server: Option<S>, host: H, config: BridgeConfig) -> Self {
        if server.is_none() {
            debug!("no input-method server connection, running degraded");
        }
        Self {
            sessions: AHashMap::new(),
            next_id: 0,
            focused: None,
            last_event_session: None,
            redirect_enabled: false,
            fallback: FallbackComposer::new(config.compose_enabled),
            server,
            host,
            config,
        }
    }

    /// Register a new session for a freshly created input context.
    pub fn create_session(&mut self) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        self.sessions.insert(id, Session::new());
        id
    }

    /// Tear down a session. If it held focus the slot is cleared without a
    /// remote leg; the context is gone, there is nothing left to flush to.
    pub fn remove_session(&mut self, id: SessionId) {
        if self.focused == Some(id) {
            self.focused = None;
            self.last_event_session = None;
        }
        self.sessions.remove(&id);
    }

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn focused(&self) -> Option<SessionId> {
        self.focused
    }

    pub fn redirect_enabled(&self) -> bool {
        self.redirect_enabled
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    // ---- focus state machine ----

    /// The toolkit moved input focus to this session's widget.
    pub fn focus_in(&mut self, id: SessionId) {
        if !self.sessions.contains_key(&id) {
            return;
        }
        if let Some(prev) = self.focused {
            if prev != id {
                self.focus_out(prev);
            }
        }
        self.focused = Some(id);
        if let Some(session) = self.sessions.get_mut(&id) {
            session.focus_state = true;
        }

        let state = self.build_widget_state(id);
        if let Some(server) = self.server.as_mut() {
            match server.activate_context() {
                Ok(()) => match server.update_widget_information(&state, true) {
                    Ok(()) => {
                        if let Err(err) = server.show_input_method() {
                            warn!("unable to show input method: {err}");
                        }
                    }
                    Err(err) => warn!("unable to update widget information: {err}"),
                },
                Err(err) => warn!("unable to activate context: {err}"),
            }
        }
    }

    /// The toolkit moved input focus away from this session's widget.
    /// No-op unless the session currently holds focus.
    pub fn focus_out(&mut self, id: SessionId) {
        if self.focused != Some(id) {
            return;
        }
        self.reset(id);

        if let Some(session) = self.sessions.get_mut(&id) {
            session.focus_state = false;
        }
        self.focused = None;
        self.last_event_session = None;

        let state = self.build_widget_state(id);
        if let Some(server) = self.server.as_mut() {
            match server.update_widget_information(&state, true) {
                Ok(()) => {
                    if let Err(err) = server.hide_input_method() {
                        warn!("unable to hide input method: {err}");
                    }
                }
                Err(err) => warn!("unable to update widget information: {err}"),
            }
        }
    }

    /// Flush pending preedit as a commit and reset the remote side.
    /// No-op unless the session currently holds focus.
    pub fn reset(&mut self, id: SessionId) {
        if self.focused != Some(id) {
            return;
        }
        self.fallback.reset();

        let flushed = self
            .sessions
            .get_mut(&id)
            .filter(|session| !session.preedit.is_empty())
            .map(|session| session.preedit.take_text());
        if let Some(text) = flushed {
            // listeners must see the cleared preedit before the commit
            self.host.preedit_changed(id);
            self.host.commit(id, &text);
        }

        // the remote reset goes out whether or not anything was flushed
        if let Some(server) = self.server.as_mut() {
            if let Err(err) = server.reset() {
                warn!("unable to reset: {err}");
            }
        }
    }

    // ---- toolkit-facing context operations ----

    /// Route one physical key event. Returns whether it was consumed.
    pub fn filter_key_event(&mut self, id: SessionId, event: &KeyPress) -> bool {
        if !self.sessions.contains_key(&id) {
            return false;
        }
        self.last_event_session = Some(id);
        if self.focused != Some(id) {
            self.focus_in(id);
        }

        if event.is_forwarded() || !self.redirect_enabled || self.server.is_none() {
            return match self.fallback.feed(event) {
                ComposeOutcome::Pass => false,
                ComposeOutcome::Consumed => true,
                ComposeOutcome::Commit(text) => {
                    self.host.commit(id, &text);
                    true
                }
            };
        }

        let remote_key = keymap::keysym_to_remote(event.keysym);
        if remote_key == keymap::remote_key::KEY_UNKNOWN {
            return false;
        }
        let kind = keymap::event_kind_to_remote(event.kind);
        let remote_modifiers = keymap::native_mods_to_remote(event.state);

        if let Some(server) = self.server.as_mut() {
            if let Err(err) = server.process_key_event(
                kind,
                remote_key,
                remote_modifiers,
                &event.text,
                1,
                0,
                event.hardware_keycode,
                event.state,
                event.timestamp,
            ) {
                warn!("unable to process key event: {err}");
            }
        }
        // fire and forget: consumed even when the remote leg failed
        true
    }

    /// Current preedit string, spans, and cursor for the toolkit to render.
    pub fn preedit_string(&self, id: SessionId) -> (String, Vec<AttributeSpan>, usize) {
        match self.sessions.get(&id) {
            Some(session) => (
                session.preedit.text().to_owned(),
                session.preedit.spans().to_vec(),
                session.preedit.cursor(),
            ),
            None => (String::new(), Vec::new(), 0),
        }
    }

    pub fn set_client_window(&mut self, id: SessionId, window: Option<u64>) {
        if let Some(session) = self.sessions.get_mut(&id) {
            session.client_window = window;
        }
    }

    pub fn set_cursor_location(&mut self, id: SessionId, area: Rect) {
        if let Some(session) = self.sessions.get_mut(&id) {
            session.cursor_rect = area;
        }
    }

    /// The server always renders preedit; the toolkit cannot turn it off.
    pub fn set_use_preedit(&mut self, _id: SessionId, _enabled: bool) {}

    // ---- inbound RPC handlers ----

    /// Ownership guard shared by the inbound handlers.
    fn guard(&self, id: SessionId) -> Result<(), HandlerResult> {
        if self.focused == Some(id) {
            Ok(())
        } else {
            Err(HandlerResult::NotHandled)
        }
    }

    /// Server asked to dismiss itself: drop input focus of the owning
    /// top-level window.
    pub fn handle_im_initiated_hide(&mut self, id: SessionId) -> HandlerResult {
        if let Err(rejected) = self.guard(id) {
            return rejected;
        }
        let has_window = self
            .sessions
            .get(&id)
            .is_some_and(|session| session.client_window.is_some());
        if !has_window {
            return HandlerResult::NotHandled;
        }
        if self.host.clear_toplevel_focus(id) {
            HandlerResult::Handled
        } else {
            HandlerResult::NotHandled
        }
    }

    /// Server finalized text. The replacement range is accepted but not
    /// acted upon.
    pub fn handle_commit_string(
        &mut self,
        id: SessionId,
        text: &str,
        _replacement_start: i32,
        _replacement_length: i32,
        _cursor_pos: i32,
    ) -> HandlerResult {
        if let Err(rejected) = self.guard(id) {
            return rejected;
        }
        if let Some(session) = self.sessions.get_mut(&id) {
            session.preedit.clear();
        }
        self.host.preedit_changed(id);
        self.host.commit(id, text);
        HandlerResult::Handled
    }

    /// Server replaced the composition. The replacement range is accepted
    /// but not acted upon.
    pub fn handle_update_preedit(
        &mut self,
        id: SessionId,
        text: &str,
        formats: &[FormatSpan],
        _replace_start: i32,
        _replace_length: i32,
        cursor_pos: i32,
    ) -> HandlerResult {
        if let Err(rejected) = self.guard(id) {
            return rejected;
        }
        if let Some(session) = self.sessions.get_mut(&id) {
            session.preedit.update(text, formats, cursor_pos);
        }
        self.host.preedit_changed(id);
        HandlerResult::Handled
    }

    /// Server injected a key: synthesize a native event, tag it forwarded
    /// so routing keeps it local, and put it on the toolkit queue.
    pub fn handle_key_event(
        &mut self,
        id: SessionId,
        kind: i32,
        remote_key: u32,
        remote_modifiers: u32,
        text: &str,
        _auto_repeat: bool,
        _count: i32,
        _request_type: u8,
    ) -> HandlerResult {
        if let Err(rejected) = self.guard(id) {
            return rejected;
        }
        let has_window = self
            .sessions
            .get(&id)
            .is_some_and(|session| session.client_window.is_some());
        if !has_window {
            return HandlerResult::NotHandled;
        }
        let Some(kind) = keymap::remote_event_kind(kind) else {
            return HandlerResult::NotHandled;
        };
        let keysym = keymap::remote_to_keysym(remote_key);
        if keysym == 0 {
            return HandlerResult::NotHandled;
        }
        let event = KeyPress {
            kind,
            keysym,
            hardware_keycode: 0,
            state: keymap::remote_mods_to_native(remote_modifiers) | native_mods::FORWARDED,
            text: text.to_owned(),
            timestamp: 0,
        };
        self.host.inject_key_event(id, event);
        HandlerResult::Handled
    }

    /// Global routing switch; deliberately not ownership-guarded.
    pub fn handle_set_redirect_keys(&mut self, _id: SessionId, enabled: bool) -> HandlerResult {
        debug!("redirect keys {}", if enabled { "on" } else { "off" });
        self.redirect_enabled = enabled;
        HandlerResult::Handled
    }

    pub fn handle_notify_extended_attribute_changed(
        &mut self,
        id: SessionId,
        extension_id: i32,
        target: &str,
        target_item: &str,
        attribute: &str,
        value: &serde_json::Value,
    ) -> HandlerResult {
        if let Err(rejected) = self.guard(id) {
            return rejected;
        }
        self.host
            .update_extension_attribute(extension_id, target, target_item, attribute, value);
        HandlerResult::Handled
    }

    /// Server reported the on-screen keyboard's occupied rectangle.
    /// Identical repeats are suppressed.
    pub fn handle_update_input_method_area(&mut self, id: SessionId, area: Rect) -> HandlerResult {
        if let Err(rejected) = self.guard(id) {
            return rejected;
        }
        let Some(session) = self.sessions.get_mut(&id) else {
            return HandlerResult::NotHandled;
        };
        let Some(window) = session.client_window else {
            return HandlerResult::NotHandled;
        };
        if session.keyboard_area == area {
            return HandlerResult::NotHandled;
        }
        session.keyboard_area = area;

        let cursor = session.cursor_rect;
        let (root_x, root_y) = self.host.root_coords(window, cursor.x, cursor.y);
        let caret = Rect {
            x: root_x,
            y: root_y,
            width: cursor.width,
            height: cursor.height,
        };
        self.host.clear_area(id, area, caret);
        HandlerResult::Handled
    }

    /// Server requested a named widget action. Copy, cut, and paste fall
    /// back to their `-clipboard` variants when the plain name is missing.
    pub fn handle_invoke_action(&mut self, id: SessionId, action: &str, _sequence: &str) {
        if self.focused != Some(id) {
            return;
        }
        if self.host.activate_action(id, action) {
            return;
        }
        if matches!(action, "copy" | "cut" | "paste") {
            let alternative = format!("{action}-clipboard");
            self.host.activate_action(id, &alternative);
        }
    }

    fn build_widget_state(&self, id: SessionId) -> AttributeMap {
        match self.sessions.get(&id) {
            Some(session) => snapshot::widget_state(session, id, &self.host),
            None => AttributeMap::new(),
        }
    }
}
