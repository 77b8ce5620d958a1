//! Recording mocks for the two collaborator traits, shared by the
//! integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use libimclient::{
    AttributeMap, BridgeConfig, InputMethodBridge, KeyPress, Rect, RpcError, ServerProxy,
    SessionId, ToolkitHost,
};

#[derive(Debug, Clone, PartialEq)]
pub enum ServerCall {
    ActivateContext,
    UpdateWidgetInformation {
        state: AttributeMap,
        focus_changed: bool,
    },
    ShowInputMethod,
    HideInputMethod,
    Reset,
    ProcessKeyEvent {
        kind: i32,
        remote_key: u32,
        modifiers: u32,
        text: String,
        hardware_keycode: u16,
        native_modifiers: u32,
        timestamp: u32,
    },
}

#[derive(Default)]
pub struct ServerState {
    pub calls: Vec<ServerCall>,
    /// Method names that should fail.
    pub failing: HashSet<&'static str>,
}

/// `ServerProxy` that records every call and can be told to fail methods.
#[derive(Clone, Default)]
pub struct RecordingServer {
    pub state: Rc<RefCell<ServerState>>,
}

impl RecordingServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(&self, method: &'static str) {
        self.state.borrow_mut().failing.insert(method);
    }

    pub fn calls(&self) -> Vec<ServerCall> {
        self.state.borrow().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    fn record(&mut self, method: &'static str, call: ServerCall) -> Result<(), RpcError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.failing.contains(method) {
            Err(RpcError::Call(format!("{method} failed")))
        } else {
            Ok(())
        }
    }
}

impl ServerProxy for RecordingServer {
    fn activate_context(&mut self) -> Result<(), RpcError> {
        self.record("activate_context", ServerCall::ActivateContext)
    }

    fn update_widget_information(
        &mut self,
        state: &AttributeMap,
        focus_changed: bool,
    ) -> Result<(), RpcError> {
        self.record(
            "update_widget_information",
            ServerCall::UpdateWidgetInformation {
                state: state.clone(),
                focus_changed,
            },
        )
    }

    fn show_input_method(&mut self) -> Result<(), RpcError> {
        self.record("show_input_method", ServerCall::ShowInputMethod)
    }

    fn hide_input_method(&mut self) -> Result<(), RpcError> {
        self.record("hide_input_method", ServerCall::HideInputMethod)
    }

    fn reset(&mut self) -> Result<(), RpcError> {
        self.record("reset", ServerCall::Reset)
    }

    fn process_key_event(
        &mut self,
        kind: i32,
        remote_key: u32,
        remote_modifiers: u32,
        text: &str,
        _count: i32,
        _repeat: i32,
        hardware_keycode: u16,
        native_modifiers: u32,
        timestamp: u32,
    ) -> Result<(), RpcError> {
        self.record(
            "process_key_event",
            ServerCall::ProcessKeyEvent {
                kind,
                remote_key,
                modifiers: remote_modifiers,
                text: text.to_owned(),
                hardware_keycode,
                native_modifiers,
                timestamp,
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    PreeditChanged(SessionId),
    Commit(SessionId, String),
    ClearArea(SessionId, Rect, Rect),
    InjectKey(SessionId, KeyPress),
    ExtensionAttribute {
        id: i32,
        target: String,
        target_item: String,
        attribute: String,
        value: serde_json::Value,
    },
    ActionTriggered(SessionId, String),
}

#[derive(Default)]
pub struct HostState {
    pub events: Vec<HostEvent>,
    pub surrounding: Option<(String, i32)>,
    pub extension: Option<(i32, String)>,
    /// Action names `activate_action` reports as existing.
    pub actions: HashSet<String>,
    pub has_toplevel: bool,
    /// Offset `root_coords` applies to window-relative coordinates.
    pub root_offset: (i32, i32),
}

/// `ToolkitHost` that records signal emissions.
#[derive(Clone, Default)]
pub struct RecordingHost {
    pub state: Rc<RefCell<HostState>>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<HostEvent> {
        self.state.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }
}

impl ToolkitHost for RecordingHost {
    fn preedit_changed(&mut self, session: SessionId) {
        self.state
            .borrow_mut()
            .events
            .push(HostEvent::PreeditChanged(session));
    }

    fn commit(&mut self, session: SessionId, text: &str) {
        self.state
            .borrow_mut()
            .events
            .push(HostEvent::Commit(session, text.to_owned()));
    }

    fn clear_area(&mut self, session: SessionId, keyboard: Rect, caret: Rect) {
        self.state
            .borrow_mut()
            .events
            .push(HostEvent::ClearArea(session, keyboard, caret));
    }

    fn surrounding_text(&self, _session: SessionId) -> Option<(String, i32)> {
        self.state.borrow().surrounding.clone()
    }

    fn attribute_extension(&self, _session: SessionId) -> Option<(i32, String)> {
        self.state.borrow().extension.clone()
    }

    fn root_coords(&self, _window: u64, x: i32, y: i32) -> (i32, i32) {
        let (dx, dy) = self.state.borrow().root_offset;
        (x + dx, y + dy)
    }

    fn inject_key_event(&mut self, session: SessionId, event: KeyPress) {
        self.state
            .borrow_mut()
            .events
            .push(HostEvent::InjectKey(session, event));
    }

    fn clear_toplevel_focus(&mut self, _session: SessionId) -> bool {
        self.state.borrow().has_toplevel
    }

    fn activate_action(&mut self, session: SessionId, action: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if state.actions.contains(action) {
            state
                .events
                .push(HostEvent::ActionTriggered(session, action.to_owned()));
            true
        } else {
            false
        }
    }

    fn update_extension_attribute(
        &mut self,
        id: i32,
        target: &str,
        target_item: &str,
        attribute: &str,
        value: &serde_json::Value,
    ) {
        self.state
            .borrow_mut()
            .events
            .push(HostEvent::ExtensionAttribute {
                id,
                target: target.to_owned(),
                target_item: target_item.to_owned(),
                attribute: attribute.to_owned(),
                value: value.clone(),
            });
    }
}

pub type TestBridge = InputMethodBridge<RecordingServer, RecordingHost>;

/// Bridge wired to recording mocks, plus handles to both.
pub fn bridge() -> (TestBridge, RecordingServer, RecordingHost) {
    let server = RecordingServer::new();
    let host = RecordingHost::new();
    let bridge = InputMethodBridge::new(
        Some(server.clone()),
        host.clone(),
        BridgeConfig::default(),
    );
    (bridge, server, host)
}

/// Bridge with no server connection (degraded mode).
pub fn degraded_bridge() -> (TestBridge, RecordingHost) {
    let host = RecordingHost::new();
    let bridge = InputMethodBridge::new(None, host.clone(), BridgeConfig::default());
    (bridge, host)
}
