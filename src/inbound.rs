//! Inbound RPC dispatch.
//!
//! The transport decodes each server-to-client method call into an
//! [`InboundCall`] and hands it to [`dispatch`] together with the session
//! it was registered against. The handler's [`HandlerResult`] is what the
//! transport reports back to the remote caller: `NotHandled` covers both
//! malformed calls and the ownership guard rejecting delivery to a session
//! that is not focused.

use crate::bridge::InputMethodBridge;
use crate::host::ToolkitHost;
use crate::preedit::FormatSpan;
use crate::rpc::ServerProxy;
use crate::session::SessionId;
use crate::Rect;

/// Outcome reported to the remote caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResult {
    Handled,
    NotHandled,
}

/// One decoded server-to-client call.
#[derive(Debug, Clone, PartialEq)]
pub enum InboundCall {
    ImInitiatedHide,
    CommitString {
        text: String,
        replacement_start: i32,
        replacement_length: i32,
        cursor_pos: i32,
    },
    UpdatePreedit {
        text: String,
        /// (start, length, face) triples in character units.
        formats: Vec<(i32, i32, i32)>,
        replace_start: i32,
        replace_length: i32,
        cursor_pos: i32,
    },
    KeyEvent {
        kind: i32,
        remote_key: u32,
        modifiers: u32,
        text: String,
        auto_repeat: bool,
        count: i32,
        request_type: u8,
    },
    SetRedirectKeys {
        enabled: bool,
    },
    NotifyExtendedAttributeChanged {
        id: i32,
        target: String,
        target_item: String,
        attribute: String,
        value: serde_json::Value,
    },
    UpdateInputMethodArea {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    /// Notification, no reply expected; dispatch always reports `Handled`.
    InvokeAction {
        action: String,
        sequence: String,
    },
}

/// Route one inbound call to its handler.
pub fn dispatch<S: ServerProxy, H: ToolkitHost>(
    bridge: &mut InputMethodBridge<S, H>,
    session: SessionId,
    call: InboundCall,
) -> HandlerResult {
    match call {
        InboundCall::ImInitiatedHide => bridge.handle_im_initiated_hide(session),
        InboundCall::CommitString {
            text,
            replacement_start,
            replacement_length,
            cursor_pos,
        } => bridge.handle_commit_string(
            session,
            &text,
            replacement_start,
            replacement_length,
            cursor_pos,
        ),
        InboundCall::UpdatePreedit {
            text,
            formats,
            replace_start,
            replace_length,
            cursor_pos,
        } => {
            let formats: Vec<FormatSpan> = formats
                .iter()
                .map(|&(start, length, face)| FormatSpan::from_raw(start, length, face))
                .collect();
            bridge.handle_update_preedit(
                session,
                &text,
                &formats,
                replace_start,
                replace_length,
                cursor_pos,
            )
        }
        InboundCall::KeyEvent {
            kind,
            remote_key,
            modifiers,
            text,
            auto_repeat,
            count,
            request_type,
        } => bridge.handle_key_event(
            session,
            kind,
            remote_key,
            modifiers,
            &text,
            auto_repeat,
            count,
            request_type,
        ),
        InboundCall::SetRedirectKeys { enabled } => {
            bridge.handle_set_redirect_keys(session, enabled)
        }
        InboundCall::NotifyExtendedAttributeChanged {
            id,
            target,
            target_item,
            attribute,
            value,
        } => bridge.handle_notify_extended_attribute_changed(
            session,
            id,
            &target,
            &target_item,
            &attribute,
            &value,
        ),
        InboundCall::UpdateInputMethodArea {
            x,
            y,
            width,
            height,
        } => bridge.handle_update_input_method_area(
            session,
            Rect {
                x,
                y,
                width,
                height,
            },
        ),
        InboundCall::InvokeAction { action, sequence } => {
            bridge.handle_invoke_action(session, &action, &sequence);
            HandlerResult::Handled
        }
    }
}
