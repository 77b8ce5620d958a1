//! Client half of the remote procedure surface.
//!
//! The transport is an external collaborator; the bridge only needs the
//! synchronous call shape below. Implementations are expected to enforce
//! the configured call timeout and surface expiry as [`RpcError::TimedOut`]
//! so a hung server degrades one call instead of wedging the event loop
//! forever. Every error is recoverable: callers log and carry on.

use thiserror::Error;

use crate::snapshot::AttributeMap;

/// Failure of one remote call leg. Never fatal to the bridge.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("remote call failed: {0}")]
    Call(String),
    #[error("remote call timed out after {0} ms")]
    TimedOut(u64),
    #[error("connection to input-method server closed")]
    Disconnected,
}

/// Synchronous calls the bridge issues to the input-method server.
pub trait ServerProxy {
    fn activate_context(&mut self) -> Result<(), RpcError>;

    fn update_widget_information(
        &mut self,
        state: &AttributeMap,
        focus_changed: bool,
    ) -> Result<(), RpcError>;

    fn show_input_method(&mut self) -> Result<(), RpcError>;

    fn hide_input_method(&mut self) -> Result<(), RpcError>;

    fn reset(&mut self) -> Result<(), RpcError>;

    /// Ship one key event to the server. Carries both the translated remote
    /// key and the raw hardware keycode/native state word so the server can
    /// disambiguate layouts. The count and repeat parameters are fixed
    /// protocol padding.
    #[allow(clippy::too_many_arguments)]
    fn process_key_event(
        &mut self,
        kind: i32,
        remote_key: u32,
        remote_modifiers: u32,
        text: &str,
        count: i32,
        repeat: i32,
        hardware_keycode: u16,
        native_modifiers: u32,
        timestamp: u32,
    ) -> Result<(), RpcError>;
}
