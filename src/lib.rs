//! libimclient
//!
//! Client bridge between a widget toolkit's input-context abstraction and
//! an out-of-process input-method server. The toolkit adapter and the RPC
//! transport are external collaborators behind traits; this crate owns the
//! parts in between:
//!
//! - the focus/session state machine with its single-focused-session
//!   invariant and preedit flush-before-clear semantics
//! - the preedit buffer with the server's styled-span protocol
//! - key routing between a local fallback composer and the remote server
//! - the native/remote keycode and modifier translation tables
//! - the widget-state snapshot map sent on focus and update events
//!
//! Public API:
//! - `InputMethodBridge` - session registry, focus machine, key routing
//! - `Session` / `SessionId` - per-context state and its registry handle
//! - `PreeditBuffer` - composition text, cursor, styled spans
//! - `ServerProxy` / `ToolkitHost` - the two collaborator traits
//! - `InboundCall` / `dispatch` - server-to-client call routing
//! - `keymap` - keysym/virtual-key and modifier translation
//! - `BridgeConfig` - tunables, loadable from TOML

use serde::{Deserialize, Serialize};

pub mod bridge;
pub use bridge::InputMethodBridge;

pub mod config;
pub use config::BridgeConfig;

pub mod fallback;
pub use fallback::{ComposeOutcome, FallbackComposer};

pub mod host;
pub use host::ToolkitHost;

pub mod inbound;
pub use inbound::{dispatch, HandlerResult, InboundCall};

pub mod keyevent;
pub use keyevent::{KeyEventKind, KeyPress};

pub mod keymap;

pub mod preedit;
pub use preedit::{AttributeSpan, FormatSpan, PreeditBuffer, PreeditFace, SpanStyle};

pub mod rpc;
pub use rpc::{RpcError, ServerProxy};

pub mod session;
pub use session::{Session, SessionId};

pub mod snapshot;
pub use snapshot::{AttributeMap, AttributeValue};

/// Rectangle in toolkit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}
