//! WebAssembly bindings for the debugger views.
//!
//! Lets a browser front-end render the code, register and stack tables
//! without reimplementing the row/address mapping in JavaScript.

pub mod api;

pub use api::{DebuggerSession, DisassemblyLine, JsError};
