//! monkeyc-util - Shared infrastructure for the Monkey interpreter pipeline.
//!
//! The only piece of infrastructure every phase shares is diagnostic
//! reporting: the parser accumulates recoverable syntax errors instead of
//! aborting, and the driver inspects the handler after the parse to decide
//! whether the tree is usable.
//!
//! Monkey diagnostics are deliberately plain: an ordered list of messages
//! with a severity level. There are no source spans, the message text itself
//! is the whole contract (see the parser for the exact shapes it emits).

mod diagnostic;

pub use diagnostic::{Diagnostic, Handler, Level};
