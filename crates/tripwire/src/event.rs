use std::fmt::Write;

use crate::describe::{guarded, Describe};
use crate::intercept::Receiver;
use crate::sink::DiagnosticSink;

/// Ephemeral record of one intercepted call: the receiver's concrete type
/// name and the ordered argument representations. Built, written to the sink
/// once, then discarded.
///
/// The rendered block format is a contract with external crash-log scrapers:
///
/// ```text
/// thisObject class: <type-name>
/// arg 0: <value>
/// arg 1: <value>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterceptionEvent {
    receiver_type: String,
    args: Vec<String>,
}

impl InterceptionEvent {
    /// Captures one intercepted call. Argument rendering is panic-guarded: a
    /// broken formatter yields a placeholder, never a suppressed event.
    pub fn capture(receiver: Receiver, args: &[&dyn Describe]) -> Self {
        Self::from_parts(
            receiver.type_name().to_owned(),
            args.iter().map(|arg| guarded(|| arg.describe())).collect(),
        )
    }

    /// Builds an event from already-rendered parts.
    pub fn from_parts(receiver_type: String, args: Vec<String>) -> Self {
        Self {
            receiver_type,
            args,
        }
    }

    pub fn render(&self) -> String {
        let mut block = String::new();
        let _ = writeln!(block, "thisObject class: {}", self.receiver_type);
        for (i, arg) in self.args.iter().enumerate() {
            let _ = writeln!(block, "arg {i}: {arg}");
        }
        block
    }

    /// Writes the rendered block to the sink as one atomic write.
    pub fn emit(&self, sink: &dyn DiagnosticSink) {
        sink.write_block(&self.render());
    }
}
