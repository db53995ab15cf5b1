use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::event::InterceptionEvent;
use crate::registry::Registry;

/// Layer that escalates `ERROR`-level events from registered logging
/// observation points into forced failures. Errors a target logs and then
/// swallows still reach the fuzzer's crash detector.
///
/// The event's target stands in for the receiver type in the diagnostic
/// block, and its fields, in declaration order, form the argument list.
/// Events below `ERROR` and events from unregistered targets pass through
/// untouched.
pub struct EscalateErrors {
    registry: Arc<Registry>,
}

impl EscalateErrors {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

impl<S: Subscriber> Layer<S> for EscalateErrors {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() != Level::ERROR {
            return;
        }
        let Some(hook) = self.registry.logging_point(meta.target()) else {
            return;
        };

        let mut fields = FieldValues::default();
        event.record(&mut fields);
        InterceptionEvent::from_parts(meta.target().to_owned(), fields.values)
            .emit(self.registry.sink());
        hook.raise()
    }
}

/// Collects an event's field values in declaration order. The `message`
/// field, when present, is declared first and therefore becomes `arg 0`.
#[derive(Default)]
struct FieldValues {
    values: Vec<String>,
}

impl Visit for FieldValues {
    fn record_str(&mut self, _field: &Field, value: &str) {
        self.values.push(value.to_owned());
    }

    fn record_debug(&mut self, _field: &Field, value: &dyn fmt::Debug) {
        self.values.push(format!("{value:?}"));
    }
}
