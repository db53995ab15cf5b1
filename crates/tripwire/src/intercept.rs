use crate::describe::Describe;
use crate::error::ForcedObservationFailure;
use crate::event::InterceptionEvent;
use crate::point::ObservationPoint;
use crate::sink::DiagnosticSink;

/// The receiver of an intercepted call, or its absence for static and free
/// calls. Only the concrete type name is captured; the diagnostic contract
/// never prints the receiver's value.
#[derive(Debug, Clone, Copy)]
pub struct Receiver {
    type_name: &'static str,
}

impl Receiver {
    /// Captures the concrete type of the object a call was made on. At a
    /// decorator seam this is the monomorphized receiver type.
    pub fn of<R: ?Sized>(_receiver: &R) -> Self {
        Self {
            type_name: std::any::type_name::<R>(),
        }
    }

    /// Absence of a receiver.
    pub const fn absent() -> Self {
        Self {
            type_name: "<static>",
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// An armed hook for one observation point, obtained from
/// [`Registry::interception`](crate::Registry::interception). Firing it
/// replaces the original method body entirely.
pub struct Interception<'a> {
    point: ObservationPoint,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Interception<'a> {
    pub(crate) fn new(point: ObservationPoint, sink: &'a dyn DiagnosticSink) -> Self {
        Self { point, sink }
    }

    pub fn point(&self) -> ObservationPoint {
        self.point
    }

    /// Replaces the intercepted call: emits one diagnostic block naming the
    /// receiver's type and each argument in positional order, then raises
    /// the forced failure. The original body never runs and no value is
    /// ever returned to the caller.
    pub fn fire(&self, receiver: Receiver, args: &[&dyn Describe]) -> ! {
        InterceptionEvent::capture(receiver, args).emit(self.sink);
        self.raise()
    }

    /// Raises the forced failure for an event that has already been emitted.
    pub(crate) fn raise(&self) -> ! {
        panic!("{}", ForcedObservationFailure::at(self.point))
    }
}
