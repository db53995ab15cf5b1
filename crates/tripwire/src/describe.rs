use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Substituted for an argument whose formatter panicked. The event itself is
/// never suppressed.
pub const UNREPRESENTABLE: &str = "<unrepresentable>";

/// Uniform "describe as text" capability required of observation-point
/// arguments. Anything `Display` qualifies; `Debug`-only values go through
/// [`AsDebug`].
pub trait Describe {
    fn describe(&self) -> String;
}

impl<T: fmt::Display + ?Sized> Describe for T {
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Adapter giving `Debug`-only values the describe capability.
pub struct AsDebug<T>(pub T);

impl<T: fmt::Debug> fmt::Display for AsDebug<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Runs `render`, substituting [`UNREPRESENTABLE`] if it panics.
pub(crate) fn guarded(render: impl FnOnce() -> String) -> String {
    panic::catch_unwind(AssertUnwindSafe(render)).unwrap_or_else(|_| UNREPRESENTABLE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_values_describe_without_quoting() {
        assert_eq!(42.describe(), "42");
        assert_eq!("x".describe(), "x");
    }

    #[test]
    fn debug_adapter_uses_debug_rendering() {
        assert_eq!(AsDebug(vec![1, 2]).describe(), "[1, 2]");
        assert_eq!(AsDebug(Some("x")).describe(), "Some(\"x\")");
    }

    #[test]
    fn guarded_substitutes_placeholder_on_panic() {
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                panic!("broken formatter")
            }
        }

        assert_eq!(guarded(|| Broken.describe()), UNREPRESENTABLE);
        assert_eq!(guarded(|| "ok".describe()), "ok");
    }
}
