#![no_main]

use std::sync::{Arc, OnceLock};

use libfuzzer_sys::fuzz_target;
use tracing_subscriber::layer::SubscriberExt as _;

use tripwire::{EscalateErrors, HookMode, ObservationPoint, Registry};

// Minimal stand-in for a transport that logs malformed frames and carries
// on: 4-byte little-endian length prefix, then payload. The error paths are
// logged at ERROR and swallowed, which is exactly the pattern the escalation
// layer exists to surface.
fn decode_frame(buf: &[u8]) -> Option<&[u8]> {
    if buf.len() < 4 {
        tracing::error!(len = buf.len(), "frame shorter than header");
        return None;
    }
    let declared = u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let payload = &buf[4..];
    if declared as usize != payload.len() {
        tracing::error!(declared, actual = payload.len(), "frame length mismatch");
        return None;
    }
    Some(payload)
}

static INIT: OnceLock<()> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    INIT.get_or_init(|| {
        let registry = Arc::new(
            Registry::builder()
                .register(
                    ObservationPoint::new("fuzz_escalate_logged_errors", "error"),
                    HookMode::EscalateLogging,
                )
                .build(),
        );
        let subscriber = tracing_subscriber::registry().with(EscalateErrors::new(registry));
        let _ = tracing::subscriber::set_global_default(subscriber);
    });

    // Any input whose error path is reached crashes; reachability is the
    // finding, the stdout block is the evidence.
    let _ = decode_frame(data);
});
