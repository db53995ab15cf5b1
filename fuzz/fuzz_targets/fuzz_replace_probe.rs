#![no_main]

use arbitrary::Unstructured;
use libfuzzer_sys::fuzz_target;

use tripwire::{HookMode, ObservationPoint, Receiver, Registry};

const DECODE: ObservationPoint = ObservationPoint::new("Codec", "decode");

// Demo implementation the probe replaces. Its body never runs once the
// observation point is registered.
struct Codec {
    strict: bool,
}

impl Codec {
    fn decode(&self, version: u8, payload: &str) -> usize {
        if self.strict && payload.is_empty() {
            return 0;
        }
        payload.len().saturating_add(version as usize)
    }
}

// Decorator seam: the harness consults the registry before dispatching to
// the real implementation.
fn probed_decode(registry: &Registry, codec: &Codec, version: u8, payload: &str) -> usize {
    if let Some(hook) = registry.interception(DECODE.owning_type, DECODE.method) {
        hook.fire(Receiver::of(codec), &[&version, &payload]);
    }
    codec.decode(version, payload)
}

fn registry() -> &'static Registry {
    Registry::installed().unwrap_or_else(|| {
        Registry::builder()
            .register(DECODE, HookMode::Replace)
            .install()
    })
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let version: u8 = u.arbitrary().unwrap_or(0);
    let strict: bool = u.arbitrary().unwrap_or(false);
    let payload = String::from_utf8_lossy(u.take_rest());

    // Gate on a magic version so the fuzzer has something to search for;
    // every input that gets past it reaches the probe and crashes.
    if version == 0x2a {
        let codec = Codec { strict };
        let _ = probed_decode(registry(), &codec, version, &payload);
    }
});
