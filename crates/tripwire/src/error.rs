use thiserror::Error;

use crate::point::ObservationPoint;

/// The single failure kind raised by every interception. It is never
/// recovered inside this crate; it propagates out of the intercepted call as
/// a panic so the host fuzzer's crash detector observes it. The message
/// names the observation point so aggregated crash reports stay
/// attributable when several points are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("forced observation failure: {owning_type}::{method}")]
pub struct ForcedObservationFailure {
    pub owning_type: &'static str,
    pub method: &'static str,
}

impl ForcedObservationFailure {
    pub fn at(point: ObservationPoint) -> Self {
        Self {
            owning_type: point.owning_type,
            method: point.method,
        }
    }
}
