use crate::provider::{FeatureFlags, FlagStatus};

/// Where a gated page sends visitors once its flag resolves to off.
pub const GATE_FALLBACK: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Flags are still loading; show a placeholder.
    Wait,
    Render,
    Redirect(&'static str),
}

#[must_use]
pub fn gate(flags: &FeatureFlags, feature: &str) -> GateDecision {
    match flags.status(feature) {
        FlagStatus::Loading => GateDecision::Wait,
        FlagStatus::Enabled => GateDecision::Render,
        FlagStatus::Disabled => GateDecision::Redirect(GATE_FALLBACK),
    }
}
