//! Percent-space helpers

/// Clamp a value to [0, 100]
pub fn clamp_percent(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

/// Apply `delta` to a running percentage, keeping it in [0, 100]
pub fn clamp_percent_change(current: f32, delta: f32) -> f32 {
    clamp_percent(current + delta)
}
