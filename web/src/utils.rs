/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let high = (random() * f64::from(u32::MAX)) as u64;
    let low = (random() * f64::from(u32::MAX)) as u64;
    (high << 32) | low
}

/// Three character counter text, clamped to what fits: `-99` up to `999`.
pub(crate) fn format_for_counter(value: i32) -> String {
    let value = value.clamp(-99, 999);
    if value < 0 {
        format!("-{:02}", -value)
    } else {
        format!("{:03}", value)
    }
}
