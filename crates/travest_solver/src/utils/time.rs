/// Evaluates `$block` and logs how long it took at debug level, with the
/// elapsed milliseconds as a structured field.
#[macro_export]
macro_rules! timer_debug {
    ($msg:expr, $block:expr) => {{
        let started_at = jiff::Timestamp::now();
        let result = $block;
        let elapsed = jiff::Timestamp::now().duration_since(started_at);

        tracing::debug!(elapsed_ms = elapsed.as_millis() as i64, "{}", $msg);

        result
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_timer_debug_returns_block_value() {
        let departure = "07:00";
        let value = crate::timer_debug!(format_args!("Route query departing at {departure}"), {
            40 + 2
        });

        assert_eq!(value, 42);
    }
}
