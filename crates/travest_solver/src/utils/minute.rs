use jiff::civil::DateTime;

/// Compares two instants at minute granularity, seconds and below are ignored.
pub fn same_minute(a: DateTime, b: DateTime) -> bool {
    a.date() == b.date() && a.hour() == b.hour() && a.minute() == b.minute()
}
