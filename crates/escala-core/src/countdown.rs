//! Onboard-return countdown shown in the header.

use std::fmt::Write;

use chrono::NaiveTime;

/// Shown once the onboard time has passed
pub const ON_BOARD: &str = "¡A BORDO!";

/// `HHh MMm SSs` until `target`, anchored to the current day
pub fn format_countdown(now: NaiveTime, target: NaiveTime) -> String {
    let secs = (target - now).num_seconds();
    if secs <= 0 {
        return ON_BOARD.to_string();
    }
    let mut out = String::with_capacity(12);
    let _ = write!(out, "{:02}h {:02}m {:02}s", secs / 3600, (secs % 3600) / 60, secs % 60);
    out
}

/// `9h 30m` style duration label
pub fn format_minutes(total: i64) -> String {
    let total = total.max(0);
    let (h, m) = (total / 60, total % 60);
    match (h, m) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {:02}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn formats_remaining_time() {
        assert_eq!(format_countdown(t(8, 0, 0), t(17, 30, 0)), "09h 30m 00s");
        assert_eq!(format_countdown(t(17, 29, 1), t(17, 30, 0)), "00h 00m 59s");
    }

    #[test]
    fn reports_on_board_at_and_after_target() {
        assert_eq!(format_countdown(t(17, 30, 0), t(17, 30, 0)), ON_BOARD);
        assert_eq!(format_countdown(t(19, 0, 0), t(17, 30, 0)), ON_BOARD);
    }

    #[test]
    fn formats_minute_labels() {
        assert_eq!(format_minutes(570), "9h 30m");
        assert_eq!(format_minutes(110), "1h 50m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(120), "2h");
    }
}
