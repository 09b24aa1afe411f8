use std::fmt::{self, Display, Write as _};

use chrono::{DateTime, Local, TimeZone};

/// 12-hour clock with seconds and an AM/PM suffix, e.g. `03:15:30 PM`.
pub const TIME_FORMAT: &str = "%r";

/// Size of the formatting buffer in bytes, terminator included.
///
/// Output must fit in `TIME_BUF_LEN - 1` bytes.
pub const TIME_BUF_LEN: usize = 256;

/// Error returned when a time cannot be turned into display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockFormatError {
    /// The format string contains an unknown or unsupported specifier.
    InvalidFormat(String),
    /// Formatting produced no text.
    Empty,
    /// Output does not fit in the formatting buffer.
    TooLong { len: usize },
}

impl fmt::Display for ClockFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(fmt_str) => write!(f, "invalid time format {fmt_str:?}"),
            Self::Empty => f.write_str("time formatting produced no output"),
            Self::TooLong { len } => write!(
                f,
                "formatted time is {len} bytes; buffer holds {}",
                TIME_BUF_LEN - 1
            ),
        }
    }
}

impl std::error::Error for ClockFormatError {}

/// Reads the system clock and converts it to local calendar time.
#[inline]
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Formats `time` with [`TIME_FORMAT`].
pub fn format_clock<Tz>(time: &DateTime<Tz>) -> Result<String, ClockFormatError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_time(time, TIME_FORMAT)
}

/// Formats `time` with a strftime-style format string.
///
/// Zero-length output and output that would not fit in [`TIME_BUF_LEN`] are
/// errors, not empty strings.
pub fn format_time<Tz>(time: &DateTime<Tz>, format: &str) -> Result<String, ClockFormatError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::with_capacity(32);
    write!(out, "{}", time.format(format))
        .map_err(|_| ClockFormatError::InvalidFormat(format.to_string()))?;

    if out.is_empty() {
        return Err(ClockFormatError::Empty);
    }
    if out.len() >= TIME_BUF_LEN {
        return Err(ClockFormatError::TooLong { len: out.len() });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, Utc};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
            .and_utc()
    }

    #[test]
    fn afternoon_uses_pm() {
        assert_eq!(format_clock(&at(15, 15, 30)).unwrap(), "03:15:30 PM");
    }

    #[test]
    fn midnight_is_twelve_am() {
        assert_eq!(format_clock(&at(0, 0, 0)).unwrap(), "12:00:00 AM");
    }

    #[test]
    fn noon_is_twelve_pm() {
        assert_eq!(format_clock(&at(12, 0, 5)).unwrap(), "12:00:05 PM");
    }

    #[test]
    fn empty_output_is_an_error() {
        assert_eq!(format_time(&at(9, 0, 0), ""), Err(ClockFormatError::Empty));
    }

    #[test]
    fn unknown_specifier_is_an_error() {
        assert!(matches!(
            format_time(&at(9, 0, 0), "%Q"),
            Err(ClockFormatError::InvalidFormat(_))
        ));
    }

    #[test]
    fn output_must_leave_room_for_terminator() {
        let exact = "x".repeat(TIME_BUF_LEN - 1);
        assert_eq!(format_time(&at(9, 0, 0), &exact).unwrap().len(), TIME_BUF_LEN - 1);

        let over = "x".repeat(TIME_BUF_LEN);
        assert_eq!(
            format_time(&at(9, 0, 0), &over),
            Err(ClockFormatError::TooLong { len: TIME_BUF_LEN })
        );
    }

    #[test]
    fn local_clock_formats() {
        let text = format_clock(&now_local()).unwrap();
        assert!(text.ends_with("AM") || text.ends_with("PM"), "{text}");
    }
}
