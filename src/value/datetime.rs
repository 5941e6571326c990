//! UTC datetime leaf without timezone dependencies.
//!
//! Datetimes show up in the documents we ingest (TOML dates, frontmatter
//! timestamps) but are not containers: cloning copies them as-is. Parsing
//! accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SSZ`.

use std::fmt;

use anyhow::{Result, bail};

/// UTC datetime without timezone complexity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Datetime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl Datetime {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse from "YYYY-MM-DD" or "YYYY-MM-DDTHH:MM:SSZ" format
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        // Optional time part (RFC 3339, UTC only)
        let (hour, minute, second) = if bytes.len() >= 20 && bytes[10] == b'T' && bytes[19] == b'Z'
        {
            if bytes[13] != b':' || bytes[16] != b':' {
                return None;
            }
            (
                parse_u8(&bytes[11..13])?,
                parse_u8(&bytes[14..16])?,
                parse_u8(&bytes[17..19])?,
            )
        } else if bytes.len() == 10 {
            (0, 0, 0)
        } else {
            return None;
        };

        let dt = Self::new(year, month, day, hour, minute, second);
        dt.validate().ok()?;
        Some(dt)
    }

    pub fn validate(&self) -> Result<()> {
        let Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        if hour > 23 {
            bail!("hour is invalid: {hour}");
        }
        if minute > 59 {
            bail!("minute is invalid: {minute}");
        }
        if second > 59 {
            bail!("second is invalid: {second}");
        }

        Ok(())
    }

    #[inline]
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[inline]
    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// Format as RFC 3339 (ISO 8601).
    ///
    /// Returns: `YYYY-MM-DDTHH:MM:SSZ`
    pub fn to_rfc3339(self) -> String {
        format!(
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

impl fmt::Display for Datetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_only() {
        let dt = Datetime::parse("2024-06-15").unwrap();
        assert_eq!(dt, Datetime::from_ymd(2024, 6, 15));
        assert_eq!(dt.hour, 0);
    }

    #[test]
    fn test_parse_with_time() {
        let dt = Datetime::parse("2024-06-15T14:30:45Z").unwrap();
        assert_eq!(dt, Datetime::new(2024, 6, 15, 14, 30, 45));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        // Too short
        assert!(Datetime::parse("2024-6-15").is_none());
        // Wrong separators
        assert!(Datetime::parse("2024/06/15").is_none());
        // Time part without Z suffix
        assert!(Datetime::parse("2024-06-15T14:30:45").is_none());
        // Trailing garbage
        assert!(Datetime::parse("2024-06-15x").is_none());
    }

    #[test]
    fn test_parse_validates_calendar() {
        // Day 31 in a 30-day month
        assert!(Datetime::parse("2024-04-31").is_none());
        // Feb 29 valid only in leap years
        assert!(Datetime::parse("2024-02-29").is_some());
        assert!(Datetime::parse("2023-02-29").is_none());
        // Divisible by 100 but not 400
        assert!(Datetime::parse("1900-02-29").is_none());
        assert!(Datetime::parse("2000-02-29").is_some());
    }

    #[test]
    fn test_validate_field_ranges() {
        assert!(Datetime::new(2024, 0, 15, 0, 0, 0).validate().is_err());
        assert!(Datetime::new(2024, 13, 15, 0, 0, 0).validate().is_err());
        assert!(Datetime::new(2024, 6, 0, 0, 0, 0).validate().is_err());
        assert!(Datetime::new(2024, 6, 15, 24, 0, 0).validate().is_err());
        assert!(Datetime::new(2024, 6, 15, 12, 60, 0).validate().is_err());
        assert!(Datetime::new(2024, 6, 15, 12, 30, 60).validate().is_err());
        assert!(Datetime::new(2024, 12, 31, 23, 59, 59).validate().is_ok());
    }

    #[test]
    fn test_display_is_rfc3339() {
        let dt = Datetime::new(2024, 1, 5, 9, 3, 7);
        assert_eq!(dt.to_string(), "2024-01-05T09:03:07Z");
    }
}
