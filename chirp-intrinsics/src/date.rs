//! Directive-driven date formatting.
//!
//! The format string is scanned once, left to right. Every character is
//! looked up in the directive table: recognised characters expand to a piece
//! of text or to a padded numeric field, anything else is copied as is.
//! Names are fixed English names and do not follow the process locale.

use anyhow::Result;
use time::{OffsetDateTime, UtcOffset};

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar and clock fields of one instant, already shifted to local time.
///
/// `utc_hour` and `utc_minute` carry the same instant on the UTC clock so
/// the numeric offset can be derived without a time zone database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenDownTime {
    pub year: i32,
    /// 1-12
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// 0-60, 60 being a leap second
    pub second: u8,
    pub day_of_year: u16,
    /// 1 (Monday) to 7 (Sunday)
    pub iso_weekday: u8,
    pub iso_week: u8,
    pub unix: i64,
    pub utc_hour: u8,
    pub utc_minute: u8,
}

impl From<OffsetDateTime> for BrokenDownTime {
    fn from(at: OffsetDateTime) -> Self {
        let utc = at.to_offset(UtcOffset::UTC);
        Self {
            year: at.year(),
            month: u8::from(at.month()),
            day: at.day(),
            hour: at.hour(),
            minute: at.minute(),
            second: at.second(),
            day_of_year: at.ordinal(),
            iso_weekday: at.weekday().number_from_monday(),
            iso_week: at.iso_week(),
            unix: at.unix_timestamp(),
            utc_hour: utc.hour(),
            utc_minute: utc.minute(),
        }
    }
}

/// Builds the instant `unix` seconds after the epoch, seen at `offset`.
pub fn moment(unix: i64, offset: UtcOffset) -> Result<OffsetDateTime> {
    let utc = OffsetDateTime::from_unix_timestamp(unix)?;
    // the shifted wall clock must stay representable too
    OffsetDateTime::from_unix_timestamp(unix.saturating_add(i64::from(offset.whole_seconds())))?;
    Ok(utc.to_offset(offset))
}

enum Directive {
    Text(fn(&BrokenDownTime) -> String),
    Field {
        value: fn(&BrokenDownTime) -> i64,
        width: usize,
        pad: char,
    },
}

fn field(value: fn(&BrokenDownTime) -> i64, width: usize, pad: char) -> Directive {
    Directive::Field { value, width, pad }
}

fn directive(ch: char) -> Option<Directive> {
    use Directive::Text;

    Some(match ch {
        'a' => Text(|t| short(weekday_name(t)).to_string()),
        'A' => Text(|t| weekday_name(t).to_string()),
        'b' | 'h' => Text(|t| short(month_name(t)).to_string()),
        'B' => Text(|t| month_name(t).to_string()),
        'c' => Text(|t| {
            format!(
                "{} {} {} {:02}:{:02}:{:02} {}",
                short(weekday_name(t)),
                short(month_name(t)),
                t.day,
                t.hour,
                t.minute,
                t.second,
                t.year
            )
        }),
        'D' => Text(|t| format!("{:02}/{:02}/{:02}", t.month, t.day, t.year.rem_euclid(100))),
        'F' => Text(|t| format!("{:04}-{:02}-{:02}", t.year, t.month, t.day)),
        'M' => Text(|t| format!("{:02}", t.minute)),
        'm' => Text(|t| format!("{:02}", t.month)),
        'n' => Text(|_| "\n".to_string()),
        'p' => Text(|t| meridiem(t).to_string()),
        'P' => Text(|t| meridiem(t).to_ascii_lowercase()),
        'r' => Text(|t| {
            format!(
                "{:02}:{:02}:{:02} {}",
                hour12(t),
                t.minute,
                t.second,
                meridiem(t)
            )
        }),
        'R' => Text(|t| format!("{:02}:{:02}", t.hour, t.minute)),
        's' => Text(|t| t.unix.to_string()),
        't' => Text(|_| "\t".to_string()),
        'T' => Text(|t| format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second)),
        'w' => Text(|t| (t.iso_weekday % 7).to_string()),
        'y' => Text(|t| format!("{:02}", t.year.rem_euclid(100))),
        'Y' => Text(|t| format!("{:04}", t.year)),
        'z' => Text(utc_offset),
        'C' => field(|t| i64::from(t.year) / 100, 2, ' '),
        'd' => field(|t| i64::from(t.day), 2, '0'),
        'e' => field(|t| i64::from(t.day), 2, ' '),
        'H' => field(|t| i64::from(t.hour), 2, '0'),
        'k' => field(|t| i64::from(t.hour), 2, ' '),
        'I' => field(|t| i64::from(hour12(t)), 2, '0'),
        'l' => field(|t| i64::from(hour12(t)), 2, ' '),
        'j' => field(|t| i64::from(t.day_of_year), 3, '0'),
        'S' => field(|t| i64::from(t.second), 2, '0'),
        'u' => field(|t| i64::from(t.iso_weekday), 1, ' '),
        'V' | 'W' => field(|t| i64::from(t.iso_week), 2, '0'),
        _ => return None,
    })
}

/// Expands every directive of `format` for the given time.
pub fn format(format: &str, time: &BrokenDownTime) -> String {
    let mut output = String::with_capacity(format.len() * 2);
    for ch in format.chars() {
        match directive(ch) {
            Some(Directive::Text(expand)) => output.push_str(&expand(time)),
            Some(Directive::Field { value, width, pad }) => {
                pad_field(&mut output, value(time), width, pad)
            }
            None => output.push(ch),
        }
    }
    output
}

fn pad_field(output: &mut String, value: i64, width: usize, pad: char) {
    if value < 0 {
        output.push('-');
    }
    let digits = value.unsigned_abs().to_string();
    for _ in digits.len()..width {
        output.push(pad);
    }
    output.push_str(&digits);
}

fn utc_offset(time: &BrokenDownTime) -> String {
    let local = i64::from(time.hour) * 100 + i64::from(time.minute);
    let utc = i64::from(time.utc_hour) * 100 + i64::from(time.utc_minute);
    let mut offset = local - utc;
    while offset < -1200 {
        offset += 2400;
    }
    while offset > 1200 {
        offset -= 2400;
    }
    let sign = if offset < 0 { '-' } else { '+' };
    format!("{sign}{:04}", offset.abs())
}

fn weekday_name(time: &BrokenDownTime) -> &'static str {
    WEEKDAYS[usize::from(time.iso_weekday.clamp(1, 7) - 1)]
}

fn month_name(time: &BrokenDownTime) -> &'static str {
    MONTHS[usize::from(time.month.clamp(1, 12) - 1)]
}

fn short(name: &'static str) -> &'static str {
    &name[..3]
}

fn hour12(time: &BrokenDownTime) -> u8 {
    (time.hour + 11) % 12 + 1
}

fn meridiem(time: &BrokenDownTime) -> &'static str {
    if time.hour < 12 {
        "AM"
    } else {
        "PM"
    }
}
