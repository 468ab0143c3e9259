use chirp_intrinsics::date::{self, BrokenDownTime};
use time::macros::{datetime, offset};
use time::UtcOffset;

fn sample() -> BrokenDownTime {
    BrokenDownTime::from(datetime!(2024-01-05 3:04:05 UTC))
}

#[test]
fn formats_iso_like_layout() {
    assert_eq!(date::format("Y-m-d H:M:S", &sample()), "2024-01-05 03:04:05");
}

#[test]
fn unknown_characters_pass_through() {
    assert_eq!(date::format("[x] %Q", &sample()), "[x] %Q");
    assert_eq!(date::format("", &sample()), "");
}

#[test]
fn space_and_zero_padded_fields() {
    let time = sample();
    assert_eq!(date::format("d|e", &time), "05| 5");
    assert_eq!(date::format("H|k", &time), "03| 3");
    assert_eq!(date::format("I|l", &time), "03| 3");
    assert_eq!(date::format("j", &time), "005");
    assert_eq!(date::format("C", &time), "20");
}

#[test]
fn twelve_hour_clock_maps_midnight_to_twelve() {
    let midnight = BrokenDownTime::from(datetime!(2024-01-05 0:15:00 UTC));
    assert_eq!(date::format("I l p P", &midnight), "12 12 AM am");

    let evening = BrokenDownTime::from(datetime!(2024-01-05 21:15:00 UTC));
    assert_eq!(date::format("I l p P", &evening), "09  9 PM pm");
    assert_eq!(date::format("r", &evening), "09:15:00 PM");
}

#[test]
fn weekday_numbering() {
    // 2024-01-05 is a Friday, 2024-01-07 a Sunday
    assert_eq!(date::format("u w", &sample()), "5 5");
    let sunday = BrokenDownTime::from(datetime!(2024-01-07 12:00:00 UTC));
    assert_eq!(date::format("u w", &sunday), "7 0");
}

#[test]
fn names_and_composites() {
    let time = sample();
    assert_eq!(date::format("a A b h B", &time), "Fri Friday Jan Jan January");
    assert_eq!(date::format("c", &time), "Fri Jan 5 03:04:05 2024");
    assert_eq!(date::format("D", &time), "01/05/24");
    assert_eq!(date::format("F", &time), "2024-01-05");
    assert_eq!(date::format("R T", &time), "03:04 03:04:05");
    assert_eq!(date::format("y Y", &time), "24 2024");
    assert_eq!(date::format("s", &time), "1704423845");
    assert_eq!(date::format("n t", &time), "\n \t");
}

#[test]
fn iso_week_and_day_of_year_at_year_end() {
    let time = BrokenDownTime::from(datetime!(2024-12-31 23:59:59 UTC));
    assert_eq!(date::format("j V W", &time), "366 01 01");
}

#[test]
fn seconds_field_keeps_a_leap_second() {
    let time = BrokenDownTime {
        second: 60,
        ..sample()
    };
    assert_eq!(date::format("S", &time), "60");
    assert_eq!(date::format("T", &time), "03:04:60");
}

#[test]
fn numeric_offset_ahead_and_behind_utc() {
    let ahead = BrokenDownTime::from(datetime!(2024-01-05 3:04:05 UTC).to_offset(offset!(+2:30)));
    assert_eq!(date::format("z", &ahead), "+0230");
    assert_eq!(date::format("H:M", &ahead), "05:34");

    let behind = BrokenDownTime::from(datetime!(2024-01-05 3:04:05 UTC).to_offset(offset!(-2)));
    assert_eq!(date::format("z", &behind), "-0200");

    let across_midnight =
        BrokenDownTime::from(datetime!(2024-01-05 23:30:00 UTC).to_offset(offset!(+3)));
    assert_eq!(date::format("z", &across_midnight), "+0300");

    assert_eq!(date::format("z", &sample()), "+0000");
}

#[test]
fn moment_applies_offset() -> anyhow::Result<()> {
    let at = date::moment(1_704_423_845, offset!(+1))?;
    assert_eq!(date::format("Y-m-d H:M:S", &BrokenDownTime::from(at)), "2024-01-05 04:04:05");
    Ok(())
}

#[test]
fn moment_rejects_unrepresentable_timestamps() {
    assert!(date::moment(i64::MAX, UtcOffset::UTC).is_err());
    assert!(date::moment(i64::MIN, UtcOffset::UTC).is_err());
}
