use anyhow::Result;
use chirp_core::{Array, CallOutcome, CallSite, Engine, StaticHost, Value};
use time::macros::{datetime, offset};

/// 2024-01-05 03:04:05 UTC, a Friday.
fn clocked_host() -> StaticHost {
    StaticHost::new()
        .with_clock(datetime!(2024-01-05 3:04:05 UTC))
        .with_offset(offset!(UTC))
}

fn call(host: &StaticHost, name: &str, args: Vec<Value>) -> Result<CallOutcome> {
    Ok(Engine::default().call(&CallSite::new(host), name, args)?)
}

fn value(host: &StaticHost, name: &str, args: &[&str]) -> Result<Value> {
    let outcome = call(host, name, args.iter().map(|arg| Value::from(*arg)).collect())?;
    assert_eq!(outcome.warning, None, "unexpected warning from ${name}");
    Ok(outcome.value)
}

#[test]
fn date_uses_the_host_clock() -> Result<()> {
    let host = clocked_host();
    assert_eq!(value(&host, "date", &["Y-m-d H:M:S"])?, Value::from("2024-01-05 03:04:05"));
    assert_eq!(value(&host, "date", &["a, d b"])?, Value::from("Fri, 05 Jan"));
    Ok(())
}

#[test]
fn date_formats_an_explicit_timestamp() -> Result<()> {
    let host = clocked_host();
    assert_eq!(value(&host, "date", &["F T", "0"])?, Value::from("1970-01-01 00:00:00"));
    assert_eq!(value(&host, "date", &["s", "86400"])?, Value::from("86400"));
    Ok(())
}

#[test]
fn date_applies_the_host_offset() -> Result<()> {
    let host = StaticHost::new()
        .with_clock(datetime!(2024-01-05 23:30:00 UTC))
        .with_offset(offset!(+2));
    assert_eq!(value(&host, "date", &["F R z"])?, Value::from("2024-01-06 01:30 +0200"));

    let host = StaticHost::new().with_offset(offset!(-5));
    assert_eq!(value(&host, "date", &["H:M z", "0"])?, Value::from("19:00 -0500"));
    Ok(())
}

#[test]
fn date_copies_unknown_characters() -> Result<()> {
    let host = clocked_host();
    assert_eq!(value(&host, "date", &["[Y] / %!"])?, Value::from("[2024] / %!"));
    Ok(())
}

#[test]
fn unrepresentable_timestamp_warns_and_returns_nothing() -> Result<()> {
    let host = clocked_host();
    let outcome = call(
        &host,
        "date",
        vec![Value::from("Y"), Value::from(i64::MAX)],
    )?;
    assert_eq!(outcome.value, Value::Nothing);
    let warning = outcome.warning.unwrap_or_default();
    assert!(
        warning.starts_with("$date: could not construct date/time"),
        "unexpected warning {warning}"
    );
    Ok(())
}

#[test]
fn encodings() -> Result<()> {
    let host = StaticHost::new();
    assert_eq!(value(&host, "asciiToBase64", &["hello irc"])?, Value::from("aGVsbG8gaXJj"));
    assert_eq!(value(&host, "asciiToBase64", &[""])?, Value::from(""));
    assert_eq!(value(&host, "asciiToHex", &["Hi!"])?, Value::from("486921"));
    assert_eq!(value(&host, "base64ToAscii", &["aGVsbG8gaXJj"])?, Value::from("hello irc"));
    Ok(())
}

#[test]
fn undecodable_base64_warns_with_empty_result() -> Result<()> {
    let host = StaticHost::new();
    let outcome = call(&host, "base64ToAscii", vec![Value::from("%%%")])?;
    assert_eq!(outcome.value, Value::from(""));
    let warning = outcome.warning.unwrap_or_default();
    assert!(warning.starts_with("$base64ToAscii('%%%'): decoding failed"));
    Ok(())
}

#[test]
fn control_characters() -> Result<()> {
    let host = StaticHost::new();
    assert_eq!(value(&host, "b", &[])?, Value::from("\u{02}"));
    assert_eq!(value(&host, "cr", &[])?, Value::from("\r"));
    assert_eq!(value(&host, "char", &["65"])?, Value::from("A"));
    assert_eq!(value(&host, "char", &["0"])?, Value::from(""));
    assert_eq!(value(&host, "char", &["70000"])?, Value::from(""));
    assert_eq!(value(&host, "char", &["-1"])?, Value::from(""));
    Ok(())
}

#[test]
fn escape_and_fmtlink() -> Result<()> {
    let host = StaticHost::new();
    assert_eq!(
        value(&host, "escape", &["echo $nick; (x)"])?,
        Value::from("echo \\$nick\\; \\(x\\)")
    );
    assert_eq!(
        value(&host, "fmtlink", &["docs", "openurl http://x", "Read the docs"])?,
        Value::from("\r![!dbl]openurl http://x[!txt]Read the docs\rdocs\r")
    );
    assert_eq!(
        value(&host, "fmtlink", &["docs", ""])?,
        Value::from("\r![!dbl]\rdocs\r")
    );
    Ok(())
}

#[test]
fn boolean_coercions() -> Result<()> {
    let host = StaticHost::new();
    assert_eq!(value(&host, "boolean", &["12"])?, Value::from("1"));
    assert_eq!(value(&host, "boolean", &["0"])?, Value::from("0"));
    assert_eq!(value(&host, "boolean", &["word"])?, Value::from("0"));
    assert_eq!(value(&host, "false", &[])?, Value::from("0"));

    let pair: Array = vec![Value::from("a"), Value::from("b")].into_iter().collect();
    let outcome = call(&host, "boolean", vec![Value::Array(pair)])?;
    assert_eq!(outcome.value, Value::from(true));
    let outcome = call(&host, "boolean", vec![Value::Nothing])?;
    assert_eq!(outcome.value, Value::from(false));
    Ok(())
}
