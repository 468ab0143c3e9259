use chirp_intrinsics::{codec, text};

#[test]
fn base64_round_trips_text() -> anyhow::Result<()> {
    assert_eq!(codec::to_base64("hello irc"), "aGVsbG8gaXJj");
    assert_eq!(codec::from_base64("aGVsbG8gaXJj")?, "hello irc");
    assert_eq!(codec::to_base64(""), "");
    Ok(())
}

#[test]
fn base64_rejects_garbage() {
    assert!(codec::from_base64("not base64!").is_err());
}

#[test]
fn hex_encodes_utf8_bytes() {
    assert_eq!(codec::to_hex("héllo"), "68c3a96c6c6f");
    assert_eq!(codec::to_hex(""), "");
}

#[test]
fn escape_prefixes_metacharacters() {
    assert_eq!(text::escape("plain"), "plain");
    assert_eq!(text::escape("$nick said 50%;"), "\\$nick said 50\\%\\;");
    assert_eq!(text::escape("{a}\nb"), "\\{a\\}\\nb");
    assert_eq!(text::escape("c:\\dir"), "c:\\\\dir");
}

#[test]
fn char_from_code_limits_to_basic_plane() {
    assert_eq!(text::char_from_code(65), Some('A'));
    assert_eq!(text::char_from_code(0x20AC), Some('€'));
    assert_eq!(text::char_from_code(0), None);
    assert_eq!(text::char_from_code(0x1F600), None);
    assert_eq!(text::char_from_code(0xD800), None);
}

#[test]
fn link_markup_with_and_without_tooltip() {
    assert_eq!(
        text::link("click", "echo hi", ""),
        "\r![!dbl]echo hi\rclick\r"
    );
    assert_eq!(
        text::link("click", "echo hi", "says hi"),
        "\r![!dbl]echo hi[!txt]says hi\rclick\r"
    );
}

#[test]
fn feature_lookup_ignores_case() {
    let features = ["IRC", "SSL", "KVS"];
    assert!(text::contains_ignore_case(&features, "ssl"));
    assert!(!text::contains_ignore_case(&features, "Perl"));
}
