//! Property-based tests for the MI string codec

use mi_codec::{escape, parse, transcode, translate, MiString};
use proptest::prelude::*;

/// Units biased toward the interesting ranges: bytes, surrogates, anything
fn unit() -> impl Strategy<Value = u16> {
    prop_oneof![
        4 => 0u16..0x100,
        2 => 0xD800u16..0xE000,
        1 => any::<u16>(),
    ]
}

fn text() -> impl Strategy<Value = MiString> {
    prop::collection::vec(unit(), 0..48).prop_map(MiString::from_units)
}

/// Text made of escape fragments, to hit partial and invalid escapes
fn literal() -> impl Strategy<Value = MiString> {
    let alphabet = prop::sample::select(vec![
        "\\", "x", "u", "U", "0", "1", "3", "4", "7", "8", "a", "f", "g", "n", "E", "'", "\"",
        "?", " ", "\u{e4}", "\u{ff}",
    ]);
    prop::collection::vec(alphabet, 0..32).prop_map(|parts| MiString::from(parts.concat()))
}

proptest! {
    #[test]
    fn prop_parse_inverts_quoted_escape(s in text()) {
        let escaped = escape(&s, true);
        prop_assert_eq!(parse(&escaped.as_str().into()), s);
    }

    #[test]
    fn prop_escape_round_trip_quoted(s in text()) {
        let once = escape(&s, true);
        let twice = escape(&parse(&once.as_str().into()), true);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_escape_round_trip_unquoted(units in prop::collection::vec(unit(), 0..48)) {
        // A literal backslash is ambiguous when quoting is off
        let s: MiString = units.into_iter().filter(|&u| u != b'\\' as u16).collect();
        let once = escape(&s, false);
        let twice = escape(&parse(&once.as_str().into()), false);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_reescape_decoded_literal(x in literal()) {
        let first = escape(&parse(&x), true);
        let second = escape(&parse(&first.as_str().into()), true);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_escape_has_no_controls(s in text(), quoting in any::<bool>()) {
        let escaped = escape(&s, quoting);
        prop_assert!(escaped.chars().all(|c| !c.is_control()));
    }

    #[test]
    fn prop_parse_never_grows(x in literal()) {
        prop_assert!(parse(&x).len() <= x.len());
    }

    #[test]
    fn prop_parse_plain_text_unchanged(s in "[^\\\\]{0,32}") {
        let input = MiString::from(s.as_str());
        prop_assert_eq!(parse(&input), input);
    }

    #[test]
    fn prop_transcode_valid_utf8(s in any::<String>()) {
        prop_assert_eq!(transcode(&MiString::from_bytes(s.as_bytes())), s);
    }

    #[test]
    fn prop_transcode_never_grows(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let raw = MiString::from_bytes(&bytes);
        prop_assert!(transcode(&raw).len() <= raw.len());
    }

    #[test]
    fn prop_transcode_ascii_identity(s in "[\\x00-\\x7f]{0,32}") {
        let raw = MiString::from(s.as_str());
        prop_assert_eq!(transcode(&raw), raw);
    }

    #[test]
    fn prop_translate_literal_matches_decode(x in literal()) {
        prop_assert_eq!(translate(&x, false), transcode(&parse(&x)));
    }
}
