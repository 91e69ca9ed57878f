//! Property-based tests for plist rendering, label derivation and interval
//! parsing.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use macron_cli::domain::{label_for, parse_interval, render_plist};

// ============================================================================
// render_plist() property tests
// ============================================================================

proptest! {
    /// Every field appears exactly once with the substituted values.
    #[test]
    fn prop_plist_fields_appear_once(
        name in "[a-zA-Z0-9_-]{1,24}",
        script in "/[a-zA-Z0-9 _./-]{1,60}",
        seconds in 0u64..=10_000_000,
    ) {
        let label = label_for(&name);
        let xml = render_plist(&label, &script, seconds);

        prop_assert_eq!(xml.matches("<key>Label</key>").count(), 1);
        prop_assert_eq!(xml.matches("<key>ProgramArguments</key>").count(), 1);
        prop_assert_eq!(xml.matches("<array>").count(), 1);
        prop_assert_eq!(xml.matches("<key>StartInterval</key>").count(), 1);
        prop_assert_eq!(xml.matches("<integer>").count(), 1);

        let interval = format!("<integer>{seconds}</integer>");
        let program = format!("<array>\n\t\t<string>{script}</string>\n\t</array>");
        let stdout = format!("<string>/tmp/{label}.stdout</string>");
        let stderr = format!("<string>/tmp/{label}.stderr</string>");
        prop_assert!(xml.contains(&interval));
        prop_assert!(xml.contains(&program));
        prop_assert!(xml.contains(&stdout));
        prop_assert!(xml.contains(&stderr));
    }

    /// Output is framed by the XML declaration and the closing plist tag.
    #[test]
    fn prop_plist_is_framed(
        label in "com\\.macron\\.[a-z0-9-]{1,16}",
        seconds in any::<u64>(),
    ) {
        let xml = render_plist(&label, "/bin/true", seconds);
        prop_assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        prop_assert!(xml.trim_end().ends_with("</plist>"));
    }

    /// Labels are the fixed prefix plus the unchanged name.
    #[test]
    fn prop_label_is_prefix_plus_name(name in "[a-zA-Z0-9_.-]{1,32}") {
        let label = label_for(&name);
        prop_assert_eq!(label.strip_prefix("com.macron."), Some(name.as_str()));
    }
}

// ============================================================================
// parse_interval() property tests
// ============================================================================

proptest! {
    /// `<h>h<m>m<s>s` always parses to the matching number of seconds.
    #[test]
    fn prop_compound_interval_seconds(h in 0u64..1000, m in 0u64..1000, s in 0u64..1000) {
        let text = format!("{h}h{m}m{s}s");
        let parsed = parse_interval(&text).expect("valid interval");
        prop_assert_eq!(parsed.as_secs(), h * 3600 + m * 60 + s);
    }

    /// Letters without any digits never parse.
    #[test]
    fn prop_alpha_only_rejected(text in "[a-zA-Z]{1,10}") {
        prop_assert!(parse_interval(&text).is_err(), "accepted {text}");
    }

    /// Numbers without a unit never parse (except the literal `0`).
    #[test]
    fn prop_unitless_number_rejected(n in 1u64..1_000_000) {
        let text = n.to_string();
        prop_assert!(parse_interval(&text).is_err(), "accepted {text}");
    }
}

#[test]
fn test_documented_interval_examples() {
    assert_eq!(parse_interval("1h").expect("1h").as_secs(), 3600);
    assert_eq!(parse_interval("90m").expect("90m").as_secs(), 5400);
    assert!(parse_interval("abc").is_err());
}
