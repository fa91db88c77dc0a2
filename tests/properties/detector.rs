//! Property tests for the change detector.

use proptest::prelude::*;

use tailwatch::{detect_change, ChangeEvent};

fn content() -> impl Strategy<Value = String> {
    // Log-like lines plus arbitrary unicode to exercise char boundaries.
    prop_oneof![
        proptest::string::string_regex("[a-zA-Z0-9 :.\\n-]{0,64}").unwrap(),
        any::<String>().prop_map(|s| s.chars().take(32).collect::<String>()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: appending a non-empty suffix is always classified as
    /// `Appended` carrying exactly that suffix.
    #[test]
    fn property_append_yields_exact_delta(
        previous in content(),
        suffix in content().prop_filter("non-empty", |s| !s.is_empty()),
    ) {
        let next = format!("{previous}{suffix}");
        prop_assert_eq!(
            detect_change(&previous, &next),
            ChangeEvent::Appended(suffix)
        );
    }

    /// PROPERTY: identical content is always `Unchanged`.
    #[test]
    fn property_identical_content_is_unchanged(content in content()) {
        prop_assert_eq!(detect_change(&content, &content), ChangeEvent::Unchanged);
    }

    /// PROPERTY: strictly shorter new content is always `Truncated`,
    /// regardless of content similarity.
    #[test]
    fn property_shorter_content_is_truncated(
        (previous, next) in (content(), content())
            .prop_filter("next shorter", |(p, n)| n.len() < p.len()),
    ) {
        prop_assert_eq!(detect_change(&previous, &next), ChangeEvent::Truncated);
    }

    /// PROPERTY: new content at least as long that does not extend the
    /// previous content is always `Modified`.
    #[test]
    fn property_non_prefix_growth_is_modified(
        (previous, next) in (content(), content()).prop_filter(
            "at least as long, not a prefix extension",
            |(p, n)| n.len() >= p.len() && !n.starts_with(p.as_str()),
        ),
    ) {
        prop_assert_eq!(detect_change(&previous, &next), ChangeEvent::Modified);
    }

    /// PROPERTY: an `Appended` delta always reconstructs the new content
    /// when glued onto the previous content.
    #[test]
    fn property_appended_delta_reconstructs_next(
        previous in content(),
        next in content(),
    ) {
        if let ChangeEvent::Appended(delta) = detect_change(&previous, &next) {
            prop_assert_eq!(format!("{previous}{delta}"), next);
        }
    }

    /// PROPERTY: the detector never panics on arbitrary input pairs.
    #[test]
    fn property_detector_never_panics(
        previous in any::<String>(),
        next in any::<String>(),
    ) {
        let _ = detect_change(&previous, &next);
    }
}
