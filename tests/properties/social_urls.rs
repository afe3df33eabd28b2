//! Property tests for social profile URLs.

use proptest::prelude::*;

use linkskit::SocialPlatform;

fn handle() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_.-]{0,29}").unwrap()
}

fn platform() -> impl Strategy<Value = SocialPlatform> {
    let fixed = proptest::sample::select(SocialPlatform::ALL_FIXED.to_vec());
    prop_oneof![
        4 => fixed,
        1 => proptest::sample::select(vec!["mastodon.social", "iosdev.space", "hachyderm.io"])
            .prop_map(|instance| SocialPlatform::mastodon(instance).unwrap()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A platform URL is a pure function of platform and handle.
    #[test]
    fn property_profile_url_is_deterministic(platform in platform(), handle in handle()) {
        prop_assert_eq!(platform.url(&handle), platform.url(&handle));
    }

    /// PROPERTY: URL-safe handles appear verbatim as the last path segment.
    #[test]
    fn property_safe_handle_is_last_segment(platform in platform(), handle in handle()) {
        let url = platform.url(&handle);
        prop_assert_eq!(url.scheme(), "https");

        let last = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(str::to_string);
        let prefixed = format!("@{handle}");
        prop_assert!(
            last.as_deref() == Some(handle.as_str()) || last.as_deref() == Some(prefixed.as_str()),
            "{} does not end in {}",
            url,
            handle
        );
        prop_assert!(url.as_str().ends_with(&handle));
    }

    /// PROPERTY: Arbitrary handles never leak into query or fragment.
    #[test]
    fn property_any_handle_stays_in_the_path(platform in platform(), handle in "\\PC{0,24}") {
        let url = platform.url(&handle);
        prop_assert_eq!(url.query(), None);
        prop_assert_eq!(url.fragment(), None);
        let reference = platform.url("x");
        prop_assert_eq!(url.host_str(), reference.host_str());
    }
}
