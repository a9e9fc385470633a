use edgekit::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn text_round_trip_for_any_string(text in any::<String>()) {
        prop_assert_eq!(text_decode(&text_encode(&text)), text.clone());
        prop_assert_eq!(text_decode_strict(&text_encode(&text)).unwrap(), text);
    }

    #[test]
    fn merge_is_deduplicated_and_keeps_first_seen_order(
        first in proptest::collection::vec(0u8..16, 0..32),
        second in proptest::collection::vec(0u8..16, 0..32),
    ) {
        let merged = array_merge(&first, &second);

        let unique: HashSet<_> = merged.iter().collect();
        prop_assert_eq!(unique.len(), merged.len());

        let mut expected = Vec::new();
        for item in first.iter().chain(&second) {
            if !expected.contains(item) {
                expected.push(*item);
            }
        }
        prop_assert_eq!(merged, expected);
    }

    #[test]
    fn difference_keeps_only_items_missing_from_base(
        base in proptest::collection::vec(0u8..16, 0..32),
        other in proptest::collection::vec(0u8..16, 0..32),
    ) {
        let difference = array_difference(&base, &other);

        prop_assert!(difference.iter().all(|item| !base.contains(item)));
        let missing = other.iter().filter(|item| !base.contains(item)).count();
        prop_assert_eq!(difference.len(), missing);
    }

    #[test]
    fn iec_to_num_scales_integers_by_unit(magnitude in 0u32..100_000, index in 0usize..10) {
        let unit = IecUnit::ALL[index];
        let input = format!("{}{}", magnitude, unit.letter());
        prop_assert_eq!(iec_to_num(&input), f64::from(magnitude) * unit.factor());
    }

    #[test]
    fn client_ip_header_beats_remote_host(ip in "[0-9]{1,3}(\\.[0-9]{1,3}){3}") {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "true-client-ip",
            reqwest::header::HeaderValue::from_str(&ip).unwrap(),
        );
        prop_assert_eq!(get_client_ip(&headers, "192.0.2.1"), ip);
    }

    #[test]
    fn alphabetic_names_with_tld_are_valid(
        labels in proptest::collection::vec("[a-z][a-z0-9]{0,20}", 1..4),
        tld in "[a-z]{2,6}",
    ) {
        let name = format!("{}.{}", labels.join("."), tld);
        let options = FqdnOptions::new().require_tld(true);
        prop_assert!(is_fqdn(&name, &options));
    }
}
