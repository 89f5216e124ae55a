//! Property-based tests for tier reconciliation and hierarchy navigation.
//!
//! These tests generate names according to each tier's grammar and verify
//! that construction records the right tiers and that navigation keeps the
//! invariants the type promises.

use proptest::prelude::*;

use tiered_domain::{Domain, DomainError, FormatError, SubdomainError, Tier, MAX_NAME_LENGTH};

/// Strategies for generating grammar-conformant inputs.
mod strategies {
    use super::*;

    /// Letters for label starts under RFC 1035
    const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

    /// Digits for label starts under RFC 1123
    const DIGITS: &[u8] = b"0123456789";

    /// Valid label boundary characters
    const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    /// Valid label interior characters
    const LDH: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

    /// Precomposed Latin letters outside ASCII
    const ACCENTED: &[char] = &['é', 'ü', 'ö', 'ñ', 'ç', 'à', 'ø', 'ß'];

    fn label_from(first: &'static [u8]) -> impl Strategy<Value = String> {
        // 1-20 chars keeps four-label names well under 253
        (1..=20usize).prop_flat_map(move |len| {
            let first = prop::sample::select(first.to_vec());
            if len == 1 {
                first.prop_map(|c| (c as char).to_string()).boxed()
            } else {
                let middle_len = len - 2;
                let middle = prop::collection::vec(
                    prop::sample::select(LDH.to_vec()),
                    middle_len..=middle_len,
                );
                let last = prop::sample::select(ALPHANUMERIC.to_vec());
                (first, middle, last)
                    .prop_map(|(f, m, l)| {
                        let mut s = String::with_capacity(2 + m.len());
                        s.push(f as char);
                        s.extend(m.into_iter().map(char::from));
                        s.push(l as char);
                        s
                    })
                    .boxed()
            }
        })
    }

    /// A label valid under RFC 1035
    pub fn strict_label() -> impl Strategy<Value = String> {
        label_from(LETTERS)
    }

    /// A label valid under RFC 1123 but not RFC 1035
    pub fn digit_label() -> impl Strategy<Value = String> {
        label_from(DIGITS)
    }

    /// A label made only of digits
    pub fn numeric_label() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(DIGITS.to_vec()), 1..=10)
            .prop_map(|digits| digits.into_iter().map(char::from).collect())
    }

    /// A label mixing ASCII letters and accented letters
    pub fn unicode_label() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                prop::sample::select(b"abcdefghijklmnopqrstuvwxyz".to_vec()).prop_map(char::from),
                prop::sample::select(ACCENTED.to_vec()),
            ],
            1..=10,
        )
        .prop_map(|chars| chars.into_iter().collect())
    }

    /// A strict name of 1-4 labels
    pub fn strict_domain() -> impl Strategy<Value = String> {
        prop::collection::vec(strict_label(), 1..=4).prop_map(|labels| labels.join("."))
    }

    /// A permissive-only name: a digit-led label in front of a strict name
    pub fn permissive_domain() -> impl Strategy<Value = String> {
        (digit_label(), strict_domain()).prop_map(|(first, rest)| format!("{first}.{rest}"))
    }

    /// A name led by an all-digit label
    pub fn numeric_prefix_domain() -> impl Strategy<Value = String> {
        (numeric_label(), strict_domain()).prop_map(|(first, rest)| format!("{first}.{rest}"))
    }

    /// Any label-based name
    pub fn domain() -> impl Strategy<Value = String> {
        prop_oneof![strict_domain(), permissive_domain(), numeric_prefix_domain()]
    }

    /// A bracketed IPv4 or IPv6 literal
    pub fn address_literal() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<[u8; 4]>().prop_map(|[a, b, c, d]| format!("[{a}.{b}.{c}.{d}]")),
            any::<[u16; 8]>().prop_map(|groups| {
                let hex: Vec<String> = groups.iter().map(|g| format!("{g:x}")).collect();
                format!("[IPv6:{}]", hex.join(":"))
            }),
        ]
    }
}

mod construction_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn strict_names_record_strict_tier(s in strict_domain()) {
            let domain = Domain::parse(&s).unwrap();
            prop_assert!(domain.strict().is_some());
            prop_assert_eq!(domain.strict(), domain.labels());
            prop_assert_eq!(domain.tier(), Tier::Strict);
        }

        #[test]
        fn permissive_names_skip_strict_tier(s in permissive_domain()) {
            let domain = Domain::parse(&s).unwrap();
            prop_assert!(domain.strict().is_none());
            prop_assert_eq!(domain.tier(), Tier::Permissive);
        }

        #[test]
        fn numeric_top_label_rejected(prefix in domain(), tld in numeric_label()) {
            for input in [tld.clone(), format!("{prefix}.{tld}")] {
                let is_numeric_tld = matches!(
                    Domain::parse(&input),
                    Err(DomainError::InvalidFormat { reason: FormatError::NumericTld { .. }, .. })
                );
                prop_assert!(is_numeric_tld);
            }
        }

        #[test]
        fn literals_are_transport_only(s in address_literal()) {
            let domain = Domain::parse(&s).unwrap();
            prop_assert!(domain.is_address_literal());
            prop_assert!(domain.strict().is_none());
            prop_assert!(domain.tld().is_none());
            prop_assert!(domain.sld().is_none());
        }

        #[test]
        fn name_reparses_to_same_domain(s in prop_oneof![domain(), address_literal()]) {
            let domain = Domain::parse(&s).unwrap();
            let reparsed = Domain::parse(domain.name()).unwrap();
            prop_assert_eq!(reparsed.tier(), domain.tier());
            prop_assert_eq!(reparsed, domain);
        }

        #[test]
        fn label_names_keep_input_text(s in domain()) {
            let domain = Domain::parse(&s).unwrap();
            prop_assert_eq!(domain.name(), s.as_str());
            prop_assert!(domain.name().len() <= MAX_NAME_LENGTH);
        }

        #[test]
        fn equality_ignores_ascii_case(s in domain()) {
            let lower = Domain::parse(&s.to_ascii_lowercase()).unwrap();
            let upper = Domain::parse(&s.to_ascii_uppercase()).unwrap();
            prop_assert_eq!(lower, upper);
        }

        #[test]
        fn from_labels_matches_parse(s in domain()) {
            let labels: Vec<&str> = s.split('.').collect();
            prop_assert_eq!(Domain::from_labels(&labels).unwrap(), Domain::parse(&s).unwrap());
        }
    }
}

mod hierarchy_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn never_own_subdomain(s in prop_oneof![domain(), address_literal()]) {
            let domain = Domain::parse(&s).unwrap();
            prop_assert!(!domain.is_subdomain_of(&domain));
        }

        #[test]
        fn added_subdomain_lies_below(s in prop_oneof![domain(), strict_label()], label in strict_label()) {
            let domain = Domain::parse(&s).unwrap();
            let sub = domain.adding_subdomain([label.as_str()]).unwrap();
            prop_assert!(sub.is_subdomain_of(&domain));
            prop_assert_eq!(sub.label_count(), domain.label_count() + 1);
            prop_assert_eq!(sub.is_strict(), domain.is_strict());
        }

        #[test]
        fn numeric_subdomain_lies_below(s in prop_oneof![domain(), strict_label()], label in numeric_label()) {
            let domain = Domain::parse(&s).unwrap();
            let sub = domain.adding_subdomain([label.as_str()]).unwrap();
            prop_assert!(sub.is_subdomain_of(&domain));
            prop_assert_eq!(sub.tier(), Tier::Permissive);
        }

        #[test]
        fn digit_subdomain_is_never_strict(s in strict_domain(), label in digit_label()) {
            let domain = Domain::parse(&s).unwrap();
            let sub = domain.adding_subdomain([label.as_str()]).unwrap();
            prop_assert_eq!(sub.tier(), Tier::Permissive);
        }

        #[test]
        fn parent_drops_one_label(s in domain()) {
            let domain = Domain::parse(&s).unwrap();
            prop_assume!(domain.label_count() >= 2);
            let parent = domain.parent().unwrap().unwrap();
            prop_assert_eq!(parent.label_count() + 1, domain.label_count());
            prop_assert!(domain.is_subdomain_of(&parent));
        }

        #[test]
        fn parent_of_permissive_prefix_is_strict(s in permissive_domain()) {
            let domain = Domain::parse(&s).unwrap();
            let parent = domain.parent().unwrap().unwrap();
            prop_assert!(parent.is_strict());
        }

        #[test]
        fn root_has_two_labels(s in domain()) {
            let domain = Domain::parse(&s).unwrap();
            match domain.root().unwrap() {
                Some(root) => {
                    prop_assert_eq!(root.label_count(), 2);
                    prop_assert!(domain == root || domain.is_subdomain_of(&root));
                    prop_assert_eq!(root.tld(), domain.tld());
                }
                None => prop_assert_eq!(domain.label_count(), 1),
            }
        }

        #[test]
        fn literals_reject_hierarchy(s in address_literal(), other in domain()) {
            let literal = Domain::parse(&s).unwrap();
            let other = Domain::parse(&other).unwrap();
            let is_address_literal_error = matches!(
                literal.adding_subdomain(["www"]),
                Err(DomainError::CannotCreateSubdomain { reason: SubdomainError::AddressLiteral, .. })
            );
            prop_assert!(is_address_literal_error);
            prop_assert!(!literal.is_subdomain_of(&other));
            prop_assert!(!other.is_subdomain_of(&literal));
            prop_assert!(literal.parent().is_err());
            prop_assert!(literal.root().is_err());
        }
    }
}

mod idna_tests {
    use super::strategies::*;
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn ascii_names_are_fixed_points(s in domain()) {
            let domain = Domain::parse(&s).unwrap();
            let ascii = domain.to_ascii().unwrap();
            prop_assert_eq!(ascii.name(), domain.name());
        }

        #[test]
        fn unicode_labels_survive_transcoding(label in unicode_label(), rest in strict_domain()) {
            let domain = Domain::parse(&format!("{label}.{rest}")).unwrap();
            let ascii = domain.to_ascii().unwrap();
            prop_assert!(!ascii.is_internationalized());
            prop_assert_eq!(ascii.has_a_labels(), domain.is_internationalized());

            let unicode = ascii.to_unicode().unwrap();
            prop_assert_eq!(unicode.name(), domain.name());
        }
    }
}

mod scenarios {
    use super::*;

    #[test]
    fn strict_domain_accessors() {
        let domain = Domain::parse("example.com").unwrap();
        assert_eq!(domain.strict(), domain.labels());
        assert_eq!(domain.tld().unwrap().as_str(), "com");
        assert_eq!(domain.sld().unwrap().as_str(), "example");
    }

    #[test]
    fn leading_digit_domain() {
        let domain = Domain::parse("123.example.com").unwrap();
        assert!(domain.strict().is_none());
        assert_eq!(domain.labels().unwrap().to_string(), "123.example.com");
    }

    #[test]
    fn address_literal_domain() {
        let domain = Domain::parse("[192.168.1.1]").unwrap();
        assert!(domain.strict().is_none());
        assert!(domain.tld().is_none());
        assert!(domain.sld().is_none());
        assert!(domain.adding_subdomain(["www"]).is_err());
    }

    #[test]
    fn adding_www() {
        let domain = Domain::parse("example.com").unwrap();
        assert_eq!(domain.adding_subdomain(["www"]).unwrap().name(), "www.example.com");
    }

    #[test]
    fn parent_chain_ends_at_tld() {
        let domain = Domain::parse("mail.example.com").unwrap();
        let parent = domain.parent().unwrap().unwrap();
        assert_eq!(parent.name(), "example.com");
        let tld = parent.parent().unwrap().unwrap();
        assert_eq!(tld.name(), "com");
        assert!(tld.parent().unwrap().is_none());
    }

    #[test]
    fn cafe_transcoding() {
        let domain = Domain::parse("café.com").unwrap();
        let ascii = domain.to_ascii().unwrap();
        assert_eq!(ascii.name(), "xn--caf-dma.com");
        assert_eq!(ascii.to_unicode().unwrap().name(), "café.com");
    }
}
