//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use std::net::Ipv4Addr;

use crate::{AddressLiteral, Domain, Label};

/// Letters allowed anywhere in a label
const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Characters allowed inside a label
const INNER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

fn pick(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

/// Generate a label of 1-4 chars starting and ending with a letter
fn arbitrary_label_str() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len)
        .map(|i| {
            if i == 0 || i == len - 1 {
                pick(LETTERS)
            } else {
                pick(INNER_CHARS)
            }
        })
        .collect()
}

impl kani::Arbitrary for Label {
    fn any() -> Self {
        Label::parse(&arbitrary_label_str()).expect("valid label by construction")
    }
}

impl kani::Arbitrary for Domain {
    fn any() -> Self {
        let is_literal: bool = kani::any();
        if is_literal {
            let octets: [u8; 4] = kani::any();
            return AddressLiteral::V4(Ipv4Addr::from(octets)).into();
        }

        // 1-3 labels for tractability
        let count: usize = kani::any();
        let count = 1 + (count % 3);
        let labels: Vec<String> = (0..count).map(|_| arbitrary_label_str()).collect();
        Domain::from_labels(&labels).expect("valid domain by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Parsing the canonical name reproduces the domain
#[kani::proof]
#[kani::unwind(8)]
fn proof_name_roundtrip() {
    let domain: Domain = kani::any();
    let reparsed = Domain::parse(domain.name()).expect("canonical name should parse");
    assert_eq!(reparsed, domain);
}

/// Proof: No domain is its own subdomain
#[kani::proof]
#[kani::unwind(8)]
fn proof_subdomain_irreflexive() {
    let domain: Domain = kani::any();
    assert!(!domain.is_subdomain_of(&domain));
}

/// Proof: A parent has one fewer label and lies above its child
#[kani::proof]
#[kani::unwind(8)]
fn proof_parent_shortens_by_one() {
    let domain: Domain = kani::any();
    kani::assume(domain.label_count() >= 2);

    let parent = domain.parent().expect("valid parent").expect("has parent");
    assert_eq!(parent.label_count() + 1, domain.label_count());
    assert!(domain.is_subdomain_of(&parent));
}

/// Proof: Address literals are never strict and never have subdomains
#[kani::proof]
#[kani::unwind(8)]
fn proof_literal_has_no_hierarchy() {
    let domain: Domain = kani::any();
    kani::assume(domain.is_address_literal());

    assert!(domain.strict().is_none());
    assert!(domain.adding_subdomain(["www"]).is_err());
    assert!(domain.parent().is_err());
}
