//! Contract tag validation.
//!
//! A contract transaction is served only when its tags carry the full set of
//! markers a Ricardian Fabric contract is published with. The scan is a pure
//! fold over the tag list into a fixed set of flags, then a final
//! conjunction; tag order never matters and repeated tags are idempotent.
//!
//! The worker this gateway replaces required every marker *except*
//! `Contract-Type: Acceptable` — its final check tested the content-type flag
//! twice instead, which looks like a copy-paste slip. Both predicates are
//! kept selectable: [`ValidationMode::Observed`] is bug-compatible with the
//! worker, [`ValidationMode::Strict`] requires the contract-type marker too.

use crate::arweave::Tag;

/// Which conjunction decides acceptability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Historical behavior: Contract-Type is scanned but not required.
    #[default]
    Observed,

    /// Corrected predicate: additionally requires `Contract-Type: Acceptable`.
    Strict,
}

/// One flag per marker, set the first time a satisfying tag is seen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct TagFlags {
    issuer: bool,
    network: bool,
    contract_type: bool,
    app_name: bool,
    version: bool,
    content_type: bool,
}

/// Scan a tag list into the flag set. Unknown tag names are ignored.
fn scan(tags: &[Tag]) -> TagFlags {
    tags.iter().fold(TagFlags::default(), |mut flags, tag| {
        match (tag.name.as_str(), tag.value.as_str()) {
            ("Issuer", _) => flags.issuer = true,
            ("Network", _) => flags.network = true,
            ("Contract-Type", "Acceptable") => flags.contract_type = true,
            ("App-Name", "Ricardian Fabric") => flags.app_name = true,
            ("App-Version", _) => flags.version = true,
            ("Content-Type", _) => flags.content_type = true,
            _ => {}
        }
        flags
    })
}

/// Decide whether a fetched record is acceptable for exposure.
///
/// `None` (no such transaction) is never acceptable.
pub fn is_acceptable(record: Option<&[Tag]>, mode: ValidationMode) -> bool {
    let Some(tags) = record else {
        return false;
    };

    let flags = scan(tags);
    let required = flags.app_name && flags.content_type && flags.issuer && flags.version && flags.network;

    match mode {
        ValidationMode::Observed => required,
        ValidationMode::Strict => required && flags.contract_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A tag list satisfying every marker including Contract-Type.
    fn full_tags() -> Vec<Tag> {
        vec![
            Tag::new("Issuer", "Jv6cTTM0rjjMb8JGnH6zrN3np5_cahsTCXmFYJwrpw4"),
            Tag::new("Network", "mainnet"),
            Tag::new("Contract-Type", "Acceptable"),
            Tag::new("App-Name", "Ricardian Fabric"),
            Tag::new("App-Version", "0.0.6"),
            Tag::new("Content-Type", "text/html"),
        ]
    }

    #[test]
    fn full_tag_set_is_acceptable_in_both_modes() {
        let tags = full_tags();
        assert!(is_acceptable(Some(&tags), ValidationMode::Observed));
        assert!(is_acceptable(Some(&tags), ValidationMode::Strict));
    }

    #[test]
    fn absent_record_is_rejected() {
        assert!(!is_acceptable(None, ValidationMode::Observed));
        assert!(!is_acceptable(None, ValidationMode::Strict));
    }

    #[test]
    fn empty_tag_list_is_rejected() {
        assert!(!is_acceptable(Some(&[]), ValidationMode::Observed));
        assert!(!is_acceptable(Some(&[]), ValidationMode::Strict));
    }

    #[test]
    fn each_required_marker_is_necessary() {
        let required = ["Issuer", "Network", "App-Name", "App-Version", "Content-Type"];
        for missing in required {
            let tags: Vec<Tag> = full_tags()
                .into_iter()
                .filter(|t| t.name != missing)
                .collect();
            assert!(
                !is_acceptable(Some(&tags), ValidationMode::Observed),
                "missing {missing} should reject"
            );
            assert!(
                !is_acceptable(Some(&tags), ValidationMode::Strict),
                "missing {missing} should reject"
            );
        }
    }

    #[test]
    fn contract_type_only_required_in_strict_mode() {
        let tags: Vec<Tag> = full_tags()
            .into_iter()
            .filter(|t| t.name != "Contract-Type")
            .collect();
        assert!(is_acceptable(Some(&tags), ValidationMode::Observed));
        assert!(!is_acceptable(Some(&tags), ValidationMode::Strict));
    }

    #[test]
    fn contract_type_value_must_be_acceptable_in_strict_mode() {
        let mut tags = full_tags();
        for tag in &mut tags {
            if tag.name == "Contract-Type" {
                tag.value = "Draft".to_string();
            }
        }
        assert!(!is_acceptable(Some(&tags), ValidationMode::Strict));
        assert!(is_acceptable(Some(&tags), ValidationMode::Observed));
    }

    #[test]
    fn app_name_value_must_match_exactly() {
        let mut tags = full_tags();
        for tag in &mut tags {
            if tag.name == "App-Name" {
                tag.value = "Some Other App".to_string();
            }
        }
        assert!(!is_acceptable(Some(&tags), ValidationMode::Observed));
    }

    #[test]
    fn tag_order_does_not_matter() {
        let tags = full_tags();
        // Walk a handful of rotations rather than all permutations
        for rotation in 0..tags.len() {
            let mut rotated = tags.clone();
            rotated.rotate_left(rotation);
            assert!(is_acceptable(Some(&rotated), ValidationMode::Strict));
        }

        let mut reversed = tags;
        reversed.reverse();
        assert!(is_acceptable(Some(&reversed), ValidationMode::Strict));
    }

    #[test]
    fn repeated_tags_are_idempotent() {
        let mut tags = full_tags();
        tags.extend(full_tags());
        assert!(is_acceptable(Some(&tags), ValidationMode::Strict));
    }

    #[test]
    fn unknown_tags_are_ignored() {
        let mut tags = full_tags();
        tags.push(Tag::new("Unix-Time", "1650000000"));
        tags.push(Tag::new("Signature", "xyz"));
        assert!(is_acceptable(Some(&tags), ValidationMode::Strict));

        let unknown_only = vec![Tag::new("Unix-Time", "1650000000")];
        assert!(!is_acceptable(Some(&unknown_only), ValidationMode::Observed));
    }
}
