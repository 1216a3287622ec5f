//! Property-based tests for typekey
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use typekey::typekey_core::{IdentName, ParamCategory, SearchCase, SearchDir, ValueTag, split, split_with};
use typekey::typekey_core::category::PARAM_CATEGORIES;

// =============================================================================
// Identifier String Properties
// =============================================================================

#[cfg(test)]
mod ident_tests {
    use super::*;

    proptest! {
        /// Property: ASCII case folding never changes equality or hash
        #[test]
        fn case_folding_preserves_identity(name in "[A-Za-z0-9_<>,]{0,48}") {
            let original = IdentName::from(name.as_str());
            let upper = IdentName::from(name.to_ascii_uppercase());
            let lower = IdentName::from(name.to_ascii_lowercase());
            prop_assert_eq!(&original, &upper);
            prop_assert_eq!(&original, &lower);
            prop_assert_eq!(original.key_hash(), upper.key_hash());
            prop_assert_eq!(original.key_hash_with_seed(7), lower.key_hash_with_seed(7));
        }

        /// Property: names of different length are never equal
        #[test]
        fn length_mismatch_is_inequality(name in "[a-z]{1,24}", extra in "[a-z]{1,4}") {
            let short = IdentName::from(name.as_str());
            let long = IdentName::from(format!("{name}{extra}"));
            prop_assert_ne!(short, long);
        }

        /// Property: appending pieces equals constructing from their concatenation
        #[test]
        fn append_concatenates(pieces in prop::collection::vec("[A-Za-z]{0,8}", 0..6)) {
            let mut built = IdentName::new();
            for piece in &pieces {
                built.append(piece.as_str());
            }
            prop_assert_eq!(built.as_str(), pieces.concat());
            prop_assert_eq!(built.len_with_nul(), built.len() + 1);
        }

        /// Property: a piece is cut at its first NUL
        #[test]
        fn append_stops_at_nul(head in "[a-z]{0,8}", tail in "[a-z]{0,8}") {
            let mut built = IdentName::from("x");
            built.append(format!("{head}\0{tail}").as_str());
            prop_assert_eq!(built.as_str(), format!("x{head}"));
        }
    }
}

// =============================================================================
// Split Properties
// =============================================================================

#[cfg(test)]
mod split_tests {
    use super::*;

    proptest! {
        /// Property: when the delimiter occurs, left + delimiter + right rebuilds the subject
        #[test]
        fn split_reassembles(left in "[a-z]{0,10}", right in "[a-z.]{0,10}") {
            let subject = format!("{left}.{right}");
            let (l, r) = split(&subject, ".").expect("non-empty subject");
            prop_assert_eq!(format!("{l}.{r}"), subject.as_str());
            prop_assert_eq!(l, left.as_str());
        }

        /// Property: searching from the end leaves no delimiter in the right half
        #[test]
        fn split_from_end_takes_last(parts in prop::collection::vec("[a-z]{1,5}", 2..6)) {
            let subject = parts.join("::");
            let (l, r) = split_with(&subject, "::", SearchCase::CaseSensitive, SearchDir::FromEnd)
                .expect("non-empty subject");
            prop_assert!(!r.contains("::"));
            prop_assert_eq!(r, parts[parts.len() - 1].as_str());
            prop_assert_eq!(format!("{l}::{r}"), subject.as_str());
        }

        /// Property: no match keeps the whole subject on the left
        #[test]
        fn split_without_match(subject in "[a-z]{1,16}") {
            prop_assert_eq!(split(&subject, "#"), Some((subject.as_str(), "")));
        }
    }
}

// =============================================================================
// Compatibility Properties
// =============================================================================

#[cfg(test)]
mod compat_tests {
    use super::*;

    proptest! {
        /// Property: the permissive category accepts exactly the present tags
        #[test]
        fn permissive_rejects_only_absent(raw in any::<i32>()) {
            let tag = ValueTag::from_raw(raw);
            prop_assert_eq!(ParamCategory::Permissive.accepts(tag), raw != -1 && raw != 0);
        }

        /// Property: no tag is accepted by both numeric and text categories
        #[test]
        fn strict_categories_are_disjoint(raw in -2i32..16) {
            let tag = ValueTag::from_raw(raw);
            let strict = [ParamCategory::Numeric, ParamCategory::Boolean, ParamCategory::Text, ParamCategory::ObjectHandle];
            let accepted = strict.iter().filter(|c| c.accepts(tag)).count();
            prop_assert!(accepted <= 1);
        }

        /// Property: no category accepts an absent value
        #[test]
        fn absent_values_never_bind(idx in 0usize..PARAM_CATEGORIES.len(), absent in prop::sample::select(vec![ValueTag::NIL, ValueTag::NONE])) {
            prop_assert!(!PARAM_CATEGORIES[idx].id.accepts(absent));
        }
    }
}
