#![no_main]

use libfuzzer_sys::fuzz_target;
use typekey::typekey_core::{IdentName, SearchCase, SearchDir, split_with};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Identifier invariants: case folding keeps equality and hash, the C view is terminated
    let name = IdentName::from(s);
    let upper = IdentName::from(s.to_ascii_uppercase());
    assert_eq!(name, upper);
    assert_eq!(name.key_hash(), upper.key_hash());
    assert_eq!(name.len_with_nul(), name.len() + 1);
    assert!(!name.as_str().contains('\0'));

    // Split on the first byte-sized char as delimiter, in every mode
    let delimiter = s.get(..1).unwrap_or(",");
    for case in [SearchCase::CaseSensitive, SearchCase::IgnoreCase] {
        for dir in [SearchDir::FromStart, SearchDir::FromEnd] {
            if let Some((left, right)) = split_with(s, delimiter, case, dir) {
                assert!(left.len() + right.len() <= s.len());
            } else {
                assert!(s.is_empty());
            }
        }
    }
});
