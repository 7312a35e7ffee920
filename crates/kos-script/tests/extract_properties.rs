//! Property tests for the extractor's structural guarantees.

use proptest::prelude::*;

use kos_script::extract;

fn identifier_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,10}"
        .prop_filter("keywords are filtered by design", |s| !kos_script::is_keyword(s))
}

proptest! {
    #[test]
    fn extraction_is_idempotent(script in "[ -~\n]{0,200}") {
        let first: Vec<_> = extract(&script)
            .iter()
            .map(|id| (id.normalized.clone(), id.line, id.is_user_defined))
            .collect();
        let second: Vec<_> = extract(&script)
            .iter()
            .map(|id| (id.normalized.clone(), id.line, id.is_user_defined))
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn chains_decompose_fully(
        a in identifier_strategy(),
        b in identifier_strategy(),
        c in identifier_strategy(),
    ) {
        let chain = format!("{a}:{b}:{c}");
        let set = extract(&format!("PRINT {chain}."));
        prop_assert!(set.contains(&chain));
        prop_assert!(set.contains(&a));
        prop_assert!(set.contains(&b));
        prop_assert!(set.contains(&c));
        // No intermediate prefix is emitted.
        let prefix = format!("{a}:{b}");
        prop_assert!(!set.contains(&prefix));
    }

    #[test]
    fn line_comments_are_opaque(name in identifier_strategy()) {
        let set = extract(&format!("// {name}:SUFFIX\nPRINT 1."));
        prop_assert!(set.is_empty());
    }

    #[test]
    fn block_comments_are_opaque(name in identifier_strategy()) {
        let set = extract(&format!("/* {name} */ PRINT 1."));
        prop_assert!(set.is_empty());
    }

    #[test]
    fn string_literals_are_opaque(name in identifier_strategy()) {
        let set = extract(&format!("PRINT \"{name}\"."));
        prop_assert!(set.is_empty());
    }

    #[test]
    fn dedup_produces_unique_normalized_forms(script in "[ -~\n]{0,200}") {
        let set = extract(&script);
        let mut seen = std::collections::HashSet::new();
        for id in set.iter() {
            prop_assert!(seen.insert(id.normalized.clone()));
        }
    }
}
