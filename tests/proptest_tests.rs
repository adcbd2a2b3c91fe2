// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests check the parser and the resolver against arbitrary keys, values
//! and source orderings.

use dyncfg::prelude::*;
use indexmap::IndexMap;
use proptest::prelude::*;

fn escape_key(key: &str) -> String {
    let mut out = String::new();
    for c in key.chars() {
        match c {
            '=' | ':' | ' ' | '#' | '!' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

// Simple `key=value` lines parse back to the same pairs
proptest! {
    #[test]
    fn test_parser_reads_plain_entries(
        entries in prop::collection::vec(("[a-zA-Z][a-zA-Z0-9._]{0,15}", "[a-zA-Z0-9./_-]{0,20}"), 0..20)
    ) {
        let text: String = entries
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();
        let parsed = PropertiesParser::new().parse(&text).unwrap();

        let mut expected = IndexMap::new();
        for (k, v) in &entries {
            expected.insert(k.clone(), v.clone());
        }
        prop_assert_eq!(parsed, expected);
    }
}

// Escaped separators and comment markers stay part of the key
proptest! {
    #[test]
    fn test_parser_escaped_keys(key in "[a-z=: #!]{1,12}", value in "[a-z]{0,8}") {
        let text = format!("{}={}", escape_key(&key), value);
        let parsed = PropertiesParser::new().parse(&text).unwrap();
        prop_assert_eq!(parsed.get(&key), Some(&value));
    }
}

// The parser never panics, whatever the input
proptest! {
    #[test]
    fn test_parser_total(text in "\\PC*") {
        let _ = PropertiesParser::new().parse(&text);
    }
}

// Within one tier the batch added last wins
proptest! {
    #[test]
    fn test_last_batch_wins(
        batches in prop::collection::vec(prop::collection::vec(("[a-c]", "[0-9]{1,3}"), 1..4), 1..6)
    ) {
        let mut builder = LayeredConfiguration::builder();
        let mut expected = IndexMap::new();
        for batch in &batches {
            let mut flat = Vec::new();
            for (k, v) in batch {
                flat.push(k.clone());
                flat.push(v.clone());
                expected.insert(k.clone(), v.clone());
            }
            builder = builder.values(flat);
        }
        let config = builder.build().unwrap();

        for (k, v) in &expected {
            let got = config.evaluate_to_string(k);
            prop_assert_eq!(got.as_ref(), Some(v));
        }
        prop_assert_eq!(config.as_map(), expected);
    }
}

// Point lookups agree with the flattened view for both precedence modes
proptest! {
    #[test]
    fn test_evaluate_agrees_with_as_map(
        env in prop::collection::vec(("[a-d]", "env[0-9]"), 0..5),
        props in prop::collection::vec(("[a-d]", "prop[0-9]"), 0..5),
        values in prop::collection::vec(("[a-d]", "lit[0-9]"), 0..5),
        order in prop::collection::vec(0usize..3, 1..6),
        call_order in any::<bool>(),
    ) {
        let precedence = if call_order { Precedence::CallOrder } else { Precedence::Tiered };
        let flat: Vec<String> = values
            .iter()
            .flat_map(|(k, v)| [k.clone(), v.clone()])
            .collect();

        let mut builder = LayeredConfiguration::builder()
            .precedence(precedence)
            .environment_access(std::sync::Arc::new(MapEnvironment::from_pairs(env)))
            .property_access(std::sync::Arc::new(MapProperties::from_pairs(props)));
        for kind in order {
            builder = match kind {
                0 => builder.environment(""),
                1 => builder.system_properties(),
                _ => builder.values(flat.clone()),
            };
        }
        let config = builder.build().unwrap();

        let map = config.as_map();
        for key in ["a", "b", "c", "d"] {
            let got = config.evaluate_to_string(key);
            prop_assert_eq!(got.as_ref(), map.get(key));
        }
    }
}

// Under tiered precedence a hardcoded value beats every other source
proptest! {
    #[test]
    fn test_hardcoded_always_wins_when_tiered(value in "[a-z]{1,8}", hardcoded_first in any::<bool>()) {
        let env = MapEnvironment::new().with_var("key", "env");
        let mut builder = LayeredConfiguration::builder()
            .environment_access(std::sync::Arc::new(env))
            .property_access(std::sync::Arc::new(MapProperties::from_pairs([("key", "prop")])));

        if hardcoded_first {
            builder = builder.values(["key", value.as_str()]).environment("").system_properties();
        } else {
            builder = builder.environment("").system_properties().values(["key", value.as_str()]);
        }
        let config = builder.build().unwrap();
        prop_assert_eq!(config.evaluate_to_string("key"), Some(value));
    }
}
