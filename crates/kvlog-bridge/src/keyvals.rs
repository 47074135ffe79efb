// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Helpers for interleaved key-value sequences.

use std::fmt;

use crate::value::Value;

/// Builds a `Vec<Value>` from a flat, comma separated list of keys and values.
///
/// ```
/// use kvlog_bridge::{keyvals, value::Value};
///
/// let kv = keyvals!["message", "hello", "foo", 22];
/// assert_eq!(kv.len(), 4);
/// assert_eq!(kv[3], Value::Int(22));
/// ```
#[macro_export]
macro_rules! keyvals {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::value::Value::from($item)),+]
    };
}

/// Finds the first pair whose key is `key`, removes it and returns its value.
///
/// Only key positions (even indices) are inspected, so a value that happens to equal `key`
/// is never mistaken for one. The relative order of all other elements is preserved,
/// whether the pair sits at the head, the tail or anywhere in between.
pub fn take_pair(keyvals: &mut Vec<Value>, key: &str) -> Option<Value> {
    let i = keyvals
        .iter()
        .step_by(2)
        .position(|k| k.is_key(key))?
        * 2;
    if i + 1 >= keyvals.len() {
        // dangling key without a value
        return None;
    }
    let mut pair = keyvals.drain(i..i + 2);
    pair.next();
    pair.next()
}

/// Returns the value of the first pair keyed by `key`, without removing it.
pub fn find_value<'a>(keyvals: &'a [Value], key: &str) -> Option<&'a Value> {
    keyvals
        .chunks_exact(2)
        .find(|pair| pair[0].is_key(key))
        .map(|pair| &pair[1])
}

/// Renders a key-value sequence as `key=value` pairs separated by spaces.
///
/// String values are quoted so that embedded whitespace stays readable. A trailing key
/// without a value is rendered as `key=`.
pub struct Logfmt<'a>(pub &'a [Value]);

impl fmt::Display for Logfmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, pair) in self.0.chunks(2).enumerate() {
            if n > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}=", pair[0])?;
            match pair.get(1) {
                Some(Value::Str(s)) => write!(f, "{s:?}")?,
                Some(v) => write!(f, "{v}")?,
                None => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_take_pair_head() {
        let mut kv = keyvals!["message", "hello", "foo", 22, "bar", "wha"];
        assert_eq!(take_pair(&mut kv, "message"), Some(Value::from("hello")));
        assert_eq!(kv, keyvals!["foo", 22, "bar", "wha"]);
    }

    #[test]
    fn test_take_pair_middle() {
        let mut kv = keyvals!["foo", 22, "message", "hello", "bar", "wha"];
        assert_eq!(take_pair(&mut kv, "message"), Some(Value::from("hello")));
        assert_eq!(kv, keyvals!["foo", 22, "bar", "wha"]);
    }

    #[test]
    fn test_take_pair_tail() {
        let mut kv = keyvals!["foo", 22, "bar", "wha", "message", "hello"];
        assert_eq!(take_pair(&mut kv, "message"), Some(Value::from("hello")));
        assert_eq!(kv, keyvals!["foo", 22, "bar", "wha"]);
    }

    #[test]
    fn test_take_pair_only_pair() {
        let mut kv = keyvals!["message", "hello"];
        assert_eq!(take_pair(&mut kv, "message"), Some(Value::from("hello")));
        assert!(kv.is_empty());
    }

    #[test]
    fn test_take_pair_first_duplicate_only() {
        let mut kv = keyvals!["message", "one", "message", "two"];
        assert_eq!(take_pair(&mut kv, "message"), Some(Value::from("one")));
        assert_eq!(kv, keyvals!["message", "two"]);
    }

    #[test]
    fn test_take_pair_ignores_value_positions() {
        let mut kv = keyvals!["foo", "message", "bar", 1];
        assert_eq!(take_pair(&mut kv, "message"), None);
        assert_eq!(kv, keyvals!["foo", "message", "bar", 1]);
    }

    #[test]
    fn test_take_pair_missing() {
        let mut kv = keyvals!["foo", 1];
        assert_eq!(take_pair(&mut kv, "level"), None);
        assert_eq!(kv.len(), 2);

        let mut empty = keyvals![];
        assert_eq!(take_pair(&mut empty, "level"), None);
    }

    #[test]
    fn test_take_pair_dangling_key() {
        let mut kv = keyvals!["foo", 1, "message"];
        assert_eq!(take_pair(&mut kv, "message"), None);
        assert_eq!(kv.len(), 3);
    }

    #[test]
    fn test_find_value() {
        let kv = keyvals!["foo", 1, "level", "warn"];
        assert_eq!(find_value(&kv, "warn"), None);
        assert_eq!(find_value(&kv, "level"), Some(&Value::from("warn")));
        assert_eq!(find_value(&kv, "bar"), None);
    }

    #[test]
    fn test_logfmt() {
        let kv = keyvals!["foo", 22, "bar", "wha now", "ok", true];
        assert_eq!(Logfmt(&kv).to_string(), r#"foo=22 bar="wha now" ok=true"#);
        assert_eq!(Logfmt(&[]).to_string(), "");
        assert_eq!(Logfmt(&keyvals!["dangling"]).to_string(), "dangling=");
    }

    fn plain_pairs(max_pairs: usize) -> impl Strategy<Value = Vec<Value>> {
        prop::collection::vec(("[a-z]{1,6}", any::<i64>()), 0..max_pairs).prop_map(|pairs| {
            pairs
                .into_iter()
                .flat_map(|(k, v)| [Value::from(format!("k_{k}")), Value::from(v)])
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_take_pair_preserves_order(
            kv in plain_pairs(12),
            pos in any::<prop::sample::Index>(),
            msg in ".*",
        ) {
            let pairs = kv.len() / 2;
            let at = pos.index(pairs + 1) * 2;
            let mut spliced = kv.clone();
            spliced.splice(at..at, [Value::from("message"), Value::from(msg.clone())]);

            let taken = take_pair(&mut spliced, "message");

            prop_assert_eq!(taken, Some(Value::from(msg)));
            prop_assert_eq!(spliced, kv);
        }

        #[test]
        fn prop_take_pair_absent_key_is_identity(kv in plain_pairs(12)) {
            let mut copy = kv.clone();
            prop_assert_eq!(take_pair(&mut copy, "message"), None);
            prop_assert_eq!(copy, kv);
        }
    }
}
