use std::collections::{BTreeSet, HashMap};

use aws_smithy_types::Blob;

use crate::value::{AttrValue, Item};

/// One path-qualified structural difference between two attribute values.
///
/// `path` points at the offending sub-value with the field tokens `B`, `BOOL`,
/// `BS`, `L`, `M`, `N`, `NULL`, `NS`, `S`, `SS`, list indices in `[i]` and map
/// keys in `[key]`, e.g. `M[users].L[2].N`. `message` is the full
/// human-readable line carrying that path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub path: String,
    pub message: String,
}

impl Mismatch {
    fn equal(path: String) -> Self {
        let message = format!("{path} must be equal");
        Self { path, message }
    }

    fn equivalent(path: String) -> Self {
        let message = format!("{path} must be equivalent");
        Self { path, message }
    }
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Compares two bare attribute values, rooted at the empty path.
///
/// Pure and synchronous; inputs are never mutated. Returns every mismatch
/// found, not just the first, so a single failed assertion shows as much
/// context as possible. An empty result means the values are equal.
pub fn compare_values(actual: &AttrValue, expected: &AttrValue) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    compare_value(&mut mismatches, "", actual, expected);
    mismatches
}

/// Compares two full items as a synthetic top-level map rooted at path `M`.
pub fn compare_items(actual: &Item, expected: &Item) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();
    compare_map(&mut mismatches, "M", actual, expected);
    mismatches
}

/// Every slot is compared independently, in B, BOOL, BS, L, M, N, NULL, NS,
/// S, SS order. A value carrying several populated slots is not an error;
/// each one just participates in the comparison.
fn compare_value(out: &mut Vec<Mismatch>, path: &str, actual: &AttrValue, expected: &AttrValue) {
    match (&actual.b, &expected.b) {
        (Some(actual_bytes), Some(expected_bytes)) => {
            if actual_bytes.as_ref() != expected_bytes.as_ref() {
                out.push(Mismatch::equal(format!("{path}B")));
            }
        }
        (None, None) => {}
        _ => out.push(Mismatch::equal(format!("{path}B"))),
    }

    // "unset" and "false" are different states, so the presence flag and the
    // value get separate checks. An unset BOOL reads as false for the value
    // check.
    if actual.boolean.is_some() != expected.boolean.is_some() {
        out.push(Mismatch::equal(format!("{path}IsBOOLSet")));
    }
    if actual.boolean.unwrap_or(false) != expected.boolean.unwrap_or(false) {
        out.push(Mismatch::equal(format!("{path}BOOL")));
    }

    match (&actual.bs, &expected.bs) {
        (Some(actual_set), Some(expected_set)) => {
            if !blobs_equivalent(actual_set, expected_set) {
                out.push(Mismatch::equivalent(format!("{path}BS")));
            }
        }
        (None, None) => {}
        _ => out.push(Mismatch::equivalent(format!("{path}BS"))),
    }

    if actual.l.is_some() != expected.l.is_some() {
        out.push(Mismatch::equal(format!("{path}IsLSet")));
    }
    match (&actual.l, &expected.l) {
        (Some(actual_list), Some(expected_list)) => {
            compare_list(out, &format!("{path}L"), actual_list, expected_list);
        }
        (None, None) => {}
        _ => out.push(Mismatch::equal(format!("{path}L"))),
    }

    if actual.m.is_some() != expected.m.is_some() {
        out.push(Mismatch::equal(format!("{path}IsMSet")));
    }
    match (&actual.m, &expected.m) {
        (Some(actual_map), Some(expected_map)) => {
            compare_map(out, &format!("{path}M"), actual_map, expected_map);
        }
        (None, None) => {}
        _ => out.push(Mismatch::equal(format!("{path}M"))),
    }

    // Numeric text compares verbatim: "1" and "1.0" are different values.
    if actual.n != expected.n {
        out.push(Mismatch::equal(format!("{path}N")));
    }

    if actual.null != expected.null {
        out.push(Mismatch::equal(format!("{path}NULL")));
    }

    match (&actual.ns, &expected.ns) {
        (Some(actual_set), Some(expected_set)) => {
            if !texts_equivalent(actual_set, expected_set) {
                out.push(Mismatch::equivalent(format!("{path}NS")));
            }
        }
        (None, None) => {}
        _ => out.push(Mismatch::equivalent(format!("{path}NS"))),
    }

    if actual.s != expected.s {
        out.push(Mismatch::equal(format!("{path}S")));
    }

    match (&actual.ss, &expected.ss) {
        (Some(actual_set), Some(expected_set)) => {
            if !texts_equivalent(actual_set, expected_set) {
                out.push(Mismatch::equivalent(format!("{path}SS")));
            }
        }
        (None, None) => {}
        _ => out.push(Mismatch::equivalent(format!("{path}SS"))),
    }
}

/// Lists are order-sensitive. On a length mismatch the elements are not
/// recursed into, since indexes on the two sides would not correspond.
fn compare_list(out: &mut Vec<Mismatch>, path: &str, actual: &[AttrValue], expected: &[AttrValue]) {
    if actual.len() != expected.len() {
        out.push(Mismatch {
            path: path.to_string(),
            message: format!("List length must be equal ({path})"),
        });
        return;
    }

    for (i, (actual_element, expected_element)) in actual.iter().zip(expected).enumerate() {
        compare_value(out, &format!("{path}[{i}]."), actual_element, expected_element);
    }
}

/// Map keys must match as a set; values are then compared key by key. Keys
/// present on one side only are covered by the key-set mismatch and not
/// descended into. Sorted key order keeps the output deterministic.
fn compare_map(
    out: &mut Vec<Mismatch>,
    path: &str,
    actual: &HashMap<String, AttrValue>,
    expected: &HashMap<String, AttrValue>,
) {
    let actual_keys: BTreeSet<&str> = actual.keys().map(String::as_str).collect();
    let expected_keys: BTreeSet<&str> = expected.keys().map(String::as_str).collect();

    if actual_keys != expected_keys {
        out.push(Mismatch {
            path: format!("{path}.Keys"),
            message: format!("{path}.Keys must be equivalent"),
        });
    }

    for key in actual_keys.intersection(&expected_keys) {
        compare_value(
            out,
            &format!("{path}[{key}]."),
            &actual[*key],
            &expected[*key],
        );
    }
}

/// Multiset equivalence over byte sequences: equal cardinality and a pairing
/// of byte-identical elements, regardless of order or of which buffer holds
/// the bytes. Duplicates must match in count.
fn blobs_equivalent(actual: &[Blob], expected: &[Blob]) -> bool {
    if actual.len() != expected.len() {
        return false;
    }
    let mut actual_sorted: Vec<&[u8]> = actual.iter().map(Blob::as_ref).collect();
    let mut expected_sorted: Vec<&[u8]> = expected.iter().map(Blob::as_ref).collect();
    actual_sorted.sort_unstable();
    expected_sorted.sort_unstable();
    actual_sorted == expected_sorted
}

fn texts_equivalent(actual: &[String], expected: &[String]) -> bool {
    if actual.len() != expected.len() {
        return false;
    }
    let mut actual_sorted: Vec<&str> = actual.iter().map(String::as_str).collect();
    let mut expected_sorted: Vec<&str> = expected.iter().map(String::as_str).collect();
    actual_sorted.sort_unstable();
    expected_sorted.sort_unstable();
    actual_sorted == expected_sorted
}
