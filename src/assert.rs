use std::fmt;

use crate::compare::{Mismatch, compare_items, compare_values};
use crate::store::{ItemStore, StoreError};
use crate::value::{AttrValue, Item};

/// A failed assertion, surfaced to whatever test framework is driving the
/// test. The `Display` text is the failure message; no runner-specific API
/// is involved.
#[derive(Debug)]
pub enum AssertError {
    /// A consistent read returned nothing for an item that should exist.
    NotFound,
    /// A consistent read returned an item that should not exist.
    UnexpectedlyPresent,
    /// The items exist but differ; every offending path is carried, first
    /// difference first.
    Mismatch { mismatches: Vec<Mismatch> },
    /// The store collaborator failed before any comparison could happen.
    Store(StoreError),
}

impl fmt::Display for AssertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssertError::NotFound => write!(f, "Item should exist."),
            AssertError::UnexpectedlyPresent => write!(f, "Item should not exist."),
            AssertError::Mismatch { mismatches } => {
                for (i, mismatch) in mismatches.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{mismatch}")?;
                }
                Ok(())
            }
            AssertError::Store(inner) => write!(f, "store read failed: {inner}"),
        }
    }
}

impl std::error::Error for AssertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssertError::Store(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

/// Asserts deep equality of two bare attribute values.
pub fn assert_values_equal(actual: &AttrValue, expected: &AttrValue) -> Result<(), AssertError> {
    let mismatches = compare_values(actual, expected);
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(AssertError::Mismatch { mismatches })
    }
}

/// Asserts deep equality of two full items, rooted at path `M`.
pub fn assert_items_equal(actual: &Item, expected: &Item) -> Result<(), AssertError> {
    let mismatches = compare_items(actual, expected);
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(AssertError::Mismatch { mismatches })
    }
}

/// Asserts that the item at `key` exists and deep-equals `expected`.
///
/// One strongly-consistent point read, no retries. Read-only with respect to
/// the store.
pub async fn assert_item_exists<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
    key: &Item,
    expected: &Item,
) -> Result<(), AssertError> {
    tracing::trace!(table = %table_name, "Consistent read for item-exists assertion");
    let item = store
        .read_item(table_name, key)
        .await
        .map_err(AssertError::Store)?;

    match item {
        Some(actual) => assert_items_equal(&actual, expected),
        None => Err(AssertError::NotFound),
    }
}

/// Asserts that no item exists at `key`.
pub async fn assert_item_absent<S: ItemStore + ?Sized>(
    store: &S,
    table_name: &str,
    key: &Item,
) -> Result<(), AssertError> {
    tracing::trace!(table = %table_name, "Consistent read for item-absent assertion");
    let item = store
        .read_item(table_name, key)
        .await
        .map_err(AssertError::Store)?;

    match item {
        Some(_) => Err(AssertError::UnexpectedlyPresent),
        None => Ok(()),
    }
}
