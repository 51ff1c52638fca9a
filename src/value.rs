use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_smithy_types::Blob;

/// One DynamoDB item: attribute name to attribute value.
pub type Item = HashMap<String, AttrValue>;

/// A DynamoDB attribute value with every slot independently optional.
///
/// The wire model is lenient: nothing stops a payload from carrying several
/// slots at once, and the comparator checks each slot on its own rather than
/// picking a dominant one. That rules out an enum, so this mirrors the
/// struct-of-nullables shape the service model uses. An absent slot and a
/// present-but-empty collection are different states and compare unequal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrValue {
    pub b: Option<Blob>,
    pub boolean: Option<bool>,
    pub bs: Option<Vec<Blob>>,
    pub l: Option<Vec<AttrValue>>,
    pub m: Option<HashMap<String, AttrValue>>,
    pub n: Option<String>,
    pub null: Option<bool>,
    pub ns: Option<Vec<String>>,
    pub s: Option<String>,
    pub ss: Option<Vec<String>>,
}

impl AttrValue {
    pub fn b(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            b: Some(Blob::new(bytes.into())),
            ..Self::default()
        }
    }

    pub fn boolean(value: bool) -> Self {
        Self {
            boolean: Some(value),
            ..Self::default()
        }
    }

    pub fn bs<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Vec<u8>>,
    {
        Self {
            bs: Some(values.into_iter().map(|v| Blob::new(v.into())).collect()),
            ..Self::default()
        }
    }

    pub fn l<I: IntoIterator<Item = AttrValue>>(values: I) -> Self {
        Self {
            l: Some(values.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn m<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, AttrValue)>,
    {
        Self {
            m: Some(
                entries
                    .into_iter()
                    .map(|(key, value)| (key.into(), value))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn n(value: impl Into<String>) -> Self {
        Self {
            n: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn null() -> Self {
        Self {
            null: Some(true),
            ..Self::default()
        }
    }

    pub fn ns<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            ns: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn s(value: impl Into<String>) -> Self {
        Self {
            s: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn ss<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            ss: Some(values.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Converts an SDK attribute value into the comparison model.
    ///
    /// The SDK enum is non-exhaustive; variants it grows later convert to a
    /// fully-unset value rather than erroring.
    pub fn from_sdk(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::B(blob) => Self {
                b: Some(blob.clone()),
                ..Self::default()
            },
            AttributeValue::Bool(value) => Self::boolean(*value),
            AttributeValue::Bs(blobs) => Self {
                bs: Some(blobs.clone()),
                ..Self::default()
            },
            AttributeValue::L(values) => Self {
                l: Some(values.iter().map(Self::from_sdk).collect()),
                ..Self::default()
            },
            AttributeValue::M(map) => Self {
                m: Some(
                    map.iter()
                        .map(|(key, value)| (key.clone(), Self::from_sdk(value)))
                        .collect(),
                ),
                ..Self::default()
            },
            AttributeValue::N(text) => Self::n(text.clone()),
            AttributeValue::Null(value) => Self {
                null: Some(*value),
                ..Self::default()
            },
            AttributeValue::Ns(values) => Self {
                ns: Some(values.clone()),
                ..Self::default()
            },
            AttributeValue::S(text) => Self::s(text.clone()),
            AttributeValue::Ss(values) => Self {
                ss: Some(values.clone()),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Converts back to an SDK attribute value, taking the first populated
    /// slot in B, BOOL, BS, L, M, N, NULL, NS, S, SS order. Returns `None`
    /// when nothing is set. Key attributes handed to the store client go
    /// through this.
    pub fn to_sdk(&self) -> Option<AttributeValue> {
        if let Some(blob) = &self.b {
            return Some(AttributeValue::B(blob.clone()));
        }
        if let Some(value) = self.boolean {
            return Some(AttributeValue::Bool(value));
        }
        if let Some(blobs) = &self.bs {
            return Some(AttributeValue::Bs(blobs.clone()));
        }
        if let Some(values) = &self.l {
            return Some(AttributeValue::L(
                values.iter().filter_map(Self::to_sdk).collect(),
            ));
        }
        if let Some(map) = &self.m {
            return Some(AttributeValue::M(
                map.iter()
                    .filter_map(|(key, value)| value.to_sdk().map(|v| (key.clone(), v)))
                    .collect(),
            ));
        }
        if let Some(text) = &self.n {
            return Some(AttributeValue::N(text.clone()));
        }
        if let Some(value) = self.null {
            return Some(AttributeValue::Null(value));
        }
        if let Some(values) = &self.ns {
            return Some(AttributeValue::Ns(values.clone()));
        }
        if let Some(text) = &self.s {
            return Some(AttributeValue::S(text.clone()));
        }
        if let Some(values) = &self.ss {
            return Some(AttributeValue::Ss(values.clone()));
        }
        None
    }
}

/// Converts a fetched SDK item into the comparison model.
pub fn item_from_sdk(item: &HashMap<String, AttributeValue>) -> Item {
    item.iter()
        .map(|(name, value)| (name.clone(), AttrValue::from_sdk(value)))
        .collect()
}
