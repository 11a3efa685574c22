//! Strongly-typed identifiers used across the record model.
//!
//! Identifiers are assigned by the backend API and are opaque strings from
//! the engine's point of view; the newtypes exist so grouping maps and
//! cross-references stay type-checked (an `ItemId` key can never be fed a
//! transaction id by accident).

use serde::{Deserialize, Serialize};

/// Identifier of a stock item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

/// Identifier of a stock transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

/// Identifier of a purchase order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

/// Identifier of a maintenance/license agreement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgreementId(String);

/// Identifier of the user who performed a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

macro_rules! impl_string_newtype {
    ($t:ty) => {
        impl $t {
            /// Wrap a backend-assigned identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_string_newtype!(ItemId);
impl_string_newtype!(TransactionId);
impl_string_newtype!(OrderId);
impl_string_newtype!(AgreementId);
impl_string_newtype!(ActorId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_transparently() {
        let id = ItemId::new("IT-0042");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"IT-0042\"");

        let back: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_matches_inner() {
        let id = OrderId::from("PO-7");
        assert_eq!(id.to_string(), "PO-7");
        assert_eq!(id.as_str(), "PO-7");
    }
}
