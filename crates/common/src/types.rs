use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Defines a string-backed entity identifier.
///
/// Identifiers are stable and immutable once assigned. Seeded entities carry
/// short human-readable ids (`p1`, `loc_wh_stock`); freshly created entities
/// get a generated id with the entity's conventional prefix.
macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from an existing string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mints a fresh unique identifier.
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "{}"), Uuid::new_v4().simple()))
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Unique identifier for a catalog product.
    ProductId,
    "p_"
);

string_id!(
    /// Unique identifier for a stock location.
    LocationId,
    "loc_"
);

string_id!(
    /// Unique identifier for a stock-moving operation.
    OperationId,
    "op_"
);
