//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Identifiers here are
//! opaque strings minted by external collaborators (the commerce platform and
//! the backend API), so the wrappers are string-backed.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
///
/// # Example
///
/// ```rust
/// # use verdemar_core::define_id;
/// define_id!(VariantId);
/// define_id!(OrderId);
///
/// let variant_id = VariantId::new("45791842");
/// let order_id = OrderId::new("45791842");
///
/// // These are different types, so this won't compile:
/// // let _: VariantId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the underlying string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

// Define standard entity IDs
define_id!(VariantId);
define_id!(CustomerId);
define_id!(OrderId);

/// Platform namespace prefix for product variant global IDs.
const VARIANT_GID_PREFIX: &str = "gid://shopify/ProductVariant/";

impl VariantId {
    /// Normalize this variant ID into the platform's global-identifier form.
    ///
    /// The backend expects variant references as
    /// `gid://shopify/ProductVariant/<id>`. IDs that already carry a `gid://`
    /// namespace are passed through unchanged; bare numeric IDs get the
    /// product-variant prefix.
    ///
    /// ```rust
    /// use verdemar_core::VariantId;
    ///
    /// let bare = VariantId::new("45791842");
    /// assert_eq!(bare.to_gid(), "gid://shopify/ProductVariant/45791842");
    ///
    /// let full = VariantId::new("gid://shopify/ProductVariant/45791842");
    /// assert_eq!(full.to_gid(), "gid://shopify/ProductVariant/45791842");
    /// ```
    #[must_use]
    pub fn to_gid(&self) -> String {
        if self.0.contains("gid://") {
            self.0.clone()
        } else {
            format!("{VARIANT_GID_PREFIX}{}", self.0)
        }
    }
}
