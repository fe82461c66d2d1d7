//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. An invoice
/// number is one: two numbers with the same token are the same number, while
/// the invoice carrying it is an aggregate with its own lifecycle.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct InvoiceNumber(String);
///
/// impl ValueObject for InvoiceNumber {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
