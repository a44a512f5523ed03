//! Cross-chain identifier and numeric primitives for a multi-blockchain
//! aggregation API.
//!
//! Domain objects (items, ownerships, orders, activities, contracts) are
//! identified by a single `:`-delimited string regardless of which chain they
//! live on, and every arbitrary-precision number crosses the wire as one
//! canonical decimal string. Reads are lenient toward legacy textual forms;
//! writes always emit the canonical form.
//!
//! Both codecs are pure functions over immutable value types: no I/O, no
//! shared state, safe to call from any number of threads.
//!
#![deny(missing_docs)]

/// Closed set of supported blockchain tags.
pub mod blockchain;
mod codec;
/// Typed decode/parse failures.
pub mod errors;
/// Chain-scoped identifier variants and their string codec.
pub mod identifiers;
/// Arbitrary-precision integers and decimals with a canonical text form.
pub mod numbers;

pub use blockchain::Blockchain;
pub use errors::{IdParseError, NumberParseError};
pub use identifiers::{ActivityId, ContractAddress, ItemId, OrderId, OwnershipId, UnionAddress};
pub use numbers::{BigDecimal, BigInteger};
