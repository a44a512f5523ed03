use std::fmt;
use std::str::FromStr;

use crate::blockchain::Blockchain;
use crate::codec::{split_tagged, string_wire, DELIMITER};
use crate::errors::IdParseError;
use crate::numbers::BigInteger;

macro_rules! tagged_value {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        ///
        /// Encodes as `CHAIN:value`. The value must not contain the `:`
        /// delimiter; callers are responsible for that, it is not re-checked
        /// here.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            /// Chain the value belongs to.
            pub blockchain: Blockchain,
            /// Opaque chain-native value.
            pub value: String,
        }

        impl $name {
            /// Creates an identifier from a chain tag and a raw value.
            pub fn new(blockchain: Blockchain, value: impl Into<String>) -> Self {
                Self {
                    blockchain,
                    value: value.into(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}{}", self.blockchain, DELIMITER, self.value)
            }
        }

        impl FromStr for $name {
            type Err = IdParseError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let (blockchain, rest) = split_tagged(raw, 2)?;
                Ok(Self::new(blockchain, rest[0]))
            }
        }

        string_wire!($name);
    };
}

tagged_value!(
    UnionAddress,
    "Account or contract address on one of the supported chains."
);
tagged_value!(ContractAddress, "Address of a token contract.");
tagged_value!(OrderId, "Chain-scoped identifier of an order.");
tagged_value!(ActivityId, "Chain-scoped identifier of an activity record.");

/// Identifier of a single item: the token contract plus the token id within
/// it.
///
/// Encodes as `CHAIN:token:tokenId`. The chain tag appears once; the nested
/// token address shares it by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId {
    /// Chain the item lives on.
    pub blockchain: Blockchain,
    /// Token contract; shares the item's chain tag.
    pub token: UnionAddress,
    /// Token id within the contract.
    pub token_id: BigInteger,
}

impl ItemId {
    /// Creates an item id, stamping `blockchain` onto the token address.
    pub fn new(blockchain: Blockchain, token: impl Into<String>, token_id: BigInteger) -> Self {
        Self {
            blockchain,
            token: UnionAddress::new(blockchain, token),
            token_id,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}",
            self.blockchain, DELIMITER, self.token.value, DELIMITER, self.token_id
        )
    }
}

impl FromStr for ItemId {
    type Err = IdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (blockchain, rest) = split_tagged(raw, 3)?;
        let token_id = parse_token_id(rest[1])?;
        Ok(Self::new(blockchain, rest[0], token_id))
    }
}

string_wire!(ItemId);

/// Identifier of one owner's stake in an item.
///
/// Encodes as `CHAIN:token:tokenId:owner`. Both nested addresses share the
/// ownership's chain tag by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnershipId {
    /// Chain the ownership lives on.
    pub blockchain: Blockchain,
    /// Token contract; shares the ownership's chain tag.
    pub token: UnionAddress,
    /// Token id within the contract.
    pub token_id: BigInteger,
    /// Owning account; shares the ownership's chain tag.
    pub owner: UnionAddress,
}

impl OwnershipId {
    /// Creates an ownership id, stamping `blockchain` onto both addresses.
    pub fn new(
        blockchain: Blockchain,
        token: impl Into<String>,
        token_id: BigInteger,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            blockchain,
            token: UnionAddress::new(blockchain, token),
            token_id,
            owner: UnionAddress::new(blockchain, owner),
        }
    }

    /// The item this ownership refers to.
    pub fn item_id(&self) -> ItemId {
        ItemId {
            blockchain: self.blockchain,
            token: self.token.clone(),
            token_id: self.token_id.clone(),
        }
    }
}

impl fmt::Display for OwnershipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}{}{}{}",
            self.blockchain,
            DELIMITER,
            self.token.value,
            DELIMITER,
            self.token_id,
            DELIMITER,
            self.owner.value
        )
    }
}

impl FromStr for OwnershipId {
    type Err = IdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (blockchain, rest) = split_tagged(raw, 4)?;
        let token_id = parse_token_id(rest[1])?;
        Ok(Self::new(blockchain, rest[0], token_id, rest[2]))
    }
}

string_wire!(OwnershipId);

fn parse_token_id(segment: &str) -> Result<BigInteger, IdParseError> {
    segment.parse().map_err(|source| IdParseError::InvalidTokenId {
        value: segment.to_string(),
        source,
    })
}
