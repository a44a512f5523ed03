use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::IdParseError;

/// Closed set of blockchains the union API aggregates over.
///
/// The tag is the first segment of every encoded identifier and is read
/// exactly once per decode; nested components never carry their own tag.
/// Adding a chain is a source change, so every decode match stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Blockchain {
    /// Ethereum mainnet.
    Ethereum,
    /// Polygon PoS.
    Polygon,
    /// Flow.
    Flow,
    /// Tezos.
    Tezos,
    /// Solana.
    Solana,
}

impl Blockchain {
    /// Every supported blockchain, in declaration order.
    pub const ALL: [Blockchain; 5] = [
        Blockchain::Ethereum,
        Blockchain::Polygon,
        Blockchain::Flow,
        Blockchain::Tezos,
        Blockchain::Solana,
    ];

    /// Wire spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Blockchain::Ethereum => "ETHEREUM",
            Blockchain::Polygon => "POLYGON",
            Blockchain::Flow => "FLOW",
            Blockchain::Tezos => "TEZOS",
            Blockchain::Solana => "SOLANA",
        }
    }
}

impl fmt::Display for Blockchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Blockchain {
    type Err = IdParseError;

    /// Case-sensitive match against the closed tag set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ETHEREUM" => Ok(Blockchain::Ethereum),
            "POLYGON" => Ok(Blockchain::Polygon),
            "FLOW" => Ok(Blockchain::Flow),
            "TEZOS" => Ok(Blockchain::Tezos),
            "SOLANA" => Ok(Blockchain::Solana),
            _ => Err(IdParseError::UnknownBlockchain {
                value: s.to_string(),
            }),
        }
    }
}
