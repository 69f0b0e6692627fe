use {
    crate::{
        error::InvalidFormatError,
        fixed::{Address, BlockHash, Hex32, Nonce, TransactionId},
        hex_data::HexData,
        quantity::HexQuantity,
        transaction::TransactionJson,
    },
    serde::{Deserialize, Serialize},
    std::str::FromStr,
};

/// Symbolic reference to a block relative to the node's view of the chain.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BlockTag {
    #[default]
    Latest,
    Earliest,
    Pending,
}

impl FromStr for BlockTag {
    type Err = InvalidFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "latest" => Ok(Self::Latest),
            "earliest" => Ok(Self::Earliest),
            "pending" => Ok(Self::Pending),
            _ => Err(InvalidFormatError::UnknownTag(s.to_owned())),
        }
    }
}

/// A block given either by tag or by height.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockRef {
    Tag(BlockTag),
    Number(HexQuantity),
}

impl Default for BlockRef {
    fn default() -> Self {
        Self::Tag(BlockTag::Latest)
    }
}

impl From<BlockTag> for BlockRef {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

impl From<HexQuantity> for BlockRef {
    fn from(number: HexQuantity) -> Self {
        Self::Number(number)
    }
}

impl From<u64> for BlockRef {
    fn from(number: u64) -> Self {
        Self::Number(number.into())
    }
}

/// A block given by hash, tag or height.
///
/// The RPC API has separate `...ByHash` and `...ByNumber` methods for most
/// block lookups; which one gets called depends on the variant.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlockId {
    Hash(BlockHash),
    Ref(BlockRef),
}

impl From<BlockHash> for BlockId {
    fn from(hash: BlockHash) -> Self {
        Self::Hash(hash)
    }
}

impl From<BlockRef> for BlockId {
    fn from(block: BlockRef) -> Self {
        Self::Ref(block)
    }
}

impl From<BlockTag> for BlockId {
    fn from(tag: BlockTag) -> Self {
        Self::Ref(tag.into())
    }
}

impl From<u64> for BlockId {
    fn from(number: u64) -> Self {
        Self::Ref(number.into())
    }
}

impl From<HexQuantity> for BlockId {
    fn from(number: HexQuantity) -> Self {
        Self::Ref(number.into())
    }
}

/// Block as returned by `eth_getBlockByHash`, `eth_getBlockByNumber` and the
/// uncle lookups.
///
/// Fields that are `null` for pending blocks are optional.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockJson {
    pub number: Option<HexQuantity>,
    pub hash: Option<BlockHash>,
    pub parent_hash: BlockHash,
    pub nonce: Option<Nonce>,
    #[serde(default)]
    pub mix_hash: Option<Hex32>,
    pub sha3_uncles: Hex32,
    pub logs_bloom: Option<HexData>,
    pub transactions_root: Hex32,
    pub state_root: Hex32,
    pub receipts_root: Hex32,
    pub miner: Option<Address>,
    pub difficulty: HexQuantity,
    #[serde(default)]
    pub total_difficulty: Option<HexQuantity>,
    pub extra_data: HexData,
    #[serde(default)]
    pub size: Option<HexQuantity>,
    pub gas_limit: HexQuantity,
    pub gas_used: HexQuantity,
    pub timestamp: HexQuantity,
    /// Absent for uncles, which never carry their transactions.
    #[serde(default)]
    pub transactions: Vec<BlockTransaction>,
    #[serde(default)]
    pub uncles: Vec<BlockHash>,
}

impl BlockJson {
    /// Hashes of all transactions, whether or not the block was fetched with
    /// full transaction objects.
    pub fn transaction_ids(&self) -> Vec<TransactionId> {
        self.transactions
            .iter()
            .map(BlockTransaction::id)
            .collect()
    }
}

/// An entry of [`BlockJson::transactions`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockTransaction {
    /// Block was requested without inlined transactions.
    Hash(TransactionId),
    Full(Box<TransactionJson>),
}

impl BlockTransaction {
    pub fn id(&self) -> TransactionId {
        match self {
            Self::Hash(id) => *id,
            Self::Full(tx) => tx.hash,
        }
    }
}
