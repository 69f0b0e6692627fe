use {
    crate::{fixed::Hex32, quantity::HexQuantity},
    serde::{Deserialize, Serialize},
};

/// Proof-of-work package returned by `eth_getWork`.
///
/// Encoded as an array of the three hashes. Geth derived nodes append the
/// number of the block being mined as a fourth element.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "WorkArray", into = "WorkArray")]
pub struct Work {
    /// Header pow-hash of the block being mined.
    pub pow_hash: Hex32,
    /// Seed hash used for the DAG.
    pub seed_hash: Hex32,
    /// Boundary condition ("target"), 2^256 / difficulty.
    pub boundary: Hex32,
    pub block_number: Option<HexQuantity>,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WorkArray {
    Hashes(Hex32, Hex32, Hex32),
    WithBlockNumber(Hex32, Hex32, Hex32, HexQuantity),
}

impl From<WorkArray> for Work {
    fn from(array: WorkArray) -> Self {
        let (pow_hash, seed_hash, boundary, block_number) = match array {
            WorkArray::Hashes(pow_hash, seed_hash, boundary) => {
                (pow_hash, seed_hash, boundary, None)
            }
            WorkArray::WithBlockNumber(pow_hash, seed_hash, boundary, number) => {
                (pow_hash, seed_hash, boundary, Some(number))
            }
        };
        Self {
            pow_hash,
            seed_hash,
            boundary,
            block_number,
        }
    }
}

impl From<Work> for WorkArray {
    fn from(work: Work) -> Self {
        match work.block_number {
            Some(number) => {
                Self::WithBlockNumber(work.pow_hash, work.seed_hash, work.boundary, number)
            }
            None => Self::Hashes(work.pow_hash, work.seed_hash, work.boundary),
        }
    }
}

/// Result of `eth_syncing`: `false` when the node is caught up, otherwise
/// an object describing the sync progress.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncState {
    NotSyncing(bool),
    Syncing(SyncProgress),
}

impl SyncState {
    pub fn is_syncing(&self) -> bool {
        match self {
            Self::NotSyncing(syncing) => *syncing,
            Self::Syncing(_) => true,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncProgress {
    pub starting_block: HexQuantity,
    pub current_block: HexQuantity,
    pub highest_block: HexQuantity,
}
