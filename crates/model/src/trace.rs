//! Execution traces in the format returned by `trace_transaction`.

use {
    crate::{
        fixed::{Address, BlockHash, TransactionId},
        hex_data::HexData,
        quantity::{HexQuantity, Wei},
    },
    serde::{Deserialize, Serialize},
};

/// All traces recorded while executing a single transaction, in execution
/// order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceList(pub Vec<TraceItemJson>);

impl TraceList {
    pub fn iter(&self) -> std::slice::Iter<'_, TraceItemJson> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The outermost call or create of the transaction.
    pub fn root(&self) -> Option<&TraceItemJson> {
        self.0.iter().find(|trace| trace.trace_address.is_empty())
    }
}

impl IntoIterator for TraceList {
    type IntoIter = std::vec::IntoIter<TraceItemJson>;
    type Item = TraceItemJson;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceItemJson {
    pub action: TraceAction,
    pub result: Option<TraceResult>,
    /// Set when the call or create reverted.
    #[serde(default)]
    pub error: Option<String>,
    /// Position of this trace in the call tree; empty for the root.
    pub trace_address: Vec<u64>,
    pub subtraces: u64,
    pub transaction_position: Option<u64>,
    pub transaction_hash: Option<TransactionId>,
    pub block_number: u64,
    pub block_hash: BlockHash,
    #[serde(rename = "type")]
    pub kind: TraceKind,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Call,
    Create,
    Suicide,
    Reward,
}

/// What was executed. Which fields are present depends on [`TraceKind`].
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<HexQuantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<HexData>,
    /// Init code of a create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub init: Option<HexData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Wei>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refund_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<Wei>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward_type: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceResult {
    pub gas_used: HexQuantity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<HexData>,
    /// Address of the created contract.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<HexData>,
}
