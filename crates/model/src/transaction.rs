use {
    crate::{
        fixed::{Address, BlockHash, Hex32, TransactionId},
        hex_data::HexData,
        quantity::{HexQuantity, Wei},
    },
    serde::{Deserialize, Serialize},
};

/// A transaction to be signed and submitted by the node through
/// `eth_sendTransaction`.
///
/// Only `from` is mandatory. Leaving `to` unset requests a contract
/// creation, with `data` holding the init code. Use [`Address::ZERO`] to
/// call the zero address instead.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    from: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gas: Option<HexQuantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gas_price: Option<Wei>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Wei>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<HexData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nonce: Option<HexQuantity>,
}

impl Transaction {
    pub fn builder(from: Address) -> TransactionBuilder {
        TransactionBuilder {
            tx: Self {
                from,
                to: None,
                gas: None,
                gas_price: None,
                value: None,
                data: None,
                nonce: None,
            },
        }
    }

    pub fn from(&self) -> &Address {
        &self.from
    }

    pub fn to(&self) -> Option<&Address> {
        self.to.as_ref()
    }

    pub fn gas(&self) -> Option<&HexQuantity> {
        self.gas.as_ref()
    }

    pub fn gas_price(&self) -> Option<&Wei> {
        self.gas_price.as_ref()
    }

    pub fn value(&self) -> Option<&Wei> {
        self.value.as_ref()
    }

    pub fn data(&self) -> Option<&HexData> {
        self.data.as_ref()
    }

    pub fn nonce(&self) -> Option<&HexQuantity> {
        self.nonce.as_ref()
    }

    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

/// Builds a [`Transaction`]. Fields that are never set are left for the node
/// to fill in.
#[derive(Clone, Debug)]
#[must_use]
pub struct TransactionBuilder {
    tx: Transaction,
}

impl TransactionBuilder {
    pub fn to(mut self, to: Address) -> Self {
        self.tx.to = Some(to);
        self
    }

    /// Gas provided for execution. Nodes default to 90000.
    pub fn gas(mut self, gas: impl Into<HexQuantity>) -> Self {
        self.tx.gas = Some(gas.into());
        self
    }

    pub fn gas_price(mut self, gas_price: impl Into<Wei>) -> Self {
        self.tx.gas_price = Some(gas_price.into());
        self
    }

    pub fn value(mut self, value: impl Into<Wei>) -> Self {
        self.tx.value = Some(value.into());
        self
    }

    pub fn data(mut self, data: impl Into<HexData>) -> Self {
        self.tx.data = Some(data.into());
        self
    }

    /// Overrides the account nonce, e.g. to replace a pending transaction.
    pub fn nonce(mut self, nonce: impl Into<HexQuantity>) -> Self {
        self.tx.nonce = Some(nonce.into());
        self
    }

    pub fn build(self) -> Transaction {
        self.tx
    }
}

/// A transaction as reported by the node.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionJson {
    pub hash: TransactionId,
    pub nonce: HexQuantity,
    /// `None` while the transaction is pending.
    pub block_hash: Option<BlockHash>,
    pub block_number: Option<HexQuantity>,
    pub transaction_index: Option<HexQuantity>,
    pub from: Address,
    pub to: Option<Address>,
    pub value: Wei,
    pub gas_price: Wei,
    pub gas: HexQuantity,
    pub input: HexData,
    #[serde(default)]
    pub creates: Option<Address>,
    #[serde(default)]
    pub v: Option<HexQuantity>,
    #[serde(default)]
    pub r: Option<HexQuantity>,
    #[serde(default)]
    pub s: Option<HexQuantity>,
}

impl TransactionJson {
    pub fn creates_contract(&self) -> bool {
        self.to.is_none()
    }
}

/// Receipt of a mined transaction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceiptJson {
    pub transaction_hash: TransactionId,
    pub transaction_index: HexQuantity,
    pub block_hash: BlockHash,
    pub block_number: HexQuantity,
    #[serde(default)]
    pub from: Option<Address>,
    #[serde(default)]
    pub to: Option<Address>,
    pub cumulative_gas_used: HexQuantity,
    pub gas_used: HexQuantity,
    pub contract_address: Option<Address>,
    pub logs: Vec<TransactionLogJson>,
    #[serde(default)]
    pub logs_bloom: Option<HexData>,
    /// Post-transaction state root, only reported before Byzantium.
    #[serde(default)]
    pub root: Option<Hex32>,
    /// `0x1` on success and `0x0` on failure, only reported after Byzantium.
    #[serde(default)]
    pub status: Option<HexQuantity>,
}

impl TransactionReceiptJson {
    /// Whether execution succeeded. `None` for receipts that predate status
    /// codes.
    pub fn succeeded(&self) -> Option<bool> {
        self.status.as_ref().map(|status| !status.is_zero())
    }
}

/// A log entry emitted during execution.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionLogJson {
    pub address: Address,
    pub topics: Vec<Hex32>,
    pub data: HexData,
    pub block_hash: Option<BlockHash>,
    pub block_number: Option<HexQuantity>,
    pub transaction_hash: Option<TransactionId>,
    pub transaction_index: Option<HexQuantity>,
    pub log_index: Option<HexQuantity>,
    #[serde(default)]
    pub removed: bool,
}
