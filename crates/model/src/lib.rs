//! Value types for talking to an Ethereum Classic node: fixed length hashes
//! and addresses, hex quantities and amounts, block references, transaction
//! requests and the payloads the node sends back.

pub mod block;
pub mod error;
pub mod fixed;
pub mod hex_data;
pub mod mining;
pub mod quantity;
pub mod trace;
pub mod transaction;

pub use {
    block::{BlockId, BlockJson, BlockRef, BlockTag, BlockTransaction},
    error::InvalidFormatError,
    fixed::{Address, BlockHash, Hex32, Nonce, TransactionId},
    hex_data::HexData,
    mining::{SyncState, Work},
    quantity::{HexQuantity, Wei},
    trace::{TraceItemJson, TraceList},
    transaction::{
        Transaction,
        TransactionBuilder,
        TransactionJson,
        TransactionLogJson,
        TransactionReceiptJson,
    },
};
