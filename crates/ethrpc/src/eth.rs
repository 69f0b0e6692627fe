//! The `eth_*` command group.

use {
    crate::{client::RpcClient, pending::PendingCall},
    model::{
        Address,
        BlockId,
        BlockJson,
        BlockRef,
        Hex32,
        HexData,
        HexQuantity,
        Nonce,
        SyncState,
        Transaction,
        TransactionId,
        TransactionJson,
        TransactionReceiptJson,
        Wei,
        Work,
    },
};

/// Commands of the `eth` namespace, obtained with [`RpcClient::eth`].
///
/// Every command dispatches its request right away and hands back a
/// [`PendingCall`] for the decoded result.
#[derive(Clone, Copy, Debug)]
pub struct EthCommands<'a> {
    client: &'a RpcClient,
}

impl<'a> EthCommands<'a> {
    pub(crate) fn new(client: &'a RpcClient) -> Self {
        Self { client }
    }

    /// Height of the most recent block.
    pub fn block_number(&self) -> PendingCall<HexQuantity> {
        self.client.call("eth_blockNumber", ())
    }

    pub fn chain_id(&self) -> PendingCall<HexQuantity> {
        self.client.call("eth_chainId", ())
    }

    pub fn syncing(&self) -> PendingCall<SyncState> {
        self.client.call("eth_syncing", ())
    }

    pub fn get_balance(&self, address: Address, block: impl Into<BlockRef>) -> PendingCall<Wei> {
        self.client
            .call("eth_getBalance", (address, block.into()))
    }

    /// Looks up a block by hash, tag or number. With `include_transactions`
    /// the block carries full transaction objects instead of their hashes.
    /// Resolves to `None` for unknown blocks.
    pub fn get_block(
        &self,
        block: impl Into<BlockId>,
        include_transactions: bool,
    ) -> PendingCall<Option<BlockJson>> {
        match block.into() {
            BlockId::Hash(hash) => self
                .client
                .call("eth_getBlockByHash", (hash, include_transactions)),
            BlockId::Ref(block) => self
                .client
                .call("eth_getBlockByNumber", (block, include_transactions)),
        }
    }

    pub fn get_transaction(&self, id: TransactionId) -> PendingCall<Option<TransactionJson>> {
        self.client.call("eth_getTransactionByHash", (id,))
    }

    /// The transaction at position `index` of a block.
    pub fn get_transaction_by_block(
        &self,
        block: impl Into<BlockId>,
        index: impl Into<HexQuantity>,
    ) -> PendingCall<Option<TransactionJson>> {
        let index = index.into();
        match block.into() {
            BlockId::Hash(hash) => self
                .client
                .call("eth_getTransactionByBlockHashAndIndex", (hash, index)),
            BlockId::Ref(block) => self
                .client
                .call("eth_getTransactionByBlockNumberAndIndex", (block, index)),
        }
    }

    /// Resolves to `None` while the transaction is pending or if it is
    /// unknown.
    pub fn get_transaction_receipt(
        &self,
        id: TransactionId,
    ) -> PendingCall<Option<TransactionReceiptJson>> {
        self.client.call("eth_getTransactionReceipt", (id,))
    }

    /// Number of transactions sent from `address`, which is also the nonce
    /// its next transaction needs.
    pub fn get_transaction_count(
        &self,
        address: Address,
        block: impl Into<BlockRef>,
    ) -> PendingCall<HexQuantity> {
        self.client
            .call("eth_getTransactionCount", (address, block.into()))
    }

    pub fn get_block_transaction_count(
        &self,
        block: impl Into<BlockId>,
    ) -> PendingCall<HexQuantity> {
        match block.into() {
            BlockId::Hash(hash) => self
                .client
                .call("eth_getBlockTransactionCountByHash", (hash,)),
            BlockId::Ref(block) => self
                .client
                .call("eth_getBlockTransactionCountByNumber", (block,)),
        }
    }

    pub fn get_uncle_count(&self, block: impl Into<BlockId>) -> PendingCall<HexQuantity> {
        match block.into() {
            BlockId::Hash(hash) => self.client.call("eth_getUncleCountByBlockHash", (hash,)),
            BlockId::Ref(block) => self
                .client
                .call("eth_getUncleCountByBlockNumber", (block,)),
        }
    }

    /// The uncle at position `index` of a block. Uncles never include
    /// transactions.
    pub fn get_uncle(
        &self,
        block: impl Into<BlockId>,
        index: impl Into<HexQuantity>,
    ) -> PendingCall<Option<BlockJson>> {
        let index = index.into();
        match block.into() {
            BlockId::Hash(hash) => self
                .client
                .call("eth_getUncleByBlockHashAndIndex", (hash, index)),
            BlockId::Ref(block) => self
                .client
                .call("eth_getUncleByBlockNumberAndIndex", (block, index)),
        }
    }

    /// Deployed bytecode at `address`, `0x` for accounts without code.
    pub fn get_code(&self, address: Address, block: impl Into<BlockRef>) -> PendingCall<HexData> {
        self.client.call("eth_getCode", (address, block.into()))
    }

    pub fn get_work(&self) -> PendingCall<Work> {
        self.client.call("eth_getWork", ())
    }

    /// Submits a proof-of-work solution. Resolves to whether the node
    /// accepted it.
    pub fn submit_work(&self, nonce: Nonce, pow_hash: Hex32, digest: Hex32) -> PendingCall<bool> {
        self.client
            .call("eth_submitWork", (nonce, pow_hash, digest))
    }

    /// Reports the hash rate of the miner identified by `id`.
    pub fn submit_hashrate(&self, hashrate: Hex32, id: Hex32) -> PendingCall<bool> {
        self.client.call("eth_submitHashrate", (hashrate, id))
    }

    pub fn coinbase(&self) -> PendingCall<Address> {
        self.client.call("eth_coinbase", ())
    }

    /// Hashes per second the node is mining with.
    pub fn hashrate(&self) -> PendingCall<HexQuantity> {
        self.client.call("eth_hashrate", ())
    }

    pub fn mining(&self) -> PendingCall<bool> {
        self.client.call("eth_mining", ())
    }

    pub fn gas_price(&self) -> PendingCall<Wei> {
        self.client.call("eth_gasPrice", ())
    }

    pub fn accounts(&self) -> PendingCall<Vec<Address>> {
        self.client.call("eth_accounts", ())
    }

    pub fn compilers(&self) -> PendingCall<Vec<String>> {
        self.client.call("eth_getCompilers", ())
    }

    /// Has the node sign and broadcast `transaction` with the key of its
    /// `from` account.
    pub fn send_transaction(&self, transaction: &Transaction) -> PendingCall<TransactionId> {
        self.client.call("eth_sendTransaction", (transaction,))
    }

    /// Broadcasts an already signed transaction.
    pub fn send_raw_transaction(&self, signed: HexData) -> PendingCall<TransactionId> {
        self.client.call("eth_sendRawTransaction", (signed,))
    }

    /// Signs `data` with the key of `address`, which must be unlocked on the
    /// node.
    pub fn sign(&self, address: Address, data: HexData) -> PendingCall<HexData> {
        self.client.call("eth_sign", (address, data))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            Error,
            jsonrpc::{ErrorObject, Request, Response},
            mock::MockTransport,
            transport::Transport,
        },
        hex_literal::hex,
        mockall::predicate::eq,
        model::{BlockHash, BlockTag},
        serde_json::json,
        std::time::Duration,
    };

    const ADDRESS: Address = Address(hex!("0000000000000000000000000000000000000001"));
    const BLOCK_HASH: [u8; 32] =
        hex!("1111111111111111111111111111111111111111111111111111111111111111");

    #[tokio::test]
    async fn get_balance() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getBalance".to_owned()),
                eq(vec![
                    json!("0x0000000000000000000000000000000000000001"),
                    json!("latest"),
                ]),
            )
            .returning(|_, _| Ok(json!("0x0234c8a3397aab58")));

        let client = RpcClient::new(transport);
        let balance = client
            .eth()
            .get_balance(ADDRESS, BlockTag::Latest)
            .await
            .unwrap();
        assert_eq!(balance, Wei::from(158_972_490_234_375_000_u64));
    }

    #[tokio::test]
    async fn block_number_and_balance_at_height() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_blockNumber".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!("0x4b7")));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getBalance".to_owned()),
                eq(vec![
                    json!("0x0000000000000000000000000000000000000001"),
                    json!("0x4b7"),
                ]),
            )
            .returning(|_, _| Ok(json!("0x0")));

        let client = RpcClient::new(transport);
        let height = client.eth().block_number().await.unwrap();
        assert_eq!(height.to_u64(), Some(1207));
        let balance = client.eth().get_balance(ADDRESS, height).await.unwrap();
        assert_eq!(balance, Wei::zero());
    }

    #[tokio::test]
    async fn get_block_dispatches_on_hash_or_number() {
        let transport = MockTransport::new();
        let block = json!({
            "number": "0x1b4",
            "hash": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "parentHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
            "nonce": "0x689056015818adbe",
            "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
            "logsBloom": "0x00",
            "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "stateRoot": "0xd5855eb08b3387c0af375e9cdb6acfc05eb8f519e419b874b6ff2ffda7ed1dff",
            "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
            "miner": "0x05a56e2d52c817161883f50c441c3228cfe54d9f",
            "difficulty": "0x3ff800000",
            "extraData": "0x476574682f76312e302e302f6c696e75782f676f312e342e32",
            "gasLimit": "0x1388",
            "gasUsed": "0x0",
            "timestamp": "0x54e34e8e",
            "transactions": [],
            "uncles": [],
        });
        let by_hash = block.clone();
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getBlockByHash".to_owned()),
                eq(vec![json!(BlockHash::from(BLOCK_HASH)), json!(true)]),
            )
            .returning(move |_, _| Ok(by_hash.clone()));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getBlockByNumber".to_owned()),
                eq(vec![json!("0x1b4"), json!(false)]),
            )
            .returning(move |_, _| Ok(block.clone()));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getBlockByNumber".to_owned()),
                eq(vec![json!("pending"), json!(false)]),
            )
            .returning(|_, _| Ok(json!(null)));

        let client = RpcClient::new(transport);
        let by_hash = client
            .eth()
            .get_block(BlockHash::from(BLOCK_HASH), true)
            .await
            .unwrap()
            .unwrap();
        let by_number = client.eth().get_block(436_u64, false).await.unwrap().unwrap();
        assert_eq!(by_hash, by_number);
        assert_eq!(by_hash.hash, Some(BlockHash::from(BLOCK_HASH)));

        let pending = client
            .eth()
            .get_block(BlockTag::Pending, false)
            .await
            .unwrap();
        assert_eq!(pending, None);
    }

    #[tokio::test]
    async fn indexed_lookups() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getTransactionByBlockNumberAndIndex".to_owned()),
                eq(vec![json!("latest"), json!("0x2")]),
            )
            .returning(|_, _| Ok(json!(null)));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getUncleByBlockHashAndIndex".to_owned()),
                eq(vec![json!(BlockHash::from(BLOCK_HASH)), json!("0x0")]),
            )
            .returning(|_, _| Ok(json!(null)));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getUncleCountByBlockNumber".to_owned()),
                eq(vec![json!("earliest")]),
            )
            .returning(|_, _| Ok(json!("0x1")));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getBlockTransactionCountByHash".to_owned()),
                eq(vec![json!(BlockHash::from(BLOCK_HASH))]),
            )
            .returning(|_, _| Ok(json!("0xa")));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getTransactionByBlockHashAndIndex".to_owned()),
                eq(vec![json!(BlockHash::from(BLOCK_HASH)), json!("0x0")]),
            )
            .returning(|_, _| Ok(json!(null)));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getUncleByBlockNumberAndIndex".to_owned()),
                eq(vec![json!("0x1b4"), json!("0x1")]),
            )
            .returning(|_, _| Ok(json!(null)));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getUncleCountByBlockHash".to_owned()),
                eq(vec![json!(BlockHash::from(BLOCK_HASH))]),
            )
            .returning(|_, _| Ok(json!("0x0")));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getBlockTransactionCountByNumber".to_owned()),
                eq(vec![json!("pending")]),
            )
            .returning(|_, _| Ok(json!("0x3")));

        let client = RpcClient::new(transport);
        let eth = client.eth();
        assert_eq!(
            eth.get_transaction_by_block(BlockTag::Latest, 2_u64)
                .await
                .unwrap(),
            None
        );
        assert_eq!(
            eth.get_uncle(BlockHash::from(BLOCK_HASH), 0_u64)
                .await
                .unwrap(),
            None
        );
        assert_eq!(
            eth.get_uncle_count(BlockTag::Earliest).await.unwrap(),
            HexQuantity::from(1_u64)
        );
        assert_eq!(
            eth.get_block_transaction_count(BlockHash::from(BLOCK_HASH))
                .await
                .unwrap(),
            HexQuantity::from(10_u64)
        );
        assert_eq!(
            eth.get_transaction_by_block(BlockHash::from(BLOCK_HASH), 0_u64)
                .await
                .unwrap(),
            None
        );
        assert_eq!(eth.get_uncle(436_u64, 1_u64).await.unwrap(), None);
        assert_eq!(
            eth.get_uncle_count(BlockHash::from(BLOCK_HASH))
                .await
                .unwrap(),
            HexQuantity::zero()
        );
        assert_eq!(
            eth.get_block_transaction_count(BlockTag::Pending)
                .await
                .unwrap(),
            HexQuantity::from(3_u64)
        );
    }

    #[tokio::test]
    async fn unknown_transaction_is_none() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getTransactionByHash".to_owned()),
                eq(vec![json!(TransactionId::from([0; 32]))]),
            )
            .returning(|_, _| Ok(json!(null)));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getTransactionReceipt".to_owned()),
                eq(vec![json!(TransactionId::from([0; 32]))]),
            )
            .returning(|_, _| Ok(json!(null)));

        let client = RpcClient::new(transport);
        let id = TransactionId::from([0; 32]);
        assert_eq!(client.eth().get_transaction(id).await.unwrap(), None);
        assert_eq!(client.eth().get_transaction_receipt(id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn send_transaction_omits_unset_fields() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_sendTransaction".to_owned()),
                eq(vec![json!({
                    "from": "0x0000000000000000000000000000000000000001",
                    "gas": "0x76c0",
                    "value": "0x9184e72a",
                    "data": "0x6060",
                })]),
            )
            .returning(|_, _| {
                Ok(json!(
                    "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331c"
                ))
            });

        let client = RpcClient::new(transport);
        let transaction = Transaction::builder(ADDRESS)
            .gas(30_400_u64)
            .value(2_441_406_250_u64)
            .data(HexData::from(vec![0x60, 0x60]))
            .build();
        assert!(transaction.is_contract_creation());
        let id = client
            .eth()
            .send_transaction(&transaction)
            .await
            .unwrap();
        assert_eq!(
            id.to_string(),
            "0xe670ec64341771606e55d6b4ca35a1a6b75ee3d5145a99d05921026d1527331c"
        );
    }

    #[tokio::test]
    async fn rejected_raw_transaction() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_sendRawTransaction".to_owned()), eq(vec![json!("0xf86c")]))
            .returning(|_, _| {
                Err(Error::Rpc(ErrorObject::new(-32000, "nonce too low")))
            });

        let client = RpcClient::new(transport);
        let err = client
            .eth()
            .send_raw_transaction(HexData::from(vec![0xf8, 0x6c]))
            .await
            .unwrap_err();
        assert_eq!(err.rpc_error().unwrap().message, "nonce too low");
    }

    #[tokio::test]
    async fn mining_commands() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_getWork".to_owned()), eq(vec![]))
            .returning(|_, _| {
                Ok(json!([
                    "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
                    "0x5eed00000000000000000000000000005eed0000000000000000000000000000",
                    "0xd1ff1c01710000000000000000000000d1ff1c01710000000000000000000000",
                    "0xe5a2f",
                ]))
            });
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_submitWork".to_owned()),
                eq(vec![
                    json!("0x0000000000000001"),
                    json!("0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"),
                    json!("0xd1fe5700000000000000000000000000d1fe5700000000000000000000000000"),
                ]),
            )
            .returning(|_, _| Ok(json!(false)));
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_hashrate".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!("0x38a")));
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_mining".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!(true)));

        let client = RpcClient::new(transport);
        let eth = client.eth();
        let work = eth.get_work().await.unwrap();
        assert_eq!(work.block_number, Some(HexQuantity::from(940_591_u64)));
        let digest: Hex32 = "0xd1fe5700000000000000000000000000d1fe5700000000000000000000000000"
            .parse()
            .unwrap();
        let accepted = eth
            .submit_work(Nonce::from_u64(1), work.pow_hash, digest)
            .await
            .unwrap();
        assert!(!accepted);
        assert_eq!(eth.hashrate().await.unwrap().to_u64(), Some(906));
        assert!(eth.mining().await.unwrap());
    }

    #[tokio::test]
    async fn node_info() {
        let transport = MockTransport::new();
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_accounts".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!(["0x0000000000000000000000000000000000000001"])));
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_getCompilers".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!([])));
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_syncing".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!(false)));
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_gasPrice".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!("0x4a817c800")));

        let client = RpcClient::new(transport);
        let eth = client.eth();
        assert_eq!(eth.accounts().await.unwrap(), vec![ADDRESS]);
        assert!(eth.compilers().await.unwrap().is_empty());
        assert!(!eth.syncing().await.unwrap().is_syncing());
        assert_eq!(eth.gas_price().await.unwrap(), Wei::from_gwei(20));
    }

    #[tokio::test]
    async fn account_queries() {
        let transport = MockTransport::new();
        let address = json!("0x0000000000000000000000000000000000000001");
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getTransactionCount".to_owned()),
                eq(vec![address.clone(), json!("pending")]),
            )
            .returning(|_, _| Ok(json!("0x1")));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_getCode".to_owned()),
                eq(vec![address.clone(), json!("0x2")]),
            )
            .returning(|_, _| {
                Ok(json!(
                    "0x600160008035811a818181146012578301005b601b6001356025565b8060005260206000f25b\
                     600060078202905091905056"
                ))
            });
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_sign".to_owned()),
                eq(vec![address.clone(), json!("0xdeadbeef")]),
            )
            .returning(|_, _| Ok(json!("0x1b")));
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_coinbase".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!("0x0000000000000000000000000000000000000001")));
        transport
            .mock()
            .expect_execute()
            .with(eq("eth_chainId".to_owned()), eq(vec![]))
            .returning(|_, _| Ok(json!("0x3d")));
        transport
            .mock()
            .expect_execute()
            .with(
                eq("eth_submitHashrate".to_owned()),
                eq(vec![
                    json!("0x0000000000000000000000000000000000000000000000000000000000500000"),
                    json!("0x59daa26581d0acd1fce254fb7e85952f4c09d0915afd33d3886cd914bc7d283c"),
                ]),
            )
            .returning(|_, _| Ok(json!(true)));

        let client = RpcClient::new(transport);
        let eth = client.eth();
        assert_eq!(
            eth.get_transaction_count(ADDRESS, BlockTag::Pending)
                .await
                .unwrap(),
            HexQuantity::from(1_u64)
        );
        assert_eq!(eth.get_code(ADDRESS, 2_u64).await.unwrap().len(), 50);
        assert_eq!(
            eth.sign(ADDRESS, HexData::from(hex!("deadbeef")))
                .await
                .unwrap(),
            HexData::from(vec![0x1b_u8])
        );
        assert_eq!(eth.coinbase().await.unwrap(), ADDRESS);
        assert_eq!(eth.chain_id().await.unwrap().to_u64(), Some(61));
        let hashrate = Hex32(hex!(
            "0000000000000000000000000000000000000000000000000000000000500000"
        ));
        let id = Hex32(hex!(
            "59daa26581d0acd1fce254fb7e85952f4c09d0915afd33d3886cd914bc7d283c"
        ));
        assert!(eth.submit_hashrate(hashrate, id).await.unwrap());
    }

    struct Unresponsive;

    #[async_trait::async_trait]
    impl Transport for Unresponsive {
        async fn send(&self, _: Request) -> Result<Response, Error> {
            futures::future::pending().await
        }
    }

    #[tokio::test]
    async fn unresponsive_node_times_out() {
        let client = RpcClient::new(Unresponsive);
        let err = client
            .eth()
            .block_number()
            .with_deadline(Duration::from_millis(10))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout(_)));
    }
}
