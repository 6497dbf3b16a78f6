#![allow(dead_code)]

use async_trait::async_trait;
use ethereum_types::{Address, H256, U256};
use ethers::abi::{encode, Token};
use liquidity_sniper::dex::LiquidityFunction;
use liquidity_sniper::sender::signing_hash;
use liquidity_sniper::SniperConfig;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use sniper_core::error::{Error, Result};
use sniper_core::traits::{RpcProvider, SnipeExecutor};
use sniper_core::utils::keccak256;
use sniper_core::{RawTransaction, RequestContext, TxSignature};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const CHAIN_ID: u64 = 56;
pub const BALANCE_OF: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];
pub const SYMBOL: [u8; 4] = [0x95, 0xd8, 0x9b, 0x41];

pub fn target() -> Address {
    Address::repeat_byte(0x71)
}

pub fn paired() -> Address {
    Address::repeat_byte(0xbb)
}

pub fn ether(units: u64) -> U256 {
    U256::exp10(18) * units
}

pub fn config() -> SniperConfig {
    SniperConfig {
        target_token: target(),
        paired_token: paired(),
        min_liquidity: ether(10),
        chain_id: CHAIN_ID,
    }
}

pub fn secret_key() -> SecretKey {
    SecretKey::from_slice(&[0x42; 32]).unwrap()
}

pub fn address_of(key: &SecretKey) -> Address {
    let secp = Secp256k1::new();
    let public = PublicKey::from_secret_key(&secp, key).serialize_uncompressed();
    Address::from_slice(&keccak256(&public[1..])[12..])
}

/// Provedor em memória que responde `balanceOf` e `symbol`
pub struct MockProvider {
    pub balance: U256,
    pub symbol: Option<String>,
    pub fail_balance: bool,
    pub delay: Option<Duration>,
    pub network_id: u64,
    pub balance_calls: AtomicUsize,
    pub symbol_calls: AtomicUsize,
    pub last_balance_account: Mutex<Option<Address>>,
}

impl MockProvider {
    pub fn with_balance(balance: U256) -> Self {
        Self {
            balance,
            symbol: Some("WBNB".into()),
            fail_balance: false,
            delay: None,
            network_id: CHAIN_ID,
            balance_calls: AtomicUsize::new(0),
            symbol_calls: AtomicUsize::new(0),
            last_balance_account: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.balance_calls.load(Ordering::SeqCst) + self.symbol_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RpcProvider for MockProvider {
    async fn call(&self, _to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &data[..4] {
            s if s == BALANCE_OF => {
                self.balance_calls.fetch_add(1, Ordering::SeqCst);
                *self.last_balance_account.lock().unwrap() =
                    Some(Address::from_slice(&data[16..36]));
                if self.fail_balance {
                    Err(Error::RpcError("connection refused".into()))
                } else {
                    Ok(encode(&[Token::Uint(self.balance)]))
                }
            }
            s if s == SYMBOL => {
                self.symbol_calls.fetch_add(1, Ordering::SeqCst);
                match &self.symbol {
                    Some(sym) => Ok(encode(&[Token::String(sym.clone())])),
                    None => Err(Error::RpcError("execution reverted".into())),
                }
            }
            _ => Err(Error::RpcError("unexpected call".into())),
        }
    }

    async fn network_id(&self) -> Result<u64> {
        Ok(self.network_id)
    }
}

/// Executor que apenas registra os gas prices recebidos
#[derive(Default)]
pub struct RecordingExecutor {
    pub fail: bool,
    pub gas_prices: Mutex<Vec<U256>>,
}

impl RecordingExecutor {
    pub fn dispatched(&self) -> Vec<U256> {
        self.gas_prices.lock().unwrap().clone()
    }
}

#[async_trait]
impl SnipeExecutor for RecordingExecutor {
    async fn snipe(&self, _ctx: &RequestContext, priority_gas_price: U256) -> Result<()> {
        if self.fail {
            return Err(Error::ExecutorError("nonce too low".into()));
        }
        self.gas_prices.lock().unwrap().push(priority_gas_price);
        Ok(())
    }
}

pub fn add_liquidity_calldata(token_a: Address, token_b: Address, a_min: U256, b_min: U256) -> Vec<u8> {
    let mut data = LiquidityFunction::AddLiquidity.selector().to_vec();
    data.extend(encode(&[
        Token::Address(token_a),
        Token::Address(token_b),
        Token::Uint(a_min * 2),
        Token::Uint(b_min * 2),
        Token::Uint(a_min),
        Token::Uint(b_min),
        Token::Address(Address::repeat_byte(0xee)),
        Token::Uint(U256::from(1_700_000_000u64)),
    ]));
    data
}

pub fn add_liquidity_eth_calldata(token: Address, token_min: U256, eth_min: U256) -> Vec<u8> {
    let mut data = LiquidityFunction::AddLiquidityETH.selector().to_vec();
    data.extend(encode(&[
        Token::Address(token),
        Token::Uint(token_min * 2),
        Token::Uint(token_min),
        Token::Uint(eth_min),
        Token::Address(Address::repeat_byte(0xee)),
        Token::Uint(U256::from(1_700_000_000u64)),
    ]));
    data
}

pub fn unsigned_tx(data: Vec<u8>, value: U256) -> RawTransaction {
    RawTransaction {
        hash: H256::repeat_byte(0xab),
        nonce: U256::from(7u64),
        gas_price: U256::from(6_000_000_000u64),
        gas: U256::from(3_000_000u64),
        to: Some(Address::repeat_byte(0x10)),
        value,
        data,
        transaction_type: None,
        signature: None,
    }
}

/// Assina a transação com EIP-155 para `chain_id`
pub fn sign(mut tx: RawTransaction, key: &SecretKey, chain_id: u64) -> RawTransaction {
    let hash = signing_hash(&tx, Some(chain_id));
    let secp = Secp256k1::new();
    let msg = Message::from_slice(hash.as_bytes()).unwrap();
    let (rec_id, bytes) = secp.sign_ecdsa_recoverable(&msg, key).serialize_compact();
    tx.signature = Some(TxSignature {
        v: chain_id * 2 + 35 + rec_id.to_i32() as u64,
        r: U256::from_big_endian(&bytes[..32]),
        s: U256::from_big_endian(&bytes[32..]),
    });
    tx
}

pub fn signed_tx(data: Vec<u8>, value: U256) -> RawTransaction {
    sign(unsigned_tx(data, value), &secret_key(), CHAIN_ID)
}
