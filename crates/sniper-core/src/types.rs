/*!
 * Sniper Types
 *
 * Tipos comuns usados em toda a workspace do sniper
 */

use crate::error::{Error, Result};
use crate::utils::keccak256;
use ethereum_types::{Address, H256, U256};
use rlp::Rlp;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Alias para hash de transação
pub type TransactionHash = H256;

/// Componentes `(v, r, s)` de uma assinatura de transação legada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxSignature {
    pub v: u64,
    pub r: U256,
    pub s: U256,
}

/// Transação assinada recebida da fonte externa, somente leitura
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub hash: TransactionHash,
    pub nonce: U256,
    pub gas_price: U256,
    pub gas: U256,
    pub to: Option<Address>,
    pub value: U256,
    pub data: Vec<u8>,
    /// Tipo EIP-2718; `None` ou `Some(0)` para transações legadas
    pub transaction_type: Option<u64>,
    pub signature: Option<TxSignature>,
}

impl RawTransaction {
    /// Decodifica uma transação legada assinada no formato RLP
    /// `[nonce, gasPrice, gas, to, value, data, v, r, s]`.
    pub fn decode_legacy(raw: &[u8]) -> Result<Self> {
        let rlp = Rlp::new(raw);
        let rlp_err = |e: rlp::DecoderError| Error::RlpError(e.to_string());

        if !rlp.is_list() {
            return Err(Error::RlpError("transação legada deve ser uma lista".into()));
        }
        let items = rlp.item_count().map_err(rlp_err)?;
        if items != 9 {
            return Err(Error::RlpError(format!(
                "esperado 9 campos na transação legada, encontrado {}",
                items
            )));
        }

        let to_field = rlp.at(3).map_err(rlp_err)?;
        let to = if to_field.is_empty() {
            None
        } else {
            Some(to_field.as_val::<Address>().map_err(rlp_err)?)
        };

        let r: U256 = rlp.val_at(7).map_err(rlp_err)?;
        let s: U256 = rlp.val_at(8).map_err(rlp_err)?;
        let v: u64 = rlp.val_at(6).map_err(rlp_err)?;
        let signature = if r.is_zero() && s.is_zero() {
            None
        } else {
            Some(TxSignature { v, r, s })
        };

        Ok(Self {
            hash: H256::from(keccak256(raw)),
            nonce: rlp.val_at(0).map_err(rlp_err)?,
            gas_price: rlp.val_at(1).map_err(rlp_err)?,
            gas: rlp.val_at(2).map_err(rlp_err)?,
            to,
            value: rlp.val_at(4).map_err(rlp_err)?,
            data: rlp.val_at(5).map_err(rlp_err)?,
            transaction_type: None,
            signature,
        })
    }

    /// Seletor de função (primeiros 4 bytes do payload), se presente
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4).map(|s| [s[0], s[1], s[2], s[3]])
    }
}

impl From<ethers::types::Transaction> for RawTransaction {
    fn from(tx: ethers::types::Transaction) -> Self {
        let signature = if tx.r.is_zero() && tx.s.is_zero() {
            None
        } else {
            Some(TxSignature {
                v: tx.v.as_u64(),
                r: tx.r,
                s: tx.s,
            })
        };

        Self {
            hash: tx.hash,
            nonce: tx.nonce,
            gas_price: tx.gas_price.unwrap_or_default(),
            gas: tx.gas,
            to: tx.to,
            value: tx.value,
            data: tx.input.to_vec(),
            transaction_type: tx.transaction_type.map(|t| t.as_u64()),
            signature,
        }
    }
}

/// Contexto de uma requisição, com prazo opcional.
///
/// Cada avaliação recebe o seu próprio contexto; o prazo limita as leituras
/// de chain daquela avaliação sem afetar as demais.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Contexto sem prazo
    pub fn background() -> Self {
        Self::default()
    }

    /// Contexto que expira após `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Contexto que expira em `deadline`
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Executa `fut` respeitando o prazo do contexto
    pub async fn run<T, F>(&self, operation: &str, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| Error::TimeoutError(format!("{} excedeu o prazo", operation)))?,
            None => fut.await,
        }
    }
}
