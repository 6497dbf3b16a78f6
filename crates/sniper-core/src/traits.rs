/*!
 * Sniper Traits
 *
 * Colaboradores externos consumidos pelo motor de decisão
 */

use async_trait::async_trait;
use crate::error::Result;
use crate::types::RequestContext;
use ethereum_types::{Address, U256};

/// Trait para provedores RPC
#[async_trait]
pub trait RpcProvider: Send + Sync {
    /// Executa uma chamada somente leitura contra um contrato
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>>;

    /// Obtém o identificador da rede
    async fn network_id(&self) -> Result<u64>;
}

/// Executor responsável por montar e transmitir a compra concorrente
#[async_trait]
pub trait SnipeExecutor: Send + Sync {
    /// Dispara a compra usando `priority_gas_price` como sinal de prioridade
    async fn snipe(&self, ctx: &RequestContext, priority_gas_price: U256) -> Result<()>;
}
