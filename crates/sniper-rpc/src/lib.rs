/*!
 * Sniper RPC
 *
 * Cliente RPC para leituras de contrato e identificação da rede
 */

use async_trait::async_trait;
use ethereum_types::Address;
use sniper_core::{error::Result, Error};
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use web3::{
    transports::{Http, WebSocket},
    types::{BlockId, BlockNumber, Bytes, CallRequest, H160},
    Web3,
};

/// Configuração do cliente RPC
#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub endpoint: String,
    /// Limite por requisição, independente do contexto do chamador
    pub timeout: Duration,
    pub connection_pool_size: usize,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8545".to_string(),
            timeout: Duration::from_secs(5),
            connection_pool_size: 4,
        }
    }
}

/// Enum para diferentes tipos de transporte
pub enum TransportType {
    Http(Web3<Http>),
    WebSocket(Web3<WebSocket>),
}

/// Cliente RPC para a rede alvo
pub struct SniperRpcClient {
    transport: TransportType,
    config: RpcConfig,
}

impl SniperRpcClient {
    /// Cria um novo cliente RPC HTTP
    pub async fn new_http(config: RpcConfig) -> Result<Self> {
        let transport = Http::new(&config.endpoint)
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via HTTP: {}", e)))?;

        let client = Self {
            transport: TransportType::Http(Web3::new(transport)),
            config,
        };
        client.check_connection().await?;
        Ok(client)
    }

    /// Cria um novo cliente RPC WebSocket
    pub async fn new_websocket(config: RpcConfig) -> Result<Self> {
        let transport = WebSocket::new(&config.endpoint)
            .await
            .map_err(|e| Error::RpcError(format!("Falha ao conectar via WebSocket: {}", e)))?;

        let client = Self {
            transport: TransportType::WebSocket(Web3::new(transport)),
            config,
        };
        client.check_connection().await?;
        Ok(client)
    }

    /// Cria um novo cliente baseado na URL
    pub async fn new(config: RpcConfig) -> Result<Self> {
        if config.endpoint.starts_with("ws") {
            Self::new_websocket(config).await
        } else {
            Self::new_http(config).await
        }
    }

    async fn check_connection(&self) -> Result<()> {
        let network = self.net_version().await?;
        debug!(endpoint = %self.config.endpoint, network = %network, "conectado ao node");
        Ok(())
    }

    async fn bounded<T, F>(&self, operation: &str, fut: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, web3::Error>>,
    {
        tokio::time::timeout(self.config.timeout, fut)
            .await
            .map_err(|_| Error::TimeoutError(format!("{} excedeu {:?}", operation, self.config.timeout)))?
            .map_err(|e| Error::RpcError(format!("Falha em {}: {}", operation, e)))
    }

    async fn net_version(&self) -> Result<String> {
        match &self.transport {
            TransportType::Http(web3) => self.bounded("net_version", web3.net().version()).await,
            TransportType::WebSocket(web3) => {
                self.bounded("net_version", web3.net().version()).await
            }
        }
    }

    /// Executa `eth_call` contra o estado pendente
    pub async fn eth_call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        let call_request = CallRequest {
            from: None,
            to: Some(H160::from_slice(to.as_bytes())),
            gas: None,
            gas_price: None,
            value: None,
            data: Some(Bytes(data)),
            transaction_type: None,
            access_list: None,
            max_fee_per_gas: None,
            max_priority_fee_per_gas: None,
        };
        let block = Some(BlockId::Number(BlockNumber::Pending));

        let result = match &self.transport {
            TransportType::Http(web3) => {
                self.bounded("eth_call", web3.eth().call(call_request, block))
                    .await?
            }
            TransportType::WebSocket(web3) => {
                self.bounded("eth_call", web3.eth().call(call_request, block))
                    .await?
            }
        };

        Ok(result.0)
    }
}

/// Implementação da trait RpcProvider do sniper-core
#[async_trait]
impl sniper_core::traits::RpcProvider for SniperRpcClient {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        self.eth_call(to, data).await
    }

    async fn network_id(&self) -> Result<u64> {
        let version = self.net_version().await?;
        version
            .trim()
            .parse::<u64>()
            .map_err(|e| Error::RpcError(format!("net_version inválido '{}': {}", version, e)))
    }
}

/// Pool de conexões RPC
pub struct RpcConnectionPool {
    clients: Vec<Arc<SniperRpcClient>>,
    current_index: AtomicUsize,
}

impl RpcConnectionPool {
    /// Cria um novo pool de conexões
    pub async fn new(config: RpcConfig) -> Result<Self> {
        let pool_size = config.connection_pool_size.max(1);
        let mut clients = Vec::with_capacity(pool_size);

        for _ in 0..pool_size {
            let client = Arc::new(SniperRpcClient::new(config.clone()).await?);
            clients.push(client);
        }

        Ok(Self {
            clients,
            current_index: AtomicUsize::new(0),
        })
    }

    /// Obtém o próximo cliente do pool (round-robin)
    pub fn get_client(&self) -> Arc<SniperRpcClient> {
        let index = self.current_index.fetch_add(1, Ordering::Relaxed) % self.clients.len();
        self.clients[index].clone()
    }

    pub fn size(&self) -> usize {
        self.clients.len()
    }
}

#[async_trait]
impl sniper_core::traits::RpcProvider for RpcConnectionPool {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>> {
        let client = self.get_client();
        client.eth_call(to, data).await
    }

    async fn network_id(&self) -> Result<u64> {
        let client = self.get_client();
        sniper_core::traits::RpcProvider::network_id(&*client).await
    }
}
