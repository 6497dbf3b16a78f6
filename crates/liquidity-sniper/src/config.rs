use ethereum_types::{Address, U256};
use serde::{Deserialize, Serialize};
use sniper_core::error::{Error, Result};
use sniper_core::utils::{decimal_to_u256, hex_to_address};
use std::convert::TryFrom;

/// Configuração do sniper como lida de arquivo (endereços em hex, valores em wei)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SniperSettings {
    /// Token que se deseja comprar
    pub address_target_token: String,
    /// Moeda base do par (ex.: WBNB, BUSD)
    pub address_base_currency: String,
    /// Liquidez mínima da moeda base, em wei, como string decimal
    pub minimum_liquidity: String,
    /// Quando ausente é resolvido pelo provedor RPC
    #[serde(default)]
    pub chain_id: Option<u64>,
}

impl SniperSettings {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::ValidationError(e.to_string()))
    }
}

/// Configuração imutável usada pelo motor de decisão
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SniperConfig {
    pub target_token: Address,
    pub paired_token: Address,
    pub min_liquidity: U256,
    pub chain_id: u64,
}

impl SniperConfig {
    /// Valida as configurações usando `chain_id` quando o arquivo não o define
    pub fn from_settings(settings: &SniperSettings, chain_id: Option<u64>) -> Result<Self> {
        let target_token = hex_to_address(&settings.address_target_token).ok_or_else(|| {
            Error::ValidationError(format!(
                "endereço do token alvo inválido: {}",
                settings.address_target_token
            ))
        })?;
        let paired_token = hex_to_address(&settings.address_base_currency).ok_or_else(|| {
            Error::ValidationError(format!(
                "endereço da moeda base inválido: {}",
                settings.address_base_currency
            ))
        })?;
        if target_token == paired_token {
            return Err(Error::ValidationError(
                "token alvo e moeda base devem ser diferentes".into(),
            ));
        }
        let min_liquidity = decimal_to_u256(&settings.minimum_liquidity).ok_or_else(|| {
            Error::ValidationError(format!(
                "liquidez mínima inválida: {}",
                settings.minimum_liquidity
            ))
        })?;
        let chain_id = settings
            .chain_id
            .or(chain_id)
            .ok_or_else(|| Error::ValidationError("chain id não definido".into()))?;

        Ok(Self {
            target_token,
            paired_token,
            min_liquidity,
            chain_id,
        })
    }
}

impl TryFrom<SniperSettings> for SniperConfig {
    type Error = Error;

    fn try_from(settings: SniperSettings) -> Result<Self> {
        Self::from_settings(&settings, None)
    }
}
