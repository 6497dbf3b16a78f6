use ethereum_types::U256;
use serde::{Deserialize, Serialize};
use sniper_core::utils::format_ether;
use std::fmt;

/// Resultado terminal da avaliação de uma transação
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// O executor de snipe foi acionado com o gas price da transação
    Dispatched { gas_price: U256 },
    /// Avaliação encerrada sem disparo; não é um erro
    Suppressed(Suppression),
}

impl Outcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Outcome::Dispatched { .. })
    }

    pub fn suppression(&self) -> Option<&Suppression> {
        match self {
            Outcome::Suppressed(s) => Some(s),
            Outcome::Dispatched { .. } => None,
        }
    }
}

/// Motivos pelos quais uma adição de liquidez não gera snipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suppression {
    /// Seletor diferente das funções de liquidez suportadas
    UnsupportedFunction,
    /// A adição não envolve o par configurado
    NotRelevant,
    /// O remetente não possui o mínimo declarado do token alvo
    ImplausibleBalance { declared: U256, balance: U256 },
    /// Liquidez abaixo do mínimo configurado
    BelowThreshold(Diagnostic),
    /// Valor nativo suficiente, mas o mínimo declarado não supera o configurado
    DeclaredMinimumTooLow { declared: U256, expected: U256 },
}

/// Registro de diagnóstico para liquidez abaixo do esperado
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub observed: U256,
    pub expected: U256,
    /// Símbolo da moeda pareada; `None` para moeda nativa
    pub symbol: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "liquidity added but lower than expected ({}): ", symbol)?,
            None => write!(f, "native liquidity added but lower than expected: ")?,
        }
        write!(
            f,
            "{} vs {} expected",
            format_ether(self.observed),
            format_ether(self.expected)
        )
    }
}
