use crate::config::SniperConfig;
use ethereum_types::{Address, U256};
use ethers::utils::id;
use serde::{Deserialize, Serialize};
use sniper_core::error::{Error, Result};

const SELECTOR_LEN: usize = 4;
const SLOT: usize = 32;

/// Funções de adição de liquidez suportadas em routers compatíveis com Uniswap V2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiquidityFunction {
    AddLiquidity,
    AddLiquidityETH,
}

impl LiquidityFunction {
    pub fn signature(&self) -> &'static str {
        match self {
            LiquidityFunction::AddLiquidity => {
                "addLiquidity(address,address,uint256,uint256,uint256,uint256,address,uint256)"
            }
            LiquidityFunction::AddLiquidityETH => {
                "addLiquidityETH(address,uint256,uint256,uint256,address,uint256)"
            }
        }
    }

    pub fn selector(&self) -> [u8; 4] {
        id(self.signature())
    }
}

/// Identifica qual função de liquidez foi invocada
pub fn detect_liquidity_function(data: &[u8]) -> Option<LiquidityFunction> {
    let selector = data.get(..SELECTOR_LEN)?;
    [LiquidityFunction::AddLiquidity, LiquidityFunction::AddLiquidityETH]
        .into_iter()
        .find(|func| selector == func.selector())
}

/// Leitor de slots de 32 bytes sobre o calldata sem o seletor
struct Slots<'a> {
    args: &'a [u8],
}

impl<'a> Slots<'a> {
    /// Valida o comprimento mínimo antes de qualquer leitura
    fn new(calldata: &'a [u8], layout: &'static str, slots: usize) -> Result<Self> {
        let expected = SELECTOR_LEN + slots * SLOT;
        if calldata.len() < expected {
            return Err(Error::DecodeError {
                layout,
                expected,
                actual: calldata.len(),
            });
        }
        Ok(Self {
            args: &calldata[SELECTOR_LEN..expected],
        })
    }

    fn word(&self, index: usize) -> &'a [u8] {
        &self.args[index * SLOT..(index + 1) * SLOT]
    }

    fn uint(&self, index: usize) -> U256 {
        U256::from_big_endian(self.word(index))
    }

    fn address(&self, index: usize) -> Address {
        Address::from_slice(&self.word(index)[12..])
    }
}

/// Lados de uma adição de liquidez vistos a partir do token alvo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Legs {
    /// Quantidade mínima declarada do token alvo
    pub min_target: U256,
    pub paired: PairedLeg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedLeg {
    /// Quantidade mínima declarada do token pareado
    Token { token: Address, min_amount: U256 },
    /// Moeda nativa: o valor anexado à transação e o mínimo declarado
    Native { declared_min: U256 },
}

/// Intenção econômica extraída de uma chamada de adição de liquidez
pub trait LiquidityIntent: Sized + Send {
    const FUNCTION: LiquidityFunction;

    /// Decodifica a intenção a partir do calldata completo (com seletor)
    fn decode(calldata: &[u8]) -> Result<Self>;

    /// Retorna os lados alvo/pareado quando a intenção envolve o par configurado
    fn legs(&self, config: &SniperConfig) -> Option<Legs>;
}

/// `addLiquidity(tokenA, tokenB, amountADesired, amountBDesired, amountAMin, amountBMin, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidityIntent {
    pub token_a: Address,
    pub token_b: Address,
    pub amount_a_desired: U256,
    pub amount_b_desired: U256,
    pub amount_a_min: U256,
    pub amount_b_min: U256,
    pub deadline: U256,
    pub to: Address,
}

impl LiquidityIntent for AddLiquidityIntent {
    const FUNCTION: LiquidityFunction = LiquidityFunction::AddLiquidity;

    fn decode(calldata: &[u8]) -> Result<Self> {
        let slots = Slots::new(calldata, "addLiquidity", 8)?;
        Ok(Self {
            token_a: slots.address(0),
            token_b: slots.address(1),
            amount_a_desired: slots.uint(2),
            amount_b_desired: slots.uint(3),
            amount_a_min: slots.uint(4),
            amount_b_min: slots.uint(5),
            to: slots.address(6),
            deadline: slots.uint(7),
        })
    }

    fn legs(&self, config: &SniperConfig) -> Option<Legs> {
        let (min_target, min_paired) = if self.token_a == config.target_token
            && self.token_b == config.paired_token
        {
            (self.amount_a_min, self.amount_b_min)
        } else if self.token_b == config.target_token && self.token_a == config.paired_token {
            (self.amount_b_min, self.amount_a_min)
        } else {
            return None;
        };

        Some(Legs {
            min_target,
            paired: PairedLeg::Token {
                token: config.paired_token,
                min_amount: min_paired,
            },
        })
    }
}

/// `addLiquidityETH(token, amountTokenDesired, amountTokenMin, amountETHMin, to, deadline)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLiquidityEthIntent {
    pub token: Address,
    pub amount_token_desired: U256,
    pub amount_token_min: U256,
    pub amount_eth_min: U256,
    pub deadline: U256,
    pub to: Address,
}

impl LiquidityIntent for AddLiquidityEthIntent {
    const FUNCTION: LiquidityFunction = LiquidityFunction::AddLiquidityETH;

    fn decode(calldata: &[u8]) -> Result<Self> {
        let slots = Slots::new(calldata, "addLiquidityETH", 6)?;
        Ok(Self {
            token: slots.address(0),
            amount_token_desired: slots.uint(1),
            amount_token_min: slots.uint(2),
            amount_eth_min: slots.uint(3),
            to: slots.address(4),
            deadline: slots.uint(5),
        })
    }

    fn legs(&self, config: &SniperConfig) -> Option<Legs> {
        if self.token != config.target_token {
            return None;
        }
        Some(Legs {
            min_target: self.amount_token_min,
            paired: PairedLeg::Native {
                declared_min: self.amount_eth_min,
            },
        })
    }
}
