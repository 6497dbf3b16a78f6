pub mod decoder;
pub mod token;

pub use decoder::{
    detect_liquidity_function, AddLiquidityEthIntent, AddLiquidityIntent, Legs, LiquidityFunction,
    LiquidityIntent, PairedLeg,
};
pub use token::{balance_of, symbol};
