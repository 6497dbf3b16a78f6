/*! Liquidity Sniper
 *
 * Crate que inspeciona chamadas `addLiquidity`/`addLiquidityETH` de routers
 * compatíveis com Uniswap V2 e decide se uma compra imediata (snipe) deve ser
 * disparada contra o par recém listado.
 */

pub mod config;
pub mod dex;
pub mod engine;
pub mod sender;
pub mod types;

pub use config::{SniperConfig, SniperSettings};
pub use engine::LiquiditySniper;
pub use types::{Diagnostic, Outcome, Suppression};
