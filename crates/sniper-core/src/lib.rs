/*!
 * Sniper Core
 *
 * Tipos, erros e contratos de colaboradores compartilhados pela workspace do sniper
 */

pub mod types;
pub mod traits;
pub mod utils;
pub mod error;

// Re-exportações públicas
pub use error::Error;
pub use types::*;
