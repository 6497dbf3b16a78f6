use thiserror::Error;

/// Erros comuns da workspace do sniper
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Erro de comunicação com o node ou revert do contrato consultado
    #[error("Erro de RPC: {0}")]
    RpcError(String),

    /// Calldata menor que o layout esperado
    #[error("Erro de decodificação: calldata de {layout} exige {expected} bytes, recebido {actual}")]
    DecodeError {
        layout: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Transação bruta com RLP malformado
    #[error("RLP inválido: {0}")]
    RlpError(String),

    /// Erro de codificação de dados
    #[error("Erro de codificação: {0}")]
    EncodeError(String),

    /// Remetente não recuperável a partir da assinatura
    #[error("Assinatura inválida: {0}")]
    SignatureError(String),

    /// Configuração inválida
    #[error("Erro de validação: {0}")]
    ValidationError(String),

    /// Prazo do contexto da requisição expirou
    #[error("Timeout: {0}")]
    TimeoutError(String),

    /// O executor de snipe reportou falha
    #[error("Falha no executor: {0}")]
    ExecutorError(String),

    /// Erro genérico
    #[error("{0}")]
    Other(String),
}

/// Tipo de resultado usado em toda a biblioteca
pub type Result<T> = std::result::Result<T, Error>;
