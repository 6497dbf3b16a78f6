/*!
 * Sniper Utils
 *
 * Utilitários comuns usados em toda a workspace do sniper
 */

use crate::error::{Error, Result};
use ethereum_types::{Address, H256, U256};
use std::str::FromStr;
use tiny_keccak::{Hasher, Keccak};

/// Metade da ordem da curva secp256k1; assinaturas com `s` acima disso são maleáveis
const SECP256K1_HALF_N: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Converte uma string hexadecimal para Address
pub fn hex_to_address(hex: &str) -> Option<Address> {
    let hex_str = hex.strip_prefix("0x").unwrap_or(hex);
    if hex_str.len() != 40 {
        return None;
    }
    Address::from_str(hex_str).ok()
}

/// Converte uma string decimal para U256
pub fn decimal_to_u256(decimal: &str) -> Option<U256> {
    U256::from_dec_str(decimal.trim()).ok()
}

/// Calcula o hash Keccak-256 de dados
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut result = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut result);
    result
}

/// Formata um valor inteiro em ponto fixo com `precision` casas decimais,
/// arredondando a última casa (metade para cima).
///
/// `format_units(1_500_000_000_000_000_000, 18, 4)` resulta em `"1.5000"`.
pub fn format_units(amount: U256, decimals: u32, precision: u32) -> String {
    if precision >= decimals {
        let integer_part = amount / U256::exp10(decimals as usize);
        let fractional_part = amount % U256::exp10(decimals as usize);
        let scaled = fractional_part * U256::exp10((precision - decimals) as usize);
        return with_fraction(integer_part, scaled, precision);
    }

    let step = U256::exp10((decimals - precision) as usize);
    let half = step / 2;
    let rounded = amount.saturating_add(half) / step;
    let unit = U256::exp10(precision as usize);
    with_fraction(rounded / unit, rounded % unit, precision)
}

fn with_fraction(integer_part: U256, fractional_part: U256, precision: u32) -> String {
    if precision == 0 {
        return integer_part.to_string();
    }
    format!(
        "{}.{:0>width$}",
        integer_part,
        fractional_part.to_string(),
        width = precision as usize
    )
}

/// Formata um valor em wei como unidades de 18 casas com 4 dígitos de precisão
pub fn format_ether(amount: U256) -> String {
    format_units(amount, 18, 4)
}

/// Recupera o endereço que produziu uma assinatura ECDSA sobre `message_hash`.
///
/// `recovery_id` já deve estar normalizado para 0 ou 1.
pub fn recover_signer(message_hash: &H256, r: U256, s: U256, recovery_id: u8) -> Result<Address> {
    if r.is_zero() || s.is_zero() {
        return Err(Error::SignatureError("r ou s igual a zero".into()));
    }
    if s > U256::from_big_endian(&SECP256K1_HALF_N) {
        return Err(Error::SignatureError("valor s acima de n/2".into()));
    }
    if recovery_id > 1 {
        return Err(Error::SignatureError(format!(
            "recovery id inválido: {}",
            recovery_id
        )));
    }

    let mut sig_bytes = [0u8; 64];
    r.to_big_endian(&mut sig_bytes[0..32]);
    s.to_big_endian(&mut sig_bytes[32..64]);

    // Recupera a chave pública usando a biblioteca secp256k1
    let secp = secp256k1::Secp256k1::verification_only();
    let recovery_id = secp256k1::ecdsa::RecoveryId::from_i32(recovery_id as i32)
        .map_err(|e| Error::SignatureError(e.to_string()))?;
    let message = secp256k1::Message::from_slice(message_hash.as_bytes())
        .map_err(|e| Error::SignatureError(e.to_string()))?;
    let recoverable_sig =
        secp256k1::ecdsa::RecoverableSignature::from_compact(&sig_bytes, recovery_id)
            .map_err(|e| Error::SignatureError(e.to_string()))?;

    let public_key = secp
        .recover_ecdsa(&message, &recoverable_sig)
        .map_err(|e| Error::SignatureError(e.to_string()))?;
    let public_key_serialized = public_key.serialize_uncompressed();

    // O endereço é formado pelos últimos 20 bytes do Keccak-256 da chave pública sem o prefixo
    let hash = keccak256(&public_key_serialized[1..]);
    Ok(Address::from_slice(&hash[12..32]))
}
