//! Recuperação do remetente de transações legadas assinadas com proteção
//! contra replay (EIP-155).

use ethereum_types::{Address, H256};
use rlp::RlpStream;
use sniper_core::error::{Error, Result};
use sniper_core::utils::{keccak256, recover_signer};
use sniper_core::RawTransaction;

/// Hash assinado de uma transação legada; com `chain_id` segue o EIP-155
pub fn signing_hash(tx: &RawTransaction, chain_id: Option<u64>) -> H256 {
    let mut stream = RlpStream::new_list(if chain_id.is_some() { 9 } else { 6 });
    stream.append(&tx.nonce);
    stream.append(&tx.gas_price);
    stream.append(&tx.gas);
    match tx.to {
        Some(to) => stream.append(&to),
        None => stream.append_empty_data(),
    };
    stream.append(&tx.value);
    stream.append(&tx.data);
    if let Some(id) = chain_id {
        stream.append(&id);
        stream.append(&0u8);
        stream.append(&0u8);
    }
    H256::from(keccak256(&stream.out()))
}

/// Recupera o endereço que assinou `tx` validando o `chain_id` configurado.
///
/// Assinaturas protegidas por outra rede falham com `SignatureError`.
pub fn recover_sender(tx: &RawTransaction, chain_id: u64) -> Result<Address> {
    if let Some(kind) = tx.transaction_type.filter(|t| *t != 0) {
        return Err(Error::SignatureError(format!(
            "tipo de transação {} não suportado",
            kind
        )));
    }
    let sig = tx
        .signature
        .ok_or_else(|| Error::SignatureError("transação sem assinatura".into()))?;

    let (hash, recovery_id) = match sig.v {
        27 | 28 => (signing_hash(tx, None), sig.v - 27),
        v if v >= 35 => {
            let signed_chain = (v - 35) / 2;
            if signed_chain != chain_id {
                return Err(Error::SignatureError(format!(
                    "chain id da assinatura ({}) difere do configurado ({})",
                    signed_chain, chain_id
                )));
            }
            (signing_hash(tx, Some(chain_id)), v - 35 - chain_id * 2)
        }
        v => {
            return Err(Error::SignatureError(format!("valor v inválido: {}", v)));
        }
    };

    recover_signer(&hash, sig.r, sig.s, recovery_id as u8)
}
