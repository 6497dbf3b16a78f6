mod common;

use common::*;
use ethereum_types::{Address, H256, U256};
use hex_literal::hex;
use liquidity_sniper::sender::{recover_sender, signing_hash};
use sniper_core::error::Error;
use sniper_core::{RawTransaction, TxSignature};

// Exemplo do EIP-155: chave privada 0x4646...46, chain id 1
const EIP155_TX: [u8; 110] = hex!("f86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83");

fn eip155_sender() -> Address {
    Address::from(hex!("9d8a62f656a8d1615c1294fd71e9cfb3e4855a4f"))
}

#[test]
fn eip155_reference_signing_hash() {
    let tx = RawTransaction::decode_legacy(&EIP155_TX).unwrap();
    assert_eq!(
        signing_hash(&tx, Some(1)),
        H256::from(hex!("daf5a779ae972f972197303d7b574746c7ef83eadac0f2791ad23db92e4c8e53"))
    );
}

#[test]
fn eip155_reference_sender() {
    let tx = RawTransaction::decode_legacy(&EIP155_TX).unwrap();
    assert_eq!(recover_sender(&tx, 1).unwrap(), eip155_sender());
}

#[test]
fn recovery_with_wrong_chain_id_fails() {
    let tx = RawTransaction::decode_legacy(&EIP155_TX).unwrap();
    let err = recover_sender(&tx, 56).unwrap_err();
    assert!(matches!(err, Error::SignatureError(_)));
}

#[test]
fn signed_for_bsc_recovers_only_on_bsc() {
    let data = add_liquidity_calldata(target(), paired(), ether(1), ether(11));
    let tx = sign(unsigned_tx(data, U256::zero()), &secret_key(), 56);

    assert_eq!(recover_sender(&tx, 56).unwrap(), address_of(&secret_key()));
    assert!(matches!(recover_sender(&tx, 97), Err(Error::SignatureError(_))));
    assert!(matches!(recover_sender(&tx, 1), Err(Error::SignatureError(_))));
}

#[test]
fn tampered_payload_recovers_a_different_address() {
    let data = add_liquidity_calldata(target(), paired(), ether(1), ether(11));
    let mut tx = signed_tx(data, U256::zero());
    tx.value = ether(1);

    // assinatura válida sobre outro hash: recupera um endereço diferente ou falha
    match recover_sender(&tx, CHAIN_ID) {
        Ok(addr) => assert_ne!(addr, address_of(&secret_key())),
        Err(e) => assert!(matches!(e, Error::SignatureError(_))),
    }
}

#[test]
fn unprotected_legacy_signature_is_recovered() {
    let mut tx = unsigned_tx(vec![], U256::zero());
    let hash = signing_hash(&tx, None);
    let secp = secp256k1::Secp256k1::new();
    let msg = secp256k1::Message::from_slice(hash.as_bytes()).unwrap();
    let (rec_id, bytes) = secp
        .sign_ecdsa_recoverable(&msg, &secret_key())
        .serialize_compact();
    tx.signature = Some(TxSignature {
        v: 27 + rec_id.to_i32() as u64,
        r: U256::from_big_endian(&bytes[..32]),
        s: U256::from_big_endian(&bytes[32..]),
    });

    assert_eq!(recover_sender(&tx, CHAIN_ID).unwrap(), address_of(&secret_key()));
}

#[test]
fn out_of_range_r_is_rejected() {
    let mut tx = signed_tx(vec![], U256::zero());
    if let Some(sig) = tx.signature.as_mut() {
        sig.r = U256::MAX;
    }
    assert!(matches!(recover_sender(&tx, CHAIN_ID), Err(Error::SignatureError(_))));
}
