use ethereum_types::{Address, U256};
use ethers::abi::{AbiParser, Function, Token};
use sniper_core::error::{Error, Result};
use sniper_core::traits::RpcProvider;

fn parse(signature: &str) -> Result<Function> {
    AbiParser::default()
        .parse_function(signature)
        .map_err(|e| Error::EncodeError(e.to_string()))
}

/// Consulta o saldo de `account` no contrato ERC-20 `token`
pub async fn balance_of<P>(provider: &P, token: Address, account: Address) -> Result<U256>
where
    P: RpcProvider + ?Sized,
{
    let abi = parse("balanceOf(address) view returns (uint256)")?;
    let data = abi
        .encode_input(&[Token::Address(account)])
        .map_err(|e| Error::EncodeError(e.to_string()))?;
    let out = provider.call(token, data).await?;
    let tokens = abi
        .decode_output(&out)
        .map_err(|e| Error::RpcError(format!("balanceOf sem retorno válido: {}", e)))?;
    tokens
        .into_iter()
        .next()
        .and_then(Token::into_uint)
        .ok_or_else(|| Error::RpcError("balanceOf sem retorno válido".into()))
}

/// Consulta o símbolo de exibição de um token.
///
/// Usado apenas para diagnóstico: qualquer falha devolve o próprio texto do erro.
pub async fn symbol<P>(provider: &P, token: Address) -> String
where
    P: RpcProvider + ?Sized,
{
    match try_symbol(provider, token).await {
        Ok(sym) => sym,
        Err(e) => e.to_string(),
    }
}

async fn try_symbol<P>(provider: &P, token: Address) -> Result<String>
where
    P: RpcProvider + ?Sized,
{
    let abi = parse("symbol() view returns (string)")?;
    let data = abi
        .encode_input(&[])
        .map_err(|e| Error::EncodeError(e.to_string()))?;
    let out = provider.call(token, data).await?;

    if let Ok(tokens) = abi.decode_output(&out) {
        if let Some(sym) = tokens.into_iter().next().and_then(Token::into_string) {
            return Ok(sym);
        }
    }

    // tokens antigos (ex.: MKR) retornam bytes32
    if out.len() == 32 {
        let end = out.iter().position(|b| *b == 0).unwrap_or(out.len());
        if let Ok(sym) = std::str::from_utf8(&out[..end]) {
            return Ok(sym.to_string());
        }
    }

    Err(Error::RpcError("symbol sem retorno válido".into()))
}
