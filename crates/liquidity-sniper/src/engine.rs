//! Motor de decisão: decodifica a adição de liquidez, recupera o remetente,
//! valida saldo e liquidez e decide entre disparar o snipe ou descartar.
//!
//! Cada transação percorre `Received -> Decoded -> SenderResolved -> Evaluated`
//! e termina em exatamente um de: disparo (`Outcome::Dispatched`), descarte
//! (`Outcome::Suppressed`) ou rejeição (`Err`).

use crate::config::{SniperConfig, SniperSettings};
use crate::dex::{
    balance_of, detect_liquidity_function, symbol, AddLiquidityEthIntent, AddLiquidityIntent,
    LiquidityFunction, LiquidityIntent, PairedLeg,
};
use crate::sender::recover_sender;
use crate::types::{Diagnostic, Outcome, Suppression};
use sniper_core::error::{Error, Result};
use sniper_core::traits::{RpcProvider, SnipeExecutor};
use sniper_core::{RawTransaction, RequestContext};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Avaliador de adições de liquidez para um único token alvo.
///
/// Não guarda estado entre chamadas além da configuração imutável, podendo ser
/// compartilhado entre tarefas concorrentes.
pub struct LiquiditySniper {
    provider: Arc<dyn RpcProvider>,
    executor: Arc<dyn SnipeExecutor>,
    config: SniperConfig,
}

impl LiquiditySniper {
    pub fn new(
        provider: Arc<dyn RpcProvider>,
        executor: Arc<dyn SnipeExecutor>,
        config: SniperConfig,
    ) -> Self {
        Self {
            provider,
            executor,
            config,
        }
    }

    /// Valida `settings` resolvendo o chain id pelo provedor quando não informado
    pub async fn connect(
        provider: Arc<dyn RpcProvider>,
        executor: Arc<dyn SnipeExecutor>,
        settings: &SniperSettings,
    ) -> Result<Self> {
        let chain_id = match settings.chain_id {
            Some(id) => id,
            None => provider.network_id().await?,
        };
        let config = SniperConfig::from_settings(settings, Some(chain_id))?;
        debug!(chain_id = config.chain_id, target = ?config.target_token, "sniper configurado");
        Ok(Self::new(provider, executor, config))
    }

    pub fn config(&self) -> &SniperConfig {
        &self.config
    }

    /// Encaminha a transação pela função de liquidez invocada
    pub async fn process(&self, ctx: &RequestContext, tx: &RawTransaction) -> Result<Outcome> {
        match detect_liquidity_function(&tx.data) {
            Some(LiquidityFunction::AddLiquidity) => self.add(ctx, tx).await,
            Some(LiquidityFunction::AddLiquidityETH) => self.add_eth(ctx, tx).await,
            None => Ok(Outcome::Suppressed(Suppression::UnsupportedFunction)),
        }
    }

    /// Avalia uma chamada `addLiquidity` (dois tokens)
    pub async fn add(&self, ctx: &RequestContext, tx: &RawTransaction) -> Result<Outcome> {
        self.evaluate::<AddLiquidityIntent>(ctx, tx).await
    }

    /// Avalia uma chamada `addLiquidityETH` (token mais moeda nativa)
    pub async fn add_eth(&self, ctx: &RequestContext, tx: &RawTransaction) -> Result<Outcome> {
        self.evaluate::<AddLiquidityEthIntent>(ctx, tx).await
    }

    async fn evaluate<I: LiquidityIntent>(
        &self,
        ctx: &RequestContext,
        tx: &RawTransaction,
    ) -> Result<Outcome> {
        let intent = I::decode(&tx.data)?;
        let sender = recover_sender(tx, self.config.chain_id)?;
        debug!(tx = ?tx.hash, function = ?I::FUNCTION, sender = ?sender, "adição de liquidez decodificada");

        let Some(legs) = intent.legs(&self.config) else {
            return Ok(Outcome::Suppressed(Suppression::NotRelevant));
        };

        let balance = ctx
            .run(
                "balanceOf",
                balance_of(&*self.provider, self.config.target_token, sender),
            )
            .await?;

        // provedores de liquidez falsos anunciam mais tokens do que possuem
        if legs.min_target > balance {
            debug!(tx = ?tx.hash, declared = %legs.min_target, balance = %balance, "saldo do remetente insuficiente");
            return Ok(Outcome::Suppressed(Suppression::ImplausibleBalance {
                declared: legs.min_target,
                balance,
            }));
        }

        let expected = self.config.min_liquidity;
        match legs.paired {
            PairedLeg::Token { token, min_amount } => {
                if min_amount > expected {
                    return self.dispatch(ctx, tx).await;
                }
                let display = ctx
                    .run("symbol", async {
                        Ok::<_, Error>(symbol(&*self.provider, token).await)
                    })
                    .await
                    .unwrap_or_else(|e| e.to_string());
                Ok(self.below_threshold(
                    tx,
                    Diagnostic {
                        observed: min_amount,
                        expected,
                        symbol: Some(display),
                    },
                ))
            }
            PairedLeg::Native { declared_min } => {
                if tx.value <= expected {
                    return Ok(self.below_threshold(
                        tx,
                        Diagnostic {
                            observed: tx.value,
                            expected,
                            symbol: None,
                        },
                    ));
                }
                // o valor anexado é o que entra de fato; o mínimo declarado também precisa superar o limite
                if declared_min <= expected {
                    debug!(tx = ?tx.hash, declared = %declared_min, "mínimo nativo declarado abaixo do esperado");
                    return Ok(Outcome::Suppressed(Suppression::DeclaredMinimumTooLow {
                        declared: declared_min,
                        expected,
                    }));
                }
                self.dispatch(ctx, tx).await
            }
        }
    }

    async fn dispatch(&self, ctx: &RequestContext, tx: &RawTransaction) -> Result<Outcome> {
        info!(tx = ?tx.hash, gas_price = %tx.gas_price, "disparando snipe");
        if let Err(e) = self.executor.snipe(ctx, tx.gas_price).await {
            warn!(tx = ?tx.hash, error = %e, "executor de snipe falhou");
            return Err(e);
        }
        Ok(Outcome::Dispatched {
            gas_price: tx.gas_price,
        })
    }

    fn below_threshold(&self, tx: &RawTransaction, diagnostic: Diagnostic) -> Outcome {
        info!(tx = ?tx.hash, "{}", diagnostic);
        Outcome::Suppressed(Suppression::BelowThreshold(diagnostic))
    }
}
