/// Sequential batch processing for golden-card calculation
///
/// Each wallet triggers exactly one BOS call followed by card extraction.
/// Calls are strictly sequential with a fixed pause after every processed
/// item; the pause throttles the outbound call rate and is part of the
/// contract with the BOS provider, not tunable per request.
use crate::bos_client::BosApiClient;
use crate::extractor::extract_golden_card;
use crate::models::{BatchOutcome, BosCallResult, WalletRequest, WalletResult};
use std::time::Duration;

const INTER_CALL_DELAY: Duration = Duration::from_millis(500);

/// Processes a batch of wallets in input order.
///
/// A failed BOS call degrades that wallet to the fallback card with a null
/// `bos_response`; it never aborts the batch or flips the outcome's
/// `success` flag. An empty batch returns immediately.
pub async fn process_batch(client: &BosApiClient, wallets: &[WalletRequest]) -> BatchOutcome {
    let mut results = Vec::with_capacity(wallets.len());

    for wallet in wallets {
        tracing::info!(
            "Processing wallet #{} ({}, {}, {})",
            wallet.wallet_num,
            wallet.recipient,
            wallet.datetime,
            wallet.gender
        );

        let call_result = client
            .call(&wallet.name_cn, &wallet.datetime, &wallet.gender)
            .await;
        let golden_card = extract_golden_card(&call_result);
        tracing::info!("Wallet #{} golden card: {}", wallet.wallet_num, golden_card);

        let bos_response = match call_result {
            BosCallResult::Success { data } => Some(data),
            BosCallResult::Failure { .. } => None,
        };

        results.push(WalletResult {
            wallet_num: wallet.wallet_num,
            golden_card,
            bos_response,
        });

        tokio::time::sleep(INTER_CALL_DELAY).await;
    }

    tracing::info!("All {} wallet(s) processed", results.len());

    BatchOutcome {
        success: true,
        results,
    }
}
