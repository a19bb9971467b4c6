use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ============ Wire Models ============

/// One person in an inbound batch. Field names follow the storefront
/// integration that produces these payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletRequest {
    #[serde(rename = "walletNum")]
    pub wallet_num: i64,
    pub recipient: String,
    pub name_cn: String,
    pub datetime: String,
    pub gender: String,
}

/// Inbound batch payload for `POST /api/calculate_golden_card`.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    #[serde(default)]
    pub shopify_order_id: Option<Value>,
    pub wallets: Vec<WalletRequest>,
}

/// Per-wallet outcome. `bos_response` carries the raw BOS payload on a
/// completed call and is `null` when the call failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletResult {
    #[serde(rename = "walletNum")]
    pub wallet_num: i64,
    #[serde(rename = "goldenCard")]
    pub golden_card: Trigram,
    #[serde(rename = "bosResponse")]
    pub bos_response: Option<Value>,
}

/// Aggregated batch outcome; `results` preserves input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub success: bool,
    pub results: Vec<WalletResult>,
}

// ============ External Call Result ============

/// Outcome of one BOS API call.
///
/// A completed HTTP exchange is `Success` regardless of status class; only
/// transport-level errors (connect, timeout, unparseable body) are `Failure`.
#[derive(Debug, Clone)]
pub enum BosCallResult {
    Success { data: Value },
    Failure { message: String },
}

// ============ Golden Card ============

/// The eight trigrams, canonical simplified forms. Serializes as the bare
/// character (e.g. `"离"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    #[serde(rename = "震")]
    Zhen,
    #[serde(rename = "巽")]
    Xun,
    #[serde(rename = "离")]
    Li,
    #[serde(rename = "坤")]
    Kun,
    #[serde(rename = "兑")]
    Dui,
    #[serde(rename = "乾")]
    Qian,
    #[serde(rename = "坎")]
    Kan,
    #[serde(rename = "艮")]
    Gen,
}

impl Trigram {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigram::Zhen => "震",
            Trigram::Xun => "巽",
            Trigram::Li => "离",
            Trigram::Kun => "坤",
            Trigram::Dui => "兑",
            Trigram::Qian => "乾",
            Trigram::Kan => "坎",
            Trigram::Gen => "艮",
        }
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
