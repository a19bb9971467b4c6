use crate::models::{BosCallResult, Trigram};
use serde_json::Value;

/// Card returned whenever extraction cannot determine a result.
pub const FALLBACK_CARD: Trigram = Trigram::Li;

/// Palace text variants in match priority order: the eight simplified forms
/// first, then the traditional renderings that differ from them. First match
/// wins, so the order is part of the contract.
const PALACE_VARIANTS: [(&str, Trigram); 10] = [
    ("震", Trigram::Zhen),
    ("巽", Trigram::Xun),
    ("离", Trigram::Li),
    ("坤", Trigram::Kun),
    ("兑", Trigram::Dui),
    ("乾", Trigram::Qian),
    ("坎", Trigram::Kan),
    ("艮", Trigram::Gen),
    ("離", Trigram::Li),
    ("兌", Trigram::Dui),
];

/// Maps a BOS call result onto the golden card.
///
/// Total function: failures, missing or empty palace fields and unrecognized
/// palace text all converge to [`FALLBACK_CARD`].
pub fn extract_golden_card(result: &BosCallResult) -> Trigram {
    let data = match result {
        BosCallResult::Success { data } => data,
        BosCallResult::Failure { message } => {
            tracing::warn!("BOS call failed, using fallback card: {}", message);
            return FALLBACK_CARD;
        }
    };

    let palace = palace_field(data, "life").or_else(|| palace_field(data, "命宫"));

    let Some(palace) = palace else {
        tracing::warn!("No palace field in BOS response, using fallback: {}", data);
        return FALLBACK_CARD;
    };

    if let Some(card) = match_palace(palace) {
        tracing::debug!("Extracted golden card {} from palace {:?}", card, palace);
        return card;
    }

    // Retry with the palace suffix stripped (traditional 宮 and simplified 宫)
    let stripped = palace.replace('宮', "").replace('宫', "");
    if let Some(card) = match_palace(&stripped) {
        tracing::debug!(
            "Extracted golden card {} from palace {:?} after suffix strip",
            card,
            palace
        );
        return card;
    }

    tracing::warn!("Unrecognized palace value {:?}, using fallback card", palace);
    FALLBACK_CARD
}

fn palace_field<'a>(data: &'a Value, field: &str) -> Option<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn match_palace(palace: &str) -> Option<Trigram> {
    PALACE_VARIANTS
        .iter()
        .find(|(variant, _)| palace.contains(variant))
        .map(|&(_, card)| card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn success(data: Value) -> BosCallResult {
        BosCallResult::Success { data }
    }

    #[test]
    fn failure_returns_fallback() {
        let result = BosCallResult::Failure {
            message: "connection refused".to_string(),
        };
        assert_eq!(extract_golden_card(&result), Trigram::Li);
    }

    #[test]
    fn simplified_palace_in_life_field() {
        let result = success(json!({ "life": "坎宫" }));
        assert_eq!(extract_golden_card(&result), Trigram::Kan);
    }

    #[test]
    fn traditional_li_normalizes() {
        let result = success(json!({ "life": "離宮" }));
        assert_eq!(extract_golden_card(&result), Trigram::Li);
    }

    #[test]
    fn traditional_dui_normalizes() {
        let result = success(json!({ "life": "兌宮" }));
        assert_eq!(extract_golden_card(&result), Trigram::Dui);
    }

    #[test]
    fn bare_trigram_without_suffix() {
        let result = success(json!({ "life": "震" }));
        assert_eq!(extract_golden_card(&result), Trigram::Zhen);
    }

    #[test]
    fn falls_back_to_chinese_field_name() {
        let result = success(json!({ "命宫": "巽宮" }));
        assert_eq!(extract_golden_card(&result), Trigram::Xun);
    }

    #[test]
    fn empty_life_field_falls_through() {
        let result = success(json!({ "life": "", "命宫": "艮宫" }));
        assert_eq!(extract_golden_card(&result), Trigram::Gen);
    }

    #[test]
    fn unknown_palace_returns_fallback() {
        let result = success(json!({ "life": "未知" }));
        assert_eq!(extract_golden_card(&result), Trigram::Li);
    }

    #[test]
    fn missing_fields_return_fallback() {
        let result = success(json!({ "other": "乾宮" }));
        assert_eq!(extract_golden_card(&result), Trigram::Li);
    }

    #[test]
    fn non_object_response_returns_fallback() {
        let result = success(json!("乾宮"));
        assert_eq!(extract_golden_card(&result), Trigram::Li);
    }

    #[test]
    fn non_string_palace_returns_fallback() {
        let result = success(json!({ "life": 42 }));
        assert_eq!(extract_golden_card(&result), Trigram::Li);
    }

    #[test]
    fn palace_with_surrounding_text() {
        let result = success(json!({ "life": "命宫：坤宮（吉）" }));
        assert_eq!(extract_golden_card(&result), Trigram::Kun);
    }
}
