//! Offline farming guidance for the chat panel
//!
//! Used when the expert advice service cannot be reached: the question is
//! scanned for crop, season and topic keywords and a canned answer is given.

use crate::models::{Crop, Season};

const OFFLINE_NOTE: &str = "**Note:** For detailed, personalized advice, please start the AgriGuru backend server.";

/// Pull a crop and a season out of a free-text question.
/// Matching is case-insensitive; the first listed keyword group wins.
pub fn extract_crop_and_season(query: &str) -> (Option<Crop>, Option<Season>) {
    let query = query.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| query.contains(w));

    let crop = if has(&["rice", "paddy"]) {
        Some(Crop::Rice)
    } else if has(&["wheat"]) {
        Some(Crop::Wheat)
    } else if has(&["cotton"]) {
        Some(Crop::Cotton)
    } else if has(&["maize", "corn"]) {
        Some(Crop::Maize)
    } else {
        None
    };

    let season = if has(&["kharif", "monsoon"]) {
        Some(Season::Kharif)
    } else if has(&["rabi", "winter"]) {
        Some(Season::Rabi)
    } else if has(&["summer"]) {
        Some(Season::Summer)
    } else {
        None
    };

    (crop, season)
}

/// Canned advice for when the advice service is offline
pub fn fallback_advice(query: &str, crop: Option<Crop>) -> String {
    let lower = query.to_lowercase();
    let about = |c: Crop| crop == Some(c) || lower.contains(c.code());

    if about(Crop::Rice) {
        return crop_guide(
            "Rice",
            &[
                "Plant during kharif season (June-July)",
                "Requires 800-1200mm rainfall",
                "Optimal temperature: 20-35°C",
                "Soil pH: 5.5-7.0",
                "Harvest in 90-120 days",
            ],
        );
    }

    if about(Crop::Wheat) {
        return crop_guide(
            "Wheat",
            &[
                "Plant during rabi season (November-December)",
                "Requires 600-800mm rainfall",
                "Optimal temperature: 15-25°C",
                "Soil pH: 6.0-7.5",
                "Harvest in 100-130 days",
            ],
        );
    }

    if about(Crop::Cotton) {
        return crop_guide(
            "Cotton",
            &[
                "Plant during kharif season (May-June)",
                "Requires 600-800mm rainfall",
                "Optimal temperature: 21-35°C",
                "Soil pH: 5.8-8.0",
                "Harvest in 160-180 days",
            ],
        );
    }

    if lower.contains("fertilizer") || lower.contains("nutrient") {
        return [
            "🧪 **General Fertilizer Guidelines** (Offline Mode)",
            "",
            "**Basic NPK Requirements:**",
            "• **Nitrogen (N):** For leaf growth",
            "• **Phosphorus (P):** For root development",
            "• **Potassium (K):** For disease resistance",
            "• Apply based on soil test results",
            "• Use organic alternatives when possible",
            "",
            "**Note:** For crop-specific fertilizer schedules, please start the AgriGuru backend server.",
        ]
        .join("\n");
    }

    if lower.contains("pest") || lower.contains("disease") {
        return [
            "🐛 **General Pest Management** (Offline Mode)",
            "",
            "**Integrated Pest Management:**",
            "• Regular field monitoring",
            "• Use resistant crop varieties",
            "• Practice crop rotation",
            "• Biological control methods",
            "• Targeted chemical control if needed",
            "",
            "**Note:** For specific pest identification and treatment, please start the AgriGuru backend server.",
        ]
        .join("\n");
    }

    if lower.contains("season") || lower.contains("calendar") {
        return [
            "📅 **Seasonal Farming Calendar** (Offline Mode)",
            "",
            "**General Seasonal Guidelines:**",
            "• **Kharif Season (June-October):** Rice, cotton, sugarcane",
            "• **Rabi Season (November-April):** Wheat, barley, mustard",
            "• **Summer Season (March-June):** Fodder crops, vegetables",
            "• Plan according to monsoon patterns",
            "",
            "**Note:** For detailed seasonal activities, please start the AgriGuru backend server.",
        ]
        .join("\n");
    }

    format!(
        "🌾 **AgriGuru Farming Assistant** (Offline Mode)\n\n\
         I'm currently unable to connect to the expert advice service, but I can provide basic farming guidance.\n\n\
         **Your question:** \"{}\"\n\n\
         The expert service can provide detailed, personalized advice for:\n\
         • Crop cultivation guides\n\
         • Fertilizer recommendations\n\
         • Pest management strategies\n\
         • Seasonal farming calendar\n\
         • Market insights\n\
         • Weather-based advice",
        query
    )
}

fn crop_guide(name: &str, tips: &[&str]) -> String {
    let mut text = format!(
        "🌾 **{name} Cultivation Tips** (Offline Mode)\n\n**Basic {name} Growing Guidelines:**\n"
    );
    for tip in tips {
        text.push_str("• ");
        text.push_str(tip);
        text.push('\n');
    }
    text.push('\n');
    text.push_str(OFFLINE_NOTE);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_crop() {
        assert_eq!(extract_crop_and_season("When to sow PADDY?").0, Some(Crop::Rice));
        assert_eq!(extract_crop_and_season("wheat yellowing").0, Some(Crop::Wheat));
        assert_eq!(extract_crop_and_season("corn yield").0, Some(Crop::Maize));
        assert_eq!(extract_crop_and_season("how much water").0, None);
    }

    #[test]
    fn test_extract_season() {
        assert_eq!(
            extract_crop_and_season("monsoon sowing").1,
            Some(Season::Kharif)
        );
        assert_eq!(extract_crop_and_season("Winter crops").1, Some(Season::Rabi));
        assert_eq!(extract_crop_and_season("summer fodder").1, Some(Season::Summer));
        assert_eq!(extract_crop_and_season("anything").1, None);
    }

    #[test]
    fn test_rice_keyword_wins_over_crop_order() {
        // "rice" is matched before "wheat" regardless of position in the text
        let (crop, _) = extract_crop_and_season("wheat after rice");
        assert_eq!(crop, Some(Crop::Rice));
    }

    #[test]
    fn test_crop_match_is_substring() {
        // "price" contains "rice"
        assert_eq!(extract_crop_and_season("market price today").0, Some(Crop::Rice));
        assert!(fallback_advice("market price today", None).contains("Rice Cultivation Tips"));
    }

    #[test]
    fn test_fallback_by_crop_hint() {
        let advice = fallback_advice("what should I plant?", Some(Crop::Cotton));
        assert!(advice.starts_with("🌾 **Cotton Cultivation Tips** (Offline Mode)"));
        assert!(advice.contains("• Harvest in 160-180 days\n"));
        assert!(advice.ends_with(OFFLINE_NOTE));
    }

    #[test]
    fn test_fallback_by_keyword() {
        assert!(fallback_advice("Best fertilizer for tomatoes", None)
            .contains("General Fertilizer Guidelines"));
        assert!(fallback_advice("leaf disease spots", None).contains("General Pest Management"));
        assert!(fallback_advice("crop calendar", None).contains("Seasonal Farming Calendar"));
    }

    #[test]
    fn test_fallback_generic_quotes_question() {
        let advice = fallback_advice("How do I sell at the mandi?", None);
        assert!(advice.contains("**Your question:** \"How do I sell at the mandi?\""));
    }
}
