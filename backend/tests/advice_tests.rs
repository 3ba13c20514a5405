//! Offline advice integration tests

use proptest::prelude::*;
use shared::advice::{extract_crop_and_season, fallback_advice};
use shared::{Crop, Season};

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_extract_both() {
        assert_eq!(
            extract_crop_and_season("Best cotton variety for kharif?"),
            (Some(Crop::Cotton), Some(Season::Kharif))
        );
        assert_eq!(
            extract_crop_and_season("Sowing wheat in RABI"),
            (Some(Crop::Wheat), Some(Season::Rabi))
        );
    }

    #[test]
    fn test_maize_has_no_crop_guide() {
        let advice = fallback_advice("maize pest control", Some(Crop::Maize));
        assert!(advice.contains("General Pest Management"));
    }

    #[test]
    fn test_crop_guide_precedes_topic() {
        // Rice guide wins even though the question is about fertilizer
        let advice = fallback_advice("fertilizer for rice", None);
        assert!(advice.contains("Rice Cultivation Tips"));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any question gets a non-empty offline answer
        #[test]
        fn prop_fallback_total(query in ".{0,200}") {
            let (crop, _) = extract_crop_and_season(&query);
            prop_assert!(fallback_advice(&query, crop).contains("(Offline Mode)"));
        }

        /// Keyword matching ignores case
        #[test]
        fn prop_extract_case_insensitive(query in "[a-zA-Z ]{0,60}") {
            prop_assert_eq!(
                extract_crop_and_season(&query),
                extract_crop_and_season(&query.to_uppercase())
            );
        }
    }
}
