//! Soil service for the soil widget

use serde::Serialize;
use shared::{soil, DataSource, GpsCoordinates, SoilProperties, SoilReport, SoilTexture};

use crate::external::SoilGridsClient;

/// Soil service backed by SoilGrids
#[derive(Clone)]
pub struct SoilService {
    client: SoilGridsClient,
}

/// Soil report for a location
#[derive(Debug, Clone, Serialize)]
pub struct LocationSoilReport {
    pub location: GpsCoordinates,
    pub depth: &'static str,
    pub source: DataSource,
    /// True when SoilGrids failed and the demonstration record was used
    pub is_sample_data: bool,
    #[serde(flatten)]
    pub report: SoilReport,
}

/// Texture class with its field guidance
#[derive(Debug, Clone, Serialize)]
pub struct TextureInfo {
    pub texture: SoilTexture,
    pub characteristics: &'static str,
    pub management: &'static str,
    /// Whether the three fractions add up to about 100%
    pub complete: bool,
}

impl SoilService {
    pub fn new(client: SoilGridsClient) -> Self {
        Self { client }
    }

    /// Soil report for a location, falling back to sample data
    pub async fn report_for_location(&self, location: &GpsCoordinates) -> LocationSoilReport {
        let (properties, source) = match self.client.get_soil_properties(location).await {
            Ok(properties) => (properties, DataSource::Live),
            Err(e) => {
                tracing::warn!("Using sample soil data for {}: {}", location, e);
                (SoilProperties::sample(), DataSource::Fallback)
            }
        };

        LocationSoilReport {
            location: *location,
            depth: "0-30cm",
            source,
            is_sample_data: source.is_fallback(),
            report: soil::analyze_soil(properties),
        }
    }
}

/// Classify caller-supplied soil readings
pub fn analyze(properties: SoilProperties) -> SoilReport {
    soil::analyze_soil(properties)
}

pub fn texture_info(sand: f64, clay: f64, silt: f64) -> TextureInfo {
    let texture = soil::classify_soil_texture(sand, clay, silt);
    TextureInfo {
        texture,
        characteristics: texture.characteristics(),
        management: texture.management(),
        complete: shared::is_complete_texture(sand, clay, silt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::OverallRating;

    #[tokio::test]
    async fn test_falls_back_to_sample_data() {
        let service = SoilService::new(SoilGridsClient::new("http://127.0.0.1:9/query".into()));
        let report = service.report_for_location(&GpsCoordinates::default()).await;

        assert!(report.is_sample_data);
        assert_eq!(report.source, DataSource::Fallback);
        assert_eq!(report.report.properties, SoilProperties::sample());
        assert_eq!(report.report.texture, SoilTexture::Loam);
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = LocationSoilReport {
            location: GpsCoordinates::default(),
            depth: "0-30cm",
            source: DataSource::Live,
            is_sample_data: false,
            report: analyze(SoilProperties::sample()),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "live");
        assert!(json["assessment"].is_object());
        assert!(json["texture"].is_string());
    }

    #[test]
    fn test_analyze_sample() {
        let report = analyze(SoilProperties::sample());
        assert_eq!(report.assessment.overall, OverallRating::Excellent);
    }

    #[test]
    fn test_texture_info() {
        let info = texture_info(70.0, 10.0, 20.0);
        assert_eq!(info.texture, SoilTexture::SandyLoam);
        assert_eq!(info.characteristics, SoilTexture::SandyLoam.characteristics());
        assert!(info.complete);
        assert!(!texture_info(10.0, 10.0, 10.0).complete);
    }
}
