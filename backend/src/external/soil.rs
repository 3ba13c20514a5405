//! ISRIC SoilGrids v2 client
//!
//! Fetches topsoil (0-30cm) means for pH, nitrogen, organic carbon and
//! texture fractions and converts them to the units the soil classifier uses.

use reqwest::Client;
use serde::Deserialize;
use shared::{GpsCoordinates, SoilProperties};

use crate::error::{AppError, AppResult};

const PROPERTIES: [&str; 6] = ["phh2o", "nitrogen", "soc", "sand", "clay", "silt"];
const DEPTHS: [&str; 3] = ["0-5cm", "5-15cm", "15-30cm"];

/// SoilGrids API client
#[derive(Clone)]
pub struct SoilGridsClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SoilGridsResponse {
    properties: SoilGridsProperties,
}

#[derive(Debug, Deserialize)]
struct SoilGridsProperties {
    layers: Vec<SoilGridsLayer>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsLayer {
    name: String,
    unit_measure: SoilGridsUnit,
    depths: Vec<SoilGridsDepth>,
}

#[derive(Debug, Deserialize)]
struct SoilGridsUnit {
    d_factor: f64,
}

#[derive(Debug, Deserialize)]
struct SoilGridsDepth {
    values: SoilGridsValues,
}

#[derive(Debug, Deserialize)]
struct SoilGridsValues {
    mean: Option<f64>,
}

impl SoilGridsClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch soil properties for a location
    pub async fn get_soil_properties(&self, location: &GpsCoordinates) -> AppResult<SoilProperties> {
        let mut query: Vec<(&str, String)> = vec![
            ("lat", location.latitude.to_string()),
            ("lon", location.longitude.to_string()),
        ];
        query.extend(PROPERTIES.iter().map(|p| ("property", p.to_string())));
        query.extend(DEPTHS.iter().map(|d| ("depth", d.to_string())));
        query.push(("value", "mean".to_string()));

        tracing::info!("Fetching SoilGrids properties for {}", location);

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("SoilGrids request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "SoilGrids error: {} - {}",
                status, body
            )));
        }

        let data: SoilGridsResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse SoilGrids response: {}", e))
        })?;

        convert_response(&data)
    }
}

/// Average the depth means of a layer and apply its scale factor
fn layer_value(data: &SoilGridsResponse, name: &str) -> AppResult<f64> {
    let layer = data
        .properties
        .layers
        .iter()
        .find(|l| l.name == name)
        .ok_or_else(|| AppError::ExternalService(format!("SoilGrids returned no {} layer", name)))?;

    let means: Vec<f64> = layer.depths.iter().filter_map(|d| d.values.mean).collect();
    if means.is_empty() {
        // Water, urban or otherwise unmapped cells
        return Err(AppError::ExternalService(format!(
            "SoilGrids has no {} data for this location",
            name
        )));
    }

    let d_factor = if layer.unit_measure.d_factor > 0.0 {
        layer.unit_measure.d_factor
    } else {
        1.0
    };
    Ok(means.iter().sum::<f64>() / means.len() as f64 / d_factor)
}

fn convert_response(data: &SoilGridsResponse) -> AppResult<SoilProperties> {
    Ok(SoilProperties {
        ph: layer_value(data, "phh2o")?,
        // g/kg -> mg/kg
        nitrogen: layer_value(data, "nitrogen")? * 1000.0,
        // g/kg -> %
        organic_carbon: layer_value(data, "soc")? / 10.0,
        sand: layer_value(data, "sand")?,
        clay: layer_value(data, "clay")?,
        silt: layer_value(data, "silt")?,
        moisture: None,
    })
}
