use serde::Serialize;

use super::EncodedImage;
use crate::global_constants::PLANT_DETAIL_CATEGORIES;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentificationRequest {
    pub images: Vec<String>,
    pub plant_details: Vec<&'static str>,
}

impl IdentificationRequest {
    pub fn for_image(image: &EncodedImage) -> Self {
        Self {
            images: vec![image.payload().to_string()],
            plant_details: PLANT_DETAIL_CATEGORIES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taxonomy {
    pub family: String,
    pub genus: String,
    pub species: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CareInstructions {
    pub watering: String,
    pub sunlight: String,
    pub soil: String,
}

/// Normalized identification. Every field is always populated; values the
/// upstream service omitted are empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentificationResult {
    pub id: u64,
    pub name: String,
    pub common_names: Vec<String>,
    pub confidence: f64,
    pub description: String,
    pub taxonomy: Taxonomy,
    pub care_instructions: CareInstructions,
}

impl IdentificationResult {
    pub fn confidence_percent(&self) -> u8 {
        (self.confidence.clamp(0.0, 1.0) * 100.0).round() as u8
    }

    pub fn common_names_label(&self) -> String {
        self.common_names.join(", ")
    }
}
