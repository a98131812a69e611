//! Ingredient recognizer
//!
//! Image path in, ordered ingredient list out.

use std::path::Path;

use super::decoder::{IngredientDecoder, LabelDecoder};
use super::labels::load_labels;
use super::loader::VisionModel;
use super::preprocess::preprocess_image;
use crate::config::VisionConfig;
use crate::error::Result;
use crate::models::Ingredient;

/// Identifies ingredients and quantities in a meal photo
pub trait IngredientRecognizer {
    fn recognize(&self, image_path: &Path) -> Result<Vec<Ingredient>>;
}

/// Recognizer backed by an ONNX model and an output decoder
pub struct VisionRecognizer {
    model: VisionModel,
    decoder: Box<dyn IngredientDecoder>,
}

impl VisionRecognizer {
    pub fn new(model: VisionModel, decoder: Box<dyn IngredientDecoder>) -> Self {
        Self { model, decoder }
    }

    /// Load the model and its label sidecar
    pub fn from_config(config: &VisionConfig) -> Result<Self> {
        let labels = load_labels(&config.resolved_labels_path())?;
        let model = VisionModel::load(&config.model_path)?;
        let decoder = LabelDecoder::new(labels, config.threshold, config.max_ingredients);
        Ok(Self::new(model, Box::new(decoder)))
    }
}

impl IngredientRecognizer for VisionRecognizer {
    fn recognize(&self, image_path: &Path) -> Result<Vec<Ingredient>> {
        let input = preprocess_image(image_path)?;
        let output = self.model.run(input)?;
        let ingredients = self.decoder.decode(&output)?;

        tracing::info!(
            "Recognized {} ingredient(s) in {} using {}",
            ingredients.len(),
            image_path.display(),
            self.model.path().display()
        );
        Ok(ingredients)
    }
}
