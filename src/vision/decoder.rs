//! Model output decoding
//!
//! Turns the raw output tensor into an ordered ingredient list. The decoder is
//! a strategy so models with other output encodings can plug in their own.

use std::collections::HashSet;

use tract_onnx::prelude::Tensor;

use super::labels::LabelEntry;
use super::loader::model_error;
use crate::error::{Error, Result};
use crate::models::Ingredient;

/// Maps a model output tensor to ingredients with quantities
pub trait IngredientDecoder {
    fn decode(&self, output: &Tensor) -> Result<Vec<Ingredient>>;
}

/// Multi-label classifier decoder
///
/// Expects one logit per label. Each logit goes through a sigmoid; classes at
/// or above the threshold are reported, most confident first, with the
/// label's default portion as quantity.
pub struct LabelDecoder {
    labels: Vec<LabelEntry>,
    threshold: f32,
    max_ingredients: usize,
}

impl LabelDecoder {
    pub fn new(labels: Vec<LabelEntry>, threshold: f32, max_ingredients: usize) -> Self {
        Self {
            labels,
            threshold,
            max_ingredients,
        }
    }

    /// Per-label probabilities, in label order
    pub fn probabilities(&self, output: &Tensor) -> Result<Vec<f32>> {
        let view = output.to_array_view::<f32>().map_err(model_error)?;
        if view.len() != self.labels.len() {
            return Err(Error::ModelOutput(format!(
                "expected {} class scores, model produced {} (shape {:?})",
                self.labels.len(),
                view.len(),
                output.shape()
            )));
        }
        Ok(view.iter().map(|v| sigmoid(*v)).collect())
    }
}

impl IngredientDecoder for LabelDecoder {
    fn decode(&self, output: &Tensor) -> Result<Vec<Ingredient>> {
        let probs = self.probabilities(output)?;

        let mut scored: Vec<(usize, f32)> = probs
            .into_iter()
            .enumerate()
            .filter(|(_, p)| *p >= self.threshold)
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut seen = HashSet::new();
        let mut ingredients = Vec::new();
        for (idx, prob) in scored {
            if ingredients.len() >= self.max_ingredients {
                break;
            }
            let label = &self.labels[idx];
            if !seen.insert(label.name.as_str()) {
                continue;
            }
            tracing::debug!("Recognized {} (p={:.2})", label.name, prob);
            ingredients.push(Ingredient::new(label.name.clone(), label.portion.clone()));
        }

        if ingredients.is_empty() {
            return Err(Error::NothingRecognized);
        }
        Ok(ingredients)
    }
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
