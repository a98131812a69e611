//! Vision model loader
//!
//! Loads an ONNX graph with tract and fixes its input to one 224x224 RGB image.
//! tract plans are inference-only, so there is no training mode to leave.

use std::path::{Path, PathBuf};

use tract_onnx::prelude::*;

use crate::error::{Error, Result};

/// Side length of the square model input
pub const INPUT_SIZE: usize = 224;

type TractSimplePlan = SimplePlan<TypedFact, Box<dyn TypedOp>, Graph<TypedFact, Box<dyn TypedOp>>>;

pub(crate) fn model_error(e: TractError) -> Error {
    Error::Model(format!("{e:#}"))
}

/// A loaded, optimized model ready for inference
pub struct VisionModel {
    plan: TractSimplePlan,
    path: PathBuf,
}

impl VisionModel {
    /// Load a model artifact from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::Config(format!(
                "Vision model not found: {}",
                path.display()
            )));
        }

        tracing::info!("Loading vision model from {}", path.display());
        let plan = tract_onnx::onnx()
            .model_for_path(path)
            .map_err(model_error)?
            .with_input_fact(0, f32::fact([1, 3, INPUT_SIZE, INPUT_SIZE]).into())
            .map_err(model_error)?
            .into_optimized()
            .map_err(model_error)?
            .into_runnable()
            .map_err(model_error)?;
        tracing::info!("Vision model ready");

        Ok(Self {
            plan,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Forward pass; returns the first output tensor
    pub fn run(&self, input: Tensor) -> Result<Tensor> {
        let outputs = self.plan.run(tvec!(input.into())).map_err(model_error)?;
        outputs
            .into_iter()
            .next()
            .map(|value| value.into_tensor())
            .ok_or_else(|| Error::ModelOutput("model produced no outputs".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_model_is_config_error() {
        let err = VisionModel::load(Path::new("/nonexistent/food.onnx")).err().unwrap();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_garbage_model_is_model_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.onnx");
        std::fs::write(&path, b"definitely not protobuf").unwrap();
        let err = VisionModel::load(&path).err().unwrap();
        assert!(matches!(err, Error::Model(_)));
    }
}
