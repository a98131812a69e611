//! Vision pipeline
//!
//! Model loading, image preprocessing and ingredient recognition.

pub mod decoder;
pub mod labels;
pub mod loader;
pub mod preprocess;
pub mod recognizer;

pub use decoder::{IngredientDecoder, LabelDecoder};
pub use labels::{load_labels, parse_labels, LabelEntry};
pub use loader::{VisionModel, INPUT_SIZE};
pub use preprocess::{image_to_tensor, preprocess_image, IMAGENET_MEAN, IMAGENET_STD};
pub use recognizer::{IngredientRecognizer, VisionRecognizer};
