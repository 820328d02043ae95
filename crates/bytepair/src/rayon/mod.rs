//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for parallel batch encoders and decoders.

mod rayon_decoder;
mod rayon_encoder;

pub use rayon_decoder::ParallelRayonDecoder;
pub use rayon_encoder::ParallelRayonEncoder;
