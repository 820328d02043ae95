use std::sync::Arc;

use bytepair::{io::load_json_model_path, vocab::BpeModel};

/// Model file arg group.
#[derive(clap::Args, Debug)]
pub struct ModelArgs {
    /// Path to a JSON model file written by `bytepair train`.
    #[arg(long)]
    model: String,
}

impl ModelArgs {
    /// Load the model.
    pub fn load_model(&self) -> Result<Arc<BpeModel<u32>>, Box<dyn std::error::Error>> {
        log::info!("Loading model: {}", self.model);
        let model: BpeModel<u32> = load_json_model_path(&self.model)?;
        Ok(Arc::new(model))
    }
}
