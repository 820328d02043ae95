//! # Model IO
//!
//! JSON persistence for [`crate::vocab::BpeModel`]:
//!
//! ```json
//! {
//!   "vocab": [["a", 97], ["ab", 256]],
//!   "merges": [["a", "b", "ab"]]
//! }
//! ```
//!
//! Vocab entries are listed in id order; merges in training order.

mod json_model;

#[doc(inline)]
pub use json_model::{
    JsonModelFile,
    load_json_model_path,
    read_json_model,
    save_json_model_path,
    write_json_model,
};
