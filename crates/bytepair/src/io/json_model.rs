//! # JSON Model Files

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{BPResult, BytePairError},
    types::IdType,
    vocab::{BpeModel, MergeRule, MergeTable, TokenVocab},
};

/// The serialized form of a [`BpeModel`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonModelFile {
    /// ``(token, id)`` entries, in id order.
    pub vocab: Vec<(String, u64)>,

    /// ``(left, right, merged)`` rules, in training order.
    pub merges: Vec<(String, String, String)>,
}

impl JsonModelFile {
    /// Capture a model.
    pub fn from_model<T: IdType>(model: &BpeModel<T>) -> BPResult<Self> {
        let vocab = model
            .vocab()
            .entries()
            .map(|(token, id)| {
                let id = id.to_u64().ok_or_else(|| {
                    BytePairError::VocabConflict(format!("id {id} does not fit in u64"))
                })?;
                Ok((token.to_string(), id))
            })
            .collect::<BPResult<Vec<_>>>()?;

        let merges = model
            .merges()
            .iter()
            .map(|rule| {
                (
                    rule.left().to_string(),
                    rule.right().to_string(),
                    rule.merged().to_string(),
                )
            })
            .collect();

        Ok(Self { vocab, merges })
    }

    /// Rebuild and validate the model.
    ///
    /// ## Returns
    /// The model; or [`BytePairError::VocabConflict`] for non-dense ids, duplicate
    /// tokens, or inconsistent merge rules; or [`BytePairError::VocabSizeOverflow`]
    /// if `T` cannot hold the vocabulary.
    pub fn into_model<T: IdType>(self) -> BPResult<BpeModel<T>> {
        let size = self.vocab.len();
        let entries = self
            .vocab
            .into_iter()
            .map(|(token, id)| match T::from_u64(id) {
                Some(id) => Ok((token, id)),
                None => Err(BytePairError::VocabSizeOverflow { size }),
            })
            .collect::<BPResult<Vec<_>>>()?;
        let vocab = TokenVocab::from_entries(entries)?;

        let merges = self
            .merges
            .iter()
            .map(|(left, right, merged)| MergeRule::from_parts(left, right, merged))
            .collect::<BPResult<MergeTable>>()?;

        BpeModel::init(vocab, merges)
    }
}

/// Write a [`BpeModel`] as JSON.
///
/// ## Arguments
/// * `model` - the model to write.
/// * `writer` - the writer to target.
pub fn write_json_model<T, W>(
    model: &BpeModel<T>,
    writer: &mut W,
) -> BPResult<()>
where
    T: IdType,
    W: Write,
{
    let file = JsonModelFile::from_model(model)?;
    serde_json::to_writer_pretty(&mut *writer, &file)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a [`BpeModel`] from JSON.
///
/// ## Arguments
/// * `reader` - the reader to consume.
pub fn read_json_model<T, R>(reader: R) -> BPResult<BpeModel<T>>
where
    T: IdType,
    R: BufRead,
{
    let file: JsonModelFile = serde_json::from_reader(reader)?;
    let model = file.into_model()?;
    log::debug!(
        "Loaded model: {} tokens, {} merges",
        model.vocab().len(),
        model.merges().len()
    );
    Ok(model)
}

/// Save a [`BpeModel`] to a JSON file.
///
/// ## Arguments
/// * `model` - the model to save.
/// * `path` - the path to save the model to.
pub fn save_json_model_path<T: IdType, P: AsRef<Path>>(
    model: &BpeModel<T>,
    path: P,
) -> BPResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_json_model(model, &mut writer)
}

/// Load a [`BpeModel`] from a JSON file.
///
/// ## Arguments
/// * `path` - the path to the model file.
pub fn load_json_model_path<T, P>(path: P) -> BPResult<BpeModel<T>>
where
    T: IdType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_json_model(reader)
}
