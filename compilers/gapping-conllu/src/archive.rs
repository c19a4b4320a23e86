use gapping_protocol::Treebank;
use rkyv::AlignedVec;

use crate::error::ReadError;

/// Serialize a treebank to its binary archive form.
pub fn encode_treebank(treebank: &Treebank) -> Result<Vec<u8>, ReadError> {
    let bytes = rkyv::to_bytes::<_, 1024>(treebank).map_err(|e| ReadError::Archive(format!("{e:?}")))?;
    Ok(bytes.into_vec())
}

/// Validate and load a binary treebank.
pub fn decode_treebank(bytes: &[u8]) -> Result<Treebank, ReadError> {
    // Files read from disk carry no alignment guarantee
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);

    let treebank: Treebank =
        rkyv::from_bytes(&aligned).map_err(|e| ReadError::Archive(format!("{e:?}")))?;

    if treebank.version != Treebank::VERSION {
        return Err(ReadError::VersionMismatch {
            expected: Treebank::VERSION,
            found: treebank.version,
        });
    }
    Ok(treebank)
}
