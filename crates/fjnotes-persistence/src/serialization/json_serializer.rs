use crate::traits::Serializer;
use fjnotes_core::{FjnotesError, FjnotesResult};

/// JSON serializer for persisted state
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> FjnotesResult<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(|e| FjnotesError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> FjnotesResult<T> {
        serde_json::from_slice(bytes).map_err(|e| FjnotesError::Serialization(e.to_string()))
    }
}
