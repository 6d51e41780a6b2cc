use fjnotes_core::FjnotesResult;

/// Durable string-keyed blob storage.
/// Implementations decide where the bytes live (memory, files, ...).
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if nothing was stored
    fn get(&self, key: &str) -> FjnotesResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    fn set(&mut self, key: &str, value: &[u8]) -> FjnotesResult<()>;

    /// Drop the value stored under `key`; missing keys are not an error
    fn remove(&mut self, key: &str) -> FjnotesResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T> {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> FjnotesResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> FjnotesResult<T>;
}
