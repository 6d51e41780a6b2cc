use crate::error::FjnotesError;

pub type FjnotesResult<T> = Result<T, FjnotesError>;
