use crate::structs::raw_model_response::RawModelResponse;

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: String,
    pub value: RawModelResponse,
    pub inserted_at: u64,
}
