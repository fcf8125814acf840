/// Result alias used across the crate; the error side is always `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
