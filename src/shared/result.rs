/// Result alias with `anyhow::Error`, used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
