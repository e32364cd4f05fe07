#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No XML content provided {0}")]
    EmptyInput(String),

    #[error("Failed to read input {location}: {source}")]
    ReadInput {
        location: String,
        source: std::io::Error,
    },
}
