/// Fatal failures. Per-record problems are `Rejection`s and never end up here.
#[derive(thiserror::Error, Debug)]
pub enum Cdr3Error {
    #[error("Cannot read input \"{file}\": {source}")]
    InputUnavailable {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Cannot write output \"{file}\": {source}")]
    OutputUnwritable {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Could not parse config file \"{file}\": {source}")]
    ConfigParse {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Cannot write summary \"{file}\": {source}")]
    SummaryUnwritable {
        file: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Cdr3Error {
    pub fn input(file: impl AsRef<std::path::Path>, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Cdr3Error::InputUnavailable {
            file: file.as_ref().display().to_string(),
            source: source.into(),
        }
    }

    pub fn output(file: impl AsRef<std::path::Path>, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Cdr3Error::OutputUnwritable {
            file: file.as_ref().display().to_string(),
            source: source.into(),
        }
    }
}
