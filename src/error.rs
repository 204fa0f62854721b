use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("benchmark needs at least one iteration")]
    ZeroIterations,
    #[error("cannot summarise an empty list of timing samples")]
    EmptySamples,
}

pub type Result<T> = std::result::Result<T, Error>;
