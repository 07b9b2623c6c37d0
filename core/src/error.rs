use thiserror::Error;

use crate::types::{ConfigError, PageCountError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid page count: {0}")]
    PageCount(#[from] PageCountError),
}
