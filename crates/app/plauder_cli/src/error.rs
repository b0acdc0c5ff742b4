use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}", .0)]
    Custom(String),

    #[error("IO::{:?}: {}", .0, .0)]
    Io(#[from] std::io::Error),

    #[error("Url::{:?}: {}", .0, .0)]
    Url(#[from] url::ParseError),

    #[error("Zip::{:?}: {}", .0, .0)]
    Zip(#[from] zip::result::ZipError),

    #[error("Completion: {}", .0)]
    Completion(#[from] plauder_api::error::AppError),

    #[error("FlexiLogger::{:?}: {}", .0, .0)]
    FlexiLogger(#[from] flexi_logger::FlexiLoggerError),
}
