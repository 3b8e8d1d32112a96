use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal is too small to draw on ({cols}x{rows})")]
    ViewportTooSmall { cols: u16, rows: u16 },

    #[error("invalid hex color {0:?}, expected RRGGBB (e.g. 02040a)")]
    InvalidColor(String),

    #[error("could not install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
