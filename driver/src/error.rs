use std::num::{ParseFloatError, ParseIntError};

use error_stack::Report;
use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Io(std::io::Error),
    #[error(transparent)]
    ParseInt(ParseIntError),
    #[error(transparent)]
    ParseFloat(ParseFloatError),
    #[error(transparent)]
    ParseDate(time::error::Parse),
    #[error(transparent)]
    Env(dotenvy::Error),
}

impl From<std::io::Error> for DriverError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParseIntError> for DriverError {
    fn from(value: ParseIntError) -> Self {
        Self::ParseInt(value)
    }
}

impl From<ParseFloatError> for DriverError {
    fn from(value: ParseFloatError) -> Self {
        Self::ParseFloat(value)
    }
}

impl From<time::error::Parse> for DriverError {
    fn from(value: time::error::Parse) -> Self {
        Self::ParseDate(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T, E> ConvertError for Result<T, E>
where
    E: Into<DriverError>,
{
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let error = error.into();
            let context = match error {
                DriverError::Io(_) => KernelError::Persistence,
                DriverError::ParseInt(_) | DriverError::ParseFloat(_) | DriverError::ParseDate(_) => {
                    KernelError::Parse
                }
                DriverError::Env(_) => KernelError::Internal,
            };
            Report::new(error).change_context(context)
        })
    }
}
