use derive_more::Display;
use std::error::Error;

/// Malformed construction arguments. The only hard failure in the crate:
/// every runtime operation reports expected outcomes as plain booleans.
#[derive(Debug, Display)]
#[display(fmt = "invalid lock manager configuration: {}", details)]
pub struct InvalidConfiguration {
    details: String,
}

impl Error for InvalidConfiguration {}

pub(crate) type Result<T> = std::result::Result<T, InvalidConfiguration>;

pub(crate) fn new_err<T>(details: String) -> Result<T> {
    Err(InvalidConfiguration { details })
}
