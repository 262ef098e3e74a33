//! Loading of the parameter files that describe controllers, trajectories and mechanisms.
//!
//! Parameter files are TOML documents that are deserialized into one of the parameter structs,
//! e.g. [crate::controller::PidGains] or [crate::simulation::ElevatorSimParams].

use std::{fs::read_to_string, path::Path};

use serde::de::DeserializeOwned;

use crate::Error;

#[cfg(test)]
#[path = "params_tests.rs"]
mod params_tests;

/// Parses a set of parameters from a TOML document.
///
/// ## Errors
///
/// Returns [Error::InvalidConfiguration] if the document is not valid TOML or does not match
/// the parameter type.
///
/// ## Example
///
/// ```
/// use robot_motion::{controller::PidGains, params};
///
/// let gains: PidGains = params::from_toml_str("kp = 1.5\nkd = 0.1").unwrap();
/// assert_eq!(gains.kp, 1.5);
/// ```
pub fn from_toml_str<P>(text: &str) -> Result<P, Error>
where
    P: DeserializeOwned,
{
    toml::from_str(text).map_err(|e| Error::InvalidConfiguration {
        message: format!("Cannot read the parameters: {}", e),
    })
}

/// Loads a set of parameters from a TOML file.
///
/// ## Errors
///
/// Returns [Error::InvalidConfiguration] if the file can not be read or if its content can not
/// be parsed.
pub fn load<P, T>(path: T) -> Result<P, Error>
where
    P: DeserializeOwned,
    T: AsRef<Path>,
{
    let path = path.as_ref();
    let text = read_to_string(path).map_err(|e| Error::InvalidConfiguration {
        message: format!("Cannot load the parameter file {}: {}", path.display(), e),
    })?;

    from_toml_str(&text)
}
