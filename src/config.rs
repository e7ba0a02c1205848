//! Runtime configuration read from `CAB_BOOKING_*` environment variables.

use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::error::{invalid_config_error, Error};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Serve the HTTP API until the process is stopped.
    Serve,
    /// Run the scripted walkthrough once and exit.
    Demo,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub mode: Mode,
}

impl Config {
    /// Optional (with defaults):
    /// - `CAB_BOOKING_HOST`: listen address (default: 127.0.0.1)
    /// - `CAB_BOOKING_PORT`: listen port (default: 3000)
    /// - `CAB_BOOKING_MODE`: `serve` or `demo` (default: serve)
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let host: IpAddr = var_or(&lookup, "CAB_BOOKING_HOST", "127.0.0.1")?
            .parse()
            .map_err(|_| invalid_config_error("CAB_BOOKING_HOST"))?;

        let port: u16 = var_or(&lookup, "CAB_BOOKING_PORT", "3000")?
            .parse()
            .map_err(|_| invalid_config_error("CAB_BOOKING_PORT"))?;

        let mode = match var_or(&lookup, "CAB_BOOKING_MODE", "serve")?.as_str() {
            "serve" => Mode::Serve,
            "demo" => Mode::Demo,
            _ => return Err(invalid_config_error("CAB_BOOKING_MODE")),
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            mode,
        })
    }
}

fn var_or<F>(lookup: &F, key: &str, default: &str) -> Result<String, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.into()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|key| vars.get(key).cloned().ok_or(env::VarError::NotPresent))
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.mode, Mode::Serve);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("CAB_BOOKING_HOST", "0.0.0.0"),
            ("CAB_BOOKING_PORT", "8080"),
            ("CAB_BOOKING_MODE", "demo"),
        ])
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.mode, Mode::Demo);
    }

    #[test]
    fn invalid_values() {
        let err = config(&[("CAB_BOOKING_PORT", "not-a-port")]).unwrap_err();
        assert!(err.message.contains("CAB_BOOKING_PORT"));

        let err = config(&[("CAB_BOOKING_HOST", "localhost:80")]).unwrap_err();
        assert!(err.message.contains("CAB_BOOKING_HOST"));

        let err = config(&[("CAB_BOOKING_MODE", "batch")]).unwrap_err();
        assert!(err.is_internal_error());
    }
}
