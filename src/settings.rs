use std::path::PathBuf;

use log::LevelFilter;

use crate::clients::{
    auth::Credentials,
    errors::{Error, Result},
};

/// Validated run settings. The `Debug` output hides credentials and is safe to log.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub playlist: String,
    pub out_path: PathBuf,
    pub debug: bool,
}

impl Settings {
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

// Empty values count as missing, same as unset ones
pub(crate) fn require(value: Option<String>, name: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::ConfigurationError(format!("Arg missing: {name}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require(Some("x".into()), "playlist").unwrap(), "x");
        for missing in [None, Some(String::new())] {
            match require(missing, "playlist") {
                Err(Error::ConfigurationError(msg)) => assert_eq!(msg, "Arg missing: playlist"),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_log_level_follows_debug_flag() {
        let mut settings = Settings {
            credentials: Credentials::new("id", "secret", "refresh"),
            playlist: "Road Trip".into(),
            out_path: PathBuf::from("out.txt"),
            debug: false,
        };
        assert_eq!(settings.log_level(), LevelFilter::Info);
        settings.debug = true;
        assert_eq!(settings.log_level(), LevelFilter::Debug);
    }
}
