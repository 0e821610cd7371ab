use {snafu::prelude::*, std::env};

pub const DB0_MAX_IDENTIFIER_LENGTH: &str = "DB0_MAX_IDENTIFIER_LENGTH";

const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 63;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("invalid value {:?} for setting `{}`", value, name))]
    InvalidSetting { name: &'static str, value: String },
}

/// Settings consulted while validating descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_identifier_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(value) = lookup(DB0_MAX_IDENTIFIER_LENGTH) {
            settings.max_identifier_length = parse_length(DB0_MAX_IDENTIFIER_LENGTH, value)?;
        }

        log::debug!("loaded settings: {:?}", settings);

        Ok(settings)
    }
}

fn parse_length(name: &'static str, value: String) -> Result<usize, Error> {
    match value.trim().parse::<usize>() {
        Ok(len) if len > 0 => Ok(len),
        _ => InvalidSettingSnafu { name, value }.fail(),
    }
}
