use anyhow::{anyhow, Context as _, Result};
use std::{env, fs, io::ErrorKind, path::Path};

use addrfill_boundary::{AutocompleteOptions, ComponentRestrictions};
use addrfill_entities::country::CountryCode;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "addrfill.toml";

const ENV_NAME_API_KEY: &str = "PLACES_API_KEY";

#[derive(Debug)]
pub struct Config {
    pub autocomplete: Autocomplete,
    pub form: Form,
}

#[derive(Debug)]
pub struct Autocomplete {
    pub api_key: Option<String>,
    pub options: AutocompleteOptions,
}

#[derive(Debug)]
pub struct Form {
    /// Namespace of all keys written into the form.
    pub prefix: String,
    pub default_country: CountryCode,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => Self::parse_raw(&cfg_string)
                .with_context(|| format!("Invalid configuration {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    raw::Config::default()
                }
                _ => return Err(err.into()),
            },
        };
        let mut cfg = Self::try_from(raw_config)?;
        cfg.override_api_key(env::var(ENV_NAME_API_KEY).ok());
        Ok(cfg)
    }

    /// Blank keys are ignored.
    fn override_api_key(&mut self, api_key: Option<String>) {
        if let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) {
            self.autocomplete.api_key = Some(api_key);
        }
    }

    #[cfg(test)]
    pub fn try_from_toml_str(s: &str) -> Result<Self> {
        Self::try_from(Self::parse_raw(s)?)
    }

    fn parse_raw(s: &str) -> Result<raw::Config> {
        Ok(toml::from_str(s)?)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { autocomplete, form } = from;

        let raw::Autocomplete {
            api_key,
            types,
            countries,
        } = autocomplete.unwrap_or_default();

        if countries.is_empty() {
            return Err(anyhow!("No country restrictions defined"));
        }
        let countries = countries
            .into_iter()
            .map(|c| {
                let c = c.trim().to_lowercase();
                if c.len() == 2 && c.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(c)
                } else {
                    Err(anyhow!("Invalid country restriction '{c}'"))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let autocomplete = Autocomplete {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            options: AutocompleteOptions {
                types,
                component_restrictions: ComponentRestrictions { country: countries },
            },
        };

        let raw::Form {
            prefix,
            default_country,
        } = form.unwrap_or_default();

        let default_country = default_country
            .parse::<CountryCode>()
            .map_err(|_| anyhow!("Unsupported default country '{default_country}'"))?;

        let form = Form {
            prefix,
            default_country,
        };

        Ok(Self { autocomplete, form })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_api_key_from_env_value() {
        let mut cfg = Config::try_from(raw::Config::default()).unwrap();
        cfg.override_api_key(Some(String::new()));
        assert_eq!(cfg.autocomplete.api_key, None);
        cfg.override_api_key(Some("  ".into()));
        assert_eq!(cfg.autocomplete.api_key, None);
        cfg.override_api_key(Some("secret".into()));
        assert_eq!(cfg.autocomplete.api_key.as_deref(), Some("secret"));
        cfg.override_api_key(None);
        cfg.override_api_key(Some(String::new()));
        assert_eq!(cfg.autocomplete.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn load_default_config() {
        let cfg = Config::try_from(raw::Config::default()).unwrap();
        assert_eq!(cfg.autocomplete.options, AutocompleteOptions::default());
        assert_eq!(cfg.autocomplete.api_key, None);
        assert_eq!(cfg.form.prefix, "");
        assert_eq!(cfg.form.default_country, CountryCode::US);
    }

    #[test]
    fn fall_back_to_defaults_for_missing_sections() {
        let cfg = Config::try_from_toml_str("[form]\nprefix = \"shipping.\"\ndefault-country = \"ca\"").unwrap();
        assert_eq!(cfg.form.prefix, "shipping.");
        assert_eq!(cfg.form.default_country, CountryCode::CA);
        assert_eq!(
            cfg.autocomplete.options.component_restrictions.country,
            ["us", "ca"]
        );
    }

    #[test]
    fn normalize_country_restrictions() {
        let cfg = Config::try_from_toml_str(
            r#"
            [autocomplete]
            api-key = "secret"
            types = ["address"]
            countries = ["US"]
            "#,
        )
        .unwrap();
        assert_eq!(cfg.autocomplete.api_key.as_deref(), Some("secret"));
        assert_eq!(
            cfg.autocomplete.options.component_restrictions.country,
            ["us"]
        );
    }

    #[test]
    fn reject_invalid_configurations() {
        assert!(Config::try_from_toml_str(
            "[autocomplete]\ntypes = [\"address\"]\ncountries = []"
        )
        .is_err());
        assert!(Config::try_from_toml_str(
            "[autocomplete]\ntypes = [\"address\"]\ncountries = [\"usa\"]"
        )
        .is_err());
        assert!(Config::try_from_toml_str("[form]\ndefault-country = \"DE\"").is_err());
        assert!(Config::try_from_toml_str("form = 1").is_err());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg =
            Config::try_load_from_file_or_default(Some("does-not-exist/addrfill.toml")).unwrap();
        assert_eq!(cfg.form.default_country, CountryCode::US);
    }
}
