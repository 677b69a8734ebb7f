use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("addrfill.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub autocomplete: Option<Autocomplete>,
    pub form: Option<Form>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Autocomplete {
    pub api_key: Option<String>,
    pub types: Vec<String>,
    pub countries: Vec<String>,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Config::default()
            .autocomplete
            .expect("Autocomplete configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Form {
    #[serde(default)]
    pub prefix: String,
    pub default_country: String,
}

impl Default for Form {
    fn default() -> Self {
        Config::default().form.expect("Form configuration")
    }
}
