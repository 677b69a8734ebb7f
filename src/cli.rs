use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use addrfill_boundary as b;
use addrfill_core::{
    autofill::AddressAutofill, fields::address_fields, form::InMemoryFormStore,
    util::validate::validate_form,
};
use addrfill_entities::{country::CountryCode, place::PlaceSelection};

use crate::config::Config;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a place selection (JSON) and print the resulting form writes
    Fill {
        /// Namespace of the written form keys
        #[arg(long)]
        prefix: Option<String>,
        /// Place JSON file (default: stdin)
        file: Option<PathBuf>,
    },
    /// Print the fields of an address block
    Fields {
        #[arg(long)]
        prefix: Option<String>,
        #[arg(long)]
        country: Option<CountryCode>,
        /// Render the fields for a registered customer
        #[arg(long)]
        registered: bool,
    },
    /// Validate form values given as JSON object
    Validate {
        #[arg(long)]
        prefix: Option<String>,
        /// Overrides the country field of the form
        #[arg(long)]
        country: Option<CountryCode>,
        /// Form values JSON file (default: stdin)
        file: Option<PathBuf>,
    },
    /// Print the options of the autocomplete widget
    Options,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FillOutput {
    writes: Vec<b::FormWrite>,
    display_address: String,
}

pub fn run() -> Result<ExitCode> {
    let Args { config, command } = Args::parse();
    let cfg = Config::try_load_from_file_or_default(config)?;

    match command {
        Command::Fill { prefix, file } => {
            let prefix = prefix.unwrap_or_else(|| cfg.form.prefix.clone());
            let json = read_input(file.as_deref())?;
            let output = fill(prefix, &json)?;
            log::info!("{} form value(s) written", output.writes.len());
            print_json(&output)?;
        }
        Command::Fields {
            prefix,
            country,
            registered,
        } => {
            let prefix = prefix.unwrap_or_else(|| cfg.form.prefix.clone());
            let country = country.unwrap_or(cfg.form.default_country);
            let fields = address_fields(&prefix, Some(country), registered)
                .into_iter()
                .map(|meta| b::FieldMeta {
                    name: meta.name,
                    label: meta.label.to_owned(),
                    kind: meta.kind.into(),
                    required: meta.required,
                })
                .collect::<Vec<_>>();
            print_json(&fields)?;
        }
        Command::Validate {
            prefix,
            country,
            file,
        } => {
            let prefix = prefix.unwrap_or_else(|| cfg.form.prefix.clone());
            let json = read_input(file.as_deref())?;
            let errors = validate(&prefix, country, &json)?;
            print_json(&errors)?;
            if !errors.is_empty() {
                log::warn!("{} invalid field(s)", errors.len());
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Options => {
            if cfg.autocomplete.api_key.is_none() {
                log::warn!("No API key configured");
            }
            print_json(&cfg.autocomplete.options)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn fill(prefix: String, json: &str) -> Result<FillOutput> {
    let place: Option<b::PlaceResult> = serde_json::from_str(json).context("Invalid place JSON")?;
    let place = place.map(PlaceSelection::from);
    let mut binding = AddressAutofill::with_prefix(InMemoryFormStore::new(), prefix);
    binding.on_place_selected(place.as_ref());
    let display_address = binding.display_address().to_owned();
    let writes = binding
        .into_form()
        .writes()
        .iter()
        .cloned()
        .map(b::FormWrite::from)
        .collect();
    Ok(FillOutput {
        writes,
        display_address,
    })
}

fn validate(
    prefix: &str,
    country: Option<CountryCode>,
    json: &str,
) -> Result<Vec<b::FieldError>> {
    let values: HashMap<String, String> =
        serde_json::from_str(json).context("Invalid form values JSON")?;
    let errors = validate_form(prefix, country, &values)
        .into_iter()
        .map(|(key, err)| b::FieldError {
            key,
            message: err.to_string(),
        })
        .collect();
    Ok(errors)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("Unable to read {}", path.display()))
        }
        None => {
            log::debug!("Read from stdin");
            Ok(io::read_to_string(io::stdin())?)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
