use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

use crate::{
    entities::{CountryCode, FormField},
    fields::{address_fields, state_codes},
};

lazy_static! {
    static ref US_ZIP_CODE: Regex = Regex::new(r"^\d{5}(-\d{4})?$").unwrap();
    static ref CA_POSTAL_CODE: Regex =
        Regex::new(r"^(?i)[ABCEGHJ-NPRSTVXY]\d[ABCEGHJ-NPRSTV-Z] ?\d[ABCEGHJ-NPRSTV-Z]\d$").unwrap();
}

const MIN_PHONE_DIGITS: usize = 10;
const MAX_PHONE_DIGITS: usize = 15;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldInvalidation {
    #[error("Please enter your first name.")]
    FirstName,
    #[error("Please enter your last name.")]
    LastName,
    #[error("Please enter your phone number.")]
    Phone,
    #[error("Please enter a valid phone number.")]
    PhoneFormat,
    #[error("Please select your country.")]
    Country,
    #[error("Please enter your address.")]
    Address,
    #[error("Please enter your city.")]
    City,
    #[error("Please select your state.")]
    State,
    #[error("Please select a valid state.")]
    StateFormat,
    #[error("Please enter your postal code.")]
    PostalCode,
    #[error("Please enter a valid postal code.")]
    PostalCodeFormat,
}

impl FieldInvalidation {
    const fn missing(field: FormField) -> Option<Self> {
        let err = match field {
            FormField::FirstName => Self::FirstName,
            FormField::LastName => Self::LastName,
            FormField::Phone => Self::Phone,
            FormField::CountryCode => Self::Country,
            FormField::Address1 => Self::Address,
            FormField::City => Self::City,
            FormField::StateCode => Self::State,
            FormField::PostalCode => Self::PostalCode,
            FormField::Preferred => return None,
        };
        Some(err)
    }
}

pub fn is_valid_postal_code(country: Option<CountryCode>, code: &str) -> bool {
    match country {
        Some(CountryCode::US) => US_ZIP_CODE.is_match(code),
        Some(CountryCode::CA) => CA_POSTAL_CODE.is_match(code),
        None => !code.trim().is_empty(),
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let phone = phone.strip_prefix('+').unwrap_or(phone);
    let mut digits = 0;
    for c in phone.chars() {
        match c {
            '0'..='9' => digits += 1,
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return false,
        }
    }
    (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits)
}

/// Without a known country every non-empty state code is accepted.
pub fn is_valid_state_code(country: Option<CountryCode>, code: &str) -> bool {
    match country {
        Some(country) => state_codes(country).contains(&code.trim().to_uppercase().as_str()),
        None => !code.trim().is_empty(),
    }
}

pub fn validate_field(
    field: FormField,
    country: Option<CountryCode>,
    value: &str,
) -> Result<(), FieldInvalidation> {
    if value.trim().is_empty() {
        return FieldInvalidation::missing(field).map_or(Ok(()), Err);
    }
    match field {
        FormField::Phone if !is_valid_phone(value) => Err(FieldInvalidation::PhoneFormat),
        FormField::PostalCode if !is_valid_postal_code(country, value.trim()) => {
            Err(FieldInvalidation::PostalCodeFormat)
        }
        FormField::StateCode if !is_valid_state_code(country, value) => {
            Err(FieldInvalidation::StateFormat)
        }
        FormField::CountryCode if value.parse::<CountryCode>().is_err() => {
            Err(FieldInvalidation::Country)
        }
        _ => Ok(()),
    }
}

/// Validates all fields of an address block.
///
/// If no country is given, the value of the country field is used
/// to pick the postal code format. Returns the keys of the invalid
/// fields together with a message in render order.
pub fn validate_form(
    prefix: &str,
    country: Option<CountryCode>,
    values: &HashMap<String, String>,
) -> Vec<(String, FieldInvalidation)> {
    let country = country.or_else(|| {
        values
            .get(&FormField::CountryCode.key(prefix))
            .and_then(|c| c.parse().ok())
    });
    address_fields(prefix, country, false)
        .into_iter()
        .filter_map(|meta| {
            let value = values.get(&meta.name).map(String::as_str).unwrap_or_default();
            validate_field(meta.field, country, value)
                .err()
                .map(|err| (meta.name, err))
        })
        .collect()
}
