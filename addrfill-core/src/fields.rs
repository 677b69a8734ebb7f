use crate::entities::{CountryCode, FieldKind, FormField};

/// Everything needed to render one field of the address form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMeta {
    pub field: FormField,
    /// The (prefixed) store key.
    pub name: String,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldMeta {
    pub fn new(field: FormField, prefix: &str, country: Option<CountryCode>) -> Self {
        Self {
            field,
            name: field.key(prefix),
            label: label(field, country),
            kind: field.kind(),
            required: field.is_required(),
        }
    }
}

const LAYOUT: [FormField; 8] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Phone,
    FormField::CountryCode,
    FormField::Address1,
    FormField::City,
    FormField::StateCode,
    FormField::PostalCode,
];

/// The fields of an address block in render order.
///
/// Only registered customers can mark an address as their preferred one.
pub fn address_fields(
    prefix: &str,
    country: Option<CountryCode>,
    is_registered: bool,
) -> Vec<FieldMeta> {
    LAYOUT
        .iter()
        .copied()
        .chain(is_registered.then_some(FormField::Preferred))
        .map(|field| FieldMeta::new(field, prefix, country))
        .collect()
}

pub const fn label(field: FormField, country: Option<CountryCode>) -> &'static str {
    match field {
        FormField::FirstName => "First Name",
        FormField::LastName => "Last Name",
        FormField::Phone => "Phone",
        FormField::CountryCode => "Country",
        FormField::Address1 => "Address",
        FormField::City => "City",
        FormField::StateCode => match country {
            Some(CountryCode::CA) => "Province",
            _ => "State",
        },
        FormField::PostalCode => match country {
            Some(CountryCode::US) => "Zip Code",
            _ => "Postal Code",
        },
        FormField::Preferred => "Set as default",
    }
}

/// Selectable options of the state field.
pub const fn state_codes(country: CountryCode) -> &'static [&'static str] {
    match country {
        CountryCode::US => &[
            "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL",
            "IN", "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE",
            "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD",
            "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
        ],
        CountryCode::CA => &[
            "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU", "ON", "PE", "QC", "SK", "YT",
        ],
    }
}
