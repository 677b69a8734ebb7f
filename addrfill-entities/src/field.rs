use strum::{AsRefStr, EnumIter, EnumString, IntoStaticStr};

/// Logical fields of an address form.
///
/// The serialized names are the keys used within a form store
/// (without any prefix).
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, IntoStaticStr)]
pub enum FormField {
    #[strum(serialize = "firstName")]   FirstName,
    #[strum(serialize = "lastName")]    LastName,
    #[strum(serialize = "phone")]       Phone,
    #[strum(serialize = "countryCode")] CountryCode,
    #[strum(serialize = "address1")]    Address1,
    #[strum(serialize = "city")]        City,
    #[strum(serialize = "stateCode")]   StateCode,
    #[strum(serialize = "postalCode")]  PostalCode,
    #[strum(serialize = "preferred")]   Preferred,
}

impl FormField {
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The store key of this field within a namespace.
    pub fn key(self, prefix: &str) -> String {
        format!("{prefix}{}", self.name())
    }

    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Preferred)
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Phone => FieldKind::Tel,
            Self::CountryCode | Self::StateCode => FieldKind::Select,
            Self::Preferred => FieldKind::Checkbox,
            Self::FirstName | Self::LastName | Self::Address1 | Self::City | Self::PostalCode => {
                FieldKind::Text
            }
        }
    }
}

/// How a field is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Text,
    Tel,
    Select,
    Checkbox,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_match_serialization() {
        for field in FormField::iter() {
            assert_eq!(field.name(), field.as_ref());
            assert_eq!(field.name().parse::<FormField>().unwrap(), field);
        }
    }

    #[test]
    fn prefixed_keys() {
        assert_eq!(FormField::City.key(""), "city");
        assert_eq!(FormField::PostalCode.key("shipping."), "shipping.postalCode");
    }
}
