use strum::{AsRefStr, EnumIter, EnumString};

/// Type tags of address components that are relevant for
/// filling in an address form.
///
/// Providers attach many more tags (e.g. `political`) that
/// are simply not represented here.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr)]
pub enum ComponentType {
    #[strum(serialize = "administrative_area_level_1")]
    AdministrativeAreaLevel1,
    #[strum(serialize = "postal_code")]
    PostalCode,
    #[strum(serialize = "locality")]
    Locality,
    #[strum(serialize = "country")]
    Country,
    #[strum(serialize = "street_number")]
    StreetNumber,
    #[strum(serialize = "route")]
    Route,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddressComponent {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub types: Vec<ComponentType>,
}

impl AddressComponent {
    pub fn has_type(&self, ty: ComponentType) -> bool {
        self.types.contains(&ty)
    }

    /// The short name, if it is not empty.
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref().filter(|name| !name.is_empty())
    }
}

/// A single place that has been picked by the user.
///
/// The components are kept in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceSelection {
    pub address_components: Option<Vec<AddressComponent>>,
}

impl PlaceSelection {
    /// Returns the first component tagged with `ty`.
    ///
    /// Duplicate tags are not merged: whatever comes
    /// first in provider order wins.
    pub fn find(&self, ty: ComponentType) -> Option<&AddressComponent> {
        self.address_components
            .as_ref()?
            .iter()
            .find(|c| c.has_type(ty))
    }

    pub fn short_name_of(&self, ty: ComponentType) -> Option<&str> {
        self.find(ty).and_then(AddressComponent::short_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::*;

    #[test]
    fn parse_component_types() {
        assert_eq!(
            "administrative_area_level_1".parse::<ComponentType>().unwrap(),
            ComponentType::AdministrativeAreaLevel1
        );
        assert_eq!(
            "postal_code".parse::<ComponentType>().unwrap(),
            ComponentType::PostalCode
        );
        assert!("political".parse::<ComponentType>().is_err());
        assert_eq!(ComponentType::StreetNumber.as_ref(), "street_number");
    }

    #[test]
    fn first_matching_component_wins() {
        let place = PlaceSelection::build()
            .component("Springfield", &["locality"])
            .component("Shelbyville", &["locality"])
            .finish();
        assert_eq!(
            place.short_name_of(ComponentType::Locality),
            Some("Springfield")
        );
    }

    #[test]
    fn empty_short_name_is_absent() {
        let place = PlaceSelection::build()
            .component("", &["postal_code"])
            .component("12345", &["postal_code"])
            .finish();
        assert!(place.find(ComponentType::PostalCode).is_some());
        assert_eq!(place.short_name_of(ComponentType::PostalCode), None);
    }

    #[test]
    fn missing_components() {
        let place = PlaceSelection::default();
        assert!(place.find(ComponentType::Country).is_none());
    }
}
