use super::*;
use addrfill_entities as e;

impl From<AddressComponent> for e::place::AddressComponent {
    fn from(from: AddressComponent) -> Self {
        let AddressComponent {
            short_name,
            long_name,
            types,
        } = from;
        // Tags that are irrelevant for address forms are dropped.
        let types = types.iter().filter_map(|t| t.parse().ok()).collect();
        Self {
            short_name,
            long_name,
            types,
        }
    }
}

impl From<PlaceResult> for e::place::PlaceSelection {
    fn from(from: PlaceResult) -> Self {
        let PlaceResult { address_components } = from;
        Self {
            address_components: address_components
                .map(|components| components.into_iter().map(Into::into).collect()),
        }
    }
}

impl From<(String, String)> for FormWrite {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl From<e::field::FieldKind> for FieldKind {
    fn from(from: e::field::FieldKind) -> Self {
        use e::field::FieldKind as K;
        match from {
            K::Text => Self::Text,
            K::Tel => Self::Tel,
            K::Select => Self::Select,
            K::Checkbox => Self::Checkbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::place::{ComponentType, PlaceSelection};

    #[test]
    fn convert_place_result_into_selection() {
        let place = PlaceResult {
            address_components: Some(vec![AddressComponent {
                short_name: Some("Springfield".into()),
                long_name: None,
                types: vec!["locality".into(), "political".into()],
            }]),
        };
        let selection = PlaceSelection::from(place);
        let components = selection.address_components.as_ref().unwrap();
        assert_eq!(components[0].types, [ComponentType::Locality]);
        assert_eq!(
            selection.short_name_of(ComponentType::Locality),
            Some("Springfield")
        );
    }

    #[test]
    fn keep_missing_components_missing() {
        let selection = PlaceSelection::from(PlaceResult::default());
        assert!(selection.address_components.is_none());
    }
}
