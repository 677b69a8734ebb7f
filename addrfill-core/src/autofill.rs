use crate::{
    entities::{Address, FormField, PlaceSelection},
    form::FormStore,
};

/// Writes all values that can be derived from `place` into `form`.
///
/// Fields are written in a fixed order (state, postal code, city, country,
/// street address). Missing or empty components are skipped and never
/// clear a value that has already been entered.
///
/// Returns the composed street address if it has been written.
pub fn autofill_form<S>(form: &mut S, prefix: &str, place: &PlaceSelection) -> Option<String>
where
    S: FormStore + ?Sized,
{
    if place.address_components.is_none() {
        log::debug!("Ignore place selection without address components");
        return None;
    }
    let Address {
        street,
        zip,
        city,
        country,
        state,
    } = Address::from_place(place);
    let values = [
        (FormField::StateCode, state.as_deref()),
        (FormField::PostalCode, zip.as_deref()),
        (FormField::City, city.as_deref()),
        (FormField::CountryCode, country.as_deref()),
        (FormField::Address1, street.as_deref()),
    ];
    for (field, value) in values {
        let Some(value) = value else {
            continue;
        };
        let key = field.key(prefix);
        log::debug!("Autofill {key} = {value}");
        form.set_value(&key, value);
    }
    street
}

/// Connects place selections of an autocomplete widget
/// with the address fields of a form.
///
/// Besides writing into the form store, the binding keeps the text
/// displayed in the street address input.
#[derive(Debug)]
pub struct AddressAutofill<S> {
    form: S,
    prefix: String,
    display_address: String,
}

impl<S> AddressAutofill<S>
where
    S: FormStore,
{
    pub fn new(form: S) -> Self {
        Self::with_prefix(form, "")
    }

    pub fn with_prefix(form: S, prefix: impl Into<String>) -> Self {
        Self {
            form,
            prefix: prefix.into(),
            display_address: String::new(),
        }
    }

    pub fn on_place_selected(&mut self, place: Option<&PlaceSelection>) {
        let Some(place) = place else {
            log::debug!("No place selected");
            return;
        };
        if let Some(street) = autofill_form(&mut self.form, &self.prefix, place) {
            self.display_address = street;
        }
    }

    /// Manual typing only changes the displayed text.
    pub fn on_address_input_changed(&mut self, text: impl Into<String>) {
        self.display_address = text.into();
    }

    pub fn display_address(&self) -> &str {
        &self.display_address
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub const fn form(&self) -> &S {
        &self.form
    }

    pub fn into_form(self) -> S {
        self.form
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::InMemoryFormStore;
    use addrfill_entities::builders::*;

    fn binding(prefix: &str) -> AddressAutofill<InMemoryFormStore> {
        AddressAutofill::with_prefix(InMemoryFormStore::new(), prefix)
    }

    fn full_place() -> PlaceSelection {
        PlaceSelection::build()
            .component("123", &["street_number"])
            .component("Main St", &["route"])
            .component("Springfield", &["locality", "political"])
            .component("IL", &["administrative_area_level_1", "political"])
            .component("US", &["country", "political"])
            .component("62704", &["postal_code"])
            .finish()
    }

    #[test]
    fn ignore_missing_place() {
        let mut b = binding("");
        b.on_place_selected(None);
        assert!(b.form().writes().is_empty());
        assert_eq!(b.display_address(), "");
    }

    #[test]
    fn ignore_place_without_address_components() {
        let mut b = binding("");
        b.on_address_input_changed("42 Elm");
        b.on_place_selected(Some(&PlaceSelection::default()));
        assert!(b.form().writes().is_empty());
        assert_eq!(b.display_address(), "42 Elm");
    }

    #[test]
    fn write_city_only() {
        let mut b = binding("");
        let place = PlaceSelection::build()
            .component("Springfield", &["locality"])
            .finish();
        b.on_place_selected(Some(&place));
        assert_eq!(
            b.form().writes(),
            [("city".to_string(), "Springfield".to_string())]
        );
        assert_eq!(b.display_address(), "");
    }

    #[test]
    fn write_street_address_and_update_display() {
        let mut b = binding("");
        let place = PlaceSelection::build()
            .component("123", &["street_number"])
            .component("Main St", &["route"])
            .finish();
        b.on_place_selected(Some(&place));
        assert_eq!(
            b.form().writes(),
            [("address1".to_string(), "123 Main St".to_string())]
        );
        assert_eq!(b.display_address(), "123 Main St");
    }

    #[test]
    fn skip_street_address_without_route() {
        let mut b = binding("");
        b.on_address_input_changed("typed");
        let place = PlaceSelection::build()
            .component("123", &["street_number"])
            .finish();
        b.on_place_selected(Some(&place));
        assert!(b.form().writes().is_empty());
        assert_eq!(b.display_address(), "typed");
    }

    #[test]
    fn skip_street_address_with_empty_number() {
        let mut b = binding("");
        let place = PlaceSelection::build()
            .component("", &["street_number"])
            .component("Main St", &["route"])
            .finish();
        b.on_place_selected(Some(&place));
        assert!(b.form().get("address1").is_none());
        assert_eq!(b.display_address(), "");
    }

    #[test]
    fn write_fields_in_fixed_order() {
        let mut b = binding("");
        b.on_place_selected(Some(&full_place()));
        let keys: Vec<_> = b.form().writes().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["stateCode", "postalCode", "city", "countryCode", "address1"]
        );
        assert_eq!(b.form().get("stateCode"), Some("IL"));
        assert_eq!(b.form().get("postalCode"), Some("62704"));
        assert_eq!(b.form().get("countryCode"), Some("US"));
        assert_eq!(b.display_address(), "123 Main St");
    }

    #[test]
    fn partial_place_keeps_existing_values() {
        let mut store = InMemoryFormStore::new();
        store.set_value("postalCode", "10001");
        let mut b = AddressAutofill::new(store);
        let place = PlaceSelection::build()
            .component("", &["postal_code"])
            .component_without_name(&["country"])
            .component("Springfield", &["locality"])
            .finish();
        b.on_place_selected(Some(&place));
        assert_eq!(b.form().get("postalCode"), Some("10001"));
        assert_eq!(b.form().get("countryCode"), None);
        assert_eq!(b.form().get("city"), Some("Springfield"));
    }

    #[test]
    fn first_matching_component_is_used() {
        let mut b = binding("");
        let place = PlaceSelection::build()
            .component("Springfield", &["locality"])
            .component("Shelbyville", &["locality"])
            .finish();
        b.on_place_selected(Some(&place));
        assert_eq!(b.form().writes().len(), 1);
        assert_eq!(b.form().get("city"), Some("Springfield"));
    }

    #[test]
    fn repeated_selection_is_idempotent() {
        let mut b = binding("");
        b.on_place_selected(Some(&full_place()));
        let once = b.form().values().clone();
        let display = b.display_address().to_owned();
        b.on_place_selected(Some(&full_place()));
        assert_eq!(b.form().values(), &once);
        assert_eq!(b.display_address(), display);
    }

    #[test]
    fn prefixes_isolate_bindings_on_a_shared_store() {
        let mut store = InMemoryFormStore::new();
        let shipping = PlaceSelection::build()
            .component("Springfield", &["locality"])
            .component("1", &["street_number"])
            .component("First Ave", &["route"])
            .finish();
        let billing = PlaceSelection::build()
            .component("Toronto", &["locality"])
            .component("CA", &["country"])
            .finish();
        {
            let mut b = AddressAutofill::with_prefix(&mut store, "shipping.");
            b.on_place_selected(Some(&shipping));
            assert_eq!(b.display_address(), "1 First Ave");
            assert_eq!(b.prefix(), "shipping.");
        }
        {
            let mut b = AddressAutofill::with_prefix(&mut store, "billing.");
            b.on_place_selected(Some(&billing));
            assert_eq!(b.display_address(), "");
        }
        assert_eq!(store.get("shipping.city"), Some("Springfield"));
        assert_eq!(store.get("shipping.address1"), Some("1 First Ave"));
        assert_eq!(store.get("billing.city"), Some("Toronto"));
        assert_eq!(store.get("billing.countryCode"), Some("CA"));
        assert_eq!(store.get("billing.address1"), None);
        assert_eq!(store.get("city"), None);
    }

    #[test]
    fn manual_typing_does_not_touch_the_form() {
        let mut b = binding("");
        b.on_address_input_changed("42 Elm");
        assert_eq!(b.display_address(), "42 Elm");
        b.on_address_input_changed("42 Elm");
        assert_eq!(b.display_address(), "42 Elm");
        assert!(b.into_form().is_empty());
    }

    #[test]
    fn typing_after_autofill_replaces_display() {
        let mut b = binding("");
        b.on_place_selected(Some(&full_place()));
        b.on_address_input_changed("124 Main St");
        assert_eq!(b.display_address(), "124 Main St");
        assert_eq!(b.form().get("address1"), Some("123 Main St"));
    }

    #[test]
    fn autofill_returns_composed_street() {
        let mut store = InMemoryFormStore::new();
        let street = autofill_form(&mut store, "x.", &full_place());
        assert_eq!(street.as_deref(), Some("123 Main St"));
        assert_eq!(store.len(), 5);
        let no_street = PlaceSelection::build()
            .component("US", &["country"])
            .finish();
        assert_eq!(autofill_form(&mut store, "x.", &no_street), None);
    }
}
