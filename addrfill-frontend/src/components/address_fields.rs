use std::{cell::RefCell, rc::Rc};

use leptos::*;

use addrfill_boundary::AutocompleteOptions;
use addrfill_core::{
    autofill::autofill_form,
    fields::{label, state_codes, FieldMeta},
};
use addrfill_entities::{country::CountryCode, field::FormField, place::PlaceSelection};

use crate::{
    components::Field,
    form::FormState,
    places::{self, PlacesAutocomplete},
};

/// Address block of a checkout form.
///
/// Selecting a suggestion of the autocomplete widget fills in
/// the street address, city, state, postal code and country.
#[component]
pub fn AddressFields(
    form: FormState,
    /// Namespace of the field keys, e.g. `shipping.`
    #[prop(optional, into)]
    prefix: String,
    #[prop(into)] is_registered: Signal<bool>,
    #[prop(optional)] options: Option<AutocompleteOptions>,
    api_key: Option<&'static str>,
) -> impl IntoView {
    // -- signals -- //

    // The text shown in the street address input.
    let address = RwSignal::new(String::new());
    let address_ref = NodeRef::<html::Input>::new();
    let country_value = form.value(FormField::CountryCode.key(&prefix));
    let country = Signal::derive(move || country_value.get().parse::<CountryCode>().ok());

    // -- callbacks -- //

    let on_place_selected = {
        let prefix = prefix.clone();
        move |place: Option<PlaceSelection>| {
            let Some(place) = place else {
                log::debug!("No place selected");
                return;
            };
            let mut form = form;
            if let Some(street) = autofill_form(&mut form, &prefix, &place) {
                address.set(street);
            }
        }
    };

    // -- autocomplete widget -- //

    let widget = Rc::new(RefCell::new(None::<PlacesAutocomplete>));
    let options = options.unwrap_or_default();
    address_ref.on_load({
        let widget = Rc::clone(&widget);
        move |input: html::HtmlElement<html::Input>| {
            let input = (*input).clone();
            match places::attach(input, &options, api_key, on_place_selected) {
                Ok(attached) => {
                    *widget.borrow_mut() = Some(attached);
                }
                Err(err) => {
                    log::warn!("Unable to attach places autocomplete: {err}");
                }
            }
        }
    });
    on_cleanup(move || {
        widget.borrow_mut().take();
    });

    // -- view -- //

    let address_key = FormField::Address1.key(&prefix);
    let address_id = address_key.clone();
    let address_error = form.error(address_key.clone());
    let register_address =
        move |event: ev::Event| form.set(&address_key, &event_target_value(&event));
    let preferred_prefix = prefix.clone();
    let field = |f| address_field(form, &prefix, f, country);

    view! {
      <div class="space-y-5">
        <div class="grid grid-cols-1 md:grid-cols-2 gap-5">
          { field(FormField::FirstName) }
          { field(FormField::LastName) }
        </div>
        { field(FormField::Phone) }
        { field(FormField::CountryCode) }
        <div class="mb-4">
          <label for = address_id.clone() class="block mb-2 text-sm font-medium text-gray-700">
            { label(FormField::Address1, None) }
            " *"
          </label>
          <input
            id = address_id
            type = "text"
            placeholder = ""
            class="form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white bg-clip-padding border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:text-gray-700 focus:bg-white focus:border-blue-600 focus:outline-none"
            node_ref = address_ref
            prop:value = move || address.get()
            on:input = move |ev| address.set(event_target_value(&ev))
            // Register the typed address as soon as the input is committed.
            on:change = register_address
          />
          { move || address_error.get().map(|err| view!{
            <p class="mt-1 text-sm text-red-700">{ err }</p>
          })}
        </div>
        { field(FormField::City) }
        <div class="grid grid-cols-8 gap-5">
          <div class="col-span-4">{ field(FormField::StateCode) }</div>
          <div class="col-span-4">{ field(FormField::PostalCode) }</div>
        </div>
        { move || is_registered.get().then(|| {
            address_field(form, &preferred_prefix, FormField::Preferred, country)
        })}
      </div>
    }
}

fn address_field(
    form: FormState,
    prefix: &str,
    field: FormField,
    country: Signal<Option<CountryCode>>,
) -> View {
    let FieldMeta {
        name,
        kind,
        required,
        ..
    } = FieldMeta::new(field, prefix, None);
    let label_text = Signal::derive(move || label(field, country.get()));
    let choices = Signal::derive(move || match field {
        FormField::CountryCode => CountryCode::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>(),
        FormField::StateCode => state_codes(country.get().unwrap_or_default()).to_vec(),
        _ => vec![],
    });
    view! { <Field form name kind label=label_text required choices /> }.into_view()
}
