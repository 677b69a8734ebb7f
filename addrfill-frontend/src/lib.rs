use std::collections::HashMap;

use gloo_storage::{SessionStorage, Storage};
use leptos::*;

use addrfill_core::util::validate::validate_form;

mod components;
mod form;
mod places;

use self::{
    components::*,
    form::{restorable_draft, FormState},
};

const FORM_DRAFT_STORAGE_KEY: &str = "checkout-address-draft";
const PLACES_API_KEY: Option<&str> = option_env!("PLACES_API_KEY");
const SHIPPING_PREFIX: &str = "shipping.";
const BILLING_PREFIX: &str = "billing.";

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let draft: HashMap<String, String> =
        SessionStorage::get(FORM_DRAFT_STORAGE_KEY).unwrap_or_default();
    let form = FormState::new(restorable_draft(draft));
    let is_registered = RwSignal::new(false);
    let is_valid = RwSignal::new(None::<bool>);

    // -- callbacks -- //

    let on_continue = move |_: ev::MouseEvent| {
        let values = form.values_untracked();
        let errors = [SHIPPING_PREFIX, BILLING_PREFIX]
            .into_iter()
            .flat_map(|prefix| validate_form(prefix, None, &values))
            .map(|(key, err)| (key, err.to_string()))
            .collect::<HashMap<_, _>>();
        log::debug!("{} invalid field(s)", errors.len());
        is_valid.set(Some(errors.is_empty()));
        form.set_errors(errors);
    };

    // -- effects -- //

    Effect::new(move |_| {
        form.with_values(|values| {
            if let Err(err) = SessionStorage::set(FORM_DRAFT_STORAGE_KEY, values) {
                log::warn!("Unable to save form draft: {err}");
            }
        });
    });

    view! {
      <main class="container mx-auto p-6 max-w-2xl">
        <label class="flex items-center mb-6 text-sm text-gray-700">
          <input
            type = "checkbox"
            class = "mr-2"
            prop:checked = move || is_registered.get()
            on:change = move |ev| is_registered.set(event_target_checked(&ev))
          />
          "I have an account"
        </label>
        <section class="mb-8">
          <h4 class="text-xl font-semibold mb-6">"Shipping Address"</h4>
          <AddressFields form prefix = SHIPPING_PREFIX is_registered api_key = PLACES_API_KEY />
        </section>
        <section class="mb-8">
          <h4 class="text-xl font-semibold mb-6">"Billing Address"</h4>
          <AddressFields form prefix = BILLING_PREFIX is_registered api_key = PLACES_API_KEY />
        </section>
        { move || is_valid.get().map(|valid| if valid {
            view!{ <p class="mb-4 text-green-700">"Your addresses look good."</p> }
          } else {
            view!{ <p class="mb-4 text-red-700">"Please correct the highlighted fields."</p> }
          })
        }
        <button
          class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md hover:bg-blue-600 hover:text-white w-full bg-blue-100"
          on:click = on_continue
        >
          "Continue to Payment"
        </button>
      </main>
    }
}
