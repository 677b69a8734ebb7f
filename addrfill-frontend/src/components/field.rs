use leptos::*;

use addrfill_entities::field::FieldKind;

use crate::form::FormState;

const LABEL_CLASS: &str = "block mb-2 text-sm font-medium text-gray-700";
const INPUT_CLASS: &str = "form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white bg-clip-padding border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:text-gray-700 focus:bg-white focus:border-blue-600 focus:outline-none";

/// A labeled form field bound to a [`FormState`].
#[component]
pub fn Field(
    form: FormState,
    #[prop(into)] name: String,
    kind: FieldKind,
    #[prop(into)] label: MaybeSignal<&'static str>,
    #[prop(optional)] required: bool,
    /// Options of a select field
    #[prop(optional, into)]
    choices: MaybeSignal<Vec<&'static str>>,
) -> impl IntoView {
    let value = form.value(name.clone());
    let error = form.error(name.clone());

    let input = match kind {
        FieldKind::Text | FieldKind::Tel => {
            let key = name.clone();
            view! {
              <input
                id = name.clone()
                type = if kind == FieldKind::Tel { "tel" } else { "text" }
                required = required
                class = INPUT_CLASS
                prop:value = move || value.get()
                on:input = move |ev| form.set(&key, &event_target_value(&ev))
              />
            }
            .into_view()
        }
        FieldKind::Select => {
            let key = name.clone();
            view! {
              <select
                id = name.clone()
                required = required
                class = INPUT_CLASS
                on:change = move |ev| form.set(&key, &event_target_value(&ev))
              >
                <option value="" selected = move || value.get().is_empty()>"Please select"</option>
                <For
                  each = move || choices.get()
                  key = |choice| *choice
                  let:choice
                >
                  <option value=choice selected = move || value.get() == choice>{ choice }</option>
                </For>
              </select>
            }
            .into_view()
        }
        FieldKind::Checkbox => {
            let key = name.clone();
            view! {
              <input
                id = name.clone()
                type = "checkbox"
                class = "mr-2"
                prop:checked = move || value.get() == "true"
                on:change = move |ev| {
                  let checked = if event_target_checked(&ev) { "true" } else { "false" };
                  form.set(&key, checked);
                }
              />
            }
            .into_view()
        }
    };

    view! {
      <div class="mb-4">
        <label for = name class = LABEL_CLASS>
          { move || label.get() }
          { required.then_some(" *") }
        </label>
        { input }
        { move || error.get().map(|err| view!{
          <p class="mt-1 text-sm text-red-700">{ err }</p>
        })}
      </div>
    }
}
