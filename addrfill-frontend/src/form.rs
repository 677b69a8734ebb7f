use std::collections::HashMap;

use leptos::*;

use addrfill_core::{entities::FormField, form::FormStore};

/// Drops the street address of every block from a saved draft.
///
/// The address input starts empty, so a restored street address
/// would be submitted without being visible.
pub fn restorable_draft(mut draft: HashMap<String, String>) -> HashMap<String, String> {
    draft.retain(|key, _| !key.ends_with(FormField::Address1.name()));
    draft
}

/// Reactive values and validation messages of a form.
#[derive(Debug, Clone, Copy)]
pub struct FormState {
    values: RwSignal<HashMap<String, String>>,
    errors: RwSignal<HashMap<String, String>>,
}

impl FormState {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values: RwSignal::new(values),
            errors: RwSignal::new(HashMap::new()),
        }
    }

    pub fn value(self, key: impl Into<String>) -> Signal<String> {
        let key = key.into();
        Signal::derive(move || {
            self.values
                .with(|values| values.get(&key).cloned().unwrap_or_default())
        })
    }

    pub fn error(self, key: impl Into<String>) -> Signal<Option<String>> {
        let key = key.into();
        Signal::derive(move || self.errors.with(|errors| errors.get(&key).cloned()))
    }

    pub fn set(self, key: &str, value: &str) {
        self.values.update(|values| {
            values.insert(key.to_owned(), value.to_owned());
        });
        self.errors.update(|errors| {
            errors.remove(key);
        });
    }

    pub fn set_errors(self, errors: HashMap<String, String>) {
        self.errors.set(errors);
    }

    pub fn with_values<T>(self, f: impl FnOnce(&HashMap<String, String>) -> T) -> T {
        self.values.with(f)
    }

    pub fn values_untracked(self) -> HashMap<String, String> {
        self.values.get_untracked()
    }
}

impl FormStore for FormState {
    fn set_value(&mut self, key: &str, value: &str) {
        self.set(key, value);
    }
}
