use std::collections::HashMap;

/// A key-value store backing the fields of a form.
///
/// Writing a value must not fail: stores that reject unknown
/// keys are expected to ignore them.
pub trait FormStore {
    fn set_value(&mut self, key: &str, value: &str);
}

impl<S> FormStore for &mut S
where
    S: FormStore + ?Sized,
{
    fn set_value(&mut self, key: &str, value: &str) {
        (**self).set_value(key, value);
    }
}

/// A form store that keeps its values in memory
/// and records every write in order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormStore {
    values: HashMap<String, String>,
    writes: Vec<(String, String)>,
}

impl InMemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// All writes in the order they happened.
    pub fn writes(&self) -> &[(String, String)] {
        &self.writes
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FormStore for InMemoryFormStore {
    fn set_value(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
        self.writes.push((key.to_owned(), value.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_values_and_record_writes() {
        let mut store = InMemoryFormStore::new();
        assert!(store.is_empty());
        store.set_value("city", "Springfield");
        store.set_value("city", "Shelbyville");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("city"), Some("Shelbyville"));
        assert_eq!(store.writes().len(), 2);
    }

    #[test]
    fn write_through_mutable_reference() {
        fn write_phone<S: FormStore>(mut form: S) {
            form.set_value("phone", "555");
        }
        let mut store = InMemoryFormStore::new();
        write_phone(&mut store);
        assert_eq!(store.get("phone"), Some("555"));
    }
}
