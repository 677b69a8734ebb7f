pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_selection_builder::*;

pub mod place_selection_builder {

    use super::*;
    use crate::place::*;

    #[derive(Debug)]
    pub struct PlaceSelectionBuild {
        components: Vec<AddressComponent>,
    }

    impl PlaceSelectionBuild {
        /// Adds a component; unknown type tags are dropped.
        pub fn component(mut self, short_name: &str, types: &[&str]) -> Self {
            self.components.push(AddressComponent {
                short_name: Some(short_name.into()),
                long_name: None,
                types: types.iter().filter_map(|t| t.parse().ok()).collect(),
            });
            self
        }
        pub fn component_without_name(mut self, types: &[&str]) -> Self {
            self.components.push(AddressComponent {
                short_name: None,
                long_name: None,
                types: types.iter().filter_map(|t| t.parse().ok()).collect(),
            });
            self
        }
        pub fn finish(self) -> PlaceSelection {
            PlaceSelection {
                address_components: Some(self.components),
            }
        }
    }

    impl Builder for PlaceSelection {
        type Build = PlaceSelectionBuild;
        fn build() -> Self::Build {
            PlaceSelectionBuild { components: vec![] }
        }
    }
}
