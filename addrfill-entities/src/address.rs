use crate::place::{ComponentType, PlaceSelection};

/// Address values that could be extracted from a [`PlaceSelection`].
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street  : Option<String>,
    pub zip     : Option<String>,
    pub city    : Option<String>,
    pub country : Option<String>,
    pub state   : Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_none()
            && self.zip.is_none()
            && self.city.is_none()
            && self.country.is_none()
            && self.state.is_none()
    }

    /// Picks the first matching component for every part of the address.
    ///
    /// The street is only available if both the street number
    /// and the route are known.
    pub fn from_place(place: &PlaceSelection) -> Self {
        let short = |ty| place.short_name_of(ty).map(ToOwned::to_owned);
        let street = place
            .short_name_of(ComponentType::StreetNumber)
            .zip(place.short_name_of(ComponentType::Route))
            .map(|(number, route)| format!("{number} {route}"));
        Self {
            street,
            zip: short(ComponentType::PostalCode),
            city: short(ComponentType::Locality),
            country: short(ComponentType::Country),
            state: short(ComponentType::AdministrativeAreaLevel1),
        }
    }
}
