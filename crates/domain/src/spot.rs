//! Spot: a parking place offered by an owner.

use serde::{Deserialize, Serialize};

/// A parking place listing.
///
/// Every field is carried as the text the client submitted; prices and
/// capacity are not coerced. Absent fields are omitted from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spot {
    /// Identifier of the owning user. Not checked against the user table.
    #[serde(rename = "ownerId", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_price: Option<String>,
    /// Number of cars the place holds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spots: Option<String>,
}

impl Spot {
    /// Create a builder for constructing a [`Spot`].
    #[must_use]
    pub fn builder() -> SpotBuilder {
        SpotBuilder::default()
    }

    /// Whether the spot's zipcode is exactly `zipcode`.
    #[must_use]
    pub fn is_in_zipcode(&self, zipcode: &str) -> bool {
        self.zipcode.as_deref() == Some(zipcode)
    }
}

/// Step-by-step builder for [`Spot`].
#[derive(Debug, Default)]
pub struct SpotBuilder {
    inner: Spot,
}

impl SpotBuilder {
    #[must_use]
    pub fn owner_id(mut self, owner_id: impl Into<String>) -> Self {
        self.inner.owner_id = Some(owner_id.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.inner.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.inner.zipcode = Some(zipcode.into());
        self
    }

    #[must_use]
    pub fn hour_price(mut self, hour_price: impl Into<String>) -> Self {
        self.inner.hour_price = Some(hour_price.into());
        self
    }

    #[must_use]
    pub fn day_price(mut self, day_price: impl Into<String>) -> Self {
        self.inner.day_price = Some(day_price.into());
        self
    }

    #[must_use]
    pub fn spots(mut self, spots: impl Into<String>) -> Self {
        self.inner.spots = Some(spots.into());
        self
    }

    #[must_use]
    pub fn build(self) -> Spot {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batcave() -> Spot {
        Spot::builder()
            .owner_id("c81e728d9d4c2f636f067f89cc14862c")
            .address("Batmans Cave")
            .zipcode("72000")
            .hour_price("75")
            .day_price("532")
            .spots("1")
            .build()
    }

    #[test]
    fn should_match_exact_zipcode_only() {
        let spot = batcave();
        assert!(spot.is_in_zipcode("72000"));
        assert!(!spot.is_in_zipcode("7200"));
        assert!(!spot.is_in_zipcode(" 72000"));
    }

    #[test]
    fn should_not_match_any_zipcode_when_unset() {
        let spot = Spot::default();
        assert!(!spot.is_in_zipcode(""));
    }

    #[test]
    fn should_use_wire_field_names() {
        let json = serde_json::to_value(batcave()).unwrap();
        assert_eq!(json["ownerId"], "c81e728d9d4c2f636f067f89cc14862c");
        assert_eq!(json["hour_price"], "75");
        assert_eq!(json["day_price"], "532");
        assert_eq!(json["spots"], "1");
    }

    #[test]
    fn should_omit_absent_fields() {
        let spot = Spot::builder().address("Karl Johans gate 1").build();
        let json = serde_json::to_value(spot).unwrap();
        let fields = json.as_object().unwrap();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("address"));
    }
}
