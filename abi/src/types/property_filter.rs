use derive_builder::Builder;

use crate::{Error, Normalizer, Validator};

/// Search criteria for the property catalog. Empty collections mean "no
/// restriction"; `has_active_booking` is a tri-state where `None` means
/// unconstrained. All matching semantics are delegated to the server-side
/// `get_filtered_properties` function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(build_fn(private, name = "private_build"), setter(into), default)]
pub struct PropertyFilter {
    /// Case-insensitive substring match against the property title.
    #[builder(setter(into, strip_option))]
    pub query: Option<String>,
    pub categories: Vec<String>,
    /// A matching property must have all of these.
    pub amenities: Vec<String>,
    #[builder(setter(strip_option))]
    pub has_active_booking: Option<bool>,
}

impl PropertyFilterBuilder {
    pub fn build(&self) -> Result<PropertyFilter, Error> {
        let mut filter = self
            .private_build()
            .expect("failed to build property filter");
        filter.normalize()?;
        Ok(filter)
    }
}

impl Validator for PropertyFilter {
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }
}

impl Normalizer for PropertyFilter {
    fn do_normalize(&mut self) {
        // the search bar hands over whatever the operator typed; blank
        // free text means "no restriction"
        if let Some(query) = self.query.take() {
            let trimmed = query.trim();
            if !trimmed.is_empty() {
                self.query = Some(trimmed.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_should_be_unconstrained() {
        let filter = PropertyFilterBuilder::default().build().unwrap();
        assert_eq!(filter, PropertyFilter::default());
        assert!(filter.query.is_none());
        assert!(filter.categories.is_empty());
        assert!(filter.amenities.is_empty());
        assert!(filter.has_active_booking.is_none());
    }

    #[test]
    fn blank_query_should_normalize_to_none() {
        let filter = PropertyFilterBuilder::default()
            .query("   ")
            .build()
            .unwrap();
        assert!(filter.query.is_none());

        let filter = PropertyFilterBuilder::default()
            .query("  loft ")
            .build()
            .unwrap();
        assert_eq!(filter.query.as_deref(), Some("loft"));
    }

    #[test]
    fn builder_should_set_all_criteria() {
        let filter = PropertyFilterBuilder::default()
            .query("river")
            .categories(vec!["apartment".to_string()])
            .amenities(vec!["Wi-Fi".to_string(), "Parking".to_string()])
            .has_active_booking(true)
            .build()
            .unwrap();
        assert_eq!(filter.query.as_deref(), Some("river"));
        assert_eq!(filter.categories, ["apartment"]);
        assert_eq!(filter.amenities, ["Wi-Fi", "Parking"]);
        assert_eq!(filter.has_active_booking, Some(true));
    }
}
