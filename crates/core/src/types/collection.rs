//! Collection documents.
//!
//! Each collection lives in its own file as a single JSON object holding one
//! array, e.g. `{"users": [...]}`. A document that lacks its array key reads
//! as empty.

use serde::{Deserialize, Serialize};

use super::{FoodItem, Owner, User, VendorCategory};

/// Document holding every registered client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersDocument {
    #[serde(default)]
    pub users: Vec<User>,
}

impl UsersDocument {
    /// Whether a client with this exact email is registered.
    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        self.users.iter().any(|user| user.email == email)
    }
}

/// Document holding every registered vendor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnersDocument {
    #[serde(default)]
    pub owners: Vec<Owner>,
}

impl OwnersDocument {
    /// Whether a vendor with this exact email is registered.
    #[must_use]
    pub fn contains_email(&self, email: &str) -> bool {
        self.owners.iter().any(|owner| owner.email == email)
    }

    /// The first vendor registered under `email`.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&Owner> {
        self.owners.iter().find(|owner| owner.email == email)
    }

    /// The first vendor (in collection order) whose embedded items reference `food_name`.
    pub fn seller_of_mut(&mut self, food_name: &str) -> Option<&mut Owner> {
        self.owners
            .iter_mut()
            .find(|owner| owner.lists_item(food_name))
    }
}

/// Document holding the flat catalog of food items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemsDocument {
    #[serde(default)]
    pub food_items: Vec<FoodItem>,
}

impl FoodItemsDocument {
    /// Items offered by the vendor with this email, in storage order.
    pub fn by_vendor<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a FoodItem> + 'a {
        self.food_items.iter().filter(move |item| item.email == email)
    }

    /// Split the catalog into the three category groups.
    #[must_use]
    pub fn categorized(&self) -> CategorizedItems {
        let mut grouped = CategorizedItems::default();
        for item in &self.food_items {
            if let Some(category) = item.vendor_category() {
                grouped.group_mut(category).push(item.clone());
            }
        }
        grouped
    }
}

/// The catalog grouped by vendor category.
///
/// Items whose category is not one of the three literals appear in no group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedItems {
    pub restaurant: Vec<FoodItem>,
    pub supermarket: Vec<FoodItem>,
    pub grocery: Vec<FoodItem>,
}

impl CategorizedItems {
    /// The items grouped under `category`.
    #[must_use]
    pub fn group(&self, category: VendorCategory) -> &[FoodItem] {
        match category {
            VendorCategory::Restaurant => &self.restaurant,
            VendorCategory::Supermarket => &self.supermarket,
            VendorCategory::Grocery => &self.grocery,
        }
    }

    fn group_mut(&mut self, category: VendorCategory) -> &mut Vec<FoodItem> {
        match category {
            VendorCategory::Restaurant => &mut self.restaurant,
            VendorCategory::Supermarket => &mut self.supermarket,
            VendorCategory::Grocery => &mut self.grocery,
        }
    }

    /// Total number of grouped items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.restaurant.len() + self.supermarket.len() + self.grocery.len()
    }

    /// Whether every group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{ItemRef, Price};

    fn item(email: &str, name: &str, category: &str) -> FoodItem {
        FoodItem {
            email: email.to_owned(),
            food_name: name.to_owned(),
            actual_price: Price::parse("10").unwrap(),
            discount_price: Price::parse("9").unwrap(),
            category: category.to_owned(),
        }
    }

    #[test]
    fn test_documents_default_to_empty_arrays() {
        assert_eq!(
            serde_json::to_value(UsersDocument::default()).unwrap(),
            json!({ "users": [] })
        );
        assert_eq!(
            serde_json::to_value(OwnersDocument::default()).unwrap(),
            json!({ "owners": [] })
        );
        assert_eq!(
            serde_json::to_value(FoodItemsDocument::default()).unwrap(),
            json!({ "foodItems": [] })
        );
    }

    #[test]
    fn test_document_without_array_key_is_empty() {
        let doc: FoodItemsDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.food_items.is_empty());
    }

    #[test]
    fn test_categorized_drops_unknown_categories() {
        let doc = FoodItemsDocument {
            food_items: vec![
                item("a@x.io", "Biryani", "restaurant"),
                item("b@x.io", "Soap", "supermarket"),
                item("c@x.io", "Rice", "grocery"),
                item("d@x.io", "Mystery", "unknown"),
                item("a@x.io", "Naan", "restaurant"),
            ],
        };

        let grouped = doc.categorized();
        let names = |category| {
            grouped
                .group(category)
                .iter()
                .map(|i| i.food_name.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(names(VendorCategory::Restaurant), ["Biryani", "Naan"]);
        assert_eq!(names(VendorCategory::Supermarket), ["Soap"]);
        assert_eq!(names(VendorCategory::Grocery), ["Rice"]);
        assert_eq!(grouped.len(), 4);
    }

    #[test]
    fn test_by_vendor_preserves_order() {
        let doc = FoodItemsDocument {
            food_items: vec![
                item("a@x.io", "One", "restaurant"),
                item("b@x.io", "Other", "grocery"),
                item("a@x.io", "Two", "unknown"),
            ],
        };

        let names: Vec<_> = doc.by_vendor("a@x.io").map(|i| i.food_name.as_str()).collect();
        assert_eq!(names, ["One", "Two"]);
        assert_eq!(doc.by_vendor("nobody@x.io").count(), 0);
    }

    #[test]
    fn test_seller_of_returns_first_match() {
        let mut first = Owner::new(
            "First".to_owned(),
            "first@x.io".to_owned(),
            "pw".to_owned(),
            VendorCategory::Restaurant,
        );
        first.items.push(ItemRef::new("Tea"));
        let mut second = first.clone();
        second.email = "second@x.io".to_owned();

        let mut doc = OwnersDocument {
            owners: vec![first, second],
        };

        let seller = doc.seller_of_mut("Tea").unwrap();
        assert_eq!(seller.email, "first@x.io");
        assert!(doc.seller_of_mut("Coffee").is_none());
    }
}
