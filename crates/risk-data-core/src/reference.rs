//! Reference data: the fixed customer and vendor universe.
//!
//! Customers and vendors are inserted once at seed time and never change.
//! The generator only references ids from these tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A seeded customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Customer {
    /// Stable customer id.
    pub id: i64,
    /// Display name.
    pub name: &'static str,
    /// Home location.
    pub location: &'static str,
}

/// A seeded vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Vendor {
    /// Stable vendor id.
    pub id: i64,
    /// Display name.
    pub name: &'static str,
    /// Business category.
    pub category: VendorCategory,
}

/// Vendor business category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VendorCategory {
    /// General retail.
    Retail,
    /// Service providers.
    Services,
    /// Digital goods and subscriptions.
    Digital,
    /// Food and beverage.
    Food,
    /// Electronics.
    Electronics,
    /// Software.
    Software,
    /// Shipping and logistics.
    Shipping,
}

impl VendorCategory {
    /// The label as persisted in the store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Retail => "Retail",
            Self::Services => "Services",
            Self::Digital => "Digital",
            Self::Food => "Food",
            Self::Electronics => "Electronics",
            Self::Software => "Software",
            Self::Shipping => "Shipping",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Retail" => Ok(Self::Retail),
            "Services" => Ok(Self::Services),
            "Digital" => Ok(Self::Digital),
            "Food" => Ok(Self::Food),
            "Electronics" => Ok(Self::Electronics),
            "Software" => Ok(Self::Software),
            "Shipping" => Ok(Self::Shipping),
            other => Err(CoreError::UnknownVendorCategory(other.to_string())),
        }
    }
}

/// Customers inserted at seed time.
pub const SEED_CUSTOMERS: [Customer; 3] = [
    Customer {
        id: 1,
        name: "John Doe",
        location: "NY",
    },
    Customer {
        id: 2,
        name: "Jane Smith",
        location: "CA",
    },
    Customer {
        id: 3,
        name: "Bob Lee",
        location: "TX",
    },
];

/// Vendors inserted at seed time.
pub const SEED_VENDORS: [Vendor; 6] = [
    Vendor {
        id: 1,
        name: "Amazon",
        category: VendorCategory::Retail,
    },
    Vendor {
        id: 2,
        name: "Uber",
        category: VendorCategory::Services,
    },
    Vendor {
        id: 3,
        name: "Walmart",
        category: VendorCategory::Retail,
    },
    Vendor {
        id: 4,
        name: "Netflix",
        category: VendorCategory::Digital,
    },
    Vendor {
        id: 5,
        name: "Starbucks",
        category: VendorCategory::Food,
    },
    Vendor {
        id: 6,
        name: "Apple",
        category: VendorCategory::Electronics,
    },
];

/// Sentinel location modelling anomalous geography.
pub const UNKNOWN_LOCATION: &str = "Unknown_Location";

/// Locations a synthetic transaction may originate from.
pub const SEED_LOCATIONS: [&str; 6] = [
    "New York",
    "London",
    "Singapore",
    "Tokyo",
    "Berlin",
    UNKNOWN_LOCATION,
];
