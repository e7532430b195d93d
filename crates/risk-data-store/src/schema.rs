//! Database schema definitions.
//!
//! This module defines the four tables of the risk store. Every statement is
//! `IF NOT EXISTS`, so replaying the schema against a partially created
//! database never recreates or drops a table.

/// Table names.
pub mod table {
    /// Seeded customers. Also the marker table for initialization.
    pub const CUSTOMERS: &str = "customers";

    /// Seeded vendors.
    pub const VENDORS: &str = "vendors";

    /// Generated transactions, keyed by a store-assigned `transaction_id`.
    pub const TRANSACTIONS: &str = "transactions";

    /// Risk results, one per generated transaction.
    pub const RISK_RESULTS: &str = "risk_results";
}

const CREATE_CUSTOMERS: &str = "CREATE TABLE IF NOT EXISTS customers (\
    customer_id INTEGER PRIMARY KEY, \
    name TEXT, \
    location TEXT)";

const CREATE_VENDORS: &str = "CREATE TABLE IF NOT EXISTS vendors (\
    vendor_id INTEGER PRIMARY KEY, \
    name TEXT, \
    category TEXT)";

const CREATE_TRANSACTIONS: &str = "CREATE TABLE IF NOT EXISTS transactions (\
    transaction_id INTEGER PRIMARY KEY, \
    customer_id INTEGER, \
    vendor_id INTEGER, \
    amount REAL, \
    timestamp TEXT, \
    location TEXT, \
    status TEXT)";

const CREATE_RISK_RESULTS: &str = "CREATE TABLE IF NOT EXISTS risk_results (\
    result_id INTEGER PRIMARY KEY, \
    transaction_id INTEGER, \
    risk_score REAL, \
    risk_level TEXT, \
    reason TEXT, \
    is_reviewed BOOLEAN DEFAULT 0, \
    timestamp DATETIME DEFAULT CURRENT_TIMESTAMP, \
    fraud_probability REAL)";

/// Returns all table names in creation order.
#[must_use]
pub fn all_tables() -> Vec<&'static str> {
    vec![
        table::CUSTOMERS,
        table::VENDORS,
        table::TRANSACTIONS,
        table::RISK_RESULTS,
    ]
}

/// Returns the DDL statements in creation order.
#[must_use]
pub fn create_statements() -> [&'static str; 4] {
    [
        CREATE_CUSTOMERS,
        CREATE_VENDORS,
        CREATE_TRANSACTIONS,
        CREATE_RISK_RESULTS,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_has_a_statement() {
        let statements = create_statements();
        for (name, ddl) in all_tables().into_iter().zip(statements) {
            assert!(ddl.contains(&format!("IF NOT EXISTS {name} (")), "{ddl}");
        }
    }
}
