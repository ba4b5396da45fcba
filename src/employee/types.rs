//! Employee record definition.

use serde::{Deserialize, Serialize};

/// A generated employee record.
///
/// Field names are camelCase on the wire (`phoneNumber`), which is the shape
/// stream consumers parse line by line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Sequence number within one stream subscription, starting at 0.
    pub id: u64,
    /// Full name.
    pub name: String,
    /// Age in years, sampled from [20, 50).
    pub age: u8,
    /// Salary, a multiple of 1000 below 2,000,000.
    pub salary: u32,
    /// Cell phone number.
    pub phone_number: String,
    /// Street-level address.
    pub address: String,
}
