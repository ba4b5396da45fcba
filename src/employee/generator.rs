//! Random record generation.
//!
//! # Responsibilities
//! - Produce one fully populated record per caller-supplied id
//! - Sample the text fields from the Chinese-locale corpora
//! - Keep age and salary inside their documented bounds

use fake::faker::address::raw::StreetName;
use fake::faker::name::raw::Name;
use fake::faker::phone_number::raw::CellNumber;
use fake::locales::ZH_CN;
use fake::Fake;
use rand::Rng;

use crate::employee::Employee;

/// Age bounds, inclusive lower and exclusive upper.
const AGE_MIN: u8 = 20;
const AGE_MAX: u8 = 50;

/// Salary is drawn as `1..SALARY_STEPS` multiples of `SALARY_UNIT`.
const SALARY_STEPS: u32 = 2000;
const SALARY_UNIT: u32 = 1000;

impl Employee {
    /// Build a record carrying the given sequence number.
    ///
    /// Every call samples fresh random data; two calls with the same id
    /// agree on nothing but the id.
    pub fn generate(id: u64) -> Self {
        let mut rng = rand::thread_rng();

        Self {
            id,
            name: Name(ZH_CN).fake(),
            age: rng.gen_range(AGE_MIN..AGE_MAX),
            salary: rng.gen_range(1..SALARY_STEPS) * SALARY_UNIT,
            phone_number: CellNumber(ZH_CN).fake(),
            address: StreetName(ZH_CN).fake(),
        }
    }
}
