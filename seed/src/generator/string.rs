use super::{Generator, RngCore, SqlValue};
use crate::datasets::{domains, locations, names};
use rand::Rng;

/// Generates random text strings of a given length range.
pub struct TextGen {
    pub min_len: usize,
    pub max_len: usize,
}

impl Generator for TextGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let len = rng.random_range(self.min_len..=self.max_len);
        let s: String = (0..len)
            .map(|_| {
                let idx = rng.random_range(0u8..26);
                (b'a' + idx) as char
            })
            .collect();
        SqlValue::Text(s)
    }
    fn name(&self) -> &'static str {
        "Text"
    }
}

/// Picks a random first name from the dataset.
pub struct FirstNameGen;

impl Generator for FirstNameGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let idx = rng.random_range(0..names::FIRST_NAMES.len());
        SqlValue::Text(names::FIRST_NAMES[idx].to_string())
    }
    fn name(&self) -> &'static str {
        "FirstName"
    }
}

/// Picks a random last name from the dataset.
pub struct LastNameGen;

impl Generator for LastNameGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let idx = rng.random_range(0..names::LAST_NAMES.len());
        SqlValue::Text(names::LAST_NAMES[idx].to_string())
    }
    fn name(&self) -> &'static str {
        "LastName"
    }
}

/// Generates a random full name (first + last).
pub struct FullNameGen;

impl Generator for FullNameGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let first = names::FIRST_NAMES[rng.random_range(0..names::FIRST_NAMES.len())];
        let last = names::LAST_NAMES[rng.random_range(0..names::LAST_NAMES.len())];
        SqlValue::Text(format!("{first} {last}"))
    }
    fn name(&self) -> &'static str {
        "FullName"
    }
}

/// Generates a random email address using first/last name and domains.
pub struct EmailGen;

impl Generator for EmailGen {
    fn generate(&self, rng: &mut dyn RngCore, index: usize) -> SqlValue {
        let first =
            names::FIRST_NAMES[rng.random_range(0..names::FIRST_NAMES.len())].to_lowercase();
        let last = names::LAST_NAMES[rng.random_range(0..names::LAST_NAMES.len())].to_lowercase();
        let domain = domains::EMAIL_DOMAINS[rng.random_range(0..domains::EMAIL_DOMAINS.len())];
        // Add index suffix for uniqueness
        SqlValue::Text(format!("{first}.{last}{index}@{domain}"))
    }
    fn name(&self) -> &'static str {
        "Email"
    }
}

/// Generates a random US-style phone number.
pub struct PhoneGen;

impl Generator for PhoneGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let area: u16 = rng.random_range(200..999);
        let exchange: u16 = rng.random_range(200..999);
        let subscriber: u16 = rng.random_range(1000..9999);
        SqlValue::Text(format!("({area}) {exchange}-{subscriber}"))
    }
    fn name(&self) -> &'static str {
        "Phone"
    }
}

/// Picks a random city.
pub struct CityGen;

impl Generator for CityGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let idx = rng.random_range(0..locations::CITIES.len());
        SqlValue::Text(locations::CITIES[idx].to_string())
    }
    fn name(&self) -> &'static str {
        "City"
    }
}

/// Picks a random country.
pub struct CountryGen;

impl Generator for CountryGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let idx = rng.random_range(0..locations::COUNTRIES.len());
        SqlValue::Text(locations::COUNTRIES[idx].to_string())
    }
    fn name(&self) -> &'static str {
        "Country"
    }
}

/// Generates a random street address.
pub struct AddressGen;

impl Generator for AddressGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let num: u16 = rng.random_range(1..9999);
        let first = names::FIRST_NAMES[rng.random_range(0..names::FIRST_NAMES.len())];
        let suffix =
            locations::STREET_SUFFIXES[rng.random_range(0..locations::STREET_SUFFIXES.len())];
        SqlValue::Text(format!("{num} {first} {suffix}"))
    }
    fn name(&self) -> &'static str {
        "Address"
    }
}

/// Picks a random job title.
pub struct JobTitleGen;

impl Generator for JobTitleGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let idx = rng.random_range(0..names::JOB_TITLES.len());
        SqlValue::Text(names::JOB_TITLES[idx].to_string())
    }
    fn name(&self) -> &'static str {
        "JobTitle"
    }
}

/// Generates a random company name.
pub struct CompanyGen;

impl Generator for CompanyGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let last = names::LAST_NAMES[rng.random_range(0..names::LAST_NAMES.len())];
        let suffix =
            domains::COMPANY_SUFFIXES[rng.random_range(0..domains::COMPANY_SUFFIXES.len())];
        SqlValue::Text(format!("{last} {suffix}"))
    }
    fn name(&self) -> &'static str {
        "Company"
    }
}

/// Generates lorem ipsum text with a given word count.
pub struct LoremGen {
    pub words: usize,
}

impl Generator for LoremGen {
    fn generate(&self, rng: &mut dyn RngCore, _index: usize) -> SqlValue {
        let text: Vec<&str> = (0..self.words)
            .map(|_| {
                let idx = rng.random_range(0..domains::LOREM_WORDS.len());
                domains::LOREM_WORDS[idx]
            })
            .collect();
        SqlValue::Text(text.join(" "))
    }
    fn name(&self) -> &'static str {
        "Lorem"
    }
}
