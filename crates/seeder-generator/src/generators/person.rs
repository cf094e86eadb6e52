//! Person-data generators: names, e-mail addresses and postal addresses.

use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use seeder_core::SeedValue;

/// Generate a full person name, e.g. `Jane Doe`.
pub fn generate_name<R: Rng>(rng: &mut R) -> SeedValue {
    SeedValue::Text(Name().fake_with_rng(rng))
}

/// Generate an e-mail address on a reserved example domain.
pub fn generate_email<R: Rng>(rng: &mut R) -> SeedValue {
    SeedValue::Text(SafeEmail().fake_with_rng(rng))
}

/// Generate a single-line postal address.
///
/// Format: `<number> <street>, <city>, <state> <zip>`.
pub fn generate_address<R: Rng>(rng: &mut R) -> SeedValue {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateAbbr().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    SeedValue::Text(format!("{number} {street}, {city}, {state} {zip}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_email() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let email = generate_email(&mut rng);
            let email = email.as_str().unwrap();
            assert!(email.contains('@'), "{email}");
            assert!(!email.starts_with('@'));
        }
    }

    #[test]
    fn test_generate_name() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = generate_name(&mut rng);
        assert!(!name.as_str().unwrap().trim().is_empty());
    }

    #[test]
    fn test_generate_address_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let address = generate_address(&mut rng);
        let address = address.as_str().unwrap();
        assert_eq!(address.matches(", ").count(), 2, "{address}");
    }
}
