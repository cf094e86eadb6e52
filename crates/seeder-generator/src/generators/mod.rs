//! Individual value generators for each semantic type.
//!
//! This module maps a [`SemanticType`] to the generation logic that produces
//! one synthetic [`SeedValue`] for it, and [`generate_for_column`] keeps the
//! value within the column's declared width.

pub mod numeric;
pub mod person;
pub mod text;
pub mod timestamp;

use chrono::Utc;
use rand::Rng;
use seeder_core::{Column, SeedValue, SemanticType};

/// Generate a value that fits the column's declared integer range and length.
pub fn generate_for_column<R: Rng>(column: &Column, rng: &mut R) -> SeedValue {
    if column.semantic_type == SemanticType::Integer {
        let (min, max) = column.integer_range;
        return numeric::generate_int_range(rng, min, max);
    }

    let value = generate_value(column.semantic_type, rng);
    match column.max_length {
        Some(max_chars) if column.semantic_type.is_textual() => text::truncate_to(value, max_chars),
        _ => value,
    }
}

/// Generate a value for the given semantic type.
pub fn generate_value<R: Rng>(semantic_type: SemanticType, rng: &mut R) -> SeedValue {
    match semantic_type {
        SemanticType::Name => person::generate_name(rng),
        SemanticType::Email => person::generate_email(rng),
        SemanticType::Address => person::generate_address(rng),
        SemanticType::Integer => numeric::generate_int(rng),
        SemanticType::Timestamp => {
            timestamp::generate_timestamp_this_year(rng, Utc::now().naive_utc())
        }
        SemanticType::ShortText => text::generate_short_text(rng),
        SemanticType::LongText => text::generate_long_text(rng),
        SemanticType::Boolean => SeedValue::Bool(rng.gen_bool(0.5)),
        SemanticType::Unknown => text::generate_word(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use seeder_core::TIMESTAMP_FORMAT;

    #[test]
    fn test_every_type_has_the_right_shape() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            for semantic_type in SemanticType::ALL {
                let value = generate_value(semantic_type, &mut rng);
                match semantic_type {
                    SemanticType::Integer => {
                        assert!(value.as_i64().is_some_and(|v| v >= 0), "{value:?}")
                    }
                    SemanticType::Boolean => assert!(value.as_bool().is_some(), "{value:?}"),
                    SemanticType::Timestamp => {
                        let text = value.to_sql_text();
                        assert!(
                            NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT).is_ok(),
                            "{text}"
                        );
                        assert_eq!(text.len(), 19);
                    }
                    _ => assert!(
                        value.as_str().is_some_and(|s| !s.is_empty()),
                        "{semantic_type}: {value:?}"
                    ),
                }
            }
        }
    }

    #[test]
    fn test_narrow_columns_stay_within_declared_width() {
        let mut rng = StdRng::seed_from_u64(11);
        let qty = Column::from_db("qty", "smallint");
        let flag = Column::from_db("flag", "tinyint(4)");
        let released = Column::from_db("released", "year");
        let code = Column::from_db("code", "varchar(10)");
        let email = Column::from_db("email", "varchar(12)");

        for _ in 0..1000 {
            let qty = generate_for_column(&qty, &mut rng).as_i64().unwrap();
            assert!((0..=32_767).contains(&qty));

            let flag = generate_for_column(&flag, &mut rng).as_i64().unwrap();
            assert!((0..=127).contains(&flag));

            let released = generate_for_column(&released, &mut rng).as_i64().unwrap();
            assert!((1901..=2155).contains(&released));

            let code = generate_for_column(&code, &mut rng);
            let code = code.as_str().unwrap();
            assert!(!code.is_empty() && code.chars().count() <= 10, "{code}");

            let email = generate_for_column(&email, &mut rng);
            assert!(email.as_str().unwrap().chars().count() <= 12);
        }
    }

    #[test]
    fn test_unbounded_columns_keep_full_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let bio = Column::from_db("bio", "text");
        let value = generate_for_column(&bio, &mut rng);
        assert!(value.as_str().unwrap().len() > 10);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for semantic_type in [
            SemanticType::Name,
            SemanticType::Email,
            SemanticType::Address,
            SemanticType::Integer,
        ] {
            assert_eq!(
                generate_value(semantic_type, &mut rng1),
                generate_value(semantic_type, &mut rng2)
            );
        }
    }
}
