//! Proptest strategies for property-based testing

use proptest::prelude::*;

/// Strategy for generating well-formed single-word names
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10}".prop_map(|s| s)
}

/// Strategy for generating names with doubled interior whitespace
pub fn doubled_space_name_strategy() -> impl Strategy<Value = String> {
    ("[A-Za-z]{1,10}", "[A-Za-z]{1,10}")
        .prop_map(|(left, right)| format!("{}  {}", left, right))
}

/// Strategy for generating names longer than the 30-character cap
pub fn overlong_name_strategy() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::char::range('a', 'z'), 31..60)
        .prop_map(|chars| chars.into_iter().collect())
}
