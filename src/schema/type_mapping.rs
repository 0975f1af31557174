// Copyright (c) 2025 ClickHouse Adapter Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! ClickHouse native type → abstract/application type mapping.
//!
//! Lookups are exact and case-sensitive: the ClickHouse catalog reports
//! type names with fixed casing (`UInt32`, not `UINT32`). Composite types
//! (`Array(...)`, `Tuple(...)`, `Nested(...)`) are intentionally unmapped
//! and fall through to the string default.

use crate::schema::types::{AbstractType, AppType};

/// Abstract type used for native names with no map entry.
pub const DEFAULT_ABSTRACT_TYPE: AbstractType = AbstractType::String;

/// Map a ClickHouse native type name to its abstract type, if it has one.
///
/// Both float widths map to [`AbstractType::BigFloat`] so the application
/// layer can surface them as strings without losing precision. The three
/// enumeration variants are plain strings to the ORM.
pub fn abstract_type_for(native: &str) -> Option<AbstractType> {
    let mapped = match native {
        "Int8" => AbstractType::TinyInt,
        "Int16" => AbstractType::SmallInt,
        "Int32" => AbstractType::Integer,
        "Int64" => AbstractType::BigInt,
        "UInt8" => AbstractType::TinyInt,
        "UInt16" => AbstractType::SmallInt,
        "UInt32" => AbstractType::Integer,
        "UInt64" => AbstractType::BigInt,
        "Float32" => AbstractType::BigFloat,
        "Float64" => AbstractType::BigFloat,
        "String" => AbstractType::String,
        "FixedString" => AbstractType::FixedString,
        "Date" => AbstractType::Date,
        "DateTime" => AbstractType::DateTime,
        "Enum" | "Enum8" | "Enum16" => AbstractType::String,
        _ => return None,
    };
    Some(mapped)
}

/// Derive the application-level coercion hint for an abstract type.
///
/// The big-int hint degrades to a string on targets whose native integer
/// cannot hold the full range. Binary hints an opaque resource. Everything
/// without a narrower hint is a string.
pub fn app_type_for(abstract_type: AbstractType) -> AppType {
    match abstract_type {
        AbstractType::TinyInt | AbstractType::SmallInt | AbstractType::Integer => {
            AppType::Integer
        }
        AbstractType::BigInt => {
            if cfg!(target_pointer_width = "64") {
                AppType::Integer
            } else {
                AppType::String
            }
        }
        AbstractType::Float | AbstractType::Double => AppType::Double,
        AbstractType::Boolean => AppType::Boolean,
        AbstractType::Binary | AbstractType::Resource => AppType::Resource,
        AbstractType::BigFloat
        | AbstractType::String
        | AbstractType::FixedString
        | AbstractType::Date
        | AbstractType::DateTime
        | AbstractType::Json => AppType::String,
    }
}

/// `true` iff the raw native type string is exactly one of the unsigned
/// integer family.
///
/// Parameterized spellings (`UInt8(1)`, were one to exist) do not match;
/// the check runs on the unparsed catalog text.
pub fn is_unsigned(native: &str) -> bool {
    matches!(native, "UInt8" | "UInt16" | "UInt32" | "UInt64")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_integer_mapping() {
        assert_eq!(abstract_type_for("Int8"), Some(AbstractType::TinyInt));
        assert_eq!(abstract_type_for("Int16"), Some(AbstractType::SmallInt));
        assert_eq!(abstract_type_for("Int32"), Some(AbstractType::Integer));
        assert_eq!(abstract_type_for("Int64"), Some(AbstractType::BigInt));
    }

    #[test]
    fn test_unsigned_integer_mapping() {
        assert_eq!(abstract_type_for("UInt8"), Some(AbstractType::TinyInt));
        assert_eq!(abstract_type_for("UInt16"), Some(AbstractType::SmallInt));
        assert_eq!(abstract_type_for("UInt32"), Some(AbstractType::Integer));
        assert_eq!(abstract_type_for("UInt64"), Some(AbstractType::BigInt));
    }

    #[test]
    fn test_float_mapping_preserves_precision() {
        assert_eq!(abstract_type_for("Float32"), Some(AbstractType::BigFloat));
        assert_eq!(abstract_type_for("Float64"), Some(AbstractType::BigFloat));
    }

    #[test]
    fn test_string_and_temporal_mapping() {
        assert_eq!(abstract_type_for("String"), Some(AbstractType::String));
        assert_eq!(
            abstract_type_for("FixedString"),
            Some(AbstractType::FixedString)
        );
        assert_eq!(abstract_type_for("Date"), Some(AbstractType::Date));
        assert_eq!(abstract_type_for("DateTime"), Some(AbstractType::DateTime));
    }

    #[test]
    fn test_enum_variants_map_to_string() {
        assert_eq!(abstract_type_for("Enum"), Some(AbstractType::String));
        assert_eq!(abstract_type_for("Enum8"), Some(AbstractType::String));
        assert_eq!(abstract_type_for("Enum16"), Some(AbstractType::String));
    }

    #[test]
    fn test_composite_types_unmapped() {
        assert_eq!(abstract_type_for("Array(String)"), None);
        assert_eq!(abstract_type_for("Array"), None);
        assert_eq!(abstract_type_for("Tuple"), None);
        assert_eq!(abstract_type_for("Nested"), None);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(abstract_type_for("uint32"), None);
        assert_eq!(abstract_type_for("STRING"), None);
    }

    #[test]
    fn test_app_type_integers() {
        assert_eq!(app_type_for(AbstractType::TinyInt), AppType::Integer);
        assert_eq!(app_type_for(AbstractType::SmallInt), AppType::Integer);
        assert_eq!(app_type_for(AbstractType::Integer), AppType::Integer);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_app_type_bigint_on_64_bit() {
        assert_eq!(app_type_for(AbstractType::BigInt), AppType::Integer);
    }

    #[test]
    fn test_app_type_fallbacks() {
        assert_eq!(app_type_for(AbstractType::BigFloat), AppType::String);
        assert_eq!(app_type_for(AbstractType::Date), AppType::String);
        assert_eq!(app_type_for(AbstractType::Json), AppType::String);
        assert_eq!(app_type_for(AbstractType::Binary), AppType::Resource);
        assert_eq!(app_type_for(AbstractType::Boolean), AppType::Boolean);
        assert_eq!(app_type_for(AbstractType::Double), AppType::Double);
    }

    #[test]
    fn test_is_unsigned_exact_match_only() {
        assert!(is_unsigned("UInt8"));
        assert!(is_unsigned("UInt16"));
        assert!(is_unsigned("UInt32"));
        assert!(is_unsigned("UInt64"));
        assert!(!is_unsigned("UInt8(1)"));
        assert!(!is_unsigned("Int8"));
        assert!(!is_unsigned("uint8"));
        assert!(!is_unsigned("UInt128"));
    }
}
