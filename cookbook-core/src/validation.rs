//! Declarative field rules for request DTOs.
//!
//! Each DTO lists its rules through [`Rules`] and reports every broken rule at
//! once, so a client gets the full set of field problems in one response.

use serde::Serialize;
use std::fmt::Display;
use std::ops::RangeInclusive;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};

/// A single broken field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Implemented by every request type that carries field constraints.
pub trait Validate {
    fn violations(&self) -> Vec<Violation>;

    fn validate(&self) -> CatalogResult<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Validation(violations))
        }
    }
}

/// Accumulates violations for one DTO instance.
#[derive(Debug, Default)]
pub struct Rules {
    violations: Vec<Violation>,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Present and not blank.
    pub fn required_text(mut self, field: &str, value: Option<&str>) -> Self {
        if value.map_or(true, |v| v.trim().is_empty()) {
            self.violations.push(Violation::new(field, "is required"));
        }
        self
    }

    /// Character count within `min..=max`. Absent values are not checked.
    pub fn text_length(mut self, field: &str, value: Option<&str>, min: usize, max: usize) -> Self {
        if let Some(v) = value {
            let len = v.chars().count();
            if len < min || len > max {
                self.violations.push(Violation::new(
                    field,
                    format!("must be between {} and {} characters", min, max),
                ));
            }
        }
        self
    }

    pub fn max_length(mut self, field: &str, value: Option<&str>, max: usize) -> Self {
        if let Some(v) = value {
            if v.chars().count() > max {
                self.violations.push(Violation::new(
                    field,
                    format!("must be at most {} characters", max),
                ));
            }
        }
        self
    }

    /// NaN never passes.
    pub fn in_range<T>(mut self, field: &str, value: T, range: RangeInclusive<T>) -> Self
    where
        T: PartialOrd + Display,
    {
        if !range.contains(&value) {
            self.violations.push(Violation::new(
                field,
                format!("must be between {} and {}", range.start(), range.end()),
            ));
        }
        self
    }

    pub fn required<T>(mut self, field: &str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.violations.push(Violation::new(field, "is required"));
        }
        self
    }

    pub fn non_nil_id(mut self, field: &str, value: Option<Uuid>) -> Self {
        if !is_present_id(value) {
            self.violations.push(Violation::new(field, "must be a non-empty id"));
        }
        self
    }

    /// Exactly one of an id field and a free-text field.
    pub fn exactly_one_of(
        mut self,
        id_field: &str,
        id: Option<Uuid>,
        text_field: &str,
        text: Option<&str>,
    ) -> Self {
        if is_present_id(id) == is_present_text(text) {
            self.violations.push(Violation::new(
                id_field,
                format!("exactly one of {} or {} must be given", id_field, text_field),
            ));
        }
        self
    }

    pub fn finish(self) -> Vec<Violation> {
        self.violations
    }
}

pub(crate) fn is_present_id(id: Option<Uuid>) -> bool {
    id.is_some_and(|id| !id.is_nil())
}

pub(crate) fn is_present_text(text: Option<&str>) -> bool {
    text.is_some_and(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        let v = Rules::new()
            .required_text("name", None)
            .required_text("author", Some("   "))
            .required_text("ok", Some("x"))
            .finish();
        let fields: Vec<_> = v.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "author"]);
    }

    #[test]
    fn test_text_length_counts_characters_not_bytes() {
        // "Łyżka" is 5 characters but 7 bytes
        let v = Rules::new()
            .text_length("name", Some("Łyżka"), 2, 5)
            .finish();
        assert!(v.is_empty());

        let v = Rules::new().text_length("name", Some("a"), 2, 5).finish();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].message, "must be between 2 and 5 characters");
    }

    #[test]
    fn test_absent_text_skips_length_rules() {
        let v = Rules::new()
            .text_length("name", None, 3, 50)
            .max_length("description", None, 10)
            .finish();
        assert!(v.is_empty());
    }

    #[test]
    fn test_in_range_bounds_are_inclusive() {
        assert!(Rules::new().in_range("q", 0.1, 0.1..=10000.0).finish().is_empty());
        assert!(Rules::new().in_range("q", 10000.0, 0.1..=10000.0).finish().is_empty());
        assert_eq!(Rules::new().in_range("q", 0.0, 0.1..=10000.0).finish().len(), 1);
        assert_eq!(Rules::new().in_range("q", f64::NAN, 0.0..=5.0).finish().len(), 1);
    }

    #[test]
    fn test_non_nil_id() {
        assert_eq!(Rules::new().non_nil_id("id", None).finish().len(), 1);
        assert_eq!(Rules::new().non_nil_id("id", Some(Uuid::nil())).finish().len(), 1);
        assert!(Rules::new()
            .non_nil_id("id", Some(Uuid::new_v4()))
            .finish()
            .is_empty());
    }

    #[test]
    fn test_exactly_one_of() {
        let id = Some(Uuid::new_v4());
        let check = |id: Option<Uuid>, name: Option<&str>| {
            Rules::new()
                .exactly_one_of("ingredient_id", id, "ingredient_name", name)
                .finish()
                .is_empty()
        };
        assert!(check(id, None));
        assert!(check(None, Some("Sól")));
        assert!(check(Some(Uuid::nil()), Some("Sól")));
        assert!(!check(id, Some("Sól")));
        assert!(!check(None, None));
        assert!(!check(None, Some("  ")));
    }

    #[test]
    fn test_validate_wraps_violations() {
        struct Empty;
        impl Validate for Empty {
            fn violations(&self) -> Vec<Violation> {
                Rules::new().required_text("name", None).finish()
            }
        }
        match Empty.validate() {
            Err(CatalogError::Validation(v)) => assert_eq!(v[0].field, "name"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
