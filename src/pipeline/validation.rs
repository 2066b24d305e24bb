//! Validation engine for input bundles.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`SalesInput`] and collects every diagnostic into a
//! [`ValidationReport`] — it never short-circuits on the first error, so
//! callers see all problems at once. The pipeline refuses to run when the
//! report contains errors; warnings never block.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use sales_rank::pipeline::validation::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&input);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::InputError;
use crate::types::SalesInput;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to an
/// [`InputError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: InputError,
}

impl ValidationDiagnostic {
    pub fn error(err: InputError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: InputError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &InputError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &InputError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// One-line summary of all error diagnostics, for embedding in a
    /// top-level error message.
    pub fn error_summary(&self) -> String {
        self.errors()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`SalesInput`] and returns zero
/// or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"required_collections"`).
    fn name(&self) -> &str;

    /// Inspect `input` and return any findings.
    fn validate(&self, input: &SalesInput) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`SalesInput`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(RequiredCollectionsRule));
        engine.add_rule(Box::new(DuplicateSellerIdRule));
        engine.add_rule(Box::new(UnknownReferencesRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run all rules against `input` and return the collected report.
    pub fn validate(&self, input: &SalesInput) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(input));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. The three required collections must be non-empty ────────────────────

struct RequiredCollectionsRule;

impl ValidationRule for RequiredCollectionsRule {
    fn name(&self) -> &str {
        "required_collections"
    }

    fn validate(&self, input: &SalesInput) -> Vec<ValidationDiagnostic> {
        let checks: &[(&str, bool)] = &[
            ("sellers", input.sellers.is_empty()),
            ("products", input.products.is_empty()),
            ("purchases", input.purchases.is_empty()),
        ];

        checks
            .iter()
            .filter(|&&(_, empty)| empty)
            .map(|&(name, _)| {
                ValidationDiagnostic::error(
                    InputError::new(
                        ErrorCode::EmptyCollection,
                        format!("/{name}"),
                        format!("{name} must contain at least one record"),
                    )
                    .with_hint(format!("Supply at least one entry in the {name} collection")),
                )
            })
            .collect()
    }
}

// ─── 2. Seller ids should be unique (first occurrence owns the records) ─────

struct DuplicateSellerIdRule;

impl ValidationRule for DuplicateSellerIdRule {
    fn name(&self) -> &str {
        "duplicate_seller_id"
    }

    fn validate(&self, input: &SalesInput) -> Vec<ValidationDiagnostic> {
        let mut seen: FxHashMap<&str, usize> = FxHashMap::default();
        let mut out = Vec::new();

        for (i, seller) in input.sellers.iter().enumerate() {
            if let Some(&first) = seen.get(seller.id.as_str()) {
                out.push(ValidationDiagnostic::warning(
                    InputError::new(
                        ErrorCode::DuplicateId,
                        format!("/sellers/{i}/id"),
                        format!(
                            "seller id \"{}\" duplicates /sellers/{first}; records attribute to the first occurrence",
                            seller.id
                        ),
                    )
                    .with_hint("Give every seller a unique id"),
                ));
            } else {
                seen.insert(seller.id.as_str(), i);
            }
        }

        out
    }
}

// ─── 3. Dangling references (absorbed during folding, surfaced here) ────────

struct UnknownReferencesRule;

impl ValidationRule for UnknownReferencesRule {
    fn name(&self) -> &str {
        "unknown_references"
    }

    fn validate(&self, input: &SalesInput) -> Vec<ValidationDiagnostic> {
        let seller_ids: FxHashSet<&str> =
            input.sellers.iter().map(|s| s.id.as_str()).collect();
        let skus: FxHashSet<&str> = input.products.iter().map(|p| p.sku.as_str()).collect();

        let mut out = Vec::new();

        for (i, record) in input.purchases.iter().enumerate() {
            if !seller_ids.contains(record.seller_id.as_str()) {
                out.push(ValidationDiagnostic::warning(
                    InputError::new(
                        ErrorCode::UnknownReference,
                        format!("/purchases/{i}/seller_id"),
                        format!(
                            "purchase references unknown seller \"{}\" and will be skipped",
                            record.seller_id
                        ),
                    )
                    .with_hint("Check the seller id against the sellers collection"),
                ));
            }

            for (j, item) in record.items.iter().enumerate() {
                if !skus.contains(item.sku.as_str()) {
                    out.push(ValidationDiagnostic::warning(
                        InputError::new(
                            ErrorCode::UnknownReference,
                            format!("/purchases/{i}/items/{j}/sku"),
                            format!(
                                "item references unknown SKU \"{}\"; cost will be treated as zero",
                                item.sku
                            ),
                        )
                        .with_hint("Check the SKU against the products collection"),
                    ));
                }
            }
        }

        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: build a SalesInput from JSON.
    fn input(json: &str) -> SalesInput {
        serde_json::from_str(json).unwrap()
    }

    fn engine() -> ValidationEngine {
        ValidationEngine::with_defaults()
    }

    const VALID: &str = r#"{
        "sellers": [{ "id": "s1", "first_name": "Ada", "last_name": "Lovelace" }],
        "products": [{ "sku": "A-1", "purchase_price": 40.0 }],
        "purchases": [{
            "seller_id": "s1",
            "items": [{ "sku": "A-1", "quantity": 2, "sale_price": 100.0, "discount": 10.0 }]
        }]
    }"#;

    // ─── Valid input ────────────────────────────────────────────────────

    #[test]
    fn test_valid_input_is_clean() {
        let report = engine().validate(&input(VALID));
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    // ─── Rule: required_collections ─────────────────────────────────────

    #[test]
    fn test_empty_sellers_fails() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [],
                "products": [{ "sku": "A", "purchase_price": 1.0 }],
                "purchases": [{ "seller_id": "s1", "items": [] }]
            }"#,
        ));
        assert!(report.has_errors());
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].code, ErrorCode::EmptyCollection);
        assert_eq!(errs[0].path, "/sellers");
    }

    #[test]
    fn test_all_collections_empty_reports_three_errors() {
        let report = engine().validate(&input(
            r#"{ "sellers": [], "products": [], "purchases": [] }"#,
        ));
        let errs: Vec<_> = report.errors().collect();
        assert_eq!(errs.len(), 3);
        let paths: Vec<_> = errs.iter().map(|e| e.path.as_str()).collect();
        assert!(paths.contains(&"/sellers"));
        assert!(paths.contains(&"/products"));
        assert!(paths.contains(&"/purchases"));
    }

    #[test]
    fn test_empty_collection_hint_names_collection() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [{ "id": "s1", "first_name": "A", "last_name": "B" }],
                "products": [],
                "purchases": [{ "seller_id": "s1", "items": [] }]
            }"#,
        ));
        let err = report.errors().next().unwrap();
        let hint = err.hint.as_deref().unwrap();
        assert!(hint.contains("products"), "hint should name the collection: {hint}");
    }

    // ─── Rule: duplicate_seller_id ──────────────────────────────────────

    #[test]
    fn test_duplicate_seller_id_warns() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [
                    { "id": "dup", "first_name": "A", "last_name": "B" },
                    { "id": "dup", "first_name": "C", "last_name": "D" }
                ],
                "products": [{ "sku": "P", "purchase_price": 1.0 }],
                "purchases": [{ "seller_id": "dup", "items": [] }]
            }"#,
        ));
        assert!(report.is_valid()); // warnings don't make it invalid
        let warns: Vec<_> = report.warnings().collect();
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].code, ErrorCode::DuplicateId);
        assert_eq!(warns[0].path, "/sellers/1/id");
        assert!(warns[0].message.contains("/sellers/0"));
    }

    #[test]
    fn test_unique_seller_ids_no_warnings() {
        let report = engine().validate(&input(VALID));
        assert_eq!(report.warnings().count(), 0);
    }

    // ─── Rule: unknown_references ───────────────────────────────────────

    #[test]
    fn test_unknown_seller_reference_warns() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [{ "id": "s1", "first_name": "A", "last_name": "B" }],
                "products": [{ "sku": "P", "purchase_price": 1.0 }],
                "purchases": [
                    { "seller_id": "ghost", "items": [] },
                    { "seller_id": "s1", "items": [] }
                ]
            }"#,
        ));
        assert!(report.is_valid());
        let warns: Vec<_> = report.warnings().collect();
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].code, ErrorCode::UnknownReference);
        assert_eq!(warns[0].path, "/purchases/0/seller_id");
        assert!(warns[0].message.contains("ghost"));
    }

    #[test]
    fn test_unknown_sku_reference_warns() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [{ "id": "s1", "first_name": "A", "last_name": "B" }],
                "products": [{ "sku": "KNOWN", "purchase_price": 1.0 }],
                "purchases": [{
                    "seller_id": "s1",
                    "items": [
                        { "sku": "KNOWN", "quantity": 1, "sale_price": 2.0 },
                        { "sku": "MYSTERY", "quantity": 1, "sale_price": 2.0 }
                    ]
                }]
            }"#,
        ));
        assert!(report.is_valid());
        let warns: Vec<_> = report.warnings().collect();
        assert_eq!(warns.len(), 1);
        assert_eq!(warns[0].path, "/purchases/0/items/1/sku");
        assert!(warns[0].message.contains("MYSTERY"));
    }

    #[test]
    fn test_multiple_dangling_references_all_reported() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [{ "id": "s1", "first_name": "A", "last_name": "B" }],
                "products": [{ "sku": "P", "purchase_price": 1.0 }],
                "purchases": [
                    { "seller_id": "g1", "items": [{ "sku": "X", "quantity": 1, "sale_price": 1.0 }] },
                    { "seller_id": "g2", "items": [] }
                ]
            }"#,
        ));
        assert_eq!(report.warnings().count(), 3); // g1, X, g2
    }

    // ─── Report helpers ─────────────────────────────────────────────────

    #[test]
    fn test_report_len_and_empty() {
        let report = engine().validate(&input(VALID));
        assert_eq!(report.len(), 0);
        assert!(report.is_empty());

        let report = engine().validate(&input(
            r#"{ "sellers": [], "products": [], "purchases": [] }"#,
        ));
        assert_eq!(report.len(), 3);
        assert!(!report.is_empty());
    }

    #[test]
    fn test_error_summary_joins_all_errors() {
        let report = engine().validate(&input(
            r#"{ "sellers": [], "products": [], "purchases": [] }"#,
        ));
        let summary = report.error_summary();
        assert!(summary.contains("/sellers"));
        assert!(summary.contains("/products"));
        assert!(summary.contains("/purchases"));
    }

    #[test]
    fn test_warnings_do_not_appear_in_summary() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [{ "id": "s1", "first_name": "A", "last_name": "B" }],
                "products": [{ "sku": "P", "purchase_price": 1.0 }],
                "purchases": [{ "seller_id": "ghost", "items": [] }]
            }"#,
        ));
        assert!(report.error_summary().is_empty());
    }

    // ─── Engine: custom rules ───────────────────────────────────────────

    #[test]
    fn test_custom_rule() {
        struct AlwaysWarnRule;
        impl ValidationRule for AlwaysWarnRule {
            fn name(&self) -> &str {
                "always_warn"
            }
            fn validate(&self, _input: &SalesInput) -> Vec<ValidationDiagnostic> {
                vec![ValidationDiagnostic::warning(InputError::new(
                    ErrorCode::ValidationFailed,
                    "",
                    "custom warning",
                ))]
            }
        }

        let mut eng = ValidationEngine::new();
        eng.add_rule(Box::new(AlwaysWarnRule));
        let report = eng.validate(&input(VALID));
        assert!(report.is_valid()); // warnings only
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_empty_engine_accepts_anything() {
        let eng = ValidationEngine::new();
        let report = eng.validate(&input(
            r#"{ "sellers": [], "products": [], "purchases": [] }"#,
        ));
        assert!(report.is_empty());
    }

    // ─── Serialization ──────────────────────────────────────────────────

    #[test]
    fn test_report_serializes_to_json() {
        let report = engine().validate(&input(
            r#"{
                "sellers": [],
                "products": [{ "sku": "P", "purchase_price": 1.0 }],
                "purchases": [{ "seller_id": "s1", "items": [] }]
            }"#,
        ));
        let json = serde_json::to_value(&report).unwrap();
        let diags = json["diagnostics"].as_array().unwrap();
        // One error (empty sellers) plus one warning (dangling seller_id).
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0]["severity"], "error");
        assert_eq!(diags[0]["code"], "empty_collection");
        assert_eq!(diags[1]["severity"], "warning");
        assert_eq!(diags[1]["code"], "unknown_reference");
    }
}
