//! Lint diagnostics for scanned catalog markup.
//!
//! Reports markup the enhancer degrades around (missing toggles, images,
//! size lines) without changing behaviour. The browser bridge logs these at
//! debug level; nothing is shown to shoppers.

use crate::id::{CardId, SectionId};
use crate::model::{Catalog, SizeSource};

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// A feature is skipped for this element.
    Warning,
    /// Informational: the element renders with blank fields.
    Info,
}

/// What a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintTarget {
    Page,
    Section(SectionId),
    Card(CardId),
}

#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    pub target: LintTarget,
    pub message: String,
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "card-missing-image").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over the catalog and return diagnostics.
#[must_use]
pub fn lint_catalog(catalog: &Catalog) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_empty_page(catalog, &mut diags);
    lint_sections(catalog, &mut diags);
    lint_cards(catalog, &mut diags);
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

fn lint_empty_page(catalog: &Catalog, diags: &mut Vec<LintDiagnostic>) {
    if catalog.cards.is_empty() {
        diags.push(LintDiagnostic {
            target: LintTarget::Page,
            message: "No product cards found on the page.".to_string(),
            severity: LintSeverity::Info,
            rule: "empty-catalog",
        });
    }
}

fn lint_sections(catalog: &Catalog, diags: &mut Vec<LintDiagnostic>) {
    for section in &catalog.sections {
        if !section.has_toggle {
            diags.push(LintDiagnostic {
                target: LintTarget::Section(section.id),
                message: format!("{} has no toggle control; it stays open.", section.id),
                severity: LintSeverity::Warning,
                rule: "section-missing-toggle",
            });
        }
        if !section.has_products {
            diags.push(LintDiagnostic {
                target: LintTarget::Section(section.id),
                message: format!("{} has no products container; toggling is skipped.", section.id),
                severity: LintSeverity::Warning,
                rule: "section-missing-products",
            });
        }
    }
}

fn lint_cards(catalog: &Catalog, diags: &mut Vec<LintDiagnostic>) {
    for card in &catalog.cards {
        let target = LintTarget::Card(card.id);
        if card.image.is_none() {
            diags.push(LintDiagnostic {
                target,
                message: format!("{} has no image; no stock badge can be placed.", card.id),
                severity: LintSeverity::Warning,
                rule: "card-missing-image",
            });
        }
        if card.name.is_none() {
            diags.push(LintDiagnostic {
                target,
                message: format!("{} has no name heading.", card.id),
                severity: LintSeverity::Info,
                rule: "card-missing-name",
            });
        }
        if card.price.is_none() {
            diags.push(LintDiagnostic {
                target,
                message: format!("{} has no price.", card.id),
                severity: LintSeverity::Info,
                rule: "card-missing-price",
            });
        }
        if let SizeSource::Unlabeled(text) = &card.size_source {
            diags.push(LintDiagnostic {
                target,
                message: format!(
                    "{} mentions sizes as `{}` but no size label value was found; showing no sizes.",
                    card.id,
                    text.trim()
                ),
                severity: LintSeverity::Info,
                rule: "size-label-unrecognized",
            });
        }
    }
}
