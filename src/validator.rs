//! Layout diagnostics.
//!
//! Unlike the grid functions, which stop at the first malformed item, the
//! validator collects every problem it can find so a caller can fix a
//! layout in one pass. It also reports issues the occupancy computation
//! deliberately ignores (duplicate ids, overlaps, stale placeholders).

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use anyhow::Result;
use regex::Regex;
use std::collections::{HashMap, HashSet};

use crate::constants::PLACEHOLDER_ID_PREFIX;
use crate::grid::{check_item, row_count, MalformedReason};
use crate::models::LayoutItem;

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Items that cannot be placed on the grid
    pub errors: Vec<ValidationError>,
    /// Non-critical warnings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("❌ {} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("\n⚠️  {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Id of the offending item
    pub item: Option<String>,
    /// Top-left cell of the offending item as (x, y)
    pub position: Option<(usize, usize)>,
    /// Human-readable error message
    pub message: String,
    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            item: None,
            position: None,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Sets the item context.
    #[must_use]
    pub fn with_item(mut self, item: &LayoutItem) -> Self {
        self.item = Some(item.i.clone());
        self.position = Some((item.x, item.y));
        self
    }

    /// Sets a suggestion for fixing the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let (Some(item), Some((x, y))) = (&self.item, self.position) {
            write!(f, "[Item '{}' ({}, {})] {}: {}", item, x, y, self.kind, self.message)?;
        } else {
            write!(f, "{}: {}", self.kind, self.message)?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n    → {suggestion}")?;
        }

        Ok(())
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Item width is zero
    ZeroWidth,
    /// Item height is zero
    ZeroHeight,
    /// Item extent does not fit in `usize`
    CoordinateOverflow,
    /// Item reaches past the last column
    ExceedsColumns,
    /// Item reaches past the computed row count
    ExceedsRows,
}

impl From<MalformedReason> for ValidationErrorKind {
    fn from(reason: MalformedReason) -> Self {
        match reason {
            MalformedReason::ZeroWidth => Self::ZeroWidth,
            MalformedReason::ZeroHeight => Self::ZeroHeight,
            MalformedReason::CoordinateOverflow => Self::CoordinateOverflow,
            MalformedReason::ExceedsColumns { .. } => Self::ExceedsColumns,
            MalformedReason::ExceedsRows { .. } => Self::ExceedsRows,
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroWidth => write!(f, "Zero Width"),
            Self::ZeroHeight => write!(f, "Zero Height"),
            Self::CoordinateOverflow => write!(f, "Coordinate Overflow"),
            Self::ExceedsColumns => write!(f, "Exceeds Columns"),
            Self::ExceedsRows => write!(f, "Exceeds Rows"),
        }
    }
}

/// Types of validation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationWarningKind {
    /// Two items share the same id
    DuplicateIdentifier,
    /// An occupying item uses a generated placeholder id
    ReservedIdentifier,
    /// Two occupying items cover the same cell
    Overlap,
    /// A placeholder lies outside the grid or on an occupied cell
    StalePlaceholder,
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Type of warning
    pub kind: ValidationWarningKind,
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning
    pub fn new(kind: ValidationWarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Layout validator.
pub struct LayoutValidator<'a> {
    layout: &'a [LayoutItem],
    columns: usize,
}

impl<'a> LayoutValidator<'a> {
    /// Creates a new layout validator.
    #[must_use]
    pub const fn new(layout: &'a [LayoutItem], columns: usize) -> Self {
        Self { layout, columns }
    }

    /// Validates the layout against a grid of `columns` columns.
    ///
    /// Checks:
    /// - Every item has a non-zero size and fits the grid
    /// - Ids are unique and do not look like generated placeholder ids
    /// - Occupying items do not overlap
    /// - Placeholders sit on empty, in-bounds cells
    pub fn validate(&self) -> Result<ValidationReport> {
        let mut report = ValidationReport::new();
        let rows = row_count(self.layout);

        let placeable = self.validate_items(&mut report, rows);
        self.validate_identifiers(&mut report)?;
        self.validate_cells(&mut report, rows, &placeable);

        Ok(report)
    }

    /// Records an error per malformed item and returns the indices of the
    /// items that passed.
    fn validate_items(&self, report: &mut ValidationReport, rows: usize) -> Vec<usize> {
        let mut placeable = Vec::with_capacity(self.layout.len());

        for (idx, item) in self.layout.iter().enumerate() {
            match check_item(item, rows, self.columns) {
                Ok(()) => placeable.push(idx),
                Err(reason) => {
                    let suggestion = match reason {
                        MalformedReason::ZeroWidth | MalformedReason::ZeroHeight => {
                            "Items must be at least 1×1".to_string()
                        }
                        MalformedReason::CoordinateOverflow => {
                            "Use coordinates that fit on the grid".to_string()
                        }
                        MalformedReason::ExceedsColumns { columns, .. } => format!(
                            "Move or shrink the item to fit within {columns} columns"
                        ),
                        MalformedReason::ExceedsRows { .. } => {
                            "Items above the last row must not reach below it".to_string()
                        }
                    };
                    report.add_error(
                        ValidationError::new(reason.into(), reason.to_string())
                            .with_item(item)
                            .with_suggestion(suggestion),
                    );
                }
            }
        }

        placeable
    }

    /// Checks for duplicate ids and ids in the generated placeholder format.
    fn validate_identifiers(&self, report: &mut ValidationReport) -> Result<()> {
        let reserved = Regex::new(&format!(
            r"^{}-\d+-\d+$",
            regex::escape(PLACEHOLDER_ID_PREFIX)
        ))?;
        let mut seen = HashSet::new();

        for item in self.layout {
            if !seen.insert(item.i.as_str()) {
                report.add_warning(ValidationWarning::new(
                    ValidationWarningKind::DuplicateIdentifier,
                    format!("Item id '{}' is used more than once", item.i),
                ));
            }

            if item.is_occupying() && reserved.is_match(&item.i) {
                report.add_warning(ValidationWarning::new(
                    ValidationWarningKind::ReservedIdentifier,
                    format!(
                        "Item id '{}' matches the generated placeholder format and may collide with a placeholder",
                        item.i
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Checks overlaps between occupying items and placeholder placement.
    fn validate_cells(&self, report: &mut ValidationReport, rows: usize, placeable: &[usize]) {
        // cell -> index of the first occupying item covering it
        let mut owners: HashMap<(usize, usize), usize> = HashMap::new();
        let mut reported = HashSet::new();

        for &idx in placeable {
            let item = &self.layout[idx];
            if !item.is_occupying() {
                continue;
            }
            for row in item.y..item.y + item.h {
                for col in item.x..item.x + item.w {
                    if let Some(&owner) = owners.get(&(row, col)) {
                        if reported.insert((owner, idx)) {
                            report.add_warning(ValidationWarning::new(
                                ValidationWarningKind::Overlap,
                                format!(
                                    "Items '{}' and '{}' overlap at ({}, {})",
                                    self.layout[owner].i, item.i, col, row
                                ),
                            ));
                        }
                    } else {
                        owners.insert((row, col), idx);
                    }
                }
            }
        }

        for &idx in placeable {
            let item = &self.layout[idx];
            if item.is_occupying() {
                continue;
            }

            let out_of_bounds = item.x + item.w > self.columns || item.y + item.h > rows;
            if out_of_bounds {
                report.add_warning(ValidationWarning::new(
                    ValidationWarningKind::StalePlaceholder,
                    format!(
                        "Placeholder '{}' lies outside the {}×{} grid",
                        item.i, self.columns, rows
                    ),
                ));
                continue;
            }

            let covered = (item.y..item.y + item.h)
                .any(|row| (item.x..item.x + item.w).any(|col| owners.contains_key(&(row, col))));
            if covered {
                report.add_warning(ValidationWarning::new(
                    ValidationWarningKind::StalePlaceholder,
                    format!("Placeholder '{}' sits on an occupied cell", item.i),
                ));
            }
        }
    }
}
