//! Explicit column/filter association for the data table.
//!
//! Per-column filter controls declare the field they narrow via
//! `data-field-name`; the binding is resolved against the server-advertised
//! column list at initialization and an unknown field fails loudly, instead
//! of silently narrowing the wrong column.

use crate::dom::NodeId;
use crate::error::{BindError, BindResult};

/// Ordered column names advertised by the server for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBindings {
    columns: Vec<String>,
}

impl ColumnBindings {
    /// Parses the comma-separated `#column-names` text. Names are trimmed;
    /// column order is the pairing contract with server responses.
    #[must_use]
    pub fn from_csv(text: &str) -> Self {
        Self {
            columns: text
                .split(',')
                .map(|name| name.trim().to_owned())
                .filter(|name| !name.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn index_of(&self, field: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == field)
    }

    /// Resolves one filter control against the column list.
    ///
    /// `control` is the DOM handle, `control_id` its identifier (used only
    /// for diagnostics), `field` the declared column field name.
    pub fn resolve(
        &self,
        control: NodeId,
        control_id: &str,
        field: &str,
    ) -> BindResult<ResolvedFilter> {
        let column_index =
            self.index_of(field)
                .ok_or_else(|| BindError::UnknownColumn {
                    control: control_id.to_owned(),
                    field: field.to_owned(),
                })?;
        Ok(ResolvedFilter {
            control,
            field: field.to_owned(),
            column_index,
        })
    }
}

/// A filter control paired with the table column it narrows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFilter {
    pub control: NodeId,
    pub field: String,
    pub column_index: usize,
}
