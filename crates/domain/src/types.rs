// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Server-assigned identifier of any record.
pub type RecordId = i64;

/// Field-level validation messages keyed by payload field name.
pub type ValidationErrors = BTreeMap<String, String>;

/// A display-only reference to a related record.
///
/// Nested references (material, site, reporter, ...) only carry enough to
/// render a name and build a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Summary {
    /// The related record's identifier.
    pub id: RecordId,
    /// The related record's display name.
    pub name: String,
}

impl Summary {
    /// Creates a summary reference.
    #[must_use]
    pub fn new(id: RecordId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

/// One entry of a static enumeration served for dropdowns.
///
/// `value` is the machine value sent back to the server; `label` is
/// already localized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectOption<V> {
    /// The machine value.
    pub value: V,
    /// The localized label.
    pub label: String,
}

impl<V> SelectOption<V> {
    /// Creates an option entry.
    #[must_use]
    pub fn new(value: V, label: &str) -> Self {
        Self {
            value,
            label: label.to_string(),
        }
    }
}
