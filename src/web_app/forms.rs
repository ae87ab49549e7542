// web_app/forms.rs - Form page logic that does not need a browser
//
// FormMode decides between create and edit from the route parameter,
// FieldErrors turns violations into the per-field messages shown inline.

use std::collections::BTreeMap;

use crate::web_app::model::{ApiError, Violation};

/// Route parameter value that opens an empty form
pub const NEW_ENTITY_PARAM: &str = "new";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i32),
}

impl FormMode {
    /// `None` when the parameter is neither `new` nor an id
    pub fn from_param(param: Option<&str>) -> Option<Self> {
        match param {
            None | Some(NEW_ENTITY_PARAM) => Some(FormMode::Create),
            Some(raw) => raw.parse::<i32>().ok().filter(|id| *id > 0).map(FormMode::Edit),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn id(&self) -> Option<i32> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// Whether a detail fetch started for `id` still belongs to the form
///
/// The route can change while the fetch is pending; a late answer for
/// another mode must not fill the form.
pub fn load_is_current(current: Option<FormMode>, id: i32) -> bool {
    current == Some(FormMode::Edit(id))
}

/// Inline error messages keyed by field name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later violations on the same field replace earlier ones
    pub fn from_violations(violations: &[Violation]) -> Self {
        let map = violations
            .iter()
            .map(|v| (v.property_path.clone(), v.message.clone()))
            .collect();
        Self(map)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// What a form page does after a failed submit
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitFailure {
    /// Show these messages next to their fields
    Fields(FieldErrors),
    /// Nothing field-specific; show a notice
    Other(String),
}

impl From<&ApiError> for SubmitFailure {
    fn from(err: &ApiError) -> Self {
        match err.violations() {
            Some(violations) => SubmitFailure::Fields(FieldErrors::from_violations(violations)),
            None => SubmitFailure::Other(err.to_string()),
        }
    }
}
