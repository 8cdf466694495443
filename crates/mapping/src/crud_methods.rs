use serde::{Deserialize, Serialize};

/// The four CRUD capabilities a repository can offer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrudOperation {
    Save,
    Delete,
    FindOne,
    FindAll,
}

impl CrudOperation {
    pub const ALL: [CrudOperation; 4] = [
        CrudOperation::Save,
        CrudOperation::Delete,
        CrudOperation::FindOne,
        CrudOperation::FindAll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CrudOperation::Save => "save",
            CrudOperation::Delete => "delete",
            CrudOperation::FindOne => "find-one",
            CrudOperation::FindAll => "find-all",
        }
    }
}

impl core::fmt::Display for CrudOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Export annotation attached to a repository method.
///
/// A method carrying no annotation behaves exactly like one annotated with
/// `exported = true`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestResource {
    #[serde(default = "exported_by_default")]
    pub exported: bool,
}

fn exported_by_default() -> bool {
    true
}

impl Default for RestResource {
    fn default() -> Self {
        Self { exported: true }
    }
}

/// A repository method as reported by the metadata scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrudMethod {
    /// Method name, kept for diagnostics only.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_resource: Option<RestResource>,
}

impl CrudMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rest_resource: None,
        }
    }

    /// Attach an explicit export annotation.
    pub fn annotated(mut self, annotation: RestResource) -> Self {
        self.rest_resource = Some(annotation);
        self
    }

    /// Shorthand for `annotated(RestResource { exported: false })`.
    pub fn unexported(self) -> Self {
        self.annotated(RestResource { exported: false })
    }

    pub fn is_exported(&self) -> bool {
        self.rest_resource.is_none_or(|annotation| annotation.exported)
    }
}

/// CRUD-exposure descriptor for one repository.
///
/// Each slot holds the repository method backing that operation, or `None` when
/// the repository does not define it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CrudMethods {
    pub save: Option<CrudMethod>,
    pub delete: Option<CrudMethod>,
    pub find_one: Option<CrudMethod>,
    pub find_all: Option<CrudMethod>,
}

impl CrudMethods {
    /// A repository that defines nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository defining all four operations, none annotated.
    pub fn full() -> Self {
        CrudOperation::ALL
            .into_iter()
            .fold(Self::new(), |methods, op| {
                methods.with(op, CrudMethod::new(op.as_str()))
            })
    }

    pub fn with(mut self, operation: CrudOperation, method: CrudMethod) -> Self {
        *self.slot_mut(operation) = Some(method);
        self
    }

    pub fn without(mut self, operation: CrudOperation) -> Self {
        *self.slot_mut(operation) = None;
        self
    }

    pub fn get(&self, operation: CrudOperation) -> Option<&CrudMethod> {
        match operation {
            CrudOperation::Save => self.save.as_ref(),
            CrudOperation::Delete => self.delete.as_ref(),
            CrudOperation::FindOne => self.find_one.as_ref(),
            CrudOperation::FindAll => self.find_all.as_ref(),
        }
    }

    fn slot_mut(&mut self, operation: CrudOperation) -> &mut Option<CrudMethod> {
        match operation {
            CrudOperation::Save => &mut self.save,
            CrudOperation::Delete => &mut self.delete,
            CrudOperation::FindOne => &mut self.find_one,
            CrudOperation::FindAll => &mut self.find_all,
        }
    }
}
