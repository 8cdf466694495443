//! Exposure: whether a CRUD operation is callable externally.

use serde::{Deserialize, Serialize};

use crate::crud_methods::{CrudMethods, CrudOperation};

/// The four exposure queries the policy needs from repository metadata.
pub trait ExposureAwareCrudMethods {
    fn exposes_save(&self) -> bool;

    fn exposes_delete(&self) -> bool;

    /// Whether a single object can be looked up by id.
    fn exposes_find_one(&self) -> bool;

    /// Whether the whole collection can be listed.
    fn exposes_find_all(&self) -> bool;

    fn exposes(&self, operation: CrudOperation) -> bool {
        match operation {
            CrudOperation::Save => self.exposes_save(),
            CrudOperation::Delete => self.exposes_delete(),
            CrudOperation::FindOne => self.exposes_find_one(),
            CrudOperation::FindAll => self.exposes_find_all(),
        }
    }
}

/// Precomputed exposure of one repository.
///
/// Derived once from a [`CrudMethods`] descriptor and never changed afterward.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExposureFlags {
    pub save: bool,
    pub delete: bool,
    pub find_one: bool,
    pub find_all: bool,
}

impl ExposureFlags {
    /// Every operation exposed.
    pub fn all() -> Self {
        Self {
            save: true,
            delete: true,
            find_one: true,
            find_all: true,
        }
    }

    /// Nothing exposed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Evaluate any exposure source once and freeze the answers.
    pub fn capture(source: &(impl ExposureAwareCrudMethods + ?Sized)) -> Self {
        Self {
            save: source.exposes_save(),
            delete: source.exposes_delete(),
            find_one: source.exposes_find_one(),
            find_all: source.exposes_find_all(),
        }
    }
}

impl ExposureAwareCrudMethods for ExposureFlags {
    fn exposes_save(&self) -> bool {
        self.save
    }

    fn exposes_delete(&self) -> bool {
        self.delete
    }

    fn exposes_find_one(&self) -> bool {
        self.find_one
    }

    fn exposes_find_all(&self) -> bool {
        self.find_all
    }
}

/// An operation is exposed when the repository defines the method and no
/// annotation marks it unexported.
impl ExposureAwareCrudMethods for CrudMethods {
    fn exposes_save(&self) -> bool {
        self.exposes(CrudOperation::Save)
    }

    fn exposes_delete(&self) -> bool {
        self.exposes(CrudOperation::Delete)
    }

    fn exposes_find_one(&self) -> bool {
        self.exposes(CrudOperation::FindOne)
    }

    fn exposes_find_all(&self) -> bool {
        self.exposes(CrudOperation::FindAll)
    }

    fn exposes(&self, operation: CrudOperation) -> bool {
        self.get(operation).is_some_and(|method| method.is_exported())
    }
}

impl From<&CrudMethods> for ExposureFlags {
    fn from(methods: &CrudMethods) -> Self {
        Self::capture(methods)
    }
}
