//! People records.

use jiff::Timestamp;

use crate::uuids::TypedUuid;

pub type PersonUuid = TypedUuid<PersonRecord>;

/// A person known to the storefront.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonRecord {
    pub uuid: PersonUuid,

    pub kind: PersonKind,

    /// Registry matricula for collaborators, identity account key for
    /// customers. Unique per kind.
    pub external_key: String,

    pub display_name: String,

    pub contact_email: String,

    pub sector: Option<String>,

    pub phone: Option<String>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

/// Which registry a person's `external_key` belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonKind {
    Collaborator,
    Customer,
}

impl PersonKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collaborator => "collaborator",
            Self::Customer => "customer",
        }
    }
}
