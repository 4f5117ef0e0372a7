//! People input payloads.

use crate::domain::people::records::{PersonKind, PersonUuid};

/// Profile fields the checkout form submits alongside a matricula.
///
/// Only consulted when the matricula has no row yet; for a known
/// collaborator the stored profile wins.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateProfile {
    pub display_name: String,
    pub contact_email: String,
    pub sector: Option<String>,
    pub phone: Option<String>,
}

/// Registration payload for a storefront customer account.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub uuid: PersonUuid,

    /// Account key issued by the identity provider.
    pub account_key: String,

    pub display_name: String,

    pub contact_email: String,

    pub phone: Option<String>,
}

/// Insert payload shared by both person kinds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NewPerson {
    pub uuid: PersonUuid,
    pub kind: PersonKind,
    pub external_key: String,
    pub display_name: String,
    pub contact_email: String,
    pub sector: Option<String>,
    pub phone: Option<String>,
}
