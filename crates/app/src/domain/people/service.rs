//! People service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::warn;

use crate::domain::people::{
    data::{CandidateProfile, NewCustomer, NewPerson},
    errors::PeopleServiceError,
    records::{PersonKind, PersonRecord, PersonUuid},
    repository::PgPeopleRepository,
};

#[derive(Debug, Clone)]
pub struct PgPeopleService {
    repository: PgPeopleRepository,
}

impl PgPeopleService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgPeopleRepository::new(pool),
        }
    }
}

#[async_trait]
impl PeopleService for PgPeopleService {
    #[tracing::instrument(
        name = "people.resolve_collaborator",
        skip_all,
        fields(external_key = %external_key),
        err
    )]
    async fn resolve_collaborator(
        &self,
        external_key: &str,
        profile: CandidateProfile,
    ) -> Result<PersonRecord, PeopleServiceError> {
        let external_key = external_key.trim();

        if external_key.is_empty() {
            return Err(PeopleServiceError::MissingRequiredData);
        }

        if let Some(person) = self
            .repository
            .find_by_external_key(PersonKind::Collaborator, external_key)
            .await?
        {
            return Ok(person);
        }

        let candidate = NewPerson {
            uuid: PersonUuid::new(),
            kind: PersonKind::Collaborator,
            external_key: external_key.to_string(),
            display_name: profile.display_name,
            contact_email: profile.contact_email,
            sector: profile.sector,
            phone: profile.phone,
        };

        match self.repository.create_person(candidate).await {
            Ok(person) => Ok(person),
            // A concurrent checkout inserted the same matricula between our
            // lookup and insert. The stored row wins; re-read it.
            Err(error) if is_unique_violation(&error) => {
                warn!(external_key, "lost person insert race, re-reading");

                self.repository
                    .find_by_external_key(PersonKind::Collaborator, external_key)
                    .await?
                    .ok_or(PeopleServiceError::IdentityConflict)
            }
            Err(error) => Err(error.into()),
        }
    }

    #[tracing::instrument(
        name = "people.register_customer",
        skip_all,
        fields(person = %customer.uuid),
        err
    )]
    async fn register_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<PersonRecord, PeopleServiceError> {
        let required = [
            &customer.account_key,
            &customer.display_name,
            &customer.contact_email,
        ];

        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(PeopleServiceError::MissingRequiredData);
        }

        self.repository
            .create_person(NewPerson {
                uuid: customer.uuid,
                kind: PersonKind::Customer,
                external_key: customer.account_key,
                display_name: customer.display_name,
                contact_email: customer.contact_email,
                sector: None,
                phone: customer.phone,
            })
            .await
            .map_err(Into::into)
    }

    async fn find_customer_by_account(
        &self,
        account_key: &str,
    ) -> Result<Option<PersonRecord>, PeopleServiceError> {
        self.repository
            .find_by_external_key(PersonKind::Customer, account_key)
            .await
            .map_err(Into::into)
    }

    async fn get_person(&self, person: PersonUuid) -> Result<PersonRecord, PeopleServiceError> {
        self.repository.get_person(person).await.map_err(Into::into)
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(
        error
            .as_database_error()
            .map(sqlx::error::DatabaseError::kind),
        Some(sqlx::error::ErrorKind::UniqueViolation)
    )
}

#[automock]
#[async_trait]
/// Buyer identity operations.
pub trait PeopleService: Send + Sync {
    /// Finds the collaborator for a matricula, creating the row from
    /// `profile` on first contact. The stored profile always wins over the
    /// submitted one.
    async fn resolve_collaborator(
        &self,
        external_key: &str,
        profile: CandidateProfile,
    ) -> Result<PersonRecord, PeopleServiceError>;

    /// Registers a storefront customer under their identity account key.
    async fn register_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<PersonRecord, PeopleServiceError>;

    /// Looks up a customer by identity account key.
    async fn find_customer_by_account(
        &self,
        account_key: &str,
    ) -> Result<Option<PersonRecord>, PeopleServiceError>;

    /// Fetches a person by uuid.
    async fn get_person(&self, person: PersonUuid) -> Result<PersonRecord, PeopleServiceError>;
}
