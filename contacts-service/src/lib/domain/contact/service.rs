use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactDetails;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::contact::ports::ContactServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for contact operations.
pub struct ContactService<CR>
where
    CR: ContactRepository,
{
    repository: Arc<CR>,
}

impl<CR> ContactService<CR>
where
    CR: ContactRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> ContactServicePort for ContactService<CR>
where
    CR: ContactRepository,
{
    async fn create_contact(
        &self,
        owner: UserId,
        details: ContactDetails,
    ) -> Result<Contact, ContactError> {
        let contact = Contact {
            id: ContactId::new(),
            owner_id: owner,
            details,
            created_at: Utc::now(),
        };

        let created_contact = self.repository.create(contact).await?;
        tracing::info!(
            contact_id = %created_contact.id,
            owner_id = %owner,
            "Contact created"
        );

        Ok(created_contact)
    }

    async fn list_contacts(&self, owner: UserId) -> Result<Vec<Contact>, ContactError> {
        self.repository.list_by_owner(owner).await
    }

    async fn get_contact(&self, owner: UserId, id: ContactId) -> Result<Contact, ContactError> {
        self.repository
            .find(owner, id)
            .await?
            .ok_or(ContactError::NotFound(id.to_string()))
    }

    async fn update_contact(
        &self,
        owner: UserId,
        id: ContactId,
        details: ContactDetails,
    ) -> Result<Contact, ContactError> {
        let mut contact = self.get_contact(owner, id).await?;
        contact.details = details;

        let updated_contact = self.repository.update(contact).await?;
        tracing::info!(contact_id = %id, owner_id = %owner, "Contact updated");

        Ok(updated_contact)
    }

    async fn delete_contact(&self, owner: UserId, id: ContactId) -> Result<(), ContactError> {
        self.repository.delete(owner, id).await?;
        tracing::info!(contact_id = %id, owner_id = %owner, "Contact deleted");

        Ok(())
    }
}
