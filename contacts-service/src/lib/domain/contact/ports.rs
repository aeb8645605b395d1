use async_trait::async_trait;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactDetails;
use crate::domain::contact::models::ContactId;
use crate::domain::user::models::UserId;

/// Port for contact domain service operations.
///
/// Every operation is scoped to `owner`: contacts of other users behave
/// as if they did not exist.
#[async_trait]
pub trait ContactServicePort: Send + Sync + 'static {
    /// Create a contact for `owner`.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_contact(
        &self,
        owner: UserId,
        details: ContactDetails,
    ) -> Result<Contact, ContactError>;

    /// List every contact of `owner`, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_contacts(&self, owner: UserId) -> Result<Vec<Contact>, ContactError>;

    /// Retrieve one contact of `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Database operation failed
    async fn get_contact(&self, owner: UserId, id: ContactId) -> Result<Contact, ContactError>;

    /// Replace all fields of a contact of `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Database operation failed
    async fn update_contact(
        &self,
        owner: UserId,
        id: ContactId,
        details: ContactDetails,
    ) -> Result<Contact, ContactError>;

    /// Delete a contact of `owner`.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Database operation failed
    async fn delete_contact(&self, owner: UserId, id: ContactId) -> Result<(), ContactError>;
}

/// Persistence operations for contacts.
#[async_trait]
pub trait ContactRepository: Send + Sync + 'static {
    /// Persist new contact.
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Retrieve all contacts of an owner, ordered by creation time.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, ContactError>;

    /// Retrieve a contact by owner and identifier.
    ///
    /// # Returns
    /// Optional contact (None if missing or owned by someone else)
    async fn find(&self, owner: UserId, id: ContactId) -> Result<Option<Contact>, ContactError>;

    /// Overwrite the details of an existing contact.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, contact: Contact) -> Result<Contact, ContactError>;

    /// Remove a contact.
    ///
    /// # Errors
    /// * `NotFound` - No such contact for this owner
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, owner: UserId, id: ContactId) -> Result<(), ContactError>;
}
