use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::CredentialStore;

/// Process-local credential store.
///
/// Users are keyed by their exact email. The uniqueness check and the insert
/// happen under one write guard, so racing registrations admit exactly one.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the user registered under `email`, if any.
    pub async fn remove(&self, email: &str) -> Option<User> {
        self.users.write().await.remove(email)
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.email.as_str()) {
            return Err(UserError::DuplicateIdentity(user.email.to_string()));
        }

        users.insert(user.email.as_str().to_string(), user.clone());
        Ok(user)
    }
}

/// Process-local contact repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Arc<RwLock<HashMap<ContactId, Contact>>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError> {
        self.contacts
            .write()
            .await
            .insert(contact.id, contact.clone());

        Ok(contact)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, ContactError> {
        let mut contacts: Vec<Contact> = self
            .contacts
            .read()
            .await
            .values()
            .filter(|contact| contact.owner_id == owner)
            .cloned()
            .collect();
        contacts.sort_by_key(|contact| contact.created_at);

        Ok(contacts)
    }

    async fn find(&self, owner: UserId, id: ContactId) -> Result<Option<Contact>, ContactError> {
        Ok(self
            .contacts
            .read()
            .await
            .get(&id)
            .filter(|contact| contact.owner_id == owner)
            .cloned())
    }

    async fn update(&self, contact: Contact) -> Result<Contact, ContactError> {
        let mut contacts = self.contacts.write().await;

        match contacts.get_mut(&contact.id) {
            Some(existing) if existing.owner_id == contact.owner_id => {
                existing.details = contact.details.clone();
                Ok(existing.clone())
            }
            _ => Err(ContactError::NotFound(contact.id.to_string())),
        }
    }

    async fn delete(&self, owner: UserId, id: ContactId) -> Result<(), ContactError> {
        let mut contacts = self.contacts.write().await;

        match contacts.get(&id) {
            Some(existing) if existing.owner_id == owner => {
                contacts.remove(&id);
                Ok(())
            }
            _ => Err(ContactError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono::Utc;

    use super::*;
    use crate::domain::contact::models::ContactDetails;
    use crate::domain::user::models::EmailAddress;

    fn user(email: &str) -> User {
        User {
            id: UserId::new(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            username: None,
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn contact(owner: UserId) -> Contact {
        Contact {
            id: ContactId::new(),
            owner_id: owner,
            details: ContactDetails {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone_number: "+44 20 7946 0958".to_string(),
                birthday: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
                additional_data: None,
            },
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_by_email() {
        let store = InMemoryCredentialStore::new();
        let alice = user("a@x.com");

        store.insert(alice.clone()).await.unwrap();

        assert_eq!(store.find_by_email("a@x.com").await.unwrap(), Some(alice));
        assert_eq!(store.find_by_email("A@x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_insert_duplicate_email() {
        let store = InMemoryCredentialStore::new();

        store.insert(user("a@x.com")).await.unwrap();
        let result = store.insert(user("a@x.com")).await;

        assert!(matches!(result, Err(UserError::DuplicateIdentity(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_admit_one() {
        let store = InMemoryCredentialStore::new();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(user("race@x.com")).await })
            })
            .collect();

        let mut admitted = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => admitted += 1,
                Err(UserError::DuplicateIdentity(_)) => {}
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(admitted, 1);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_contacts_are_scoped_to_owner() {
        let repository = InMemoryContactRepository::new();
        let owner = UserId::new();
        let stranger = UserId::new();
        let ada = contact(owner);

        repository.create(ada.clone()).await.unwrap();

        assert_eq!(repository.list_by_owner(owner).await.unwrap().len(), 1);
        assert!(repository.list_by_owner(stranger).await.unwrap().is_empty());
        assert_eq!(repository.find(stranger, ada.id).await.unwrap(), None);
        assert!(matches!(
            repository.delete(stranger, ada.id).await,
            Err(ContactError::NotFound(_))
        ));

        let mut hijacked = ada.clone();
        hijacked.owner_id = stranger;
        assert!(matches!(
            repository.update(hijacked).await,
            Err(ContactError::NotFound(_))
        ));

        repository.delete(owner, ada.id).await.unwrap();
        assert_eq!(repository.find(owner, ada.id).await.unwrap(), None);
    }
}
