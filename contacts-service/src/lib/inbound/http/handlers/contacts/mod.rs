pub mod create_contact;
pub mod delete_contact;
pub mod get_contact;
pub mod list_contacts;
pub mod update_contact;

pub use create_contact::create_contact;
pub use delete_contact::delete_contact;
pub use get_contact::get_contact;
pub use list_contacts::list_contacts;
pub use update_contact::update_contact;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::contact::errors::ContactFieldError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactDetails;
use crate::domain::contact::models::ContactDraft;

/// HTTP request body for creating or replacing a contact (raw JSON)
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    birthday: NaiveDate,
    #[serde(default)]
    additional_data: Option<String>,
}

impl ContactRequest {
    fn try_into_details(self) -> Result<ContactDetails, ContactFieldError> {
        ContactDetails::new(ContactDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            birthday: self.birthday,
            additional_data: self.additional_data,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactResponseData {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birthday: NaiveDate,
    pub additional_data: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Contact> for ContactResponseData {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            first_name: contact.details.first_name.clone(),
            last_name: contact.details.last_name.clone(),
            email: contact.details.email.clone(),
            phone_number: contact.details.phone_number.clone(),
            birthday: contact.details.birthday,
            additional_data: contact.details.additional_data.clone(),
            created_at: contact.created_at,
        }
    }
}
