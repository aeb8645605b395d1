use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::errors::ContactFieldError;
use crate::domain::user::models::UserId;

/// Contact entity, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub owner_id: UserId,
    pub details: ContactDetails,
    pub created_at: DateTime<Utc>,
}

/// Contact unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a contact ID from string.
    ///
    /// # Errors
    /// * `InvalidContactId` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ContactError> {
        Uuid::parse_str(s)
            .map(ContactId)
            .map_err(|e| ContactError::InvalidContactId(e.to_string()))
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated contact fields, used both to create and to replace a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birthday: NaiveDate,
    pub additional_data: Option<String>,
}

/// Raw contact fields as received from a caller.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub birthday: NaiveDate,
    pub additional_data: Option<String>,
}

impl ContactDetails {
    const MAX_NAME_LENGTH: usize = 50;
    const MAX_ADDITIONAL_DATA_LENGTH: usize = 250;
    const MIN_PHONE_DIGITS: usize = 7;
    const MAX_PHONE_DIGITS: usize = 15;

    /// Validate a draft.
    ///
    /// # Errors
    /// * `Empty` - A name is blank
    /// * `TooLong` - A name or the additional data exceeds its limit
    /// * `InvalidEmail` - Email does not conform to RFC 5322
    /// * `InvalidPhoneNumber` - Phone number has invalid characters or digit count
    pub fn new(draft: ContactDraft) -> Result<Self, ContactFieldError> {
        let first_name = Self::with_valid_name("first_name", draft.first_name)?;
        let last_name = Self::with_valid_name("last_name", draft.last_name)?;
        let email = Self::with_valid_email(draft.email)?;
        let phone_number = Self::with_valid_phone_number(draft.phone_number)?;
        let additional_data = draft
            .additional_data
            .map(Self::with_valid_additional_data)
            .transpose()?;

        Ok(Self {
            first_name,
            last_name,
            email,
            phone_number,
            birthday: draft.birthday,
            additional_data,
        })
    }

    fn with_valid_name(field: &'static str, name: String) -> Result<String, ContactFieldError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            Err(ContactFieldError::Empty { field })
        } else if name.chars().count() > Self::MAX_NAME_LENGTH {
            Err(ContactFieldError::TooLong {
                field,
                max: Self::MAX_NAME_LENGTH,
            })
        } else {
            Ok(name)
        }
    }

    fn with_valid_email(email: String) -> Result<String, ContactFieldError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| email)
            .map_err(|e| ContactFieldError::InvalidEmail(e.to_string()))
    }

    fn with_valid_phone_number(phone_number: String) -> Result<String, ContactFieldError> {
        let allowed = |c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ');
        if !phone_number.chars().all(allowed) {
            return Err(ContactFieldError::InvalidPhoneNumber(
                "only digits, spaces, '+', '-', '(' and ')' are allowed".to_string(),
            ));
        }

        let digits = phone_number.chars().filter(char::is_ascii_digit).count();
        if !(Self::MIN_PHONE_DIGITS..=Self::MAX_PHONE_DIGITS).contains(&digits) {
            return Err(ContactFieldError::InvalidPhoneNumber(format!(
                "expected {} to {} digits, got {}",
                Self::MIN_PHONE_DIGITS,
                Self::MAX_PHONE_DIGITS,
                digits
            )));
        }

        Ok(phone_number)
    }

    fn with_valid_additional_data(data: String) -> Result<String, ContactFieldError> {
        if data.chars().count() > Self::MAX_ADDITIONAL_DATA_LENGTH {
            Err(ContactFieldError::TooLong {
                field: "additional_data",
                max: Self::MAX_ADDITIONAL_DATA_LENGTH,
            })
        } else {
            Ok(data)
        }
    }
}
