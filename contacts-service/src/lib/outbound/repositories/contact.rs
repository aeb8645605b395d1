use async_trait::async_trait;
use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::contact::errors::ContactError;
use crate::domain::contact::models::Contact;
use crate::domain::contact::models::ContactDetails;
use crate::domain::contact::models::ContactId;
use crate::domain::contact::ports::ContactRepository;
use crate::domain::user::models::UserId;

pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContactRow {
    id: Uuid,
    owner_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone_number: String,
    birthday: NaiveDate,
    additional_data: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Contact {
            id: ContactId(row.id),
            owner_id: UserId(row.owner_id),
            details: ContactDetails {
                first_name: row.first_name,
                last_name: row.last_name,
                email: row.email,
                phone_number: row.phone_number,
                birthday: row.birthday,
                additional_data: row.additional_data,
            },
            created_at: row.created_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> ContactError {
    ContactError::DatabaseError(e.to_string())
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, ContactError> {
        sqlx::query(
            r#"
            INSERT INTO contacts (id, owner_id, first_name, last_name, email, phone_number,
                                  birthday, additional_data, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(&contact.details.first_name)
        .bind(&contact.details.last_name)
        .bind(&contact.details.email)
        .bind(&contact.details.phone_number)
        .bind(contact.details.birthday)
        .bind(contact.details.additional_data.as_deref())
        .bind(contact.created_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(contact)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Contact>, ContactError> {
        let rows = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, owner_id, first_name, last_name, email, phone_number,
                   birthday, additional_data, created_at
            FROM contacts
            WHERE owner_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn find(&self, owner: UserId, id: ContactId) -> Result<Option<Contact>, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            SELECT id, owner_id, first_name, last_name, email, phone_number,
                   birthday, additional_data, created_at
            FROM contacts
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Contact::from))
    }

    async fn update(&self, contact: Contact) -> Result<Contact, ContactError> {
        let row = sqlx::query_as::<_, ContactRow>(
            r#"
            UPDATE contacts
            SET first_name = $3, last_name = $4, email = $5, phone_number = $6,
                birthday = $7, additional_data = $8
            WHERE id = $1 AND owner_id = $2
            RETURNING id, owner_id, first_name, last_name, email, phone_number,
                      birthday, additional_data, created_at
            "#,
        )
        .bind(contact.id.0)
        .bind(contact.owner_id.0)
        .bind(&contact.details.first_name)
        .bind(&contact.details.last_name)
        .bind(&contact.details.email)
        .bind(&contact.details.phone_number)
        .bind(contact.details.birthday)
        .bind(contact.details.additional_data.as_deref())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Contact::from)
            .ok_or(ContactError::NotFound(contact.id.to_string()))
    }

    async fn delete(&self, owner: UserId, id: ContactId) -> Result<(), ContactError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id.0)
        .bind(owner.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(ContactError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
