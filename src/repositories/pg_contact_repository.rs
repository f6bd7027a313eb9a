//! PostgreSQL-backed contact repository.
//!
//! All multi-row writes run inside a single transaction acquired at
//! operation start and finished before the operation returns; dropping
//! the transaction on an early error path rolls it back. Reads assemble
//! the aggregate from one LEFT JOIN query so a contact with zero phones
//! still appears exactly once.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, Postgres};
use sqlx::QueryBuilder;

use crate::error::{ApiError, ApiResult};
use crate::models::{Contact, Phone};
use crate::repositories::traits::ContactRepository;

/// Row shape of the contact/phone LEFT JOIN.
///
/// The phone columns are nullable: a contact without phones yields one
/// row with NULLs on the right side.
type JoinRow = (i64, String, i32, Option<i64>, Option<i64>, Option<String>);

const JOIN_SELECT: &str = "SELECT c.id, c.nome, c.idade, t.idcontato, t.id, t.numero \
     FROM contato c LEFT JOIN telefone t ON c.id = t.idcontato";

/// Contact repository backed by a shared PostgreSQL pool.
pub struct PgContactRepository {
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new repository over the given pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fold join rows into aggregates, tracking the first row seen per
    /// contact id so phone-less contacts are kept and none is duplicated.
    fn collect_aggregates(rows: Vec<JoinRow>) -> Vec<Contact> {
        let mut contacts: Vec<Contact> = Vec::new();

        for (id, name, age, phone_contact_id, phone_id, phone_number) in rows {
            let is_new = contacts.last().map(|c| c.id) != Some(id);
            if is_new {
                contacts.push(Contact {
                    id,
                    name,
                    age,
                    phones: Vec::new(),
                });
            }

            if let (Some(contact_id), Some(phone_id), Some(number)) =
                (phone_contact_id, phone_id, phone_number)
            {
                if let Some(contact) = contacts.last_mut() {
                    contact.phones.push(Phone {
                        contact_id,
                        id: phone_id,
                        number,
                    });
                }
            }
        }

        contacts
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn create(&self, contact: &Contact) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO contato (id, nome, idade) VALUES ($1, $2, $3)")
            .bind(contact.id)
            .bind(&contact.name)
            .bind(contact.age)
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                    ApiError::AlreadyExists(contact.id)
                }
                other => ApiError::Database(other),
            })?;

        for phone in &contact.phones {
            sqlx::query("INSERT INTO telefone (idcontato, id, numero) VALUES ($1, $2, $3)")
                .bind(contact.id)
                .bind(phone.id)
                .bind(&phone.number)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find_all(&self) -> ApiResult<Vec<Contact>> {
        self.find_with_filters("", "").await
    }

    async fn find_with_filters(&self, name: &str, number: &str) -> ApiResult<Vec<Contact>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(JOIN_SELECT);
        query.push(" WHERE 1=1");

        if !name.is_empty() {
            query.push(" AND c.nome ILIKE ");
            query.push_bind(format!("%{name}%"));
        }

        if !number.is_empty() {
            query.push(
                " AND EXISTS (SELECT 1 FROM telefone t2 \
                 WHERE t2.idcontato = c.id AND t2.numero LIKE ",
            );
            query.push_bind(format!("%{number}%"));
            query.push(")");
        }

        query.push(" ORDER BY c.id, t.id");

        let rows: Vec<JoinRow> = query.build_query_as().fetch_all(&self.pool).await?;
        Ok(Self::collect_aggregates(rows))
    }

    async fn find_by_id(&self, id: i64) -> ApiResult<Contact> {
        let sql = format!("{JOIN_SELECT} WHERE c.id = $1 ORDER BY t.id");
        let rows: Vec<JoinRow> = sqlx::query_as(&sql).bind(id).fetch_all(&self.pool).await?;

        Self::collect_aggregates(rows)
            .into_iter()
            .next()
            .ok_or(ApiError::NotFound(id))
    }

    async fn update(&self, contact: &Contact) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE contato SET nome = $1, idade = $2 WHERE id = $3")
            .bind(&contact.name)
            .bind(contact.age)
            .bind(contact.id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(contact.id));
        }

        // Replace the phone set wholesale; diffing against the previous
        // state would have to be correct for every prior shape, this is
        // correct unconditionally.
        sqlx::query("DELETE FROM telefone WHERE idcontato = $1")
            .bind(contact.id)
            .execute(&mut *tx)
            .await?;

        for phone in &contact.phones {
            sqlx::query("INSERT INTO telefone (idcontato, id, numero) VALUES ($1, $2, $3)")
                .bind(contact.id)
                .bind(phone.id)
                .bind(&phone.number)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM telefone WHERE idcontato = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM contato WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(id));
        }

        tx.commit().await?;
        Ok(())
    }
}
