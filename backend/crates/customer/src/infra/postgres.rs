//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{AccountId, CustomerId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Customer, CustomerSummary};
use crate::domain::repository::CustomerRepository;
use crate::domain::value_objects::Initials;
use crate::error::{CustomerError, CustomerResult};

/// PostgreSQL-backed customer repository
#[derive(Clone)]
pub struct PgCustomerRepository {
    pool: PgPool,
}

impl PgCustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Unique index violations are a duplicate name pair
fn map_write_error(e: sqlx::Error, on_conflict: CustomerError) -> CustomerError {
    if is_unique_violation(&e) {
        on_conflict
    } else {
        CustomerError::Database(e)
    }
}

/// Escape `%`, `_` and `\` so user input matches literally in `ILIKE`
fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, customer: &Customer) -> CustomerResult<()> {
        sqlx::query(
            r#"
            INSERT INTO customers (
                id,
                first_name,
                last_name,
                full_name,
                last_modified_by,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(customer.id.as_uuid())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.full_name)
        .bind(customer.last_modified_by.as_uuid())
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, CustomerError::DuplicateCustomer))?;

        Ok(())
    }

    async fn update(&self, customer: &Customer) -> CustomerResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET first_name = $2,
                last_name = $3,
                full_name = $4,
                last_modified_by = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(customer.id.as_uuid())
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.full_name)
        .bind(customer.last_modified_by.as_uuid())
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, CustomerError::NameTaken))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: CustomerId) -> CustomerResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, full_name, last_modified_by, created_at, updated_at
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(CustomerRow::into_customer))
    }

    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
        exclude: Option<CustomerId>,
    ) -> CustomerResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM customers
                WHERE lower(first_name) = lower($1)
                  AND lower(last_name) = lower($2)
                  AND ($3::uuid IS NULL OR id <> $3)
            )
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(exclude.map(CustomerId::into_uuid))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn search_by_full_name(&self, fragment: &str) -> CustomerResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, full_name, last_modified_by, created_at, updated_at
            FROM customers
            WHERE full_name ILIKE '%' || $1 || '%' ESCAPE '\'
            ORDER BY created_at
            "#,
        )
        .bind(escape_like(fragment))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CustomerRow::into_customer).collect())
    }

    async fn recent_by_modifier(
        &self,
        actor: AccountId,
        limit: u32,
    ) -> CustomerResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, first_name, last_name, full_name, last_modified_by, created_at, updated_at
            FROM customers
            WHERE last_modified_by = $1
            ORDER BY updated_at DESC
            LIMIT $2
            "#,
        )
        .bind(actor.as_uuid())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(CustomerRow::into_customer).collect())
    }

    async fn list_summaries(&self) -> CustomerResult<Vec<CustomerSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            "SELECT id, first_name, last_name FROM customers ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }

    async fn find_by_initials(&self, initials: &Initials) -> CustomerResult<Vec<CustomerSummary>> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT id, first_name, last_name
            FROM customers
            WHERE lower(left(btrim(first_name), 1)) = $1
              AND lower(left(btrim(last_name), 1)) = $2
            ORDER BY created_at
            "#,
        )
        .bind(initials.first())
        .bind(initials.last())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(SummaryRow::into_summary).collect())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: Uuid,
    first_name: String,
    last_name: String,
    full_name: String,
    last_modified_by: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            id: CustomerId::from_uuid(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
            full_name: self.full_name,
            last_modified_by: AccountId::from_uuid(self.last_modified_by),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id: Uuid,
    first_name: String,
    last_name: String,
}

impl SummaryRow {
    fn into_summary(self) -> CustomerSummary {
        CustomerSummary {
            id: CustomerId::from_uuid(self.id),
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}
