/// Shared database handle; `PgPool` is internally reference-counted.
pub type Db = sqlx::PgPool;
