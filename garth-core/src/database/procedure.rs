//! Named-parameter invocation of PostgreSQL functions.
//!
//! The hotel schema exposes every read and write as a database function. A
//! [`ProcedureCall`] collects `(parameter, value)` pairs and renders
//! `SELECT * FROM name(p_a => $1, p_b => $2)`, so argument order never has to
//! match the function signature.

use sqlx::{
    Arguments, Encode, FromRow, PgPool, Postgres, Type,
    error::BoxDynError,
    postgres::{PgArguments, PgQueryResult, PgRow},
};
use std::fmt;

pub struct ProcedureCall {
    name: &'static str,
    params: Vec<&'static str>,
    args: PgArguments,
    bind_error: Option<BoxDynError>,
}

impl fmt::Debug for ProcedureCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcedureCall")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("bind_error", &self.bind_error.is_some())
            .finish()
    }
}

impl ProcedureCall {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            params: Vec::new(),
            args: PgArguments::default(),
            bind_error: None,
        }
    }

    /// Bind `value` to the function parameter `param`.
    pub fn arg<T>(mut self, param: &'static str, value: T) -> Self
    where
        T: Encode<'static, Postgres> + Type<Postgres> + Send + 'static,
    {
        if self.bind_error.is_some() {
            return self;
        }

        match self.args.add(value) {
            Ok(()) => self.params.push(param),
            Err(err) => self.bind_error = Some(err),
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn sql(&self) -> String {
        let params = self
            .params
            .iter()
            .enumerate()
            .map(|(idx, param)| format!("{param} => ${}", idx + 1))
            .collect::<Vec<_>>()
            .join(", ");
        format!("SELECT * FROM {}({})", self.name, params)
    }

    fn into_parts(self) -> Result<(String, PgArguments), sqlx::Error> {
        if let Some(err) = self.bind_error {
            return Err(sqlx::Error::Encode(err));
        }
        let sql = self.sql();
        Ok((sql, self.args))
    }

    pub async fn fetch_all<T>(self, pool: &PgPool) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let (sql, args) = self.into_parts()?;
        sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_all(pool)
            .await
    }

    pub async fn fetch_optional<T>(self, pool: &PgPool) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let (sql, args) = self.into_parts()?;
        sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_optional(pool)
            .await
    }

    pub async fn fetch_one<T>(self, pool: &PgPool) -> Result<T, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let (sql, args) = self.into_parts()?;
        sqlx::query_as_with::<_, T, _>(&sql, args)
            .fetch_one(pool)
            .await
    }

    /// Read the first column of the single row the function returns.
    pub async fn fetch_scalar<T>(self, pool: &PgPool) -> Result<T, sqlx::Error>
    where
        T: for<'r> sqlx::Decode<'r, Postgres> + Type<Postgres> + Send + Unpin,
    {
        let (sql, args) = self.into_parts()?;
        sqlx::query_scalar_with::<_, T, _>(&sql, args)
            .fetch_one(pool)
            .await
    }

    pub async fn execute(self, pool: &PgPool) -> Result<PgQueryResult, sqlx::Error> {
        let (sql, args) = self.into_parts()?;
        sqlx::query_with(&sql, args).execute(pool).await
    }
}
