//! Shared MongoDB client and database handle.
//!
//! The driver keeps its own connection pool per [`Client`]; handles derived
//! from it are cheap to clone and safe to share between workers.

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::ErrorKind;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};
use tracing::{debug, info};

use crate::domain::ports::{ReadinessCheck, ReadinessCheckError};

/// Collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "Products";

const REQUIRED_COLLECTIONS: &[&str] = &[PRODUCTS_COLLECTION];

// Returned by `create` when another process created the collection first.
const NAMESPACE_EXISTS: i32 = 48;

/// Errors raised while opening the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The connection string was rejected.
    #[error("invalid store configuration: {message}")]
    Config { message: String },

    /// The server could not be reached or refused a bootstrap command.
    #[error("failed to prepare store: {message}")]
    Connection { message: String },
}

impl StoreError {
    /// Create a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

/// Where the document store lives.
///
/// # Example
///
/// ```ignore
/// let config = StoreConfig::new("mongodb://localhost:27017", "mongo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    uri: String,
    database: String,
}

impl StoreConfig {
    /// Create a configuration for `database` on the server at `uri`.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }

    /// Connection string.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Database name.
    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Names in `required` that are absent from `existing`, in `required` order.
fn missing_collections<'a>(existing: &[String], required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|name| !existing.iter().any(|present| present == name))
        .collect()
}

/// Connected store: one client, one database.
#[derive(Clone, Debug)]
pub struct MongoContext {
    database: Database,
}

impl MongoContext {
    /// Connect to the configured database and create any missing collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] when the URI cannot be parsed and
    /// [`StoreError::Connection`] when the server cannot list or create
    /// collections.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::config(err.to_string()))?;
        let client =
            Client::with_options(options).map_err(|err| StoreError::config(err.to_string()))?;
        let context = Self {
            database: client.database(config.database()),
        };
        context.ensure_collections(REQUIRED_COLLECTIONS).await?;
        info!(database = config.database(), "document store ready");
        Ok(context)
    }

    async fn ensure_collections(&self, required: &[&str]) -> Result<(), StoreError> {
        let existing = self
            .database
            .list_collection_names()
            .await
            .map_err(|err| StoreError::connection(err.to_string()))?;

        for name in missing_collections(&existing, required) {
            match self.database.create_collection(name).await {
                Ok(()) => info!(collection = name, "created collection"),
                Err(err) if is_namespace_exists(&err) => {
                    debug!(collection = name, "collection created concurrently");
                }
                Err(err) => return Err(StoreError::connection(err.to_string())),
            }
        }
        Ok(())
    }

    /// Typed handle to the collection called `name`.
    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.database.collection(name)
    }

    /// Name of the selected database.
    pub fn database_name(&self) -> &str {
        self.database.name()
    }

    /// Round-trip a `ping` command to the server.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

fn is_namespace_exists(error: &mongodb::error::Error) -> bool {
    matches!(&*error.kind, ErrorKind::Command(command) if command.code == NAMESPACE_EXISTS)
}

#[async_trait]
impl ReadinessCheck for MongoContext {
    async fn check(&self) -> Result<(), ReadinessCheckError> {
        self.ping()
            .await
            .map_err(|err| ReadinessCheckError::unavailable(err.to_string()))
    }
}
