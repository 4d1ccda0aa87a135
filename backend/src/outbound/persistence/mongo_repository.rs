//! Collection-level CRUD shared by every entity adapter.

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failures raised by [`MongoRepository`].
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The driver reported an error.
    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),

    /// The server acknowledged an insert with an id that is not an ObjectId.
    #[error("store assigned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

/// CRUD over one collection of `D` documents, matched on `_id`.
///
/// There are no transactions or concurrency tokens: the last write wins.
pub struct MongoRepository<D>
where
    D: Send + Sync,
{
    collection: Collection<D>,
}

impl<D> Clone for MongoRepository<D>
where
    D: Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

impl<D> MongoRepository<D>
where
    D: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    /// Wrap a collection handle.
    pub fn new(collection: Collection<D>) -> Self {
        Self { collection }
    }

    /// Name of the underlying collection.
    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Every document in store order.
    pub async fn find_all(&self) -> Result<Vec<D>, RepositoryError> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<D> = cursor.try_collect().await?;
        Ok(documents)
    }

    /// The document with `id`, if any.
    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<D>, RepositoryError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    /// Insert `document` and return the identifier the store assigned.
    pub async fn insert(&self, document: &D) -> Result<ObjectId, RepositoryError> {
        let result = self.collection.insert_one(document).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| RepositoryError::UnexpectedId(result.inserted_id.to_string()))
    }

    /// Replace the document with `id`. Returns how many documents matched.
    pub async fn replace_by_id(&self, id: ObjectId, document: &D) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, document)
            .await?;
        Ok(result.matched_count)
    }

    /// Delete the document with `id`. Returns how many documents went away.
    pub async fn delete_by_id(&self, id: ObjectId) -> Result<u64, RepositoryError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
