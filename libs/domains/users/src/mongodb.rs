//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::mongodb::is_duplicate_key;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{self, doc},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

pub const COLLECTION: &str = "users";

/// Stored shape of a user: string `_id`, BSON date.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: String,
    user_name: String,
    password_hash: String,
    created_at: bson::DateTime,
}

impl From<&User> for UserDocument {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            user_name: user.user_name.clone(),
            password_hash: user.password_hash.clone(),
            created_at: bson::DateTime::from_millis(user.created_at.timestamp_millis()),
        }
    }
}

impl TryFrom<UserDocument> for User {
    type Error = UserError;

    fn try_from(doc: UserDocument) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&doc.id)
            .map_err(|e| UserError::Internal(format!("Stored user id '{}': {}", doc.id, e)))?;

        Ok(User {
            id,
            user_name: doc.user_name,
            password_hash: doc.password_hash,
            created_at: DateTime::<Utc>::from_timestamp_millis(doc.created_at.timestamp_millis())
                .unwrap_or_default(),
        })
    }
}

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<UserDocument>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<UserDocument>(collection_name);
        Self { collection }
    }

    /// Unique index on `user_name`; concurrent registrations of one name race on it.
    pub async fn init_indexes(&self) -> UserResult<()> {
        let index = IndexModel::builder()
            .keys(doc! { "user_name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("idx_user_name_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(index).await?;
        tracing::info!("User indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(user_name = %user.user_name))]
    async fn create(&self, user: User) -> UserResult<User> {
        self.collection
            .insert_one(UserDocument::from(&user))
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    UserError::DuplicateUserName(user.user_name.clone())
                } else {
                    UserError::from(e)
                }
            })?;

        tracing::info!(user_id = %user.id, "User created successfully");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_user_name(&self, user_name: &str) -> UserResult<Option<User>> {
        self.collection
            .find_one(doc! { "user_name": user_name })
            .await?
            .map(User::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn user_name_exists(&self, user_name: &str) -> UserResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "user_name": user_name })
            .await?;
        Ok(count > 0)
    }
}
