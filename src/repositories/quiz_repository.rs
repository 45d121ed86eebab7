use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{Quiz, QuizUpdate},
};

/// Storage access for quizzes. Deleting a quiz does not touch its
/// questions; callers cascade through `QuestionRepository`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list(&self) -> AppResult<Vec<Quiz>>;
    async fn update(&self, id: &str, update: QuizUpdate) -> AppResult<Option<Quiz>>;
    async fn delete(&self, id: &str) -> AppResult<Option<Quiz>>;
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn list(&self) -> AppResult<Vec<Quiz>> {
        // Driver-assigned ObjectIds follow insertion order.
        let quizzes = self
            .collection
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(quizzes)
    }

    async fn update(&self, id: &str, update: QuizUpdate) -> AppResult<Option<Quiz>> {
        if update.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut set = doc! {};
        if let Some(title) = &update.title {
            set.insert("title", title.as_str());
        }

        let quiz = self
            .collection
            .find_one_and_update(doc! { "id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one_and_delete(doc! { "id": id }).await?;
        Ok(quiz)
    }
}
