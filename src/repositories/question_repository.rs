use async_trait::async_trait;
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    errors::{AppError, AppResult, ValidationError},
    models::domain::{Question, QuestionUpdate},
};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Storage access for questions, always scoped by `quiz_id` where a
/// collection is involved. No business rules live here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn create(&self, question: Question) -> AppResult<Question>;
    /// Persists every question or none of them.
    async fn create_many(&self, questions: Vec<Question>) -> AppResult<Vec<Question>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    async fn find_by_quiz_and_text(&self, quiz_id: &str, text: &str) -> AppResult<Option<Question>>;
    async fn list_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>>;
    async fn update(&self, id: &str, update: QuestionUpdate) -> AppResult<Option<Question>>;
    async fn delete(&self, id: &str) -> AppResult<Option<Question>>;
    async fn delete_all_by_quiz(&self, quiz_id: &str) -> AppResult<u64>;
}

pub struct MongoQuestionRepository {
    collection: Collection<Question>,
}

impl MongoQuestionRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let quiz_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1 })
            .options(IndexOptions::builder().name("quiz_id".to_string()).build())
            .build();

        // Closes the check-then-insert race on duplicate question text.
        let quiz_text_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "text": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("quiz_text_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(quiz_index).await?;
        self.collection.create_index(quiz_text_index).await?;

        log::info!("Successfully created indexes for questions collection");
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::InsertMany(failure) => failure
            .write_errors
            .as_ref()
            .is_some_and(|errors| errors.iter().any(|e| e.code == DUPLICATE_KEY_CODE)),
        _ => false,
    }
}

fn map_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        AppError::Validation(ValidationError::DuplicateQuestion)
    } else {
        err.into()
    }
}

#[async_trait]
impl QuestionRepository for MongoQuestionRepository {
    async fn create(&self, question: Question) -> AppResult<Question> {
        self.collection
            .insert_one(&question)
            .await
            .map_err(map_write_error)?;
        Ok(question)
    }

    async fn create_many(&self, questions: Vec<Question>) -> AppResult<Vec<Question>> {
        if questions.is_empty() {
            return Ok(questions);
        }

        if let Err(err) = self.collection.insert_many(&questions).await {
            let ids: Vec<&str> = questions.iter().map(|q| q.id.as_str()).collect();
            if let Err(cleanup_err) = self
                .collection
                .delete_many(doc! { "id": { "$in": ids } })
                .await
            {
                log::error!("Failed to roll back partial question batch: {}", cleanup_err);
            }
            return Err(map_write_error(err));
        }

        Ok(questions)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_by_quiz_and_text(&self, quiz_id: &str, text: &str) -> AppResult<Option<Question>> {
        let question = self
            .collection
            .find_one(doc! { "quiz_id": quiz_id, "text": text })
            .await?;
        Ok(question)
    }

    async fn list_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<Question>> {
        let questions = self
            .collection
            .find(doc! { "quiz_id": quiz_id })
            .sort(doc! { "_id": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(questions)
    }

    async fn update(&self, id: &str, update: QuestionUpdate) -> AppResult<Option<Question>> {
        if update.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut set = doc! { "updated_at": to_bson(&Utc::now())? };
        if let Some(text) = &update.text {
            set.insert("text", text.as_str());
        }
        if let Some(options) = &update.options {
            set.insert("options", to_bson(options)?);
        }

        let question = self
            .collection
            .find_one_and_update(doc! { "id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_error)?;
        Ok(question)
    }

    async fn delete(&self, id: &str) -> AppResult<Option<Question>> {
        let question = self.collection.find_one_and_delete(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn delete_all_by_quiz(&self, quiz_id: &str) -> AppResult<u64> {
        let result = self
            .collection
            .delete_many(doc! { "quiz_id": quiz_id })
            .await?;
        Ok(result.deleted_count)
    }
}
