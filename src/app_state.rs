use std::sync::Arc;

use crate::{
    config::{Config, StorageBackend},
    db::Database,
    errors::AppResult,
    repositories::{
        InMemoryQuestionRepository, InMemoryQuizRepository, MongoQuestionRepository,
        MongoQuizRepository, QuestionRepository, QuizRepository,
    },
    services::{
        question_service::QuestionService, quiz_service::QuizService,
        scoring_service::ScoringService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub question_service: Arc<QuestionService>,
    pub scoring_service: Arc<ScoringService>,
    pub config: Arc<Config>,
    /// `None` when running on the in-memory backend.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        match config.storage_backend {
            StorageBackend::Mongo => {
                let db = Database::connect(&config).await?;

                let quiz_repository =
                    Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
                quiz_repository.ensure_indexes().await?;

                let question_repository =
                    Arc::new(MongoQuestionRepository::new(&db, &config.questions_collection));
                question_repository.ensure_indexes().await?;

                Ok(Self::from_repositories(
                    quiz_repository,
                    question_repository,
                    config,
                    Some(db),
                ))
            }
            StorageBackend::Memory => {
                log::warn!("Using in-memory storage; data is lost on shutdown");
                Ok(Self::in_memory(config))
            }
        }
    }

    pub fn in_memory(config: Config) -> Self {
        Self::from_repositories(
            Arc::new(InMemoryQuizRepository::new()),
            Arc::new(InMemoryQuestionRepository::new()),
            config,
            None,
        )
    }

    pub fn from_repositories(
        quiz_repository: Arc<dyn QuizRepository>,
        question_repository: Arc<dyn QuestionRepository>,
        config: Config,
        db: Option<Database>,
    ) -> Self {
        let quiz_service = Arc::new(QuizService::new(
            quiz_repository.clone(),
            question_repository.clone(),
        ));
        let question_service = Arc::new(QuestionService::new(
            quiz_repository,
            question_repository.clone(),
        ));
        let scoring_service = Arc::new(ScoringService::new(question_repository));

        Self {
            quiz_service,
            question_service,
            scoring_service,
            config: Arc::new(config),
            db,
        }
    }
}
