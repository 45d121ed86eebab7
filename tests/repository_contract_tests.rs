use quiz_server::{
    errors::{AppError, ValidationError},
    models::domain::{Question, QuestionOption, QuestionUpdate, Quiz, QuizUpdate},
    repositories::{
        InMemoryQuestionRepository, InMemoryQuizRepository, QuestionRepository, QuizRepository,
    },
};

fn question(quiz_id: &str, text: &str) -> Question {
    Question::new(
        quiz_id,
        text,
        vec![
            QuestionOption::new("yes", true),
            QuestionOption::new("no", false),
        ],
    )
}

fn is_duplicate(err: &AppError) -> bool {
    matches!(err, AppError::Validation(ValidationError::DuplicateQuestion))
}

async fn quiz_repository_contract(repo: &dyn QuizRepository) {
    let first = repo.create(Quiz::new("First")).await.expect("create first");
    let second = repo.create(Quiz::new("Second")).await.expect("create second");

    let found = repo
        .find_by_id(&first.id)
        .await
        .expect("find should succeed")
        .expect("quiz should exist");
    assert_eq!(found, first);
    assert!(repo.find_by_id("missing").await.expect("find").is_none());

    let listed = repo.list().await.expect("list");
    let ids: Vec<&str> = listed.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec![first.id.as_str(), second.id.as_str()]);

    let renamed = repo
        .update(
            &first.id,
            QuizUpdate {
                title: Some("Renamed".to_string()),
            },
        )
        .await
        .expect("update")
        .expect("quiz should exist");
    assert_eq!(renamed.title, "Renamed");
    assert_eq!(renamed.created_at, first.created_at);
    assert!(repo
        .update("missing", QuizUpdate::default())
        .await
        .expect("update")
        .is_none());

    let deleted = repo
        .delete(&second.id)
        .await
        .expect("delete")
        .expect("quiz should exist");
    assert_eq!(deleted.id, second.id);
    assert!(repo.delete(&second.id).await.expect("delete").is_none());
    assert_eq!(repo.list().await.expect("list").len(), 1);
}

async fn question_repository_contract(repo: &dyn QuestionRepository) {
    let q1 = repo.create(question("quiz-1", "Q1")).await.expect("create");
    repo.create(question("quiz-2", "Q1"))
        .await
        .expect("same text in another quiz is allowed");

    let err = repo
        .create(question("quiz-1", "Q1"))
        .await
        .expect_err("duplicate text must be rejected");
    assert!(is_duplicate(&err));

    let by_text = repo
        .find_by_quiz_and_text("quiz-1", "Q1")
        .await
        .expect("find")
        .expect("question should exist");
    assert_eq!(by_text.id, q1.id);
    assert!(repo.find_by_id("missing").await.expect("find").is_none());

    let err = repo
        .create_many(vec![question("quiz-1", "Q2"), question("quiz-1", "Q1")])
        .await
        .expect_err("batch with a clash must be rejected");
    assert!(is_duplicate(&err));
    assert!(repo
        .find_by_quiz_and_text("quiz-1", "Q2")
        .await
        .expect("find")
        .is_none());

    let batch = repo
        .create_many(vec![question("quiz-1", "Q2"), question("quiz-1", "Q3")])
        .await
        .expect("clean batch");
    assert_eq!(batch.len(), 2);
    assert_eq!(repo.list_by_quiz("quiz-1").await.expect("list").len(), 3);

    let err = repo
        .update(
            &batch[0].id,
            QuestionUpdate {
                text: Some("Q1".to_string()),
                options: None,
            },
        )
        .await
        .expect_err("renaming onto an existing text must be rejected");
    assert!(is_duplicate(&err));

    let updated = repo
        .update(
            &batch[0].id,
            QuestionUpdate {
                text: Some("Q2".to_string()),
                options: Some(vec![
                    QuestionOption::new("a", false),
                    QuestionOption::new("b", true),
                ]),
            },
        )
        .await
        .expect("keeping its own text is fine")
        .expect("question should exist");
    assert_eq!(updated.text, "Q2");
    assert!(updated.options[1].is_correct);
    assert!(updated.updated_at >= batch[0].updated_at);

    assert!(repo
        .delete(&q1.id)
        .await
        .expect("delete")
        .is_some());
    assert!(repo.delete(&q1.id).await.expect("delete").is_none());

    assert_eq!(repo.delete_all_by_quiz("quiz-1").await.expect("cascade"), 2);
    assert!(repo.list_by_quiz("quiz-1").await.expect("list").is_empty());
    assert_eq!(repo.list_by_quiz("quiz-2").await.expect("list").len(), 1);
}

#[tokio::test]
async fn in_memory_quiz_repository_honours_contract() {
    let repo = InMemoryQuizRepository::new();
    quiz_repository_contract(&repo).await;
}

#[tokio::test]
async fn in_memory_question_repository_honours_contract() {
    let repo = InMemoryQuestionRepository::new();
    question_repository_contract(&repo).await;
}

#[tokio::test]
async fn in_memory_clones_share_storage() {
    let repo = InMemoryQuestionRepository::new();
    let handle = repo.clone();

    repo.create(question("quiz-1", "Q1")).await.expect("create");
    assert_eq!(handle.list_by_quiz("quiz-1").await.expect("list").len(), 1);
}
