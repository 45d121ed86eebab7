use std::env;

use secrecy::SecretString;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Mongo,
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "mongo" | "mongodb" => Some(StorageBackend::Mongo),
            "memory" | "in-memory" => Some(StorageBackend::Memory),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: SecretString,
    pub mongo_db_name: String,
    pub quizzes_collection: String,
    pub questions_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub storage_backend: StorageBackend,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: SecretString::from(
                env::var("MONGO_CONN_STRING")
                    .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            ),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "quiz-local".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            questions_collection: env::var("QUESTIONS_COLLECTION")
                .unwrap_or_else(|_| "questions".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            storage_backend: env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|b| StorageBackend::parse(&b))
                .unwrap_or(StorageBackend::Mongo),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .ok()
                .filter(|o| !o.trim().is_empty()),
        }
    }

    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: SecretString::from("mongodb://localhost:27017".to_string()),
            mongo_db_name: "quiz-test".to_string(),
            quizzes_collection: "quizzes".to_string(),
            questions_collection: "questions".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 3000,
            storage_backend: StorageBackend::Memory,
            cors_allowed_origin: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.mongo_conn_string.expose_secret().is_empty());
        assert!(!config.mongo_db_name.is_empty());
        assert!(!config.questions_collection.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "quiz-test");
        assert_eq!(config.quizzes_collection, "quizzes");
        assert_eq!(config.storage_backend, StorageBackend::Memory);
    }

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!(StorageBackend::parse("Mongo"), Some(StorageBackend::Mongo));
        assert_eq!(StorageBackend::parse(" memory "), Some(StorageBackend::Memory));
        assert_eq!(StorageBackend::parse("postgres"), None);
    }

    #[test]
    fn test_connection_string_is_redacted_in_debug() {
        let config = Config::test_config();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("mongodb://localhost:27017"));
    }
}
