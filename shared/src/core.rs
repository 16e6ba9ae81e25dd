use async_trait::async_trait;
use chrono::Utc;
use cuid2::CuidConstructor;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[cfg(any(test, feature = "mocks"))]
use mockall::{automock, predicate::*};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub author: String,
    pub title: String,
    pub body: String,
    pub created_at: String,
}

#[derive(Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub author: String,
    pub title: String,
    pub body: String,
}

impl CreateRecordRequest {
    pub fn is_valid(&self) -> bool {
        !self.author.is_empty() && !self.title.is_empty() && !self.body.is_empty()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub detail: String,
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
#[async_trait]
pub trait RecordStore: Debug {
    async fn get_record(&self, id: &str) -> Result<Option<Record>, String>;
    async fn put_record(&self, record: &Record) -> Result<(), String>;
    async fn list_records(&self) -> Result<Vec<Record>, String>;
}

#[cfg_attr(any(test, feature = "mocks"), automock)]
pub trait IdGenerator {
    fn generate_id(&self) -> String;
}

pub struct CuidGenerator {
    gen: CuidConstructor,
}

impl CuidGenerator {
    pub fn new() -> Self {
        Self {
            gen: CuidConstructor::new().with_length(24),
        }
    }
}

impl IdGenerator for CuidGenerator {
    fn generate_id(&self) -> String {
        self.gen.create_id()
    }
}

impl Debug for CuidGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CuidGenerator")
    }
}

#[derive(Debug)]
pub struct RecordService<S: RecordStore, G: IdGenerator> {
    record_store: S,
    id_generator: G,
}

impl<S: RecordStore, G: IdGenerator> RecordService<S, G> {
    pub fn new(record_store: S, id_generator: G) -> Self {
        Self {
            record_store,
            id_generator,
        }
    }

    // The id and creation time are always assigned here, never taken from
    // the caller.
    pub async fn create_record(&self, request: CreateRecordRequest) -> Result<Record, String> {
        let record = Record {
            id: self.id_generator.generate_id(),
            author: request.author,
            title: request.title,
            body: request.body,
            created_at: Utc::now().to_rfc3339(),
        };

        self.record_store.put_record(&record).await?;

        Ok(record)
    }

    pub async fn get_record(&self, id: &str) -> Result<Option<Record>, String> {
        self.record_store.get_record(id).await
    }

    pub async fn list_records(&self) -> Result<Vec<Record>, String> {
        self.record_store.list_records().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use mockall::predicate;

    #[tokio::test]
    async fn when_valid_request_is_passed_should_stamp_id_and_created_at() {
        let mut record_store = MockRecordStore::new();
        record_store
            .expect_put_record()
            .withf(|record: &Record| {
                record.id == "test-id-1"
                    && record.author == "a"
                    && record.title == "t"
                    && record.body == "b"
            })
            .times(1)
            .returning(|_record| Ok(()));

        let mut id_generator = MockIdGenerator::new();
        id_generator
            .expect_generate_id()
            .times(1)
            .return_const("test-id-1".to_string());

        let service = RecordService::new(record_store, id_generator);

        let result = service
            .create_record(CreateRecordRequest {
                author: "a".to_string(),
                title: "t".to_string(),
                body: "b".to_string(),
            })
            .await;

        assert!(result.is_ok());

        let record = result.unwrap();
        assert_eq!(record.id, "test-id-1");
        assert!(DateTime::parse_from_rfc3339(&record.created_at).is_ok());
    }

    #[tokio::test]
    async fn when_store_fails_create_should_pass_error_up() {
        let mut record_store = MockRecordStore::new();
        record_store
            .expect_put_record()
            .times(1)
            .returning(|_record| Err("Error adding item".to_string()));

        let mut id_generator = MockIdGenerator::new();
        id_generator
            .expect_generate_id()
            .times(1)
            .return_const("test-id-1".to_string());

        let service = RecordService::new(record_store, id_generator);

        let result = service
            .create_record(CreateRecordRequest {
                author: "a".to_string(),
                title: "t".to_string(),
                body: "b".to_string(),
            })
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn on_get_should_delegate_to_store() {
        let mut record_store = MockRecordStore::new();
        record_store
            .expect_get_record()
            .with(predicate::eq("a-record-id".to_string()))
            .times(1)
            .returning(|id| {
                Ok(Some(Record {
                    id: id.to_string(),
                    author: "a".to_string(),
                    title: "t".to_string(),
                    body: "b".to_string(),
                    created_at: "2024-01-01T00:00:00+00:00".to_string(),
                }))
            });

        let service = RecordService::new(record_store, MockIdGenerator::new());

        let result = service.get_record("a-record-id").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().unwrap().id, "a-record-id");
    }

    #[tokio::test]
    async fn on_list_should_delegate_to_store() {
        let mut record_store = MockRecordStore::new();
        record_store.expect_list_records().times(1).returning(|| {
            Ok(vec![Record {
                id: "a-record-id".to_string(),
                author: "a".to_string(),
                title: "t".to_string(),
                body: "b".to_string(),
                created_at: "2024-01-01T00:00:00+00:00".to_string(),
            }])
        });

        let service = RecordService::new(record_store, MockIdGenerator::new());

        let result = service.list_records().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 1);
    }

    #[test]
    fn request_with_empty_field_should_be_invalid() {
        let request = CreateRecordRequest {
            author: "".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
        };

        assert!(!request.is_valid());
    }

    #[test]
    fn service_should_be_debug_formattable() {
        let service = RecordService::new(MockRecordStore::new(), CuidGenerator::new());

        let formatted = format!("{:?}", service);

        assert!(formatted.contains("RecordService"));
        assert!(formatted.contains("CuidGenerator"));
    }

    #[test]
    fn generated_ids_should_be_distinct() {
        let generator = CuidGenerator::new();

        let first = generator.generate_id();
        let second = generator.generate_id();

        assert_ne!(first, second);
    }
}
