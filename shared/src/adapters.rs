use crate::core::{Record, RecordStore};
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    types::{AttributeValue, Select},
    Client,
};
use std::collections::HashMap;

#[derive(Debug)]
pub struct DynamoDbRecordStore {
    table_name: String,
    dynamodb_client: Client,
}

impl DynamoDbRecordStore {
    pub fn new(table_name: String, dynamodb_client: Client) -> Self {
        Self {
            table_name,
            dynamodb_client,
        }
    }
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    async fn get_record(&self, id: &str) -> Result<Option<Record>, String> {
        let result = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| format!("Error getting item: {:?}", e))?;

        match result.item {
            None => Ok(None),
            Some(item) => Record::try_from(item).map(Some),
        }
    }

    async fn put_record(&self, record: &Record) -> Result<(), String> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .item("id", AttributeValue::S(record.id.clone()))
            .item("author", AttributeValue::S(record.author.clone()))
            .item("title", AttributeValue::S(record.title.clone()))
            .item("body", AttributeValue::S(record.body.clone()))
            .item("createdAt", AttributeValue::S(record.created_at.clone()))
            .send()
            .await
            .map(|_| ())
            .map_err(|e| format!("Error adding item: {:?}", e))
    }

    async fn list_records(&self) -> Result<Vec<Record>, String> {
        let result = self
            .dynamodb_client
            .scan()
            .table_name(&self.table_name)
            .select(Select::AllAttributes)
            .send()
            .await
            .map_err(|e| format!("Error executing scan: {:?}", e))?;

        Ok(records_from_items(result.items.unwrap_or_default()))
    }
}

// Items that fail to convert are dropped from the listing.
fn records_from_items(items: Vec<HashMap<String, AttributeValue>>) -> Vec<Record> {
    items
        .into_iter()
        .filter_map(|item| Record::try_from(item).ok())
        .collect()
}

impl TryFrom<HashMap<String, AttributeValue>> for Record {
    type Error = String;

    fn try_from(item: HashMap<String, AttributeValue>) -> Result<Self, Self::Error> {
        let id = item
            .get("id")
            .ok_or_else(|| "id not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "id is not a String".to_string())?;
        let author = item
            .get("author")
            .ok_or_else(|| "author not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "author is not a String".to_string())?;
        let title = item
            .get("title")
            .ok_or_else(|| "title not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "title is not a String".to_string())?;
        let body = item
            .get("body")
            .ok_or_else(|| "body not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "body is not a String".to_string())?;
        let created_at = item
            .get("createdAt")
            .ok_or_else(|| "createdAt not found".to_string())?
            .as_s()
            .map(|s| s.to_string())
            .map_err(|_| "createdAt is not a String".to_string())?;

        Ok(Record {
            id,
            author,
            title,
            body,
            created_at,
        })
    }
}
