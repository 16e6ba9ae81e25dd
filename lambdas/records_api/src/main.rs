use http_handler::function_handler;
use lambda_http::{run, service_fn, tracing, Error};
use shared::adapters::DynamoDbRecordStore;
use shared::config::Config;
use shared::core::{CuidGenerator, RecordService};

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    let config = Config::load()?;
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.aws_region))
        .load()
        .await;
    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let record_store = DynamoDbRecordStore::new(config.table_name, dynamodb_client);
    let service = RecordService::new(record_store, CuidGenerator::new());

    run(service_fn(|event| function_handler(&service, event))).await
}
