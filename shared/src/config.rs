use figment::providers::Env;
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Process-wide settings read once at startup. Missing either variable is
/// fatal before the runtime starts polling for events.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub aws_region: String,
    pub table_name: String,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Env::raw().only(&["AWS_REGION", "TABLE_NAME"]))
            .extract()
    }
}
