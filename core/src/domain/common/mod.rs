use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Clone, Debug)]
pub struct ScannerConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub classifier: ClassifierConfig,
    pub ocr: OcrConfig,
    pub object_storage: ObjectStorageConfig,
    pub ingredient_info: IngredientInfoConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub access_token_expire_minutes: i64,
    /// Development code handed out instead of a random one.
    pub fixed_otp: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    pub endpoint: Option<String>,
    pub lexicon_path: String,
    pub concurrency: usize,
    /// Upper bound for one prediction request.
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    pub endpoint: String,
    pub language: String,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket_prefix: String,
    pub use_ssl: bool,
}

#[derive(Clone, Debug)]
pub struct IngredientInfoConfig {
    pub path: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

pub fn generate_random_digits(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}
