use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser};
use ingredient_scanner_core::domain::common::{
    AuthConfig, ClassifierConfig, DatabaseConfig, IngredientInfoConfig, ObjectStorageConfig,
    OcrConfig, ScannerConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ingredient-scanner", about = "Ingredient scanner API server")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub ocr: OcrArgs,

    #[command(flatten)]
    pub object_storage: ObjectStorageArgs,

    #[command(flatten)]
    pub ingredient_info: IngredientInfoArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(
        id = "server-host",
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0"
    )]
    pub host: String,

    #[arg(
        id = "server-port",
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333
    )]
    pub port: u16,

    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = ""
    )]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "server-tls-cert",
        env = "SERVER_TLS_CERT",
        requires = "tls_key"
    )]
    pub tls_cert: Option<PathBuf>,

    #[arg(long = "server-tls-key", env = "SERVER_TLS_KEY", requires = "tls_cert")]
    pub tls_key: Option<PathBuf>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(
        id = "database-host",
        long = "database-host",
        env = "DATABASE_HOST",
        default_value = "localhost"
    )]
    pub host: String,

    #[arg(
        id = "database-port",
        long = "database-port",
        env = "DATABASE_PORT",
        default_value_t = 5432
    )]
    pub port: u16,

    #[arg(
        long = "database-user",
        env = "DATABASE_USER",
        default_value = "postgres"
    )]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(
        long = "database-name",
        env = "DATABASE_NAME",
        default_value = "scanner"
    )]
    pub name: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,

    #[arg(
        long = "access-token-expire-minutes",
        env = "ACCESS_TOKEN_EXPIRE_MINUTES",
        default_value_t = 6000
    )]
    pub access_token_expire_minutes: i64,

    /// Development code handed out instead of a random one.
    #[arg(long = "fixed-otp", env = "FIXED_OTP")]
    pub fixed_otp: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ClassifierArgs {
    #[arg(
        id = "classifier-endpoint",
        long = "classifier-endpoint",
        env = "CLASSIFIER_ENDPOINT"
    )]
    pub endpoint: Option<String>,

    #[arg(
        long = "classifier-lexicon-path",
        env = "CLASSIFIER_LEXICON_PATH",
        default_value = "data/ingredient_lexicon.json"
    )]
    pub lexicon_path: String,

    #[arg(
        long = "classifier-concurrency",
        env = "CLASSIFIER_CONCURRENCY",
        default_value_t = 4
    )]
    pub concurrency: usize,

    #[arg(
        id = "classifier-timeout-secs",
        long = "classifier-timeout-secs",
        env = "CLASSIFIER_TIMEOUT_SECS",
        default_value_t = 10
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OcrArgs {
    #[arg(
        id = "ocr-endpoint",
        long = "ocr-endpoint",
        env = "OCR_ENDPOINT",
        default_value = "http://localhost:8866/ocr"
    )]
    pub endpoint: String,

    #[arg(long = "ocr-language", env = "OCR_LANGUAGE", default_value = "en")]
    pub language: String,

    #[arg(
        id = "ocr-timeout-secs",
        long = "ocr-timeout-secs",
        env = "OCR_TIMEOUT_SECS",
        default_value_t = 30
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ObjectStorageArgs {
    #[arg(
        id = "minio-endpoint",
        long = "minio-endpoint",
        env = "MINIO_ENDPOINT",
        default_value = "http://localhost:9000"
    )]
    pub endpoint: String,

    #[arg(
        long = "minio-region",
        env = "MINIO_REGION",
        default_value = "us-east-1"
    )]
    pub region: String,

    #[arg(
        long = "minio-access-key",
        env = "MINIO_ACCESS_KEY",
        default_value = "minioadmin"
    )]
    pub access_key: String,

    #[arg(
        long = "minio-secret-key",
        env = "MINIO_SECRET_KEY",
        default_value = "minioadmin"
    )]
    pub secret_key: String,

    #[arg(
        long = "minio-bucket-prefix",
        env = "MINIO_BUCKET_PREFIX",
        default_value = "scanner"
    )]
    pub bucket_prefix: String,

    #[arg(long = "minio-use-ssl", env = "MINIO_USE_SSL", default_value_t = false)]
    pub use_ssl: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct IngredientInfoArgs {
    #[arg(
        long = "ingredient-info-path",
        env = "INGREDIENT_INFO_PATH",
        default_value = "data/ingredient_info.json"
    )]
    pub path: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for ScannerConfig {
    fn from(args: Args) -> Self {
        ScannerConfig {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                access_token_expire_minutes: args.auth.access_token_expire_minutes,
                fixed_otp: args.auth.fixed_otp.filter(|otp| !otp.is_empty()),
            },
            classifier: ClassifierConfig {
                endpoint: args.classifier.endpoint.filter(|e| !e.is_empty()),
                lexicon_path: args.classifier.lexicon_path,
                concurrency: args.classifier.concurrency,
                timeout_secs: args.classifier.timeout_secs,
            },
            ocr: OcrConfig {
                endpoint: args.ocr.endpoint,
                language: args.ocr.language,
                timeout_secs: args.ocr.timeout_secs,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.object_storage.endpoint,
                region: args.object_storage.region,
                access_key: args.object_storage.access_key,
                secret_key: args.object_storage.secret_key,
                bucket_prefix: args.object_storage.bucket_prefix,
                use_ssl: args.object_storage.use_ssl,
            },
            ingredient_info: IngredientInfoConfig {
                path: args.ingredient_info.path,
            },
        }
    }
}
