mod minio;

pub use minio::MinioImageStorage;
