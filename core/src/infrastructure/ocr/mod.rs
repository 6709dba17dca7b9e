mod http_extractor;

pub use http_extractor::HttpTextExtractor;
