mod jwt;

pub use jwt::JwtTokenIssuer;
