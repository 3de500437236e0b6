// Account registration, login and bearer-token sessions.
// Tokens are HS256 JWTs carrying the user id and account type.

pub mod extract;
pub mod handlers;
pub mod password;
pub mod queries;
pub mod tokens;
