pub mod directory_repo;
pub mod quote_repo;
pub mod repository_error;
