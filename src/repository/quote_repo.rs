use crate::config::mongo_conf::MongoConfig;
use crate::model::quote::Quote;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::StreamExt;
use tracing::{error, info};

#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn create(&self, quote: Quote) -> RepositoryResult<Quote>;
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Quote>;
    async fn update_status(&self, id: ObjectId, status: &str) -> RepositoryResult<Quote>;
    async fn record_view(&self, id: ObjectId) -> RepositoryResult<Quote>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()>;
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Quote>>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct MongoQuoteRepository {
    collection: mongodb::Collection<Quote>,
}

/// Offset for a 1-based page. Widened to u64 before multiplying so
/// arbitrary query parameters cannot overflow u32.
fn page_offset(page: u32, limit: u32) -> u64 {
    let page = page.max(1) as u64;
    (page - 1) * limit as u64
}

impl MongoQuoteRepository {
    /// Create a new MongoQuoteRepository using MongoConfig
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        use mongodb::{options::{ClientOptions, Credential}, Client};

        let mut client_options = ClientOptions::parse(&config.uri).await?;
        client_options.app_name = Some("NovaForgeBackend".to_string());
        client_options.max_pool_size = Some(config.pool_size);
        client_options.connect_timeout = Some(std::time::Duration::from_secs(config.connection_timeout_secs));

        if let (Some(ref username), Some(ref password)) = (&config.username, &config.password) {
            client_options.credential = Some(Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build());
        }

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);
        let collection_name = config.quote_collection.as_deref().unwrap_or("quotes");
        let collection = db.collection::<Quote>(collection_name);
        Ok(MongoQuoteRepository { collection })
    }
}

#[async_trait]
impl QuoteRepository for MongoQuoteRepository {
    #[tracing::instrument(skip(self, quote), fields(reference = %quote.reference))]
    async fn create(&self, quote: Quote) -> RepositoryResult<Quote> {
        info!(reference = %quote.reference, "Creating new quote");
        let mut new_quote = quote;
        // Server-assigned fields: identity, draft status, view tracking zeroed
        new_quote.id = Some(ObjectId::new());
        new_quote.status = Some("draft".to_string());
        new_quote.view_count = 0;
        new_quote.last_viewed_at = None;
        let time = chrono::Utc::now();
        new_quote.created_at = Some(time.to_rfc3339());
        new_quote.updated_at = Some(time.to_rfc3339());

        let result = self.collection.insert_one(new_quote.clone(), None).await;
        match result {
            Ok(_) => {
                info!("Quote created successfully");
                Ok(new_quote)
            }
            Err(e) => {
                error!("Failed to create quote: {}", e);
                Err(RepositoryError::database(format!("Failed to create quote: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn get_by_id(&self, id: ObjectId) -> RepositoryResult<Quote> {
        let filter = doc! { "_id": id };
        let result = self.collection.find_one(filter, None).await;
        match result {
            Ok(Some(quote)) => Ok(quote),
            Ok(None) => {
                error!("Quote not found for ID: {}", id);
                Err(RepositoryError::not_found(format!("Quote not found for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to fetch quote by ID: {}", e);
                Err(RepositoryError::database(format!("Failed to fetch quote by ID: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_status(&self, id: ObjectId, status: &str) -> RepositoryResult<Quote> {
        info!(quote_id = %id, status = %status, "Updating quote status");
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "status": status, "updated_at": chrono::Utc::now().to_rfc3339() } };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.modified_count > 0 => {
                info!("Quote status updated successfully for ID: {}", id);
                self.get_by_id(id).await
            }
            Ok(_) => {
                error!("No quote found to update status for ID: {}", id);
                Err(RepositoryError::not_found(format!("No quote found to update status for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to update quote status: {}", e);
                Err(RepositoryError::database(format!("Failed to update quote status: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn record_view(&self, id: ObjectId) -> RepositoryResult<Quote> {
        let filter = doc! { "_id": id };
        let update = doc! {
            "$inc": { "view_count": 1 },
            "$set": { "last_viewed_at": chrono::Utc::now().to_rfc3339() },
        };
        let result = self.collection.update_one(filter, update, None).await;
        match result {
            Ok(update_result) if update_result.modified_count > 0 => self.get_by_id(id).await,
            Ok(_) => {
                error!("No quote found to record view for ID: {}", id);
                Err(RepositoryError::not_found(format!("No quote found to record view for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to record quote view: {}", e);
                Err(RepositoryError::database(format!("Failed to record quote view: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<()> {
        info!("Deleting quote with ID: {}", id);
        let filter = doc! { "_id": id };
        let result = self.collection.delete_one(filter, None).await;
        match result {
            Ok(delete_result) if delete_result.deleted_count > 0 => {
                info!("Quote deleted successfully for ID: {}", id);
                Ok(())
            }
            Ok(_) => {
                error!("No quote found to delete for ID: {}", id);
                Err(RepositoryError::not_found(format!("No quote found to delete for ID: {}", id)))
            }
            Err(e) => {
                error!("Failed to delete quote: {}", e);
                Err(RepositoryError::database(format!("Failed to delete quote: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self), fields(page = page, limit = limit))]
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<Quote>> {
        use mongodb::options::FindOptions;

        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(page_offset(page, limit))
            .limit(limit as i64)
            .build();
        let cursor = self.collection.find(None, options).await;
        match cursor {
            Ok(mut cursor) => {
                let mut quotes = Vec::new();
                while let Some(quote) = cursor.next().await {
                    match quote {
                        Ok(q) => quotes.push(q),
                        Err(e) => {
                            error!("Failed to deserialize quote: {}", e);
                            return Err(RepositoryError::serialization(format!("Failed to deserialize quote: {}", e)));
                        }
                    }
                }
                info!("Fetched {} quotes", quotes.len());
                Ok(quotes)
            }
            Err(e) => {
                error!("Failed to list quotes: {}", e);
                Err(RepositoryError::database(format!("Failed to list quotes: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let count = self.collection.count_documents(None, None).await;
        match count {
            Ok(count) => Ok(count),
            Err(e) => {
                error!("Failed to count quotes: {}", e);
                Err(RepositoryError::database(format!("Failed to count quotes: {}", e)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offset_basic_pages() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(2, 20), 20);
        assert_eq!(page_offset(5, 50), 200);
    }

    #[test]
    fn test_page_offset_zero_page_treated_as_first() {
        assert_eq!(page_offset(0, 20), 0);
    }

    #[test]
    fn test_page_offset_survives_large_query_parameters() {
        // Unvalidated query values must not wrap u32.
        assert_eq!(page_offset(4_000_000, 4_000_000), 15_999_996_000_000);
        assert_eq!(
            page_offset(u32::MAX, u32::MAX),
            (u32::MAX as u64 - 1) * u32::MAX as u64
        );
    }
}
