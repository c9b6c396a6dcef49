use crate::config::mongo_conf::MongoConfig;
use crate::model::client::{Client, Lead};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use bson::doc;
use futures::stream::StreamExt;
use mongodb::options::FindOptions;
use tracing::{error, info};

/// Lead statuses still eligible for quoting.
const OPEN_LEAD_STATUSES: [&str; 3] = ["new", "contacted", "qualified"];

/// Read-side lookups backing the client/lead selection dropdowns in the
/// quote maker. No writes go through here.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    async fn active_clients(&self) -> RepositoryResult<Vec<Client>>;
    async fn open_leads(&self) -> RepositoryResult<Vec<Lead>>;
}

pub struct MongoDirectoryRepository {
    clients: mongodb::Collection<Client>,
    leads: mongodb::Collection<Lead>,
}

impl MongoDirectoryRepository {
    pub async fn new(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        use mongodb::{options::{ClientOptions, Credential}, Client as MongoClient};

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

        let client = MongoClient::with_options(client_options)?;
        let db = client.database(&config.database);
        let clients = db.collection::<Client>(config.client_collection.as_deref().unwrap_or("clients"));
        let leads = db.collection::<Lead>(config.lead_collection.as_deref().unwrap_or("leads"));
        Ok(MongoDirectoryRepository { clients, leads })
    }
}

#[async_trait]
impl DirectoryRepository for MongoDirectoryRepository {
    #[tracing::instrument(skip(self))]
    async fn active_clients(&self) -> RepositoryResult<Vec<Client>> {
        let filter = doc! { "status": "active" };
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let cursor = self.clients.find(filter, options).await;
        match cursor {
            Ok(mut cursor) => {
                let mut clients = Vec::new();
                while let Some(client) = cursor.next().await {
                    match client {
                        Ok(c) => clients.push(c),
                        Err(e) => {
                            error!("Failed to deserialize client: {}", e);
                            return Err(RepositoryError::serialization(format!("Failed to deserialize client: {}", e)));
                        }
                    }
                }
                info!("Fetched {} active clients", clients.len());
                Ok(clients)
            }
            Err(e) => {
                error!("Failed to list clients: {}", e);
                Err(RepositoryError::database(format!("Failed to list clients: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn open_leads(&self) -> RepositoryResult<Vec<Lead>> {
        let filter = doc! { "status": { "$in": OPEN_LEAD_STATUSES.to_vec() } };
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();
        let cursor = self.leads.find(filter, options).await;
        match cursor {
            Ok(mut cursor) => {
                let mut leads = Vec::new();
                while let Some(lead) = cursor.next().await {
                    match lead {
                        Ok(l) => leads.push(l),
                        Err(e) => {
                            error!("Failed to deserialize lead: {}", e);
                            return Err(RepositoryError::serialization(format!("Failed to deserialize lead: {}", e)));
                        }
                    }
                }
                info!("Fetched {} open leads", leads.len());
                Ok(leads)
            }
            Err(e) => {
                error!("Failed to list leads: {}", e);
                Err(RepositoryError::database(format!("Failed to list leads: {}", e)))
            }
        }
    }
}
