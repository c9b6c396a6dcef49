use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::NaiveDate;
use tracing::{error, info, instrument};

use crate::config::mongo_conf::MongoConfig;
use crate::model::draft::{QuoteDraft, SCOPE_TITLES};
use crate::model::quote::{LineItem, PricingSnapshot, Quote, QuoteData, ScopeSection};
use crate::repository::quote_repo::{MongoQuoteRepository, QuoteRepository};
use crate::util::error::ServiceError;
use crate::util::pricing;
use crate::util::reference::quote_reference;

#[async_trait]
pub trait QuoteService: Send + Sync {
    async fn create_quote(&self, draft: QuoteDraft) -> Result<Quote, ServiceError>;
    async fn get_quote(&self, id: ObjectId) -> Result<Quote, ServiceError>;
    async fn list_quotes(&self, page: u32, limit: u32) -> Result<Vec<Quote>, ServiceError>;
    async fn update_quote_status(&self, id: ObjectId, status: &str) -> Result<Quote, ServiceError>;
    async fn record_quote_view(&self, id: ObjectId) -> Result<Quote, ServiceError>;
    async fn delete_quote(&self, id: ObjectId) -> Result<(), ServiceError>;
}

pub struct QuoteServiceImpl {
    pub quote_repo: MongoQuoteRepository,
}

impl QuoteServiceImpl {
    pub async fn new(mongo_config: &MongoConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let quote_repo = MongoQuoteRepository::new(mongo_config).await?;
        Ok(QuoteServiceImpl { quote_repo })
    }
}

/// Line items that survive persistence: non-blank name and positive price.
/// The live editing summary may have included entries this drops.
fn valid_items(items: &[LineItem]) -> Vec<LineItem> {
    items
        .iter()
        .filter(|item| !item.name.trim().is_empty() && item.price > 0.0)
        .cloned()
        .collect()
}

fn non_blank(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Assemble the persisted record from the draft. Pure: the calling service
/// supplies today's date so the reference is derived exactly once and
/// assigned to both destinations from the same value.
pub fn assemble_quote(draft: &QuoteDraft, today: NaiveDate) -> Result<Quote, ServiceError> {
    if draft.client_name.trim().is_empty() {
        return Err(ServiceError::InvalidInput("Client name is required".to_string()));
    }
    if draft.project_overview.trim().is_empty() {
        return Err(ServiceError::InvalidInput("Project overview is required".to_string()));
    }

    let items = valid_items(&draft.items);
    if items.is_empty() {
        return Err(ServiceError::InvalidInput(
            "At least one line item with a name and a positive price is required".to_string(),
        ));
    }

    let discount_rate = pricing::clamp_rate(draft.discount_rate);
    let deposit_rate = pricing::clamp_rate(draft.deposit_rate);

    // Maintenance is informational recurring revenue only; none of these
    // amounts include it.
    let pricing_snapshot = PricingSnapshot {
        subtotal: pricing::subtotal(&items),
        discount_amount: pricing::discount_amount(&items, discount_rate),
        total: pricing::total(&items, discount_rate),
        deposit_amount: pricing::deposit_amount(&items, discount_rate, deposit_rate),
        items,
        discount_rate,
        deposit_rate,
        maintenance: draft.maintenance.clone(),
    };

    let scope = draft
        .scope_items
        .iter()
        .zip(SCOPE_TITLES.iter())
        .enumerate()
        .map(|(index, (bullets, title))| ScopeSection {
            number: (index + 1).to_string(),
            title: (*title).to_string(),
            items: non_blank(bullets),
        })
        .collect();

    let reference = quote_reference(today, &draft.client_name);

    let revolut_checkout_url = draft
        .payment_link
        .as_ref()
        .filter(|link| link.contains("revolut.com"))
        .cloned();

    Ok(Quote {
        id: None,
        reference: reference.clone(),
        client_id: draft.client_id.clone(),
        lead_id: draft.lead_id.clone(),
        quote_data: QuoteData {
            reference,
            title: draft.title.clone(),
            client_name: draft.client_name.clone(),
            client_email: draft.client_email.clone(),
            duration: draft.duration.clone(),
            project_overview: draft.project_overview.clone(),
            objectives: non_blank(&draft.objectives),
            scope,
        },
        pricing: pricing_snapshot,
        payment_link: draft.payment_link.clone(),
        revolut_order_id: draft.revolut_order_id.clone(),
        revolut_checkout_url,
        status: None,
        view_count: 0,
        last_viewed_at: None,
        created_at: None,
        updated_at: None,
    })
}

#[async_trait]
impl QuoteService for QuoteServiceImpl {
    #[instrument(skip(self, draft), fields(client_name = %draft.client_name))]
    async fn create_quote(&self, draft: QuoteDraft) -> Result<Quote, ServiceError> {
        info!("Persisting quote draft");
        let quote = assemble_quote(&draft, chrono::Utc::now().date_naive())?;
        let res = self.quote_repo.create(quote).await;
        match &res {
            Ok(created) => info!(reference = %created.reference, "Quote persisted successfully"),
            Err(e) => error!("Failed to persist quote: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn get_quote(&self, id: ObjectId) -> Result<Quote, ServiceError> {
        let res = self.quote_repo.get_by_id(id).await;
        if let Err(e) = &res {
            error!("Failed to fetch quote: {e}");
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(page, limit))]
    async fn list_quotes(&self, page: u32, limit: u32) -> Result<Vec<Quote>, ServiceError> {
        let res = self.quote_repo.list(page, limit).await;
        match &res {
            Ok(quotes) => info!("Fetched {} quotes", quotes.len()),
            Err(e) => error!("Failed to list quotes: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id, status))]
    async fn update_quote_status(&self, id: ObjectId, status: &str) -> Result<Quote, ServiceError> {
        info!("Updating quote status");
        let res = self.quote_repo.update_status(id, status).await;
        match &res {
            Ok(_) => info!("Quote status updated successfully"),
            Err(e) => error!("Failed to update quote status: {e}"),
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn record_quote_view(&self, id: ObjectId) -> Result<Quote, ServiceError> {
        let res = self.quote_repo.record_view(id).await;
        if let Err(e) = &res {
            error!("Failed to record quote view: {e}");
        }
        res.map_err(ServiceError::from)
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn delete_quote(&self, id: ObjectId) -> Result<(), ServiceError> {
        info!("Deleting quote");
        let res = self.quote_repo.delete(id).await;
        match &res {
            Ok(_) => info!("Quote deleted successfully"),
            Err(e) => error!("Failed to delete quote: {e}"),
        }
        res.map_err(ServiceError::from)
    }
}
