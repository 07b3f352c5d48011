//! One in-memory copy of a backend collection, kept in step with the
//! mutations made through it.
//!
//! Every resource page runs the same cycle: fetch on mount, then patch the
//! local list after each successful create, update or delete without
//! re-fetching. [`ResourceApi`] describes the four operations for one entity
//! and [`ResourceState`] is the reducer all pages share. Each reduction also
//! yields the transient [`Notice`] the user sees.
//!
//! There is no conflict handling: when two requests race, whichever response
//! is applied last wins.

use async_trait::async_trait;
use model::{
    Account, AccountDraft, Category, CategoryDraft, CategoryType, Id, Investment, InvestmentDraft,
    ScheduledTransaction, ScheduledTransactionDraft, Transaction, TransactionDraft,
};
use tracing::{debug, warn};
use validator::Validate;

use crate::api::{ApiClient, Transport};
use crate::error::ApiError;
use crate::format::DateRange;

/// An entity held in a collection.
pub trait Resource: Clone {
    /// Human label used in notifications, e.g. "Account".
    const LABEL: &'static str;

    fn id(&self) -> Id;
}

impl Resource for Account {
    const LABEL: &'static str = "Account";
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for Category {
    const LABEL: &'static str = "Category";
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for Transaction {
    const LABEL: &'static str = "Transaction";
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for ScheduledTransaction {
    const LABEL: &'static str = "Scheduled transaction";
    fn id(&self) -> Id {
        self.id
    }
}

impl Resource for Investment {
    const LABEL: &'static str = "Investment";
    fn id(&self) -> Id {
        self.id
    }
}

/// The four operations a collection needs for one entity.
#[async_trait(?Send)]
pub trait ResourceApi {
    type Item: Resource;
    type Draft: Validate;

    async fn fetch_all(&self) -> Result<Vec<Self::Item>, ApiError>;
    async fn create(&self, draft: &Self::Draft) -> Result<Self::Item, ApiError>;
    async fn update(&self, id: Id, draft: &Self::Draft) -> Result<Self::Item, ApiError>;
    async fn delete(&self, id: Id) -> Result<(), ApiError>;
}

/// What a mutation was, for the notification wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
    /// A scheduled transaction was executed.
    Execute,
    /// An investment's current value was recorded.
    Revalue,
}

impl Action {
    fn success_message(self, label: &str) -> String {
        match self {
            Action::Create => format!("{label} added successfully"),
            Action::Update => format!("{label} updated successfully"),
            Action::Delete => format!("{label} deleted successfully"),
            Action::Execute => "Transaction executed successfully".to_string(),
            Action::Revalue => format!("{label} value updated successfully"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceEvent<T> {
    Refreshing,
    Refreshed(Vec<T>),
    RefreshFailed(ApiError),
    Created(T),
    Updated { item: T, action: Action },
    Removed(Id),
    Rejected { action: Action, error: ApiError },
}

impl<T: Resource> ResourceEvent<T> {
    pub fn from_refresh(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => ResourceEvent::Refreshed(items),
            Err(error) => ResourceEvent::RefreshFailed(error),
        }
    }

    pub fn from_create(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(item) => ResourceEvent::Created(item),
            Err(error) => ResourceEvent::Rejected {
                action: Action::Create,
                error,
            },
        }
    }

    pub fn from_delete(id: Id, result: Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => ResourceEvent::Removed(id),
            Err(error) => ResourceEvent::Rejected {
                action: Action::Delete,
                error,
            },
        }
    }

    /// Event for an update-like call, including resource-specific actions
    /// such as executing a schedule.
    pub fn from_update(result: Result<T, ApiError>, action: Action) -> Self {
        match result {
            Ok(item) => ResourceEvent::Updated { item, action },
            Err(error) => ResourceEvent::Rejected { action, error },
        }
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            ResourceEvent::Refreshing | ResourceEvent::Refreshed(_) => None,
            // Field errors are shown inline on the form.
            ResourceEvent::Rejected {
                error: ApiError::Validation { .. },
                ..
            } => None,
            ResourceEvent::RefreshFailed(error) | ResourceEvent::Rejected { error, .. } => {
                Some(Notice::error(error.message()))
            }
            ResourceEvent::Created(_) => {
                Some(Notice::success(Action::Create.success_message(T::LABEL)))
            }
            ResourceEvent::Updated { action, .. } => {
                Some(Notice::success(action.success_message(T::LABEL)))
            }
            ResourceEvent::Removed(_) => {
                Some(Notice::success(Action::Delete.success_message(T::LABEL)))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    /// Starts loading: pages fetch as soon as they mount.
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl<T: Resource> ResourceState<T> {
    pub fn find(&self, id: Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Applies `event` and returns the notice to show for it.
    pub fn apply(&mut self, event: ResourceEvent<T>) -> Option<Notice> {
        let notice = event.notice();
        match event {
            ResourceEvent::Refreshing => self.loading = true,
            ResourceEvent::Refreshed(items) => {
                self.items = items;
                self.loading = false;
                self.error = None;
            }
            ResourceEvent::RefreshFailed(error) => {
                self.loading = false;
                self.error = Some(error.message().to_string());
            }
            ResourceEvent::Created(item) => self.items.push(item),
            ResourceEvent::Updated { item, .. } => {
                match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
                    Some(existing) => *existing = item,
                    None => debug!("{} {} not in local list; ignoring update", T::LABEL, item.id()),
                }
            }
            ResourceEvent::Removed(id) => self.items.retain(|item| item.id() != id),
            ResourceEvent::Rejected { action, error } => {
                warn!("{} {:?} rejected: {}", T::LABEL, action, error);
            }
        }
        notice
    }
}

/// Creates `draft` unless it fails validation, in which case nothing is sent.
pub async fn create_item<A: ResourceApi>(api: &A, draft: &A::Draft) -> Result<A::Item, ApiError> {
    model::check(draft).map_err(ApiError::validation)?;
    api.create(draft).await
}

/// Updates `id` with `draft` unless the draft fails validation.
pub async fn update_item<A: ResourceApi>(
    api: &A,
    id: Id,
    draft: &A::Draft,
) -> Result<A::Item, ApiError> {
    model::check(draft).map_err(ApiError::validation)?;
    api.update(id, draft).await
}

/// Drives an api and its state outside of any UI framework.
pub struct ResourceCollection<A: ResourceApi> {
    api: A,
    state: ResourceState<A::Item>,
    notices: Vec<Notice>,
}

impl<A: ResourceApi> ResourceCollection<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ResourceState::default(),
            notices: Vec::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &ResourceState<A::Item> {
        &self.state
    }

    pub fn items(&self) -> &[A::Item] {
        &self.state.items
    }

    /// Notices produced since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn dispatch(&mut self, event: ResourceEvent<A::Item>) {
        if let Some(notice) = self.state.apply(event) {
            self.notices.push(notice);
        }
    }

    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        self.dispatch(ResourceEvent::Refreshing);
        let result = self.api.fetch_all().await;
        let outcome = result.as_ref().map(|_| ()).map_err(|e| e.clone());
        self.dispatch(ResourceEvent::from_refresh(result));
        outcome
    }

    /// The item or error is handed back so a form can stay open on failure.
    pub async fn create(&mut self, draft: &A::Draft) -> Result<A::Item, ApiError> {
        let result = create_item(&self.api, draft).await;
        self.dispatch(ResourceEvent::from_create(result.clone()));
        result
    }

    pub async fn update(&mut self, id: Id, draft: &A::Draft) -> Result<A::Item, ApiError> {
        let result = update_item(&self.api, id, draft).await;
        self.dispatch(ResourceEvent::from_update(result.clone(), Action::Update));
        result
    }

    pub async fn remove(&mut self, id: Id) -> Result<(), ApiError> {
        let result = self.api.delete(id).await;
        self.dispatch(ResourceEvent::from_delete(id, result.clone()));
        result
    }
}

/// Accounts of one owner, or all accounts when no owner is known.
#[derive(Clone, PartialEq, Debug)]
pub struct Accounts<T> {
    pub client: ApiClient<T>,
    pub owner: Option<Id>,
}

#[async_trait(?Send)]
impl<T: Transport> ResourceApi for Accounts<T> {
    type Item = Account;
    type Draft = AccountDraft;

    async fn fetch_all(&self) -> Result<Vec<Account>, ApiError> {
        match self.owner {
            Some(user_id) => self.client.list_accounts_by_user(user_id).await,
            None => self.client.list_accounts().await,
        }
    }

    async fn create(&self, draft: &AccountDraft) -> Result<Account, ApiError> {
        self.client.create_account(draft).await
    }

    async fn update(&self, id: Id, draft: &AccountDraft) -> Result<Account, ApiError> {
        self.client.update_account(id, draft).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_account(id).await
    }
}

/// Categories of one type, or all of them.
#[derive(Clone, PartialEq, Debug)]
pub struct Categories<T> {
    pub client: ApiClient<T>,
    pub kind: Option<CategoryType>,
}

#[async_trait(?Send)]
impl<T: Transport> ResourceApi for Categories<T> {
    type Item = Category;
    type Draft = CategoryDraft;

    async fn fetch_all(&self) -> Result<Vec<Category>, ApiError> {
        match self.kind {
            Some(kind) => self.client.list_categories_by_type(kind).await,
            None => self.client.list_categories().await,
        }
    }

    async fn create(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.client.create_category(draft).await
    }

    async fn update(&self, id: Id, draft: &CategoryDraft) -> Result<Category, ApiError> {
        self.client.update_category(id, draft).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_category(id).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionScope {
    #[default]
    All,
    Account(Id),
    DateRange(DateRange),
    UserDateRange { user_id: Id, range: DateRange },
}

#[derive(Clone, PartialEq, Debug)]
pub struct Transactions<T> {
    pub client: ApiClient<T>,
    pub scope: TransactionScope,
}

#[async_trait(?Send)]
impl<T: Transport> ResourceApi for Transactions<T> {
    type Item = Transaction;
    type Draft = TransactionDraft;

    async fn fetch_all(&self) -> Result<Vec<Transaction>, ApiError> {
        match self.scope {
            TransactionScope::All => self.client.list_transactions().await,
            TransactionScope::Account(account_id) => {
                self.client.list_transactions_by_account(account_id).await
            }
            TransactionScope::DateRange(range) => {
                self.client
                    .list_transactions_by_date_range(range.start, range.end)
                    .await
            }
            TransactionScope::UserDateRange { user_id, range } => {
                self.client
                    .list_user_transactions_in_range(user_id, range.start, range.end)
                    .await
            }
        }
    }

    async fn create(&self, draft: &TransactionDraft) -> Result<Transaction, ApiError> {
        self.client.create_transaction(draft).await
    }

    async fn update(&self, id: Id, draft: &TransactionDraft) -> Result<Transaction, ApiError> {
        self.client.update_transaction(id, draft).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_transaction(id).await
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct ScheduledTransactions<T> {
    pub client: ApiClient<T>,
    pub owner: Option<Id>,
}

#[async_trait(?Send)]
impl<T: Transport> ResourceApi for ScheduledTransactions<T> {
    type Item = ScheduledTransaction;
    type Draft = ScheduledTransactionDraft;

    async fn fetch_all(&self) -> Result<Vec<ScheduledTransaction>, ApiError> {
        match self.owner {
            Some(user_id) => self.client.list_scheduled_by_user(user_id).await,
            None => self.client.list_scheduled().await,
        }
    }

    async fn create(
        &self,
        draft: &ScheduledTransactionDraft,
    ) -> Result<ScheduledTransaction, ApiError> {
        self.client.create_scheduled(draft).await
    }

    async fn update(
        &self,
        id: Id,
        draft: &ScheduledTransactionDraft,
    ) -> Result<ScheduledTransaction, ApiError> {
        self.client.update_scheduled(id, draft).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_scheduled(id).await
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Investments<T> {
    pub client: ApiClient<T>,
    pub owner: Option<Id>,
}

#[async_trait(?Send)]
impl<T: Transport> ResourceApi for Investments<T> {
    type Item = Investment;
    type Draft = InvestmentDraft;

    async fn fetch_all(&self) -> Result<Vec<Investment>, ApiError> {
        match self.owner {
            Some(user_id) => self.client.list_investments_by_user(user_id).await,
            None => self.client.list_investments().await,
        }
    }

    async fn create(&self, draft: &InvestmentDraft) -> Result<Investment, ApiError> {
        self.client.create_investment(draft).await
    }

    async fn update(&self, id: Id, draft: &InvestmentDraft) -> Result<Investment, ApiError> {
        self.client.update_investment(id, draft).await
    }

    async fn delete(&self, id: Id) -> Result<(), ApiError> {
        self.client.delete_investment(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use model::AccountType;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn accounts() -> ResourceCollection<Accounts<MockTransport>> {
        ResourceCollection::new(Accounts {
            client: ApiClient::new(MockTransport::new()),
            owner: Some(7),
        })
    }

    fn transport(collection: &ResourceCollection<Accounts<MockTransport>>) -> &MockTransport {
        collection.api().client.transport()
    }

    fn draft(name: &str) -> AccountDraft {
        AccountDraft {
            name: name.to_string(),
            account_type: AccountType::Savings,
            balance: Some(dec!(100)),
            user_id: Some(7),
        }
    }

    async fn loaded() -> ResourceCollection<Accounts<MockTransport>> {
        let mut collection = accounts();
        transport(&collection).respond_json(
            200,
            json!([
                {"id": 1, "name": "Wallet", "accountType": "CASH", "balance": 50},
                {"id": 2, "name": "Savings", "accountType": "SAVINGS", "balance": 1000}
            ]),
        );
        collection.refresh().await.unwrap();
        collection
    }

    #[tokio::test]
    async fn test_refresh_by_owner() {
        let mut collection = loaded().await;
        assert!(!collection.state().loading);
        assert_eq!(collection.items().len(), 2);
        assert_eq!(transport(&collection).last_request().path, "/accounts/user/7");
        assert!(collection.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_items() {
        let mut collection = loaded().await;
        transport(&collection).fail_next("offline");

        let err = collection.refresh().await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch user accounts");
        assert_eq!(collection.items().len(), 2);
        assert_eq!(collection.state().error.as_deref(), Some("Failed to fetch user accounts"));
        assert_eq!(
            collection.take_notices(),
            vec![Notice::error("Failed to fetch user accounts")]
        );
    }

    #[tokio::test]
    async fn test_create_appends() {
        let mut collection = loaded().await;
        transport(&collection).respond_json(
            201,
            json!({"id": 3, "name": "Card", "accountType": "CREDIT", "balance": 0}),
        );

        let created = collection.create(&draft("Card")).await.unwrap();
        assert_eq!(created.id, 3);
        let ids: Vec<_> = collection.items().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(
            collection.take_notices(),
            vec![Notice::success("Account added successfully")]
        );
    }

    #[tokio::test]
    async fn test_failed_create_leaves_list_unchanged() {
        let mut collection = loaded().await;
        let before = collection.items().to_vec();

        transport(&collection).respond_json(400, json!({"message": "Account name already exists"}));
        let err = collection.create(&draft("Wallet")).await.unwrap_err();
        assert_eq!(err.message(), "Account name already exists");
        assert_eq!(collection.items(), before.as_slice());

        transport(&collection).respond(500, "");
        let err = collection.create(&draft("Wallet")).await.unwrap_err();
        assert_eq!(err.message(), "Failed to create account");
        assert_eq!(collection.items(), before.as_slice());

        let notices = collection.take_notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.level == NoticeLevel::Error));
    }

    #[tokio::test]
    async fn test_invalid_draft_is_not_sent() {
        let mut collection = loaded().await;
        let sent = transport(&collection).requests().len();

        let err = collection.create(&draft("")).await.unwrap_err();
        assert_eq!(err.message(), "Account name is required");
        assert!(err.field_errors().is_some());
        assert_eq!(transport(&collection).requests().len(), sent);
        assert_eq!(collection.items().len(), 2);
        assert!(collection.take_notices().is_empty());

        let err = collection.update(1, &draft("")).await.unwrap_err();
        assert!(err.field_errors().is_some());
        assert!(collection.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_update_and_remove() {
        let mut collection = loaded().await;
        transport(&collection).respond_json(
            200,
            json!({"id": 1, "name": "Pocket", "accountType": "CASH", "balance": 75}),
        );
        collection.update(1, &draft("Pocket")).await.unwrap();
        assert_eq!(collection.state().find(1).unwrap().name, "Pocket");
        assert_eq!(collection.items()[0].id, 1);

        transport(&collection).respond(204, "");
        collection.remove(2).await.unwrap();
        assert_eq!(collection.items().len(), 1);

        assert_eq!(
            collection.take_notices(),
            vec![
                Notice::success("Account updated successfully"),
                Notice::success("Account deleted successfully"),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_item() {
        let mut collection = loaded().await;
        transport(&collection).respond(409, r#"{"message":"Account has transactions"}"#);
        assert!(collection.remove(1).await.is_err());
        assert_eq!(collection.items().len(), 2);
    }

    #[test]
    fn test_resource_specific_notices() {
        let event: ResourceEvent<ScheduledTransaction> = ResourceEvent::Rejected {
            action: Action::Execute,
            error: ApiError::transport("Failed to execute scheduled transaction", "offline"),
        };
        assert_eq!(
            event.notice(),
            Some(Notice::error("Failed to execute scheduled transaction"))
        );
        assert_eq!(
            Action::Execute.success_message(ScheduledTransaction::LABEL),
            "Transaction executed successfully"
        );
        assert_eq!(
            Action::Revalue.success_message(Investment::LABEL),
            "Investment value updated successfully"
        );
    }
}
