//! ExpenseService - expense records and their cross-entity references.

use std::sync::Arc;

use super::path_id;
use crate::application::{IntegrityChecker, ServiceError};
use crate::domain::expense::{Expense, ExpenseDraft, ExpenseInput};
use crate::domain::foundation::{EntityId, ExpenseId, PageRequest, Timestamp};
use crate::domain::validation;
use crate::ports::{ExpenseFilter, ExpenseRepository};

#[derive(Debug, Clone, Default)]
pub struct CreateExpenseCommand {
    pub fields: ExpenseInput,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateExpenseCommand {
    pub id: i64,
    pub fields: ExpenseInput,
}

/// Listing parameters as received. Scalar filters `<= 0` and empty date
/// strings are ignored.
#[derive(Debug, Clone, Default)]
pub struct ListExpensesQuery {
    pub skip: i64,
    pub limit: i64,
    pub category_id: i64,
    pub subcategory_id: i64,
    pub payee_id: i64,
    pub account_id: i64,
    pub start_date: String,
    pub end_date: String,
}

impl ListExpensesQuery {
    /// Builds the storage filter, parsing the date bounds.
    pub fn filter(&self) -> Result<ExpenseFilter, ServiceError> {
        Ok(ExpenseFilter {
            category: validation::filter_id(self.category_id),
            subcategory: validation::filter_id(self.subcategory_id),
            payee: validation::filter_id(self.payee_id),
            account: validation::filter_id(self.account_id),
            start: validation::range_start("start_date", &self.start_date)?,
            end: validation::range_end("end_date", &self.end_date)?,
        })
    }
}

pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepository>,
    integrity: Arc<IntegrityChecker>,
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepository>, integrity: Arc<IntegrityChecker>) -> Self {
        Self {
            repository,
            integrity,
        }
    }

    pub async fn create(&self, cmd: CreateExpenseCommand) -> Result<Expense, ServiceError> {
        tracing::info!(
            amount = cmd.fields.amount,
            category_id = cmd.fields.category_id,
            payee_id = cmd.fields.payee_id,
            "creating expense"
        );

        let draft = ExpenseDraft::new(&cmd.fields)?;
        self.check_references(&draft).await?;

        let expense = self.repository.create(&draft, Timestamp::now()).await?;
        tracing::info!(id = %expense.id, amount = expense.amount, "expense created");
        Ok(expense)
    }

    pub async fn get(&self, id: i64) -> Result<Expense, ServiceError> {
        let id: ExpenseId = path_id(id)?;
        self.fetch(id).await
    }

    /// Matching expenses by date then creation time, newest first.
    pub async fn list(&self, query: ListExpensesQuery) -> Result<Vec<Expense>, ServiceError> {
        let page = PageRequest::bounded(query.skip, query.limit);
        let filter = query.filter()?;
        tracing::info!(skip = page.skip(), limit = page.limit(), filter = ?filter, "listing expenses");

        let expenses = self.repository.list(page, &filter).await?;
        tracing::debug!(count = expenses.len(), "expenses retrieved");
        Ok(expenses)
    }

    pub async fn update(&self, cmd: UpdateExpenseCommand) -> Result<Expense, ServiceError> {
        let id: ExpenseId = path_id(cmd.id)?;
        let existing = self.fetch(id).await?;

        if cmd.fields.is_empty() {
            return Err(ServiceError::NoUpdatedData);
        }

        let draft = ExpenseDraft::new(&cmd.fields)?;
        self.check_references(&draft).await?;

        if existing.matches(&draft) {
            return Err(ServiceError::NoUpdatedData);
        }

        tracing::info!(id = %id, amount = draft.amount, "updating expense");
        let updated = existing.with_changes(draft, Timestamp::now());
        Ok(self.repository.update(&updated).await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let id: ExpenseId = path_id(id)?;
        self.fetch(id).await?;

        tracing::info!(id = %id, "deleting expense");
        self.repository.delete(&id).await?;
        Ok(())
    }

    async fn fetch(&self, id: ExpenseId) -> Result<Expense, ServiceError> {
        self.repository
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::not_found("expense", id.as_i64()))
    }

    /// Category, then subcategory membership, then payee, then account.
    async fn check_references(&self, draft: &ExpenseDraft) -> Result<(), ServiceError> {
        self.integrity
            .require_category("category_id", draft.category_id)
            .await?;
        if let Some(subcategory) = draft.subcategory_id {
            self.integrity
                .require_subcategory_of("subcategory_id", subcategory, draft.category_id)
                .await?;
        }
        self.integrity.require_person("payee_id", draft.payee_id).await?;
        self.integrity
            .require_account("account_id", draft.account_id)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::services;
    use crate::application::{
        CreateAccountCommand, CreateExpenseCategoryCommand, CreateExpenseSubCategoryCommand,
        CreatePersonCommand, Services,
    };

    /// Ann (1), Checking (1), Food (1) with Snacks (1), Travel (2) with Flights (2).
    async fn seeded() -> Services {
        let (services, _) = services();
        services
            .persons
            .create(CreatePersonCommand {
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
            })
            .await
            .unwrap();
        services
            .accounts
            .create(CreateAccountCommand {
                name: "Checking".to_string(),
                currency: "USD".to_string(),
                account_type: "checking".to_string(),
                initial_balance: 0.0,
                primary_owner_id: 1,
                second_owner_id: None,
            })
            .await
            .unwrap();
        for (category, sub) in [("Food", "Snacks"), ("Travel", "Flights")] {
            let created = services
                .categories
                .create(CreateExpenseCategoryCommand {
                    name: category.to_string(),
                })
                .await
                .unwrap();
            services
                .subcategories
                .create(CreateExpenseSubCategoryCommand {
                    name: sub.to_string(),
                    expense_category_id: created.id.as_i64(),
                })
                .await
                .unwrap();
        }
        services
    }

    fn lunch(date: &str) -> ExpenseInput {
        ExpenseInput {
            amount: 12.5,
            category_id: 1,
            subcategory_id: Some(1),
            date: date.to_string(),
            payee_id: 1,
            account_id: 1,
            notes: " lunch ".to_string(),
        }
    }

    async fn create(services: &Services, fields: ExpenseInput) -> Result<Expense, ServiceError> {
        services.expenses.create(CreateExpenseCommand { fields }).await
    }

    #[tokio::test]
    async fn create_with_valid_references_succeeds() {
        let services = seeded().await;
        let expense = create(&services, lunch("2024-06-01")).await.unwrap();
        assert_eq!(expense.id.as_i64(), 1);
        assert_eq!(expense.notes, "lunch");
    }

    #[tokio::test]
    async fn round_trip_preserves_fields() {
        let services = seeded().await;
        let created = create(&services, lunch("2024-06-01")).await.unwrap();
        let fetched = services.expenses.get(created.id.as_i64()).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn subcategory_from_other_category_is_invalid() {
        let services = seeded().await;
        let fields = ExpenseInput {
            subcategory_id: Some(2),
            ..lunch("2024-06-01")
        };
        assert!(matches!(
            create(&services, fields).await,
            Err(ServiceError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn missing_references_are_not_found_and_nothing_is_stored() {
        let services = seeded().await;
        let cases = [
            ExpenseInput { category_id: 9, subcategory_id: None, ..lunch("2024-06-01") },
            ExpenseInput { subcategory_id: Some(9), ..lunch("2024-06-01") },
            ExpenseInput { payee_id: 9, ..lunch("2024-06-01") },
            ExpenseInput { account_id: 9, ..lunch("2024-06-01") },
        ];
        for fields in cases {
            assert!(matches!(
                create(&services, fields).await,
                Err(ServiceError::DataNotFound(_))
            ));
        }
        let stored = services.expenses.list(ListExpensesQuery::default()).await.unwrap();
        assert!(stored.is_empty());
    }

    #[tokio::test]
    async fn invalid_fields_are_rejected() {
        let services = seeded().await;
        let negative = ExpenseInput { amount: -5.0, ..lunch("2024-06-01") };
        let bad_date = lunch("2024/06/01");
        for fields in [negative, bad_date] {
            assert!(matches!(
                create(&services, fields).await,
                Err(ServiceError::InvalidInput(_))
            ));
        }
    }

    #[tokio::test]
    async fn update_identical_is_no_op() {
        let services = seeded().await;
        let created = create(&services, lunch("2024-06-01")).await.unwrap();

        let err = services
            .expenses
            .update(UpdateExpenseCommand {
                id: created.id.as_i64(),
                fields: lunch("2024-06-01"),
            })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NoUpdatedData);
        assert_eq!(services.expenses.get(1).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_empty_request_is_no_op() {
        let services = seeded().await;
        create(&services, lunch("2024-06-01")).await.unwrap();
        let err = services
            .expenses
            .update(UpdateExpenseCommand {
                id: 1,
                fields: ExpenseInput::default(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NoUpdatedData);
    }

    #[tokio::test]
    async fn update_with_missing_references_leaves_record_unchanged() {
        let services = seeded().await;
        let created = create(&services, lunch("2024-06-01")).await.unwrap();

        let cases = [
            ExpenseInput { category_id: 9, subcategory_id: None, ..lunch("2024-06-02") },
            ExpenseInput { subcategory_id: Some(9), ..lunch("2024-06-02") },
            ExpenseInput { payee_id: 9, ..lunch("2024-06-02") },
            ExpenseInput { account_id: 9, ..lunch("2024-06-02") },
        ];
        for fields in cases {
            let err = services
                .expenses
                .update(UpdateExpenseCommand { id: 1, fields })
                .await
                .unwrap_err();
            assert!(matches!(err, ServiceError::DataNotFound(_)));
        }
        assert_eq!(services.expenses.get(1).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_with_subcategory_of_other_category_is_invalid() {
        let services = seeded().await;
        let created = create(&services, lunch("2024-06-01")).await.unwrap();

        let err = services
            .expenses
            .update(UpdateExpenseCommand {
                id: 1,
                fields: ExpenseInput { subcategory_id: Some(2), ..lunch("2024-06-01") },
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
        assert_eq!(services.expenses.get(1).await.unwrap(), created);
    }

    #[tokio::test]
    async fn update_with_blank_text_only_is_no_op() {
        let services = seeded().await;
        create(&services, lunch("2024-06-01")).await.unwrap();
        let err = services
            .expenses
            .update(UpdateExpenseCommand {
                id: 1,
                fields: ExpenseInput { notes: "   ".to_string(), ..Default::default() },
            })
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NoUpdatedData);
    }

    #[tokio::test]
    async fn update_changes_amount() {
        let services = seeded().await;
        create(&services, lunch("2024-06-01")).await.unwrap();
        let updated = services
            .expenses
            .update(UpdateExpenseCommand {
                id: 1,
                fields: ExpenseInput { amount: 20.0, ..lunch("2024-06-01") },
            })
            .await
            .unwrap();
        assert_eq!(updated.amount, 20.0);
    }

    #[tokio::test]
    async fn list_orders_by_date_desc_and_filters() {
        let services = seeded().await;
        create(&services, lunch("2024-05-01")).await.unwrap();
        create(&services, lunch("2024-05-03")).await.unwrap();
        create(
            &services,
            ExpenseInput {
                category_id: 2,
                subcategory_id: Some(2),
                ..lunch("2024-05-02")
            },
        )
        .await
        .unwrap();

        let all = services.expenses.list(ListExpensesQuery::default()).await.unwrap();
        let ids: Vec<_> = all.iter().map(|e| e.id.as_i64()).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let food = services
            .expenses
            .list(ListExpensesQuery { category_id: 1, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(food.len(), 2);

        let may_first = services
            .expenses
            .list(ListExpensesQuery {
                start_date: "2024-05-01".to_string(),
                end_date: "2024-05-01".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(may_first.len(), 1);
        assert_eq!(may_first[0].id.as_i64(), 1);
    }

    #[tokio::test]
    async fn list_rejects_malformed_date_bounds() {
        let services = seeded().await;
        let err = services
            .expenses
            .list(ListExpensesQuery {
                end_date: "yesterday".to_string(),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn list_limit_is_bounded() {
        let services = seeded().await;
        for day in 1..=12 {
            create(&services, lunch(&format!("2024-05-{:02}", day))).await.unwrap();
        }
        let out_of_range = services
            .expenses
            .list(ListExpensesQuery { limit: 101, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(out_of_range.len(), 10);

        let small = services
            .expenses
            .list(ListExpensesQuery { limit: 3, skip: 10, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(small.len(), 2);
    }

    #[tokio::test]
    async fn referenced_account_and_subcategory_cannot_be_deleted() {
        let services = seeded().await;
        create(&services, lunch("2024-06-01")).await.unwrap();

        assert!(matches!(
            services.accounts.delete(1).await,
            Err(ServiceError::ConflictingData(_))
        ));
        assert!(matches!(
            services.subcategories.delete(1).await,
            Err(ServiceError::ConflictingData(_))
        ));

        services.expenses.delete(1).await.unwrap();
        services.accounts.delete(1).await.unwrap();
        services.persons.delete(1).await.unwrap();
    }
}
