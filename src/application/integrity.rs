//! Cross-entity existence checks and the delete policy.
//!
//! Write operations call the `require_*` methods before persisting so that
//! every reference resolves at write time. Delete operations call the
//! `ensure_*_unreferenced` guards, which are no-ops under
//! [`DeletePolicy::AllowOrphans`].

use crate::application::ServiceError;
use crate::domain::foundation::{
    AccountId, DeletePolicy, EntityId, ExpenseCategoryId, ExpenseSubCategoryId, PersonId,
};
use crate::domain::{Account, ExpenseCategory, ExpenseSubCategory, Person};
use crate::ports::{ExpenseReference, Repositories};

pub struct IntegrityChecker {
    repos: Repositories,
    policy: DeletePolicy,
}

impl IntegrityChecker {
    pub fn new(repos: Repositories, policy: DeletePolicy) -> Self {
        Self { repos, policy }
    }

    /// Person named by `field` must exist.
    pub async fn require_person(&self, field: &str, id: PersonId) -> Result<Person, ServiceError> {
        match self.repos.persons.find_by_id(&id).await? {
            Some(person) => Ok(person),
            None => Err(missing(field, "person", id)),
        }
    }

    pub async fn require_account(&self, field: &str, id: AccountId) -> Result<Account, ServiceError> {
        match self.repos.accounts.find_by_id(&id).await? {
            Some(account) => Ok(account),
            None => Err(missing(field, "account", id)),
        }
    }

    pub async fn require_category(
        &self,
        field: &str,
        id: ExpenseCategoryId,
    ) -> Result<ExpenseCategory, ServiceError> {
        match self.repos.categories.find_by_id(&id).await? {
            Some(category) => Ok(category),
            None => Err(missing(field, "expense category", id)),
        }
    }

    /// Subcategory must exist and sit under `category`.
    ///
    /// A subcategory of some other category is a malformed request, not a
    /// missing row, so it fails with `InvalidInput`.
    pub async fn require_subcategory_of(
        &self,
        field: &str,
        id: ExpenseSubCategoryId,
        category: ExpenseCategoryId,
    ) -> Result<ExpenseSubCategory, ServiceError> {
        let subcategory = match self.repos.subcategories.find_by_id(&id).await? {
            Some(subcategory) => subcategory,
            None => return Err(missing(field, "expense subcategory", id)),
        };

        if !subcategory.belongs_to(category) {
            tracing::warn!(
                subcategory_id = %id,
                category_id = %category,
                subcategory_category_id = %subcategory.expense_category_id,
                "subcategory does not belong to category"
            );
            return Err(ServiceError::invalid_input(format!(
                "subcategory {} does not belong to category {}",
                id, category
            )));
        }

        Ok(subcategory)
    }

    /// A subcategory already used by expenses keeps its parent category.
    ///
    /// Moving it would leave those expenses pointing at a subcategory outside
    /// their own category. Applies under every delete policy.
    pub async fn ensure_subcategory_can_move(
        &self,
        id: ExpenseSubCategoryId,
    ) -> Result<(), ServiceError> {
        let expenses = self
            .repos
            .expenses
            .count_referencing(ExpenseReference::SubCategory(id))
            .await?;
        if expenses == 0 {
            return Ok(());
        }
        tracing::warn!(id = id.as_i64(), references = expenses, "refusing to move referenced subcategory");
        Err(ServiceError::ConflictingData(format!(
            "expense subcategory {} is used by {} expense(s) and cannot change category",
            id, expenses
        )))
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Delete guards
    // ════════════════════════════════════════════════════════════════════════════

    pub async fn ensure_person_unreferenced(&self, id: PersonId) -> Result<(), ServiceError> {
        if !self.policy.checks_references() {
            return Ok(());
        }
        let accounts = self.repos.accounts.count_by_owner(&id).await?;
        let expenses = self
            .repos
            .expenses
            .count_referencing(ExpenseReference::Payee(id))
            .await?;
        referenced("person", id, accounts + expenses)
    }

    pub async fn ensure_account_unreferenced(&self, id: AccountId) -> Result<(), ServiceError> {
        if !self.policy.checks_references() {
            return Ok(());
        }
        let expenses = self
            .repos
            .expenses
            .count_referencing(ExpenseReference::Account(id))
            .await?;
        referenced("account", id, expenses)
    }

    pub async fn ensure_category_unreferenced(&self, id: ExpenseCategoryId) -> Result<(), ServiceError> {
        if !self.policy.checks_references() {
            return Ok(());
        }
        let subcategories = self.repos.subcategories.count_by_category(&id).await?;
        let expenses = self
            .repos
            .expenses
            .count_referencing(ExpenseReference::Category(id))
            .await?;
        referenced("expense category", id, subcategories + expenses)
    }

    pub async fn ensure_subcategory_unreferenced(
        &self,
        id: ExpenseSubCategoryId,
    ) -> Result<(), ServiceError> {
        if !self.policy.checks_references() {
            return Ok(());
        }
        let expenses = self
            .repos
            .expenses
            .count_referencing(ExpenseReference::SubCategory(id))
            .await?;
        referenced("expense subcategory", id, expenses)
    }
}

fn missing(field: &str, entity: &str, id: impl EntityId) -> ServiceError {
    tracing::warn!(field, id = id.as_i64(), "{} not found", entity);
    ServiceError::DataNotFound(format!("{} references missing {} {}", field, entity, id))
}

fn referenced(entity: &str, id: impl EntityId, count: u64) -> Result<(), ServiceError> {
    if count == 0 {
        return Ok(());
    }
    tracing::warn!(id = id.as_i64(), references = count, "refusing to delete referenced {}", entity);
    Err(ServiceError::ConflictingData(format!(
        "{} {} is still referenced by {} row(s)",
        entity, id, count
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::in_memory_repositories;
    use crate::domain::foundation::Timestamp;
    use crate::domain::{AccountDraft, ExpenseCategoryDraft, ExpenseSubCategoryDraft, PersonDraft};

    async fn seeded(policy: DeletePolicy) -> IntegrityChecker {
        let repos = in_memory_repositories();
        let now = Timestamp::now();
        repos
            .persons
            .create(&PersonDraft::new("Ann", "a@x.com").unwrap(), now)
            .await
            .unwrap();
        repos
            .accounts
            .create(
                &AccountDraft::new("Checking", "USD", "checking", 0.0, 1, None).unwrap(),
                now,
            )
            .await
            .unwrap();
        repos
            .categories
            .create(&ExpenseCategoryDraft::new("Food").unwrap(), now)
            .await
            .unwrap();
        repos
            .categories
            .create(&ExpenseCategoryDraft::new("Travel").unwrap(), now)
            .await
            .unwrap();
        repos
            .subcategories
            .create(&ExpenseSubCategoryDraft::new("Snacks", 1).unwrap(), now)
            .await
            .unwrap();
        IntegrityChecker::new(repos, policy)
    }

    #[tokio::test]
    async fn require_person_finds_existing_row() {
        let checker = seeded(DeletePolicy::default()).await;
        let person = checker
            .require_person("payee_id", PersonId::from_raw(1))
            .await
            .unwrap();
        assert_eq!(person.name, "Ann");
    }

    #[tokio::test]
    async fn require_person_reports_missing_row() {
        let checker = seeded(DeletePolicy::default()).await;
        let err = checker
            .require_person("primary_owner_id", PersonId::from_raw(999))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::DataNotFound(ref m) if m.contains("primary_owner_id")));
    }

    #[tokio::test]
    async fn subcategory_of_other_category_is_invalid_input() {
        let checker = seeded(DeletePolicy::default()).await;
        let err = checker
            .require_subcategory_of(
                "subcategory_id",
                ExpenseSubCategoryId::from_raw(1),
                ExpenseCategoryId::from_raw(2),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn missing_subcategory_is_not_found() {
        let checker = seeded(DeletePolicy::default()).await;
        let err = checker
            .require_subcategory_of(
                "subcategory_id",
                ExpenseSubCategoryId::from_raw(9),
                ExpenseCategoryId::from_raw(1),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::DataNotFound(_)));
    }

    #[tokio::test]
    async fn referenced_rows_are_protected_by_default() {
        let checker = seeded(DeletePolicy::RejectIfReferenced).await;

        let owner = checker.ensure_person_unreferenced(PersonId::from_raw(1)).await;
        assert!(matches!(owner, Err(ServiceError::ConflictingData(_))));

        let parent = checker
            .ensure_category_unreferenced(ExpenseCategoryId::from_raw(1))
            .await;
        assert!(matches!(parent, Err(ServiceError::ConflictingData(_))));

        assert!(checker
            .ensure_category_unreferenced(ExpenseCategoryId::from_raw(2))
            .await
            .is_ok());
        assert!(checker
            .ensure_account_unreferenced(AccountId::from_raw(1))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn allow_orphans_skips_reference_checks() {
        let checker = seeded(DeletePolicy::AllowOrphans).await;
        assert!(checker
            .ensure_person_unreferenced(PersonId::from_raw(1))
            .await
            .is_ok());
    }
}
