//! Budget service
//!
//! Binds the ledger operations to storage and host signalling: every
//! successful change is persisted before it is handed back to the caller.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::host::HostSignal;
use crate::models::{BudgetInput, ExpenseId};
use crate::storage::Storage;

use super::allocator::Allocation;
use super::expense::ExpenseOutcome;
use super::ledger::Ledger;
use super::period;

/// Service for budget lifecycle and expense logging
pub struct BudgetService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    host: &'a dyn HostSignal,
}

/// Result of setting up a new budget
#[derive(Debug, Clone)]
pub struct Initialized {
    pub ledger: Ledger,
    pub allocation: Allocation,
    /// Index of the day to show first
    pub current_index: usize,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage, settings: &'a Settings, host: &'a dyn HostSignal) -> Self {
        Self {
            storage,
            settings,
            host,
        }
    }

    /// Set up a budget for the rest of `today`'s month, replacing any existing one
    pub fn initialize(&self, input: &BudgetInput, today: NaiveDate) -> BudgetResult<Initialized> {
        input
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let range = period::resolve_period(today, input.start_date);
        let (ledger, allocation) = Ledger::initialize(input, range.start_day, range.last_day)?;

        self.persist(&ledger)?;

        info!(
            start_day = range.start_day,
            last_day = range.last_day,
            base_daily = allocation.base_daily.value(),
            "budget initialized"
        );
        self.host.ready();

        let current_index = period::current_day_index(ledger.days(), today);
        Ok(Initialized {
            ledger,
            allocation,
            current_index,
        })
    }

    /// The stored ledger, if a budget has been set up
    pub fn try_ledger(&self) -> BudgetResult<Option<Ledger>> {
        Ok(self.storage.budget.get()?.map(Ledger::from_state))
    }

    /// The stored ledger
    ///
    /// # Errors
    ///
    /// Returns `NotInitialized` if no budget has been set up.
    pub fn ledger(&self) -> BudgetResult<Ledger> {
        self.try_ledger()?.ok_or(BudgetError::NotInitialized)
    }

    /// Log an expense from user input on the day at `day_index`
    ///
    /// A rejected amount comes back in the outcome and leaves storage alone;
    /// only storage failures are returned as `Err`.
    pub fn add_expense(
        &self,
        day_index: usize,
        raw_amount: &str,
        desc: &str,
    ) -> BudgetResult<(Ledger, ExpenseOutcome)> {
        let ledger = self.ledger()?;
        let (ledger, outcome) =
            ledger.add_expense_input(day_index, raw_amount, desc, &self.settings.expense_placeholder);

        if let ExpenseOutcome::Added(id) = outcome {
            self.persist(&ledger)?;
            info!(%id, day_index, "expense logged");
        }

        Ok((ledger, outcome))
    }

    /// Remove an expense from the day at `day_index`
    ///
    /// Returns the updated ledger and whether anything was removed.
    pub fn remove_expense(&self, day_index: usize, id: ExpenseId) -> BudgetResult<(Ledger, bool)> {
        let ledger = self.ledger()?;
        let existed = ledger
            .day(day_index)
            .is_some_and(|d| d.find_expense(id).is_some());

        let ledger = ledger.remove_expense(day_index, id);
        self.persist(&ledger)?;

        if existed {
            info!(%id, day_index, "expense removed");
        } else {
            debug!(%id, day_index, "no matching expense to remove");
        }

        Ok((ledger, existed))
    }

    /// Drop the budget entirely
    ///
    /// Returns whether there was a budget to drop.
    pub fn reset(&self) -> BudgetResult<bool> {
        let cleared = self.storage.budget.clear()?;
        info!(cleared, "budget reset");
        self.host.not_ready();
        Ok(cleared)
    }

    /// Day index to show for `today`
    pub fn current_day_index(&self, ledger: &Ledger, today: NaiveDate) -> usize {
        period::current_day_index(ledger.days(), today)
    }

    fn persist(&self, ledger: &Ledger) -> BudgetResult<()> {
        self.storage.budget.set(ledger.state().clone())?;
        self.storage.budget.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::host::testing::RecordingHost;
    use crate::host::NoHost;
    use crate::models::Amount;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    fn standard_input() -> BudgetInput {
        BudgetInput::new(Amount::new(60000.0), Amount::new(20000.0), None)
    }

    #[test]
    fn test_initialize_persists_and_signals() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let host = RecordingHost::default();
        let service = BudgetService::new(&storage, &settings, &host);

        let init = service.initialize(&standard_input(), june(14)).unwrap();

        assert_eq!(init.ledger.len(), 30);
        assert_eq!(init.current_index, 13);
        assert!(init.allocation.available_for_life.approx_eq(Amount::new(31000.0), 1e-6));
        assert!(storage.paths().budget_file().exists());
        assert_eq!(*host.signals.borrow(), vec!["ready"]);
    }

    #[test]
    fn test_initialize_rejects_bad_input() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let host = RecordingHost::default();
        let service = BudgetService::new(&storage, &settings, &host);

        let input = BudgetInput::new(Amount::zero(), Amount::zero(), None);
        let err = service.initialize(&input, june(1)).unwrap_err();

        assert!(err.is_validation());
        assert!(!storage.paths().budget_file().exists());
        assert!(host.signals.borrow().is_empty());
    }

    #[test]
    fn test_initialize_invalid_period() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BudgetService::new(&storage, &settings, &NoHost);

        // February has no 31st
        let input = BudgetInput::new(
            Amount::new(1000.0),
            Amount::zero(),
            NaiveDate::from_ymd_opt(2025, 1, 31),
        );
        let today = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();
        let err = service.initialize(&input, today).unwrap_err();

        assert!(matches!(err, BudgetError::InvalidPeriod { start_day: 31, last_day: 28 }));
        assert!(service.try_ledger().unwrap().is_none());
    }

    #[test]
    fn test_start_date_in_other_month_falls_back_to_first_index() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BudgetService::new(&storage, &settings, &NoHost);

        let input = BudgetInput::new(
            Amount::new(1000.0),
            Amount::zero(),
            NaiveDate::from_ymd_opt(2025, 5, 20),
        );
        let init = service.initialize(&input, june(3)).unwrap();

        assert_eq!(init.ledger.day(0).unwrap().day, 20);
        assert_eq!(init.current_index, 0);
    }

    #[test]
    fn test_ledger_requires_initialization() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BudgetService::new(&storage, &settings, &NoHost);

        assert_eq!(service.ledger().unwrap_err(), BudgetError::NotInitialized);
        assert!(matches!(
            service.add_expense(0, "10", ""),
            Err(BudgetError::NotInitialized)
        ));
    }

    #[test]
    fn test_add_expense_persists() {
        let (temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BudgetService::new(&storage, &settings, &NoHost);
        service.initialize(&standard_input(), june(1)).unwrap();

        let (ledger, outcome) = service.add_expense(0, "300", "").unwrap();
        assert!(outcome.is_added());
        assert_eq!(ledger.day(0).unwrap().expenses[0].desc, "Expense");

        // A fresh storage sees the same ledger
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reopened = Storage::new(paths).unwrap();
        reopened.load_all().unwrap();
        let service2 = BudgetService::new(&reopened, &settings, &NoHost);
        assert_eq!(service2.ledger().unwrap(), ledger);
    }

    #[test]
    fn test_rejected_expense_does_not_touch_storage() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BudgetService::new(&storage, &settings, &NoHost);
        let init = service.initialize(&standard_input(), june(1)).unwrap();

        let (ledger, outcome) = service.add_expense(0, "abc", "coffee").unwrap();
        assert!(outcome.error().unwrap().is_invalid_amount());
        assert_eq!(ledger, init.ledger);
        assert_eq!(service.ledger().unwrap(), init.ledger);
    }

    #[test]
    fn test_custom_placeholder() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings {
            expense_placeholder: "Misc".into(),
            ..Settings::default()
        };
        let service = BudgetService::new(&storage, &settings, &NoHost);
        service.initialize(&standard_input(), june(1)).unwrap();

        let (ledger, _) = service.add_expense(2, "15.5", "   ").unwrap();
        assert_eq!(ledger.day(2).unwrap().expenses[0].desc, "Misc");
    }

    #[test]
    fn test_remove_expense_round_trip() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BudgetService::new(&storage, &settings, &NoHost);
        let init = service.initialize(&standard_input(), june(1)).unwrap();

        let (_, outcome) = service.add_expense(4, "999.99", "shoes").unwrap();
        let id = outcome.expense_id().unwrap();

        let (ledger, removed) = service.remove_expense(4, id).unwrap();
        assert!(removed);
        assert_eq!(ledger, init.ledger);

        let (_, removed_again) = service.remove_expense(4, id).unwrap();
        assert!(!removed_again);
    }

    #[test]
    fn test_reset() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let host = RecordingHost::default();
        let service = BudgetService::new(&storage, &settings, &host);
        service.initialize(&standard_input(), june(1)).unwrap();

        assert!(service.reset().unwrap());
        assert!(service.try_ledger().unwrap().is_none());
        assert!(!storage.paths().budget_file().exists());
        assert_eq!(*host.signals.borrow(), vec!["ready", "not_ready"]);
    }
}
