//! Programmable mock store for handler tests.
//!
//! Register expected calls (argument matcher, call count, result) before
//! exercising a handler, then [`MockAccountStore::verify`] that every
//! expectation was consumed exactly as declared.
//!
//! ```ignore
//! let store = Arc::new(MockAccountStore::new());
//! store
//!     .expect_get_account(Matcher::Eq(7))
//!     .times(1)
//!     .returning(Err(StoreError::RowNotFound));
//!
//! // ... drive the router ...
//!
//! store.verify();
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::application::ports::{
    AccountStorePort, CreateAccountParams, ListAccountsParams, StoreError,
};
use crate::domain::account::Account;

/// Argument matcher for an expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher<T> {
    /// Matches any argument.
    Any,
    /// Matches an argument equal to the given value.
    Eq(T),
}

impl<T: PartialEq> Matcher<T> {
    fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Eq(expected) => expected == value,
        }
    }
}

/// A call received by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `create_account` call.
    CreateAccount(CreateAccountParams),
    /// `get_account` call.
    GetAccount(i64),
    /// `list_accounts` call.
    ListAccounts(ListAccountsParams),
}

struct Expectation<A, R> {
    matcher: Matcher<A>,
    times: usize,
    calls: usize,
    result: Option<Result<R, StoreError>>,
}

struct Ledger<A, R> {
    method: &'static str,
    expectations: Vec<Expectation<A, R>>,
}

impl<A, R> Ledger<A, R>
where
    A: PartialEq + fmt::Debug,
    R: Clone,
{
    const fn new(method: &'static str) -> Self {
        Self {
            method,
            expectations: Vec::new(),
        }
    }

    /// Consume the first matching expectation that still has calls left.
    fn call(&mut self, args: &A) -> Option<Result<R, StoreError>> {
        let method = self.method;
        let expectation = self
            .expectations
            .iter_mut()
            .find(|e| e.calls < e.times && e.matcher.matches(args))?;
        expectation.calls += 1;

        Some(expectation.result.clone().unwrap_or_else(|| {
            Err(StoreError::Backend(format!(
                "no result configured for {method}({args:?})"
            )))
        }))
    }

    fn failures(&self) -> Vec<String> {
        self.expectations
            .iter()
            .filter(|e| e.calls != e.times)
            .map(|e| {
                format!(
                    "{}({:?}): expected {} call(s), got {}",
                    self.method, e.matcher, e.times, e.calls
                )
            })
            .collect()
    }
}

/// Handle for configuring a registered expectation.
pub struct Expect<'a, A, R> {
    ledger: &'a Mutex<Ledger<A, R>>,
    index: usize,
}

impl<A, R> Expect<'_, A, R> {
    /// Require exactly `n` matching calls. Defaults to 1.
    pub fn times(self, n: usize) -> Self {
        lock(self.ledger).expectations[self.index].times = n;
        self
    }

    /// Result returned by each matching call.
    pub fn returning(self, result: Result<R, StoreError>) {
        lock(self.ledger).expectations[self.index].result = Some(result);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock [`AccountStorePort`] backed by an in-memory call ledger.
///
/// Calls with no matching expectation are recorded, answered with
/// [`StoreError::Backend`], and reported by [`verify`](Self::verify).
pub struct MockAccountStore {
    create: Mutex<Ledger<CreateAccountParams, Account>>,
    get: Mutex<Ledger<i64, Account>>,
    list: Mutex<Ledger<ListAccountsParams, Vec<Account>>>,
    calls: Mutex<Vec<StoreCall>>,
    unexpected: Mutex<Vec<String>>,
}

impl Default for MockAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MockAccountStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockAccountStore")
            .field("calls", &*lock(&self.calls))
            .field("unexpected", &*lock(&self.unexpected))
            .finish_non_exhaustive()
    }
}

impl MockAccountStore {
    /// Create a mock with no expectations.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            create: Mutex::new(Ledger::new("create_account")),
            get: Mutex::new(Ledger::new("get_account")),
            list: Mutex::new(Ledger::new("list_accounts")),
            calls: Mutex::new(Vec::new()),
            unexpected: Mutex::new(Vec::new()),
        }
    }

    /// Expect `create_account` with matching params.
    pub fn expect_create_account(
        &self,
        matcher: Matcher<CreateAccountParams>,
    ) -> Expect<'_, CreateAccountParams, Account> {
        register(&self.create, matcher)
    }

    /// Expect `get_account` with a matching id.
    pub fn expect_get_account(&self, matcher: Matcher<i64>) -> Expect<'_, i64, Account> {
        register(&self.get, matcher)
    }

    /// Expect `list_accounts` with matching params.
    pub fn expect_list_accounts(
        &self,
        matcher: Matcher<ListAccountsParams>,
    ) -> Expect<'_, ListAccountsParams, Vec<Account>> {
        register(&self.list, matcher)
    }

    /// Every call received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<StoreCall> {
        lock(&self.calls).clone()
    }

    /// Assert every expectation was met and no unexpected call was made.
    ///
    /// # Panics
    ///
    /// Panics with a description of each mismatch.
    pub fn verify(&self) {
        let mut failures = lock(&self.unexpected).clone();
        failures.extend(lock(&self.create).failures());
        failures.extend(lock(&self.get).failures());
        failures.extend(lock(&self.list).failures());

        assert!(
            failures.is_empty(),
            "mock store expectations not met:\n  {}",
            failures.join("\n  ")
        );
    }

    fn dispatch<A, R>(
        &self,
        ledger: &Mutex<Ledger<A, R>>,
        call: StoreCall,
        args: &A,
    ) -> Result<R, StoreError>
    where
        A: PartialEq + fmt::Debug,
        R: Clone,
    {
        lock(&self.calls).push(call);

        let mut ledger = lock(ledger);
        let method = ledger.method;
        ledger.call(args).unwrap_or_else(|| {
            let message = format!("unexpected call {method}({args:?})");
            lock(&self.unexpected).push(message.clone());
            Err(StoreError::Backend(message))
        })
    }
}

fn register<A, R>(ledger: &Mutex<Ledger<A, R>>, matcher: Matcher<A>) -> Expect<'_, A, R> {
    let mut guard = lock(ledger);
    guard.expectations.push(Expectation {
        matcher,
        times: 1,
        calls: 0,
        result: None,
    });
    let index = guard.expectations.len() - 1;
    drop(guard);

    Expect { ledger, index }
}

#[async_trait]
impl AccountStorePort for MockAccountStore {
    async fn create_account(&self, params: CreateAccountParams) -> Result<Account, StoreError> {
        self.dispatch(&self.create, StoreCall::CreateAccount(params.clone()), &params)
    }

    async fn get_account(&self, id: i64) -> Result<Account, StoreError> {
        self.dispatch(&self.get, StoreCall::GetAccount(id), &id)
    }

    async fn list_accounts(&self, params: ListAccountsParams) -> Result<Vec<Account>, StoreError> {
        self.dispatch(&self.list, StoreCall::ListAccounts(params), &params)
    }
}
