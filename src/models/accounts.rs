//! Accounts and account balances

use crate::types::{Amount, Currency, Date, Timestamp};

open_enum! {
    /// The bank the Account is with
    pub enum AccountBank {
        /// Core Bank
        CoreBank = "core_bank",
        /// First Internet Bank of Indiana
        FirstInternetBank = "first_internet_bank",
        /// Grasshopper Bank
        GrasshopperBank = "grasshopper_bank",
    }
}

open_enum! {
    /// The status of the Account
    pub enum AccountStatus {
        /// Open Accounts that are ready to use.
        Open = "open",
        /// Closed Accounts on which no new activity can occur.
        Closed = "closed",
    }
}

open_enum! {
    /// Object type for [`Account`]
    pub enum AccountType {
        /// An Account object
        Account = "account",
    }
}

resource! {
    /// Accounts are your bank accounts with Increase. They store money,
    /// receive transfers, and send payments. They earn interest and have
    /// depository insurance.
    pub struct Account => AccountJson {
        /// The Account identifier.
        required id: String,
        /// The bank the Account is with.
        required bank: AccountBank,
        /// When the Account was closed, if it has been.
        required closed_at: Option<Timestamp>,
        /// When the Account was created.
        required created_at: Timestamp,
        /// The currency the Account holds.
        required currency: Currency,
        /// The identifier of the Entity the Account belongs to.
        required entity_id: Option<String>,
        /// Idempotency key sent when the Account was created.
        required idempotency_key: Option<String>,
        /// The identifier of an Entity that, while not owning the Account,
        /// is associated with its activity.
        required informational_entity_id: Option<String>,
        /// Interest accrued but not yet paid, as a decimal string in the
        /// Account's currency.
        required interest_accrued: String,
        /// The latest day interest was accrued.
        required interest_accrued_at: Option<Date>,
        /// The Interest Rate currently being earned, as a decimal string.
        required interest_rate: String,
        /// The name you choose for the Account.
        required name: String,
        /// The identifier of the Program determining compliance and
        /// commercial terms.
        required program_id: String,
        /// The status of the Account.
        required status: AccountStatus,
        /// Always `account`.
        required kind: AccountType as "type",
    }
}

open_enum! {
    /// Object type for [`AccountBalance`]
    pub enum AccountBalanceType {
        /// A Balance Lookup object
        BalanceLookup = "balance_lookup",
    }
}

resource! {
    /// Balance information for an Account at a point in time.
    pub struct AccountBalance => AccountBalanceJson {
        /// The identifier of the Account the balance belongs to.
        required id: String,
        /// The Account's current balance in the minor unit of its currency.
        required current_balance: Amount,
        /// The Account's available balance: the current balance minus
        /// pending holds.
        required available_balance: Amount,
        /// Always `balance_lookup`.
        optional kind: AccountBalanceType as "type",
    }
}
