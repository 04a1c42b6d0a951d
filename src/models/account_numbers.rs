//! Account Numbers

use crate::types::Timestamp;

open_enum! {
    /// Whether ACH debits are allowed against an Account Number
    pub enum DebitStatus {
        /// ACH Debits are allowed.
        Allowed = "allowed",
        /// ACH Debits are blocked.
        Blocked = "blocked",
    }
}

open_enum! {
    /// Whether an Account Number accepts checks
    pub enum CheckStatus {
        /// Checks with this Account Number will be processed even if they
        /// are not associated with a Check Transfer.
        Allowed = "allowed",
        /// Checks with this Account Number will be processed only if they
        /// can be matched to an existing Check Transfer.
        CheckTransfersOnly = "check_transfers_only",
    }
}

open_enum! {
    /// The status of an Account Number
    pub enum AccountNumberStatus {
        /// The account number is active.
        Active = "active",
        /// The account number is temporarily disabled.
        Disabled = "disabled",
        /// The account number is permanently disabled.
        Canceled = "canceled",
    }
}

open_enum! {
    /// Object type for [`AccountNumber`]
    pub enum AccountNumberType {
        /// An Account Number object
        AccountNumber = "account_number",
    }
}

resource! {
    /// Properties related to how this Account Number handles inbound ACH
    /// transfers.
    pub struct InboundAch => InboundAchJson {
        /// Whether ACH debits are allowed against this Account Number.
        required debit_status: DebitStatus,
    }
}

resource! {
    /// Properties related to how this Account Number should handle inbound
    /// check withdrawals.
    pub struct InboundChecks => InboundChecksJson {
        /// How Increase should process checks with this account number.
        required status: CheckStatus,
    }
}

resource! {
    /// Each account can have multiple account and routing numbers. We
    /// recommend that you use a set per vendor.
    pub struct AccountNumber => AccountNumberJson {
        /// The Account Number identifier.
        required id: String,
        /// The identifier for the account this Account Number belongs to.
        required account_id: String,
        /// The account number.
        required account_number: String,
        /// When the Account Number was created.
        required created_at: Timestamp,
        /// Idempotency key sent when the Account Number was created.
        required idempotency_key: Option<String>,
        /// Inbound ACH handling for this Account Number.
        required inbound_ach: InboundAch,
        /// Inbound check handling for this Account Number.
        required inbound_checks: InboundChecks,
        /// The name you choose for the Account Number.
        required name: String,
        /// The American Bankers' Association (ABA) Routing Transit Number.
        required routing_number: String,
        /// The status of the Account Number.
        required status: AccountNumberStatus,
        /// Always `account_number`.
        required kind: AccountNumberType as "type",
    }
}
