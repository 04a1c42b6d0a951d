//! ACH Transfers

use crate::types::{Amount, Currency, Date, Timestamp};

open_enum! {
    /// The lifecycle status of an ACH Transfer
    pub enum AchTransferStatus {
        /// The transfer is pending approval.
        PendingApproval = "pending_approval",
        /// The transfer belongs to a Transfer Session that is pending confirmation.
        PendingTransferSessionConfirmation = "pending_transfer_session_confirmation",
        /// The transfer has been canceled.
        Canceled = "canceled",
        /// The transfer is pending submission to the Federal Reserve.
        PendingSubmission = "pending_submission",
        /// The transfer is pending review by Increase.
        PendingReviewing = "pending_reviewing",
        /// The transfer requires attention from an Increase operator.
        RequiresAttention = "requires_attention",
        /// The transfer has been rejected.
        Rejected = "rejected",
        /// The transfer is complete.
        Submitted = "submitted",
        /// The transfer has been returned.
        Returned = "returned",
    }
}

open_enum! {
    /// Standard Entry Class code of an ACH Transfer
    pub enum StandardEntryClassCode {
        /// Corporate Credit and Debit (CCD).
        CorporateCreditOrDebit = "corporate_credit_or_debit",
        /// Corporate Trade Exchange (CTX).
        CorporateTradeExchange = "corporate_trade_exchange",
        /// Prearranged Payments and Deposits (PPD).
        PrearrangedPaymentsAndDeposit = "prearranged_payments_and_deposit",
        /// Internet Initiated (WEB).
        InternetInitiated = "internet_initiated",
    }
}

open_enum! {
    /// Reason an ACH Transfer was returned
    pub enum AchReturnReasonCode {
        /// Code R01. Insufficient funds in the receiving account.
        InsufficientFund = "insufficient_fund",
        /// Code R03. The account does not exist or the receiving bank was
        /// unable to locate it.
        NoAccount = "no_account",
        /// Code R02. The account is closed at the receiving bank.
        AccountClosed = "account_closed",
        /// Code R04. The account number is invalid at the receiving bank.
        InvalidAccountNumberStructure = "invalid_account_number_structure",
        /// Code R10. The customer at the receiving bank reversed the transfer.
        AuthorizationRevokedByCustomer = "authorization_revoked_by_customer",
        /// Code R16. The account at the receiving bank was frozen.
        AccountFrozenEntryReturnedPerOfacInstruction = "account_frozen_entry_returned_per_ofac_instruction",
    }
}

open_enum! {
    /// Object type for [`AchTransfer`]
    pub enum AchTransferType {
        /// An ACH Transfer object
        AchTransfer = "ach_transfer",
    }
}

resource! {
    /// If your account requires approvals for transfers and the transfer
    /// was approved, this will contain details of the approval.
    pub struct Approval => ApprovalJson {
        /// When the transfer was approved.
        required approved_at: Timestamp,
        /// The email address of the user who approved the transfer, if it
        /// was approved by a user.
        required approved_by: Option<String>,
    }
}

resource! {
    /// If your account requires approvals for transfers and the transfer
    /// was not approved, this will contain details of the cancellation.
    pub struct Cancellation => CancellationJson {
        /// When the Transfer was canceled.
        required canceled_at: Timestamp,
        /// The email address of the user who canceled the transfer, if it
        /// was canceled by a user.
        required canceled_by: Option<String>,
    }
}

resource! {
    /// Details of a transfer that was returned by the receiving bank.
    pub struct AchTransferReturn => AchTransferReturnJson {
        /// When the return was created.
        required created_at: Timestamp,
        /// Why the ACH Transfer was returned.
        required return_reason_code: AchReturnReasonCode,
        /// A 15 digit number set by the sending bank and transmitted to the
        /// receiving bank.
        required trace_number: String,
        /// The identifier of the Transaction associated with this return.
        required transaction_id: String,
        /// The identifier of the ACH Transfer associated with this return.
        required transfer_id: String,
    }
}

resource! {
    /// Details of when the transfer was submitted to the Federal Reserve.
    pub struct AchTransferSubmission => AchTransferSubmissionJson {
        /// When the funds are expected to settle at the receiving bank.
        required expected_funds_settlement_at: Timestamp,
        /// When the transfer was submitted to the Federal Reserve.
        required submitted_at: Timestamp,
        /// A 15 digit number recorded in the Nacha file and transmitted to
        /// the receiving bank.
        required trace_number: String,
    }
}

resource! {
    /// ACH transfers move funds between your Increase account and any other
    /// account accessible by the Automated Clearing House (ACH).
    pub struct AchTransfer => AchTransferJson {
        /// The ACH transfer's identifier.
        required id: String,
        /// The Account to which the transfer belongs.
        required account_id: String,
        /// The destination account number.
        required account_number: String,
        /// The transfer amount in USD cents. Positive values push funds,
        /// negative values pull them.
        required amount: Amount,
        /// Approval details, if the transfer was approved.
        required approval: Option<Approval>,
        /// Cancellation details, if the transfer was canceled.
        required cancellation: Option<Cancellation>,
        /// The description of the company that initiated the transfer.
        required company_descriptive_date: Option<String>,
        /// The name by which the recipient knows you.
        required company_name: Option<String>,
        /// When the transfer was created.
        required created_at: Timestamp,
        /// The transfer currency. For ACH transfers this is always USD.
        required currency: Currency,
        /// The transfer effective date.
        required effective_date: Option<Date>,
        /// The identifier of the External Account the transfer was made to.
        required external_account_id: Option<String>,
        /// The transfer's network.
        required network: String,
        /// The ID for the pending transaction representing the transfer.
        required pending_transaction_id: Option<String>,
        /// Return details, if the transfer was returned.
        required return_: Option<AchTransferReturn> as "return",
        /// The American Bankers' Association (ABA) Routing Transit Number.
        required routing_number: String,
        /// The Standard Entry Class (SEC) code used for the transfer.
        required standard_entry_class_code: StandardEntryClassCode,
        /// The descriptor that will show on the recipient's bank statement.
        required statement_descriptor: String,
        /// The lifecycle status of the transfer.
        required status: AchTransferStatus,
        /// Submission details, once the transfer is submitted.
        required submission: Option<AchTransferSubmission>,
        /// The ID for the transaction funding the transfer.
        required transaction_id: Option<String>,
        /// Always `ach_transfer`.
        required kind: AchTransferType as "type",
    }
}
