//! Transactions and their sources

use crate::types::{Amount, Currency, Date, RouteType, Timestamp};

open_enum! {
    /// The type of the resource a Transaction originated from
    pub enum TransactionSourceCategory {
        /// Account Transfer Intention: details will be under the
        /// `account_transfer_intention` object.
        AccountTransferIntention = "account_transfer_intention",
        /// ACH Transfer Intention: details will be under the
        /// `ach_transfer_intention` object.
        AchTransferIntention = "ach_transfer_intention",
        /// ACH Transfer Rejection: details will be under the
        /// `ach_transfer_rejection` object.
        AchTransferRejection = "ach_transfer_rejection",
        /// ACH Transfer Return: details will be under the
        /// `ach_transfer_return` object.
        AchTransferReturn = "ach_transfer_return",
        /// Card Dispute Acceptance: details will be under the
        /// `card_dispute_acceptance` object.
        CardDisputeAcceptance = "card_dispute_acceptance",
        /// Card Refund: details will be under the `card_refund` object.
        CardRefund = "card_refund",
        /// Card Settlement: details will be under the `card_settlement` object.
        CardSettlement = "card_settlement",
        /// Check Deposit Acceptance: details will be under the
        /// `check_deposit_acceptance` object.
        CheckDepositAcceptance = "check_deposit_acceptance",
        /// Fee Payment: details will be under the `fee_payment` object.
        FeePayment = "fee_payment",
        /// Inbound ACH Transfer: details will be under the
        /// `inbound_ach_transfer` object.
        InboundAchTransfer = "inbound_ach_transfer",
        /// Inbound Wire Transfer: details will be under the
        /// `inbound_wire_transfer` object.
        InboundWireTransfer = "inbound_wire_transfer",
        /// Interest Payment: details will be under the `interest_payment` object.
        InterestPayment = "interest_payment",
        /// Internal Source: details will be under the `internal_source` object.
        InternalSource = "internal_source",
        /// Wire Transfer Intention: details will be under the
        /// `wire_transfer_intention` object.
        WireTransferIntention = "wire_transfer_intention",
        /// The Transaction was made for an undocumented or deprecated
        /// reason.
        Other = "other",
    }
}

open_enum! {
    /// Object type for [`Transaction`]
    pub enum TransactionType {
        /// A Transaction object
        Transaction = "transaction",
    }
}

resource! {
    /// A book transfer between two of your Increase accounts.
    pub struct AccountTransferIntention => AccountTransferIntentionJson {
        /// The pending amount in the minor unit of the transaction's currency.
        required amount: Amount,
        /// The currency of the transfer.
        required currency: Currency,
        /// The description you chose to give the transfer.
        required description: String,
        /// The identifier of the Account to where the Account Transfer was sent.
        required destination_account_id: String,
        /// The identifier of the Account from where the Account Transfer was sent.
        required source_account_id: String,
        /// The identifier of the Account Transfer that led to this Transaction.
        required transfer_id: String,
    }
}

resource! {
    /// An ACH transfer initiated from your Increase account.
    pub struct AchTransferIntention => AchTransferIntentionJson {
        /// The account number for the destination account.
        required account_number: String,
        /// The amount in the minor unit of the transaction's currency.
        required amount: Amount,
        /// The American Bankers' Association (ABA) Routing Transit Number.
        required routing_number: String,
        /// A description set when the ACH Transfer was created.
        required statement_descriptor: String,
        /// The identifier of the ACH Transfer that led to this Transaction.
        required transfer_id: String,
    }
}

resource! {
    /// Interest paid into an account.
    pub struct InterestPayment => InterestPaymentJson {
        /// The account on which the interest was accrued.
        required accrued_on_account_id: String,
        /// The amount in the minor unit of the transaction's currency.
        required amount: Amount,
        /// The currency of the payment.
        required currency: Currency,
        /// The end of the period for which this transaction paid interest.
        required period_end: Timestamp,
        /// The start of the period for which this transaction paid interest.
        required period_start: Timestamp,
    }
}

resource! {
    /// A fee assessed by Increase.
    pub struct FeePayment => FeePaymentJson {
        /// The amount in the minor unit of the transaction's currency.
        required amount: Amount,
        /// The currency of the fee.
        required currency: Currency,
        /// The start of this payment's fee period.
        required fee_period_start: Date,
    }
}

resource! {
    /// This is an object giving more details on the network-level event
    /// that caused the Transaction. For example, for a card transaction
    /// this lists the merchant's industry and location.
    pub struct TransactionSource => TransactionSourceJson {
        /// The type of the resource. We may add additional possible values
        /// for this enum over time; your application should be able to
        /// handle such additions gracefully.
        required category: TransactionSourceCategory,
        /// Present if `category` is `account_transfer_intention`.
        required account_transfer_intention: Option<AccountTransferIntention>,
        /// Present if `category` is `ach_transfer_intention`.
        required ach_transfer_intention: Option<AchTransferIntention>,
        /// Present if `category` is `interest_payment`.
        required interest_payment: Option<InterestPayment>,
        /// Present if `category` is `fee_payment`.
        required fee_payment: Option<FeePayment>,
    }
}

resource! {
    /// Transactions are the immutable additions and removals of money from
    /// your bank account. They're the equivalent of line items on your bank
    /// statement.
    pub struct Transaction => TransactionJson {
        /// The Transaction identifier.
        required id: String,
        /// The identifier for the Account the Transaction belongs to.
        required account_id: String,
        /// The Transaction amount in the minor unit of its currency.
        required amount: Amount,
        /// When the Transaction occurred.
        required created_at: Timestamp,
        /// The currency of the Transaction.
        required currency: Currency,
        /// An informational message describing this transaction.
        required description: String,
        /// The identifier for the route this Transaction came through.
        required route_id: Option<String>,
        /// The type of the route this Transaction came through.
        required route_type: Option<RouteType>,
        /// Network-level details of what caused the Transaction.
        required source: TransactionSource,
        /// Always `transaction`.
        required kind: TransactionType as "type",
    }
}
