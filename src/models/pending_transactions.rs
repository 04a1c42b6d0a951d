//! Pending Transactions

use crate::types::{Amount, Currency, RouteType, Timestamp};

open_enum! {
    /// Whether a Pending Transaction has been confirmed
    pub enum PendingTransactionStatus {
        /// The Pending Transaction is still awaiting confirmation.
        Pending = "pending",
        /// The Pending Transaction is confirmed. An associated Transaction
        /// exists for this object.
        Complete = "complete",
    }
}

open_enum! {
    /// The type of the resource a Pending Transaction originated from
    pub enum PendingTransactionSourceCategory {
        /// Account Transfer Instruction: details will be under the
        /// `account_transfer_instruction` object.
        AccountTransferInstruction = "account_transfer_instruction",
        /// ACH Transfer Instruction: details will be under the
        /// `ach_transfer_instruction` object.
        AchTransferInstruction = "ach_transfer_instruction",
        /// Card Authorization: details will be under the
        /// `card_authorization` object.
        CardAuthorization = "card_authorization",
        /// Check Deposit Instruction: details will be under the
        /// `check_deposit_instruction` object.
        CheckDepositInstruction = "check_deposit_instruction",
        /// Inbound Funds Hold: details will be under the
        /// `inbound_funds_hold` object.
        InboundFundsHold = "inbound_funds_hold",
        /// Wire Transfer Instruction: details will be under the
        /// `wire_transfer_instruction` object.
        WireTransferInstruction = "wire_transfer_instruction",
        /// The Pending Transaction was made for an undocumented or
        /// deprecated reason.
        Other = "other",
    }
}

open_enum! {
    /// Object type for [`PendingTransaction`]
    pub enum PendingTransactionType {
        /// A Pending Transaction object
        PendingTransaction = "pending_transaction",
    }
}

resource! {
    /// An ACH transfer awaiting submission.
    pub struct AchTransferInstruction => AchTransferInstructionJson {
        /// The pending amount in the minor unit of the transaction's currency.
        required amount: Amount,
        /// The identifier of the ACH Transfer that led to this Pending Transaction.
        required transfer_id: String,
    }
}

resource! {
    /// What caused a Pending Transaction.
    pub struct PendingTransactionSource => PendingTransactionSourceJson {
        /// The type of the resource. We may add additional possible values
        /// for this enum over time.
        required category: PendingTransactionSourceCategory,
        /// Present if `category` is `ach_transfer_instruction`.
        required ach_transfer_instruction: Option<AchTransferInstruction>,
    }
}

resource! {
    /// Pending Transactions are potential future additions and removals of
    /// money from your bank account.
    pub struct PendingTransaction => PendingTransactionJson {
        /// The Pending Transaction identifier.
        required id: String,
        /// The identifier for the account this Pending Transaction belongs to.
        required account_id: String,
        /// The Pending Transaction amount in the minor unit of its currency.
        required amount: Amount,
        /// When the Pending Transaction was completed, if it has been.
        required completed_at: Option<Timestamp>,
        /// When the Pending Transaction occurred.
        required created_at: Timestamp,
        /// The currency of the Pending Transaction.
        required currency: Currency,
        /// For a Pending Transaction related to a transfer, this is the
        /// description you provide.
        required description: String,
        /// The identifier for the route this Pending Transaction came through.
        required route_id: Option<String>,
        /// The type of the route this Pending Transaction came through.
        required route_type: Option<RouteType>,
        /// What caused the Pending Transaction.
        required source: PendingTransactionSource,
        /// Whether the Pending Transaction has been confirmed.
        required status: PendingTransactionStatus,
        /// Always `pending_transaction`.
        required kind: PendingTransactionType as "type",
    }
}
