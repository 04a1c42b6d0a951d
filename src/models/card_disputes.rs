//! Card Disputes

use crate::types::{Amount, Timestamp};

open_enum! {
    /// The results of the Dispute investigation
    pub enum CardDisputeStatus {
        /// The Card Dispute is pending review.
        PendingReviewing = "pending_reviewing",
        /// Increase has requested more information related to the Card
        /// Dispute from you.
        PendingUserInformation = "pending_user_information",
        /// The Card Dispute has been accepted and your funds have been
        /// returned.
        Accepted = "accepted",
        /// The Card Dispute has been rejected.
        Rejected = "rejected",
        /// The Card Dispute has been lost and funds previously credited
        /// from the acceptance have been debited.
        Lost = "lost",
        /// The Card Dispute has been won and no further action can be taken.
        Won = "won",
    }
}

open_enum! {
    /// Object type for [`CardDispute`]
    pub enum CardDisputeType {
        /// A Card Dispute object
        CardDispute = "card_dispute",
    }
}

resource! {
    /// Details of an accepted Card Dispute.
    pub struct CardDisputeAcceptance => CardDisputeAcceptanceJson {
        /// When the Card Dispute was accepted.
        required accepted_at: Timestamp,
        /// The identifier of the Card Dispute that was accepted.
        required card_dispute_id: String,
        /// The identifier of the Transaction that was created to return the
        /// disputed funds to your account.
        required transaction_id: String,
    }
}

resource! {
    /// Details of a rejected Card Dispute.
    pub struct CardDisputeRejection => CardDisputeRejectionJson {
        /// The identifier of the Card Dispute that was rejected.
        required card_dispute_id: String,
        /// Why the Card Dispute was rejected.
        required explanation: String,
        /// When the Card Dispute was rejected.
        required rejected_at: Timestamp,
    }
}

resource! {
    /// If unauthorized activity occurs on a card, you can create a Card
    /// Dispute and we'll return the funds if appropriate.
    pub struct CardDispute => CardDisputeJson {
        /// The Card Dispute identifier.
        required id: String,
        /// Acceptance details, if the dispute was accepted.
        required acceptance: Option<CardDisputeAcceptance>,
        /// The amount of the dispute, if provided, or the transaction amount
        /// otherwise.
        required amount: Option<Amount>,
        /// When the Card Dispute was created.
        required created_at: Timestamp,
        /// The identifier of the Transaction that was disputed.
        required disputed_transaction_id: String,
        /// Why you disputed the Transaction.
        required explanation: String,
        /// Idempotency key sent when the Card Dispute was created.
        required idempotency_key: Option<String>,
        /// Rejection details, if the dispute was rejected.
        required rejection: Option<CardDisputeRejection>,
        /// The results of the Dispute investigation.
        required status: CardDisputeStatus,
        /// Always `card_dispute`.
        required kind: CardDisputeType as "type",
    }
}
