//! Events

use crate::types::Timestamp;

open_enum! {
    /// The category of an Event
    pub enum EventCategory {
        /// Occurs whenever an Account is created.
        AccountCreated = "account.created",
        /// Occurs whenever an Account is updated.
        AccountUpdated = "account.updated",
        /// Occurs whenever an Account Number is created.
        AccountNumberCreated = "account_number.created",
        /// Occurs whenever an Account Number is updated.
        AccountNumberUpdated = "account_number.updated",
        /// Occurs whenever an ACH Transfer is created.
        AchTransferCreated = "ach_transfer.created",
        /// Occurs whenever an ACH Transfer is updated.
        AchTransferUpdated = "ach_transfer.updated",
        /// Occurs whenever a Card is created.
        CardCreated = "card.created",
        /// Occurs whenever a Card is updated.
        CardUpdated = "card.updated",
        /// Occurs whenever a Card Dispute is created.
        CardDisputeCreated = "card_dispute.created",
        /// Occurs whenever a Card Dispute is updated.
        CardDisputeUpdated = "card_dispute.updated",
        /// Occurs whenever an Entity is created.
        EntityCreated = "entity.created",
        /// Occurs whenever an Entity is updated.
        EntityUpdated = "entity.updated",
        /// Occurs whenever a Pending Transaction is created.
        PendingTransactionCreated = "pending_transaction.created",
        /// Occurs whenever a Pending Transaction is updated.
        PendingTransactionUpdated = "pending_transaction.updated",
        /// Occurs whenever a Transaction is created.
        TransactionCreated = "transaction.created",
    }
}

open_enum! {
    /// Object type for [`Event`]
    pub enum EventType {
        /// An Event object
        Event = "event",
    }
}

resource! {
    /// Events are records of things that happened to objects at Increase.
    pub struct Event => EventJson {
        /// The Event identifier.
        required id: String,
        /// The identifier of the object that generated this Event.
        required associated_object_id: String,
        /// The type of the object that generated this Event.
        required associated_object_type: String,
        /// The category of the Event. We may add additional possible values
        /// for this enum over time; your application should be able to
        /// handle such additions gracefully.
        required category: EventCategory,
        /// When the Event occurred.
        required created_at: Timestamp,
        /// Always `event`.
        required kind: EventType as "type",
    }
}
