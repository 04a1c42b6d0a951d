//! Cards

use crate::types::Timestamp;

open_enum! {
    /// The status of a Card
    pub enum CardStatus {
        /// The card is active.
        Active = "active",
        /// The card is temporarily disabled.
        Disabled = "disabled",
        /// The card is permanently canceled.
        Canceled = "canceled",
    }
}

open_enum! {
    /// Object type for [`Card`]
    pub enum CardType {
        /// A Card object
        Card = "card",
    }
}

resource! {
    /// The Card's billing address.
    pub struct BillingAddress => BillingAddressJson {
        /// The city of the billing address.
        required city: Option<String>,
        /// The first line of the billing address.
        required line1: Option<String>,
        /// The second line of the billing address.
        required line2: Option<String>,
        /// The postal code of the billing address.
        required postal_code: Option<String>,
        /// The US state of the billing address.
        required state: Option<String>,
    }
}

resource! {
    /// The contact information used in the two-factor steps for digital
    /// wallet card creation.
    pub struct DigitalWallet => DigitalWalletJson {
        /// The digital card profile assigned to this digital card.
        required digital_card_profile_id: Option<String>,
        /// An email address that can be used to verify the cardholder via
        /// one-time passcode over email.
        required email: Option<String>,
        /// A phone number that can be used to verify the cardholder via
        /// one-time passcode over SMS.
        required phone: Option<String>,
    }
}

resource! {
    /// Cards are commercial credit cards. They'll immediately work for
    /// online purchases after you create them.
    pub struct Card => CardJson {
        /// The card identifier.
        required id: String,
        /// The identifier for the account this card belongs to.
        required account_id: String,
        /// The Card's billing address.
        required billing_address: BillingAddress,
        /// When the Card was created.
        required created_at: Timestamp,
        /// The card's description for display purposes.
        required description: Option<String>,
        /// Digital wallet contact details, if configured.
        required digital_wallet: Option<DigitalWallet>,
        /// The identifier for the entity associated with this card.
        required entity_id: Option<String>,
        /// The month the card expires in M format (e.g., August is 8).
        required expiration_month: i64,
        /// The year the card expires in YYYY format (e.g., 2025).
        required expiration_year: i64,
        /// Idempotency key sent when the Card was created.
        required idempotency_key: Option<String>,
        /// The last 4 digits of the Card's Primary Account Number.
        required last4: String,
        /// The status of the Card.
        required status: CardStatus,
        /// Always `card`.
        required kind: CardType as "type",
    }
}
