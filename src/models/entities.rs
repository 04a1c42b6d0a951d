//! Entities

use crate::types::{Date, Timestamp};

open_enum! {
    /// The legal structure of an Entity
    pub enum EntityStructure {
        /// A corporation.
        Corporation = "corporation",
        /// An individual person.
        NaturalPerson = "natural_person",
        /// Multiple individual people.
        Joint = "joint",
        /// A trust.
        Trust = "trust",
        /// A government authority.
        GovernmentAuthority = "government_authority",
    }
}

open_enum! {
    /// The status of an Entity
    pub enum EntityStatus {
        /// The entity is active.
        Active = "active",
        /// The entity is archived, and can no longer be used to create accounts.
        Archived = "archived",
        /// The entity is temporarily disabled and cannot be used for
        /// financial activity.
        Disabled = "disabled",
    }
}

open_enum! {
    /// Object type for [`Entity`]
    pub enum EntityType {
        /// An Entity object
        Entity = "entity",
    }
}

resource! {
    /// A street address.
    pub struct Address => AddressJson {
        /// The city of the address.
        required city: String,
        /// The first line of the address.
        required line1: String,
        /// The second line of the address.
        required line2: Option<String>,
        /// The two-letter United States Postal Service (USPS) abbreviation
        /// for the state of the address.
        required state: String,
        /// The ZIP code of the address.
        required zip: String,
    }
}

resource! {
    /// Details of the corporation, present if `structure` is `corporation`.
    pub struct Corporation => CorporationJson {
        /// The corporation's address.
        required address: Address,
        /// The two-letter United States Postal Service (USPS) abbreviation
        /// for the corporation's state of incorporation.
        required incorporation_state: Option<String>,
        /// The numeric North American Industry Classification System (NAICS)
        /// code submitted for the corporation.
        required industry_code: Option<String>,
        /// The legal name of the corporation.
        required name: String,
        /// The Employer Identification Number (EIN) for the corporation.
        required tax_identifier: Option<String>,
        /// The website for the corporation.
        required website: Option<String>,
    }
}

resource! {
    /// Details of the natural person, present if `structure` is
    /// `natural_person`.
    pub struct NaturalPerson => NaturalPersonJson {
        /// The person's address.
        required address: Address,
        /// The person's date of birth.
        required date_of_birth: Date,
        /// The person's legal name.
        required name: String,
    }
}

resource! {
    /// Entities are the legal entities that own accounts. They can be
    /// people, corporations, partnerships, government authorities, or
    /// trusts.
    pub struct Entity => EntityJson {
        /// The entity's identifier.
        required id: String,
        /// Corporation details, if `structure` is `corporation`.
        required corporation: Option<Corporation>,
        /// When the Entity was created.
        required created_at: Timestamp,
        /// The entity's description for display purposes.
        required description: Option<String>,
        /// Idempotency key sent when the Entity was created.
        required idempotency_key: Option<String>,
        /// Natural person details, if `structure` is `natural_person`.
        required natural_person: Option<NaturalPerson>,
        /// The status of the entity.
        required status: EntityStatus,
        /// The entity's legal structure.
        required structure: EntityStructure,
        /// The identifiers of documents supplementing the entity's onboarding.
        required supplemental_documents: Vec<String>,
        /// Always `entity`.
        required kind: EntityType as "type",
    }
}
