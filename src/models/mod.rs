//! Response models
//!
//! One struct per API resource or sub-resource. Each model carries a `json`
//! sidecar with per-field presence and raw bytes, the full payload, and any
//! keys the model does not declare.

mod account_numbers;
mod accounts;
mod ach_transfers;
mod card_disputes;
mod cards;
mod entities;
mod events;
mod pending_transactions;
mod transactions;

pub use account_numbers::*;
pub use accounts::*;
pub use ach_transfers::*;
pub use card_disputes::*;
pub use cards::*;
pub use entities::*;
pub use events::*;
pub use pending_transactions::*;
pub use transactions::*;

use crate::decode::{Decoder, Inspection, PageInspection};
use crate::error::{Error, Result};

macro_rules! registry {
    ($($name:literal => $ty:ty,)+) => {
        /// Names accepted by [`inspect`] and [`inspect_page`]
        pub const RESOURCES: &[&str] = &[$($name),+];

        /// Decode `bytes` as the named resource and report on the result
        pub fn inspect(name: &str, bytes: &[u8], decoder: &Decoder) -> Result<Inspection> {
            match name {
                $($name => Inspection::of(&decoder.decode::<$ty>(bytes)?),)+
                _ => Err(Error::UnknownResource {
                    name: name.to_string(),
                }),
            }
        }

        /// Decode `bytes` as a list of the named resource and report on the result
        pub fn inspect_page(name: &str, bytes: &[u8], decoder: &Decoder) -> Result<PageInspection> {
            match name {
                $($name => PageInspection::of(&decoder.decode_page::<$ty>(bytes)?),)+
                _ => Err(Error::UnknownResource {
                    name: name.to_string(),
                }),
            }
        }
    };
}

registry! {
    "account" => Account,
    "account_balance" => AccountBalance,
    "account_number" => AccountNumber,
    "ach_transfer" => AchTransfer,
    "card" => Card,
    "card_dispute" => CardDispute,
    "entity" => Entity,
    "event" => Event,
    "pending_transaction" => PendingTransaction,
    "transaction" => Transaction,
}
