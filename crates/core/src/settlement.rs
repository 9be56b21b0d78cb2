//! Notifiable shapes of a payment transaction.
//!
//! A [`Transaction`] carries every optional field any kind might need. A
//! [`Settlement`] narrows it to one kind and only exists when that kind's
//! required fields are present, so notifiers never re-check optionals.

use crate::models::{Transaction, TransactionType};
use crate::types::{AccountId, OrderId};

#[derive(Debug, Clone, PartialEq)]
pub struct Transfer {
    pub sender_id: AccountId,
    pub recipient_id: AccountId,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub payer_id: AccountId,
    pub payee_id: AccountId,
    pub order_id: OrderId,
    pub net: f64,
}

/// A single-party wallet balance change.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletMovement {
    pub account_id: AccountId,
    /// Amount shown to the owner. Cash-ins report `net`, cash-outs report
    /// the gross `amount`.
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    Transfer(Transfer),
    Charge(Charge),
    Cashin(WalletMovement),
    Cashout(WalletMovement),
}

impl Transaction {
    /// Narrow the transaction to its notifiable shape.
    ///
    /// Returns `None` for kinds that never notify (`PAYMENT`, unknown) and
    /// for transfers/charges that are not attributable to a counterparty yet.
    pub fn settlement(&self) -> Option<Settlement> {
        match self.kind {
            TransactionType::Transfer => Some(Settlement::Transfer(Transfer {
                sender_id: self.account_id,
                recipient_id: self.recipient_id?,
                net: self.net,
            })),
            TransactionType::Charge => Some(Settlement::Charge(Charge {
                payer_id: self.account_id,
                payee_id: self.recipient_id?,
                order_id: self.order_id.clone()?,
                net: self.net,
            })),
            TransactionType::Cashin => Some(Settlement::Cashin(WalletMovement {
                account_id: self.account_id,
                value: self.net,
            })),
            TransactionType::Cashout => Some(Settlement::Cashout(WalletMovement {
                account_id: self.account_id,
                value: self.amount,
            })),
            TransactionType::Payment | TransactionType::Unknown => None,
        }
    }
}
