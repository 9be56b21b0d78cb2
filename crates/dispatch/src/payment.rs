//! SMS for successful payment transactions.

use std::sync::Arc;

use herald_core::models::Transaction;
use herald_core::settlement::{Charge, Settlement, Transfer, WalletMovement};
use herald_core::types::AccountId;
use herald_events::EventContext;
use tracing::Span;

use crate::delivery::{deliver, recipient_phone};
use crate::error::DispatchResult;
use crate::messages;
use crate::ports::{AccountApi, PaymentApi, SmsGateway};
use crate::render::MessageRenderer;
use crate::tenant::TenantProvider;

pub struct PaymentNotifier {
    payments: Arc<dyn PaymentApi>,
    accounts: Arc<dyn AccountApi>,
    tenants: Arc<TenantProvider>,
    renderer: Arc<MessageRenderer>,
    sms: Arc<dyn SmsGateway>,
}

impl PaymentNotifier {
    pub fn new(
        payments: Arc<dyn PaymentApi>,
        accounts: Arc<dyn AccountApi>,
        tenants: Arc<TenantProvider>,
        renderer: Arc<MessageRenderer>,
        sms: Arc<dyn SmsGateway>,
    ) -> Self {
        Self {
            payments,
            accounts,
            tenants,
            renderer,
            sms,
        }
    }

    /// Tell the recipient of a transfer that the money arrived.
    ///
    /// Rendered in the recipient's language. Skipped while the transfer has
    /// no recipient.
    pub async fn on_transfer_successful(
        &self,
        transaction_id: &str,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let Some(Settlement::Transfer(transfer)) = self.settlement(transaction_id).await? else {
            tracing::debug!(transaction_id, "Transfer has no recipient, not notifying");
            return Ok(None);
        };
        let Transfer {
            sender_id,
            recipient_id,
            net,
        } = transfer;
        record_parties(sender_id, recipient_id);

        let tenant = self.tenants.resolve(ctx.tenant_id).await?;
        let sender = self.accounts.get_account(sender_id).await?;
        let recipient = self.accounts.get_account(recipient_id).await?;

        let amount = self.renderer.format_money(&tenant, net)?;
        let message = self.renderer.render(
            messages::TRANSFER_SUCCESSFUL,
            &recipient.language,
            &[&amount, sender.name()],
        );
        deliver(self.sms.as_ref(), &recipient, message).await
    }

    /// Tell a merchant they were paid for an order.
    ///
    /// Rendered in the payer's language and sent to the payee. Skipped until
    /// the charge names both a payee and an order.
    pub async fn on_charge_successful(
        &self,
        transaction_id: &str,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let Some(Settlement::Charge(charge)) = self.settlement(transaction_id).await? else {
            tracing::debug!(transaction_id, "Charge has no payee or order, not notifying");
            return Ok(None);
        };
        let Charge {
            payer_id,
            payee_id,
            order_id,
            net,
        } = charge;
        record_parties(payer_id, payee_id);
        Span::current().record("order_id", order_id.as_str());

        let tenant = self.tenants.resolve(ctx.tenant_id).await?;
        let payer = self.accounts.get_account(payer_id).await?;
        let payee = self.accounts.get_account(payee_id).await?;

        recipient_phone(&payee)?;

        let amount = self.renderer.format_money(&tenant, net)?;
        let short_id = self.renderer.short_id(&order_id);
        let link = self.renderer.order_link(&tenant, &order_id).await?;
        let message = self.renderer.render(
            messages::CHARGE_SUCCESSFUL,
            &payer.language,
            &[&amount, payer.name(), &short_id, &link],
        );
        deliver(self.sms.as_ref(), &payee, message).await
    }

    /// Confirm a wallet top-up to its owner, showing the net credited.
    pub async fn on_cashin_successful(
        &self,
        transaction_id: &str,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let Some(Settlement::Cashin(movement)) = self.settlement(transaction_id).await? else {
            return Ok(None);
        };
        self.notify_owner(messages::CASHIN_SUCCESSFUL, movement, ctx)
            .await
    }

    /// Confirm a withdrawal to its owner, showing the gross amount.
    pub async fn on_cashout_successful(
        &self,
        transaction_id: &str,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        let Some(Settlement::Cashout(movement)) = self.settlement(transaction_id).await? else {
            return Ok(None);
        };
        self.notify_owner(messages::CASHOUT_SUCCESSFUL, movement, ctx)
            .await
    }

    async fn notify_owner(
        &self,
        key: &str,
        movement: WalletMovement,
        ctx: &EventContext,
    ) -> DispatchResult<Option<String>> {
        Span::current().record("recipient_id", movement.account_id);

        let tenant = self.tenants.resolve(ctx.tenant_id).await?;
        let owner = self.accounts.get_account(movement.account_id).await?;

        let amount = self.renderer.format_money(&tenant, movement.value)?;
        let message = self.renderer.render(key, &owner.language, &[&amount]);
        deliver(self.sms.as_ref(), &owner, message).await
    }

    async fn settlement(&self, transaction_id: &str) -> DispatchResult<Option<Settlement>> {
        let transaction: Transaction = self.payments.get_transaction(transaction_id).await?;

        let span = Span::current();
        span.record("amount", transaction.amount);
        span.record("net", transaction.net);

        Ok(transaction.settlement())
    }
}

fn record_parties(sender_id: AccountId, recipient_id: AccountId) {
    let span = Span::current();
    span.record("sender_id", sender_id);
    span.record("recipient_id", recipient_id);
}
