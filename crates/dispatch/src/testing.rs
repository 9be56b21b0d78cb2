//! Shared fixtures for the notifier and router tests.

use std::sync::Arc;

use herald_core::models::{Account, Phone, Tenant};

use crate::ports::{MockAccountApi, MockSmsGateway, MockTenantApi, MockUrlShortener};
use crate::render::MessageRenderer;
use crate::tenant::{TenantProvider, DEFAULT_TENANT_TTL};

pub const SHORT_LINK: &str = "https://bit.ly/3N4OW05";

pub fn phone_of(id: i64) -> String {
    format!("+2376950965{id:02}")
}

pub fn account(id: i64, name: &str, language: &str) -> Account {
    Account {
        id,
        display_name: Some(name.to_string()),
        language: language.to_string(),
        phone: Some(Phone {
            number: phone_of(id),
        }),
    }
}

pub fn tenant() -> Tenant {
    Tenant {
        id: 1,
        monetary_format: "#,###,##0 XAF".to_string(),
        webapp_url: "https://shop.example.com".to_string(),
    }
}

/// Account lookups served from `accounts`; any other id is a test bug.
pub fn accounts(accounts: Vec<Account>) -> MockAccountApi {
    let mut api = MockAccountApi::new();
    api.expect_get_account().returning(move |id| {
        Ok(accounts
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("unexpected account lookup {id}")))
    });
    api
}

/// Tenant 2 formats in dollars and runs its own web app.
pub fn other_tenant() -> Tenant {
    Tenant {
        id: 2,
        monetary_format: "$#,##0.00".to_string(),
        webapp_url: "https://other.example.com".to_string(),
    }
}

pub fn tenants() -> Arc<TenantProvider> {
    let mut api = MockTenantApi::new();
    api.expect_get_tenant().returning(|id| {
        Ok(match id {
            2 => other_tenant(),
            _ => Tenant { id, ..tenant() },
        })
    });
    Arc::new(TenantProvider::new(Arc::new(api), DEFAULT_TENANT_TTL))
}

/// Gateway expecting exactly one message `text` to `phone`.
pub fn sms_expecting(phone: &str, text: &str) -> MockSmsGateway {
    let phone = phone.to_string();
    let text = text.to_string();
    let mut sms = MockSmsGateway::new();
    sms.expect_send_message()
        .withf(move |req| req.phone_number == phone && req.message == text)
        .times(1)
        .returning(|_| Ok("xxxx".to_string()));
    sms
}

pub fn sms_never() -> MockSmsGateway {
    let mut sms = MockSmsGateway::new();
    sms.expect_send_message().never();
    sms
}

pub fn renderer() -> Arc<MessageRenderer> {
    let mut shortener = MockUrlShortener::new();
    shortener
        .expect_shorten()
        .returning(|_| Ok(SHORT_LINK.to_string()));
    Arc::new(MessageRenderer::new(Arc::new(shortener)))
}
