//! Message composition: templates, money, short ids and links.

use std::collections::HashMap;
use std::sync::Arc;

use herald_core::models::Tenant;
use herald_core::money::MonetaryFormat;
use herald_core::naming;
use herald_core::{CoreError, CoreResult};
use reqwest::Url;

use crate::messages;
use crate::ports::UrlShortener;

/// Locale tag → message key → template.
pub type Catalog = HashMap<String, HashMap<String, String>>;

/// Locale used when neither the exact tag nor its language has a template.
pub const DEFAULT_LOCALE: &str = "en";

/// Resolves message templates and formats their arguments.
pub struct MessageRenderer {
    catalog: Catalog,
    default_locale: String,
    shortener: Arc<dyn UrlShortener>,
}

impl MessageRenderer {
    /// Renderer with the built-in `en` and `fr` bundles.
    pub fn new(shortener: Arc<dyn UrlShortener>) -> Self {
        let mut catalog = Catalog::new();
        for (locale, bundle) in [("en", messages::EN), ("fr", messages::FR)] {
            catalog.insert(
                locale.to_string(),
                bundle
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            );
        }

        Self {
            catalog,
            default_locale: DEFAULT_LOCALE.to_string(),
            shortener,
        }
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = normalize(&locale.into());
        self
    }

    /// Merge `overrides` over the current templates, key by key.
    pub fn with_catalog(mut self, overrides: Catalog) -> Self {
        for (locale, bundle) in overrides {
            self.catalog
                .entry(normalize(&locale))
                .or_default()
                .extend(bundle);
        }
        self
    }

    /// Render `key` for `locale`, substituting `{n}` with `args[n]`.
    ///
    /// Lookup order: exact tag (`fr_CM`), its language (`fr`), the default
    /// locale. When none has the key, the key itself is returned.
    pub fn render(&self, key: &str, locale: &str, args: &[&str]) -> String {
        match self.template(key, locale) {
            Some(template) => substitute(template, args),
            None => {
                tracing::warn!(key, locale, "No template for message key");
                key.to_string()
            }
        }
    }

    fn template(&self, key: &str, locale: &str) -> Option<&str> {
        let tag = normalize(locale);
        let language = tag.split('_').next().unwrap_or_default();

        let found = [tag.as_str(), language, self.default_locale.as_str()]
            .into_iter()
            .filter(|l| !l.is_empty())
            .find_map(|l| self.catalog.get(l).and_then(|bundle| bundle.get(key)))
            .map(String::as_str);
        found
    }

    /// Format `amount` with the tenant's monetary pattern.
    pub fn format_money(&self, tenant: &Tenant, amount: f64) -> CoreResult<String> {
        Ok(MonetaryFormat::parse(&tenant.monetary_format)?.format(amount))
    }

    pub fn short_id(&self, id: &str) -> String {
        naming::short_id(id)
    }

    /// Shortened link to the order page of the tenant's web app.
    ///
    /// Always built from the full order id, query-encoded.
    pub async fn order_link(&self, tenant: &Tenant, order_id: &str) -> CoreResult<String> {
        let base = format!("{}/order", tenant.webapp_url.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|e| {
            CoreError::InvalidFormat(format!("web app url {}: {e}", tenant.webapp_url))
        })?;
        url.query_pairs_mut().append_pair("id", order_id);

        self.shortener.shorten(url.as_str()).await
    }
}

/// `fr-CM` and `FR_cm` both become `fr_CM`.
fn normalize(locale: &str) -> String {
    let mut parts = locale.trim().split(['-', '_']);
    let language = parts.next().unwrap_or_default().to_lowercase();
    match parts.next() {
        Some(region) if !region.is_empty() => format!("{language}_{}", region.to_uppercase()),
        _ => language,
    }
}

fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(|a| a.len()).sum::<usize>());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let arg = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            Some((args.get(index)?, close))
        });

        match arg {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
