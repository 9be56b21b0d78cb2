//! Message keys and the built-in message bundles.
//!
//! Templates use `{n}` positional arguments. Keep every message under one
//! SMS segment (160 characters) once arguments are substituted.

pub const TRANSFER_SUCCESSFUL: &str = "sms.payment-transfer-successful";
pub const CHARGE_SUCCESSFUL: &str = "sms.payment-charge-successful";
pub const CASHIN_SUCCESSFUL: &str = "sms.payment-cashin-successful";
pub const CASHOUT_SUCCESSFUL: &str = "sms.payment-cashout-successful";
pub const ORDER_OPENED: &str = "sms.order-opened";
pub const ORDER_CANCELLED: &str = "sms.order-cancelled";
pub const ORDER_READY_FOR_PICKUP: &str = "sms.order-ready-for-pickup-in-store";
pub const SHIPPING_READY_FOR_PICKUP: &str = "sms.shipping-ready-for-pickup-in-store";

pub(crate) const EN: &[(&str, &str)] = &[
    (TRANSFER_SUCCESSFUL, "You have received {0} from {1}"),
    (
        CHARGE_SUCCESSFUL,
        "You have received a payment of {0} from {1} for the order #{2}. {3}",
    ),
    (CASHIN_SUCCESSFUL, "Successfully recharged {0} into your wallet"),
    (CASHOUT_SUCCESSFUL, "Successfully withdrew {0} from your wallet"),
    (ORDER_OPENED, "You have received a new order of {0} from {1}. {2}"),
    (ORDER_CANCELLED, "Your order #{0} has been cancelled"),
    (
        ORDER_READY_FOR_PICKUP,
        "Your order #{0} is now available in store for pickup. {1}",
    ),
    (
        SHIPPING_READY_FOR_PICKUP,
        "Your order #{0} is now ready. Please go to our store for pickup.",
    ),
];

pub(crate) const FR: &[(&str, &str)] = &[
    (TRANSFER_SUCCESSFUL, "Vous avez recu {0} de {1}"),
    (
        CHARGE_SUCCESSFUL,
        "Vous avez recu un paiement de {0} de {1} pour la commande #{2}. {3}",
    ),
    (CASHIN_SUCCESSFUL, "Votre portefeuille a ete recharge de {0}"),
    (CASHOUT_SUCCESSFUL, "Retrait de {0} de votre portefeuille effectue"),
    (ORDER_OPENED, "Vous avez recu une nouvelle commande de {0} de {1}. {2}"),
    (ORDER_CANCELLED, "Votre commande #{0} a ete annulee"),
    (
        ORDER_READY_FOR_PICKUP,
        "Votre commande #{0} est disponible en magasin. {1}",
    ),
    (
        SHIPPING_READY_FOR_PICKUP,
        "Votre commande #{0} est prete. Veuillez passer la recuperer en magasin.",
    ),
];

/// Every key the notifiers render.
pub const ALL_KEYS: [&str; 8] = [
    TRANSFER_SUCCESSFUL,
    CHARGE_SUCCESSFUL,
    CASHIN_SUCCESSFUL,
    CASHOUT_SUCCESSFUL,
    ORDER_OPENED,
    ORDER_CANCELLED,
    ORDER_READY_FOR_PICKUP,
    SHIPPING_READY_FOR_PICKUP,
];
