//! Orders, their status and the checkout request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AddressId, OrderId, ProductId, ShopId, Timestamp, UserId};

/// Lifecycle state of an order, carried on the wire as the backend's status text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Placed, not yet paid.
    #[serde(rename = "待支付")]
    PendingPayment,
    /// Paid, waiting for the shop to ship.
    #[serde(rename = "待发货")]
    PendingShipment,
    /// Shipped, waiting for the customer to confirm receipt.
    #[serde(rename = "待收货")]
    PendingReceipt,
    /// Received.
    #[serde(rename = "已完成")]
    Completed,
    /// Cancelled before payment.
    #[serde(rename = "已取消")]
    Cancelled,
    /// Any status text this client does not know.
    #[serde(other)]
    Unknown,
}

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    /// Needs the customer's attention.
    Warning,
    /// Waiting on the shop.
    Info,
    /// In transit.
    Primary,
    /// Done.
    Success,
    /// Cancelled.
    Danger,
    /// Unrecognised status.
    Neutral,
}

impl BadgeTone {
    /// CSS modifier for the tone; empty for [`BadgeTone::Neutral`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Neutral => "",
        }
    }
}

impl OrderStatus {
    /// Badge tone used when listing the order.
    #[must_use]
    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::PendingPayment => BadgeTone::Warning,
            Self::PendingShipment => BadgeTone::Info,
            Self::PendingReceipt => BadgeTone::Primary,
            Self::Completed => BadgeTone::Success,
            Self::Cancelled => BadgeTone::Danger,
            Self::Unknown => BadgeTone::Neutral,
        }
    }

    /// English label for the status.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingPayment => "Awaiting payment",
            Self::PendingShipment => "Awaiting shipment",
            Self::PendingReceipt => "Shipped",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// Customers may cancel only before the order is paid.
    #[must_use]
    pub const fn can_cancel(self) -> bool {
        matches!(self, Self::PendingPayment)
    }
}

/// One order line as the backend stores it (one product per order).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend identifier.
    pub order_id: OrderId,
    /// Account that placed the order.
    pub customer_id: UserId,
    /// Cleared by the backend when the shop is deleted.
    pub shop_id: Option<ShopId>,
    /// When the order was placed.
    pub order_date: Timestamp,
    /// `quantity * price_at_purchase`.
    pub total_amount: Decimal,
    /// Current lifecycle state.
    pub status: OrderStatus,
    /// Receiver copied from the address at checkout.
    pub receiver_name: String,
    /// Receiver phone copied at checkout.
    pub receiver_phone: String,
    /// Address copied at checkout as one line.
    pub receiver_address: String,
    /// Product bought.
    pub product_id: ProductId,
    /// Units bought.
    pub quantity: u32,
    /// Unit price when the order was placed.
    pub price_at_purchase: Decimal,
}

/// Checkout payload: the whole cart plus the chosen delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Quantity per product.
    pub cart_items: BTreeMap<ProductId, u32>,
    /// Saved address to deliver to.
    pub address_id: AddressId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_decodes_backend_text() {
        let status: OrderStatus = serde_json::from_value(json!("待发货")).unwrap();
        assert_eq!(status, OrderStatus::PendingShipment);
        assert_eq!(status.tone().as_str(), "info");
    }

    #[test]
    fn unrecognised_status_is_unknown() {
        let status: OrderStatus = serde_json::from_value(json!("退款中")).unwrap();
        assert_eq!(status, OrderStatus::Unknown);
        assert_eq!(status.tone(), BadgeTone::Neutral);
        assert_eq!(status.tone().as_str(), "");
    }

    #[test]
    fn tones_cover_every_status() {
        let tones = [
            (OrderStatus::PendingPayment, "warning"),
            (OrderStatus::PendingShipment, "info"),
            (OrderStatus::PendingReceipt, "primary"),
            (OrderStatus::Completed, "success"),
            (OrderStatus::Cancelled, "danger"),
        ];
        for (status, tone) in tones {
            assert_eq!(status.tone().as_str(), tone);
        }
        assert!(OrderStatus::PendingPayment.can_cancel());
        assert!(!OrderStatus::Completed.can_cancel());
    }

    #[test]
    fn order_decodes_backend_shape() {
        let order: Order = serde_json::from_value(json!({
            "orderId": 11,
            "customerId": 3,
            "shopId": null,
            "orderDate": 1_741_444_200_000_i64,
            "totalAmount": 25.0,
            "status": "已完成",
            "receiverName": "Li",
            "receiverPhone": "123",
            "receiverAddress": "Zhejiang Hangzhou Xihu No. 1",
            "productId": 5,
            "quantity": 2,
            "priceAtPurchase": 12.5
        }))
        .unwrap();

        assert_eq!(order.shop_id, None);
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.quantity, 2);
    }

    #[test]
    fn create_order_serializes_cart_as_object() {
        let request = CreateOrderRequest {
            cart_items: BTreeMap::from([(5, 2), (9, 1)]),
            address_id: 4,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"cartItems": {"5": 2, "9": 1}, "addressId": 4})
        );
    }
}
