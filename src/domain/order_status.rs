use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus{
    #[serde(rename = "Order Pending")]
    Pending,
    #[serde(rename = "Order Placed")]
    Placed,
    #[serde(rename = "Order Confirmed")]
    Confirmed,
    #[serde(rename = "Preparing Order")]
    Preparing,
    #[serde(rename = "Order Served")]
    Served,
    #[serde(rename = "Order Paid")]
    Paid,
    #[serde(rename = "Order Cancelled")]
    Cancelled,
    #[serde(rename = "Order Rejected")]
    Rejected
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Pending,
        OrderStatus::Placed,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Served,
        OrderStatus::Paid,
        OrderStatus::Cancelled,
        OrderStatus::Rejected
    ];

    pub fn as_str(&self) -> &'static str{
        match self {
            OrderStatus::Pending => "Order Pending",
            OrderStatus::Placed => "Order Placed",
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Preparing => "Preparing Order",
            OrderStatus::Served => "Order Served",
            OrderStatus::Paid => "Order Paid",
            OrderStatus::Cancelled => "Order Cancelled",
            OrderStatus::Rejected => "Order Rejected"
        }
    }

    pub fn parse(status: &str) -> Result<OrderStatus, String>{
        OrderStatus::ALL
            .into_iter()
            .find(|s| s.as_str() == status.trim())
            .ok_or_else(|| format!("{} is not a valid order status", status))
    }

    // No further items or table moves once an order reaches one of these
    pub fn is_terminal(&self) -> bool{
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled | OrderStatus::Rejected)
    }

    /// Status after the first item is attached: a pending order becomes placed,
    /// anything else is left alone.
    pub fn on_item_attached(self) -> Option<OrderStatus>{
        match self {
            OrderStatus::Pending => Some(OrderStatus::Placed),
            _ => None
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
