use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus{
    Pending,
    Paid
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str{
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID"
        }
    }

    pub fn parse(status: &str) -> Result<PaymentStatus, String>{
        match status.trim().to_uppercase().as_str() {
            "PENDING" => Ok(PaymentStatus::Pending),
            "PAID" => Ok(PaymentStatus::Paid),
            _ => Err(format!("{} is not a valid payment status, expected PENDING or PAID", status))
        }
    }

    pub fn is_paid(&self) -> bool{
        matches!(self, PaymentStatus::Paid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod{
    Card,
    Cash
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str{
        match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::Cash => "CASH"
        }
    }

    pub fn parse(method: &str) -> Result<PaymentMethod, String>{
        match method.trim().to_uppercase().as_str() {
            "CARD" => Ok(PaymentMethod::Card),
            "CASH" => Ok(PaymentMethod::Cash),
            _ => Err(format!("{} is not a valid payment method, expected CARD or CASH", method))
        }
    }
}
