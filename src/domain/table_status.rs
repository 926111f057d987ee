use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableStatus{
    #[serde(rename = "Not Reserved")]
    NotReserved,
    #[serde(rename = "Reserved")]
    Reserved
}

impl TableStatus {
    pub fn as_str(&self) -> &'static str{
        match self {
            TableStatus::NotReserved => "Not Reserved",
            TableStatus::Reserved => "Reserved"
        }
    }

    pub fn parse(status: &str) -> Result<TableStatus, String>{
        match status {
            "Not Reserved" => Ok(TableStatus::NotReserved),
            "Reserved" => Ok(TableStatus::Reserved),
            other => Err(format!("{} is not a valid table status", other))
        }
    }

    /// Status after a reservation, fails if the table is already reserved
    pub fn reserve(self) -> Result<TableStatus, &'static str>{
        match self {
            TableStatus::NotReserved => Ok(TableStatus::Reserved),
            TableStatus::Reserved => Err("Table is already reserved")
        }
    }

    /// Status after releasing a reservation, fails if the table is not reserved
    pub fn unreserve(self) -> Result<TableStatus, &'static str>{
        match self {
            TableStatus::Reserved => Ok(TableStatus::NotReserved),
            TableStatus::NotReserved => Err("Table is not reserved")
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
