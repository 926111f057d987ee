use std::fmt::Debug;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq)]
pub struct PhoneNumber(String);

impl PhoneNumber{
    // Numbers without a country code are read as Indian numbers
    pub fn parse(number: String) -> Result<PhoneNumber, String>{
        let trimmed = number.trim();

        if phonenumber::parse(Some(country::IN), trimmed).is_ok(){
            Ok(Self(trimmed.to_string()))
        } else {
            Err(format!("{} is not a valid phone number", number))
        }
    }

    pub fn inner(&self) -> String {
        self.0.clone()
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
