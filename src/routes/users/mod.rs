mod get;
mod login;
mod logout;
mod signup;

pub use get::*;
pub use login::*;
pub use logout::*;
pub use signup::*;

use serde::Serialize;

use crate::{auth::TokenPair, models::UserProfile};

// Body of a successful signup or login
#[derive(Serialize, Debug)]
pub struct AuthPayload{
    pub user: UserProfile,
    #[serde(flatten)]
    pub tokens: TokenPair
}
