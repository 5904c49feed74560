pub mod contact;
pub mod telegram;
