pub mod badge;
pub mod badged;
pub mod flex;
pub mod userpic;
