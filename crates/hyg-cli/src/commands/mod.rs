pub mod delete;
pub mod dispatch;
pub mod hash_password;
pub mod history;
pub mod inspect;
pub mod journal;
pub mod sectors;
pub mod shared;
