pub mod contact;

pub use contact::{AddressBook, Contact};
