pub use crate::cli::{
    command::{self, Command},
    run::{add_contact, change_contact, run_app, show_all, show_phone},
};
pub use crate::domain::contact::{AddressBook, Contact};
pub use crate::errors::AppError;
pub use crate::store::{MemStore, memory};
