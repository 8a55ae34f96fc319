use std::collections::HashMap;
use std::fmt;

use regex::Regex;

use crate::errors::AppError;

/// A contact that can hold any number of phone numbers.
/// The interactive loop keeps one number per name and does not use this
/// type; it is the richer record layer behind [`AddressBook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phones: Vec<String>,
}

impl Contact {
    pub fn new(name: String) -> Self {
        Contact {
            name,
            phones: Vec::new(),
        }
    }

    pub fn add_phone(&mut self, phone: String) -> Result<(), AppError> {
        if !validate_number(&phone)? {
            return Err(AppError::Validation(
                "Phone number must be 10 digits".to_string(),
            ));
        }

        self.phones.push(phone);
        Ok(())
    }

    /// Drop every number equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p != phone);
    }

    /// Replace the first matching number in place and report whether a
    /// match was found. The replacement is stored as given and does not
    /// pass the ten digit check.
    pub fn edit_phone(&mut self, old: &str, new: String) -> bool {
        for phone in self.phones.iter_mut() {
            if phone == old {
                *phone = new;
                return true;
            }
        }
        false
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones.join("; ")
        )
    }
}

/// Exactly ten digits, nothing else.
pub fn validate_number(phone: &str) -> Result<bool, AppError> {
    let re = Regex::new(r"^\d{10}$")?;
    Ok(re.is_match(phone))
}

pub struct AddressBook {
    pub records: HashMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Insert the record under its name, overwriting any record already
    /// saved under that name.
    pub fn add_record(&mut self, record: Contact) {
        self.records.insert(record.name.clone(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.records.get(name)
    }

    pub fn delete(&mut self, name: &str) {
        self.records.remove(name);
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .records
            .values()
            .map(Contact::to_string)
            .collect::<Vec<String>>();

        write!(f, "{}", lines.join("\n"))
    }
}
