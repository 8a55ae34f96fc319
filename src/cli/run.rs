use std::io::{self, Write};

use clap::Parser;
use log::debug;

use crate::cli::command::{self, Cli, Command};
use crate::errors::AppError;
use crate::store::MemStore;

pub fn run_app() -> Result<(), AppError> {
    let _cli = Cli::parse();

    let mut store = MemStore::new();

    println!("Welcome to the assistant bot! Type 'exit' or 'close' to quit.");

    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // stdin closed
            println!("Good bye!");
            break;
        }

        let mut tokens = line.split_whitespace();
        let Some(word) = tokens.next() else {
            println!("Invalid command.");
            continue;
        };
        let args: Vec<&str> = tokens.collect();

        match command::parse_command(word) {
            Ok(Command::Exit) => {
                println!("Good bye!");
                break;
            }
            Ok(Command::Hello) => println!("How can I help you?"),
            Ok(Command::Add) => print_reply(add_contact(&mut store, &args))?,
            Ok(Command::Change) => print_reply(change_contact(&mut store, &args))?,
            Ok(Command::Phone) => print_reply(show_phone(&store, &args))?,
            Ok(Command::All) => println!("{}", show_all(&store)),
            Err(e) => {
                debug!("{e}");
                println!("Invalid command.");
            }
        }
    }

    Ok(())
}

/// Print the handler's reply, or the canonical line for a recoverable
/// failure. Errors without a canonical reply propagate and end the
/// process.
fn print_reply(outcome: Result<String, AppError>) -> Result<(), AppError> {
    match outcome {
        Ok(reply) => println!("{reply}"),
        Err(err) => match err.user_message() {
            Some(reply) => println!("{reply}"),
            None => return Err(err),
        },
    }
    Ok(())
}

pub fn add_contact(store: &mut MemStore, args: &[&str]) -> Result<String, AppError> {
    let (name, phone) = name_and_phone(args)?;

    debug!("add {name}");
    store.insert(name, phone);

    Ok("Contact added.".to_string())
}

pub fn change_contact(store: &mut MemStore, args: &[&str]) -> Result<String, AppError> {
    let (name, phone) = name_and_phone(args)?;

    if !store.contains(&name) {
        return Err(AppError::NotFound("Contact".to_string()));
    }

    debug!("change {name}");
    store.insert(name, phone);

    Ok("Contact updated.".to_string())
}

pub fn show_phone(store: &MemStore, args: &[&str]) -> Result<String, AppError> {
    // Only the name is read, extra tokens are ignored
    let name = args.first().ok_or(AppError::NotEnoughArgs)?;

    match store.phone(name) {
        Some(phone) => Ok(phone.to_string()),
        None => Err(AppError::NotFound("Contact".to_string())),
    }
}

pub fn show_all(store: &MemStore) -> String {
    store
        .iter()
        .map(|(name, phone)| format!("{name}: {phone}"))
        .collect::<Vec<String>>()
        .join("\n")
}

fn name_and_phone(args: &[&str]) -> Result<(String, String), AppError> {
    match args {
        [name, phone] => Ok((name.to_string(), phone.to_string())),
        [] | [_] => Err(AppError::NotEnoughArgs),
        _ => Err(AppError::Validation(
            "expected a name and a phone".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn add_then_show_phone() -> Result<(), AppError> {
        let mut store = MemStore::new();

        let reply = add_contact(&mut store, &["Alice", "1234567890"])?;
        assert_eq!(reply, "Contact added.");

        let reply = show_phone(&store, &["Alice"])?;
        assert_eq!(reply, "1234567890");
        Ok(())
    }

    #[test]
    fn add_with_one_argument_is_not_enough() {
        let mut store = MemStore::new();

        let err = add_contact(&mut store, &["Alice"]).unwrap_err();

        assert_eq!(err.user_message(), Some("Provide enough arguments."));
    }

    #[test]
    fn add_with_extra_arguments_is_an_invalid_value() {
        let mut store = MemStore::new();

        let err = add_contact(&mut store, &["Alice", "123", "456"]).unwrap_err();

        assert_eq!(
            err.user_message(),
            Some("Give me the correct name and phone please.")
        );
    }

    #[test]
    fn add_overwrites_silently() -> Result<(), AppError> {
        let mut store = MemStore::new();

        add_contact(&mut store, &["Dan", "1"])?;
        add_contact(&mut store, &["Dan", "2"])?;

        assert_eq!(show_phone(&store, &["Dan"])?, "2");
        assert_eq!(store.len(), 1);
        Ok(())
    }

    #[test]
    fn change_missing_contact_is_not_found() {
        let mut store = MemStore::new();

        let err = change_contact(&mut store, &["Bob", "111"]).unwrap_err();

        assert_eq!(err.user_message(), Some("Contact not found."));
    }

    #[test]
    fn change_overwrites_the_stored_number() -> Result<(), AppError> {
        let mut store = MemStore::new();

        add_contact(&mut store, &["Bob", "1112223333"])?;
        let reply = change_contact(&mut store, &["Bob", "9998887777"])?;

        assert_eq!(reply, "Contact updated.");
        assert_eq!(show_phone(&store, &["Bob"])?, "9998887777");
        Ok(())
    }

    #[test]
    fn show_phone_for_missing_contact_is_not_found() {
        let store = MemStore::new();

        let err = show_phone(&store, &["Carol"]).unwrap_err();

        assert_eq!(err.user_message(), Some("Contact not found."));
    }

    #[test]
    fn show_phone_without_arguments_is_not_enough() {
        let store = MemStore::new();

        let err = show_phone(&store, &[]).unwrap_err();

        assert_eq!(err.user_message(), Some("Provide enough arguments."));
    }

    #[test]
    fn show_phone_ignores_extra_tokens() -> Result<(), AppError> {
        let mut store = MemStore::new();

        add_contact(&mut store, &["Alice", "1234567890"])?;

        assert_eq!(show_phone(&store, &["Alice", "whatever"])?, "1234567890");
        Ok(())
    }

    #[test]
    fn show_all_on_empty_store_is_an_empty_string() {
        let store = MemStore::new();

        assert_eq!(show_all(&store), "");
    }

    #[test]
    fn show_all_lists_every_entry() -> Result<(), AppError> {
        let mut store = MemStore::new();

        add_contact(&mut store, &["Alice", "1234567890"])?;
        add_contact(&mut store, &["Bob", "0987654321"])?;

        // Iteration order is unspecified, compare sorted lines
        let all = show_all(&store);
        let mut lines: Vec<&str> = all.lines().collect();
        lines.sort();

        assert_eq!(lines, vec!["Alice: 1234567890", "Bob: 0987654321"]);
        Ok(())
    }
}
