//! # Input Parsing
//!
//! Turns one line of user input into a [`Command`].
//!
//! ```text
//! plants                     list the catalog
//! add <name>                 add one of a plant
//! inc <name>   | + <name>    one more
//! dec <name>   | - <name>    one fewer (removes at zero)
//! remove <name>              drop the line
//! set <name> <qty>           set quantity (≤ 0 removes)
//! cart                       show the cart
//! checkout                   start checkout
//! help                       list commands
//! quit                       leave
//! ```
//!
//! Plant names may contain spaces. For `set` the quantity is the last word.

use std::str::FromStr;

use crate::error::ShellError;

/// One parsed intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Plants,
    Cart,
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Set { name: String, quantity: i64 },
    Checkout,
    Help,
    Quit,
}

/// Usage lines shown by `help`.
pub const USAGE: &[(&str, &str)] = &[
    ("plants", "List plants by category"),
    ("add <name>", "Add a plant to the cart"),
    ("inc <name>", "Increase quantity by one"),
    ("dec <name>", "Decrease quantity by one"),
    ("remove <name>", "Remove a plant from the cart"),
    ("set <name> <qty>", "Set quantity (0 or less removes)"),
    ("cart", "Show the cart and total"),
    ("checkout", "Proceed to checkout"),
    ("help", "Show this list"),
    ("quit", "Leave the shop"),
];

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "plants" | "list" | "ls" => no_args(Command::Plants, verb, rest),
            "cart" => no_args(Command::Cart, verb, rest),
            "checkout" => no_args(Command::Checkout, verb, rest),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "add" => plant_name(verb, rest).map(Command::Add),
            "inc" | "+" => plant_name(verb, rest).map(Command::Increment),
            "dec" | "-" => plant_name(verb, rest).map(Command::Decrement),
            "remove" | "rm" | "delete" => plant_name(verb, rest).map(Command::Remove),
            "set" => parse_set(rest),
            "" => Err(ShellError::invalid("Empty command")),
            other => Err(ShellError::invalid(format!(
                "Unknown command '{}'. Type 'help' for a list.",
                other
            ))),
        }
    }
}

fn no_args(command: Command, verb: &str, rest: &str) -> Result<Command, ShellError> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(ShellError::invalid(format!("'{}' takes no arguments", verb)))
    }
}

fn plant_name(verb: &str, rest: &str) -> Result<String, ShellError> {
    if rest.is_empty() {
        Err(ShellError::invalid(format!("Usage: {} <name>", verb)))
    } else {
        Ok(rest.to_string())
    }
}

fn parse_set(rest: &str) -> Result<Command, ShellError> {
    let usage = || ShellError::invalid("Usage: set <name> <qty>");

    let (name, quantity) = rest.rsplit_once(char::is_whitespace).ok_or_else(usage)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(usage());
    }

    let quantity = quantity
        .parse::<i64>()
        .map_err(|_| ShellError::invalid(format!("'{}' is not a whole number", quantity)))?;

    Ok(Command::Set {
        name: name.to_string(),
        quantity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        line.parse().unwrap()
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(parse("plants"), Command::Plants);
        assert_eq!(parse("  CART  "), Command::Cart);
        assert_eq!(parse("?"), Command::Help);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_names_with_spaces() {
        assert_eq!(parse("add Snake Plant"), Command::Add("Snake Plant".into()));
        assert_eq!(
            parse("+   Aloe Vera Medicinal "),
            Command::Increment("Aloe Vera Medicinal".into())
        );
        assert_eq!(parse("rm Jasmine"), Command::Remove("Jasmine".into()));
    }

    #[test]
    fn test_set_takes_last_word_as_quantity() {
        assert_eq!(
            parse("set Boston Fern 4"),
            Command::Set {
                name: "Boston Fern".into(),
                quantity: 4
            }
        );
        assert_eq!(
            parse("set Fern -2"),
            Command::Set {
                name: "Fern".into(),
                quantity: -2
            }
        );
    }

    #[test]
    fn test_invalid_input() {
        assert!("add".parse::<Command>().is_err());
        assert!("set Fern".parse::<Command>().is_err());
        assert!("set Fern lots".parse::<Command>().is_err());
        assert!("cart please".parse::<Command>().is_err());
        assert!("water Fern".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }
}
