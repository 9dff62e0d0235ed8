//! # Rendering
//!
//! Writes responses and errors to the output stream as text or JSON.

use std::io::Write;

use crate::commands::{CartResponse, CatalogResponse, HelpResponse, Response};
use crate::error::{ErrorResponse, ShellError, ShellResult};
use crate::state::OutputFormat;

const RULE: &str = "────────────────────────────────────────────────────────";

/// Writes a successful response.
pub fn render<W: Write>(out: &mut W, format: OutputFormat, response: &Response) -> ShellResult<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(response)?)?;
        }
        OutputFormat::Text => match response {
            Response::Catalog(catalog) => catalog_text(out, catalog)?,
            Response::Cart(cart) => cart_text(out, cart)?,
            Response::Help(help) => help_text(out, help)?,
        },
    }
    Ok(())
}

/// Writes a command error.
pub fn render_error<W: Write>(out: &mut W, format: OutputFormat, err: &ShellError) -> ShellResult<()> {
    match format {
        OutputFormat::Json => {
            let body = ErrorResponse::from(err);
            writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        }
        OutputFormat::Text => writeln!(out, "! {}", err)?,
    }
    Ok(())
}

/// Writes the banner shown once at startup. JSON output has none.
pub fn render_banner<W: Write>(
    out: &mut W,
    format: OutputFormat,
    store_name: &str,
    tagline: &str,
) -> ShellResult<()> {
    if format == OutputFormat::Text {
        writeln!(out, "{}", store_name)?;
        writeln!(out, "{}", tagline)?;
        writeln!(out, "Type 'help' for commands.")?;
    }
    Ok(())
}

fn catalog_text<W: Write>(out: &mut W, catalog: &CatalogResponse) -> ShellResult<()> {
    writeln!(out, "{}  [cart: {}]", catalog.store_name, catalog.cart_badge)?;

    for category in &catalog.categories {
        writeln!(out)?;
        writeln!(out, "== {} ==", category.category)?;
        for plant in &category.plants {
            let marker = if plant.in_cart { "  (added to cart)" } else { "" };
            writeln!(out, "  {:<28} {:>8}{}", plant.name, plant.price, marker)?;
            if let Some(description) = &plant.description {
                writeln!(out, "      {}", description)?;
            }
        }
    }
    Ok(())
}

fn cart_text<W: Write>(out: &mut W, cart: &CartResponse) -> ShellResult<()> {
    if cart.items.is_empty() {
        writeln!(out, "Your cart is empty. Total: {}", cart.total_display)?;
        return Ok(());
    }

    writeln!(
        out,
        "CART  {} line(s), {} plant(s)",
        cart.summary.item_count, cart.summary.total_quantity
    )?;
    writeln!(out, "{}", RULE)?;
    for line in &cart.items {
        writeln!(
            out,
            "  {:<26} {:>8}  x{:<4} {:>12}",
            line.name, line.unit_price, line.quantity, line.line_total_display
        )?;
    }
    writeln!(out, "{}", RULE)?;
    writeln!(out, "  {:<44} {:>12}", "TOTAL", cart.total_display)?;
    Ok(())
}

fn help_text<W: Write>(out: &mut W, help: &HelpResponse) -> ShellResult<()> {
    for entry in &help.commands {
        writeln!(out, "  {:<20} {}", entry.usage, entry.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::help;

    fn text(format: OutputFormat, response: &Response) -> String {
        let mut out = Vec::new();
        render(&mut out, format, response).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_help_text() {
        let output = text(OutputFormat::Text, &Response::Help(help()));
        assert!(output.contains("add <name>"));
        assert!(output.contains("Leave the shop"));
    }

    #[test]
    fn test_json_is_the_bare_response() {
        let output = text(OutputFormat::Json, &Response::Help(help()));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value["commands"].is_array());
    }

    #[test]
    fn test_error_rendering() {
        let err = ShellError::EmptyCart;

        let mut out = Vec::new();
        render_error(&mut out, OutputFormat::Text, &err).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "! Your cart is empty\n");

        let mut out = Vec::new();
        render_error(&mut out, OutputFormat::Json, &err).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["code"], "BUSINESS_LOGIC");
    }
}
