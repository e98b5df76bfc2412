//! # Menu Loop
//!
//! The line-based input/output boundary: prints the fixed six-option menu,
//! reads and parses user input, and dispatches to the session. Generic over
//! [`BufRead`]/[`Write`] so tests can drive it with in-memory buffers.

use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};

use crate::session::Session;

const BANNER: &str = "***********************************";
const INVALID_CHOICE: &str = "INVALID CHOICE. PLEASE ENTER A VALID NUMBER.";
const INVALID_INPUT: &str = "INVALID INPUT. PLEASE ENTER A VALID NUMBER.";
const NO_RECIPE: &str = "NO RECIPE ENTERED YET.";

/// Run the menu loop until the user chooses Exit or the input stream ends.
///
/// Every loop iteration prints the menu block and reads one choice line.
/// Parse failures and missing-recipe preconditions are reported to the
/// output stream and never terminate the loop.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, mut output: W) -> Result<()> {
    loop {
        write_menu(&mut output)?;

        let line = match read_line(&mut input)? {
            Some(line) => line,
            // Closed input stream ends the session like Exit would
            None => break,
        };

        let choice: i32 = match line.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                writeln!(output, "{INVALID_CHOICE}")?;
                continue;
            }
        };
        debug!("menu choice: {choice}");

        match choice {
            1 => enter_recipe(session, &mut input, &mut output)?,
            2 => match session.display() {
                Ok(text) => writeln!(output, "{text}")?,
                Err(_) => writeln!(output, "{NO_RECIPE}")?,
            },
            3 => scale_recipe(session, &mut input, &mut output)?,
            4 => match session.reset() {
                Ok(()) => writeln!(output, "Recipe reset to original values.")?,
                Err(_) => writeln!(output, "{NO_RECIPE}")?,
            },
            5 => {
                session.clear();
                writeln!(output, "Recipe data cleared.")?;
            }
            6 => {
                writeln!(output, "THANK YOU FOR USING THIS APPLICATION")?;
                break;
            }
            _ => writeln!(output, "{INVALID_CHOICE}")?,
        }
    }

    Ok(())
}

/// Parse a quantity string to f64 (handles fractions and decimals)
pub fn parse_quantity(quantity_str: &str) -> Option<f64> {
    let trimmed = quantity_str.trim();
    if trimmed.contains('/') {
        // Handle fractions like "1/2"
        let parts: Vec<&str> = trimmed.split('/').collect();
        if parts.len() == 2 {
            match (parts[0].trim().parse::<f64>(), parts[1].trim().parse::<f64>()) {
                (Ok(numerator), Ok(denominator)) if denominator != 0.0 => {
                    Some(numerator / denominator)
                }
                _ => None,
            }
        } else {
            None
        }
    } else {
        // Handle regular numbers, replace comma with dot for European format
        trimmed.replace(',', ".").parse::<f64>().ok()
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "{BANNER}")?;
    writeln!(output, "Welcome To Your Recipe Application")?;
    writeln!(output, "{BANNER}")?;
    writeln!(output, "1. Enter new recipe")?;
    writeln!(output, "2. Display recipe")?;
    writeln!(output, "3. Scale recipe")?;
    writeln!(output, "4. Reset recipe")?;
    writeln!(output, "5. Clear recipe data")?;
    writeln!(output, "6. Exit Program")?;
    writeln!(output, "{BANNER}")?;
    Ok(())
}

/// Read one line, stripping the trailing newline. `None` means end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    while buf.ends_with('\n') || buf.ends_with('\r') {
        buf.pop();
    }
    Ok(Some(buf))
}

/// Collect a new recipe: name, ingredients, then steps.
///
/// The recipe is installed into the session as soon as the name is read. A
/// numeric parse failure anywhere afterwards abandons input collection on
/// the spot, so ingredients and steps appended up to that point stay
/// attached to the loaded recipe.
fn enter_recipe<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "Enter recipe name: ")?;
    let name = match read_line(input)? {
        Some(name) => name,
        None => return Ok(()),
    };
    let recipe = session.begin_recipe(&name);

    writeln!(output, "Enter number of ingredients: ")?;
    let num_ingredients: i32 = match read_line(input)?.and_then(|l| l.trim().parse().ok()) {
        Some(count) => count,
        None => {
            writeln!(output, "{INVALID_INPUT}")?;
            return Ok(());
        }
    };

    for i in 0..num_ingredients {
        writeln!(output, "Enter the name of ingredient {}: ", i + 1)?;
        let ingredient_name = match read_line(input)? {
            Some(name) => name,
            None => return Ok(()),
        };

        writeln!(output, "Enter the quantity of {ingredient_name}: ")?;
        let quantity = match read_line(input)?.as_deref().and_then(parse_quantity) {
            // Fractional quantities narrow to whole numbers: 7.9 stores as 7
            Some(quantity) => quantity as i32,
            None => {
                writeln!(output, "{INVALID_INPUT}")?;
                return Ok(());
            }
        };

        writeln!(output, "Enter the unit of measurement for {ingredient_name}: ")?;
        let unit = match read_line(input)? {
            Some(unit) => unit,
            None => return Ok(()),
        };

        recipe.add_ingredient(&ingredient_name, quantity, &unit);
    }

    writeln!(output, "Enter number of steps: ")?;
    let num_steps: i32 = match read_line(input)?.and_then(|l| l.trim().parse().ok()) {
        Some(count) => count,
        None => {
            writeln!(output, "{INVALID_INPUT}")?;
            return Ok(());
        }
    };

    for i in 0..num_steps {
        writeln!(output, "Enter step {}: ", i + 1)?;
        let description = match read_line(input)? {
            Some(description) => description,
            None => return Ok(()),
        };
        recipe.add_step(&description);
    }

    info!(
        "recipe entered with {} ingredients and {} steps",
        recipe.ingredient_count(),
        recipe.step_count()
    );
    Ok(())
}

/// Prompt for a scaling factor and apply it to the loaded recipe
fn scale_recipe<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    if !session.is_loaded() {
        writeln!(output, "{NO_RECIPE}")?;
        return Ok(());
    }

    writeln!(output, "Enter scaling factor (0.5, 2, or 3): ")?;
    match read_line(input)?.as_deref().and_then(parse_quantity) {
        Some(factor) => match session.scale(factor) {
            Ok(()) => writeln!(output, "Recipe scaled successfully.")?,
            Err(_) => writeln!(output, "{NO_RECIPE}")?,
        },
        None => writeln!(output, "{INVALID_INPUT}")?,
    }
    Ok(())
}
