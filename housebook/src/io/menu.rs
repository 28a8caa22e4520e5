//! Interactive numbered menu over the record store.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::record::House;
use crate::core::sort::{SortKey, sort_records};

const MENU: &str = "\
1. Show all records
2. Sort by last name
3. Sort by first name
4. Sort by date
5. Exit";

/// One recognized menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    ShowAll,
    Sort(SortKey),
    Exit,
}

/// Unrecognized menu selection; reported and reprompted, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid menu choice '{raw}': enter a number from 1 to 5")]
struct ChoiceError {
    raw: String,
}

fn parse_choice(raw: &str) -> Result<Choice, ChoiceError> {
    match raw.trim().parse::<u32>() {
        Ok(1) => Ok(Choice::ShowAll),
        Ok(2) => Ok(Choice::Sort(SortKey::LastName)),
        Ok(3) => Ok(Choice::Sort(SortKey::FirstName)),
        Ok(4) => Ok(Choice::Sort(SortKey::Date)),
        Ok(5) => Ok(Choice::Exit),
        _ => Err(ChoiceError {
            raw: raw.trim().to_string(),
        }),
    }
}

/// Run the menu loop until the user exits or input ends.
///
/// Choices 2 to 4 sort the store in place and then print it, so the new
/// order is visible immediately. An unrecognized choice writes a
/// diagnostic to `errors` and reprompts. End of input counts as a normal
/// exit so piped sessions terminate cleanly.
pub fn run_menu(
    records: &mut [House],
    mut input: impl BufRead,
    mut output: impl Write,
    mut errors: impl Write,
) -> Result<()> {
    loop {
        writeln!(output, "{MENU}").context("write menu")?;
        write!(output, "Choice: ").context("write prompt")?;
        output.flush().context("flush prompt")?;

        let mut line = String::new();
        let read = input.read_line(&mut line).context("read menu choice")?;
        if read == 0 {
            debug!("input closed, leaving menu");
            return Ok(());
        }

        match parse_choice(&line) {
            Ok(Choice::ShowAll) => show_all(records, &mut output)?,
            Ok(Choice::Sort(key)) => {
                sort_records(records, key);
                show_all(records, &mut output)?;
            }
            Ok(Choice::Exit) => return Ok(()),
            Err(error) => {
                debug!(%error, "menu choice rejected");
                writeln!(errors, "{error}").context("write diagnostic")?;
            }
        }
    }
}

/// Print every record in current store order, one blank-line-separated
/// block per record.
fn show_all(records: &[House], output: &mut impl Write) -> Result<()> {
    for record in records {
        writeln!(output, "{record}").context("write record")?;
        writeln!(output).context("write record separator")?;
    }
    Ok(())
}
