//! Interactive breed selection.

use std::io::{BufRead, Write};

use dogstats_core::error::Result;
use dogstats_data::query::lookup_breed;
use dogstats_data::table::{normalize_breed_name, BreedSlice, Table};
use tracing::debug;

pub const PROMPT: &str = "Please enter a dog breed: ";

/// Ask for a breed until one present in `table` is entered.
///
/// Unknown breeds print the error and ask again, with no retry limit. Returns
/// `Ok(None)` when `input` reaches end of file before a valid breed arrives.
pub fn prompt_breed<'a, R, W>(
    table: &'a Table,
    input: &mut R,
    output: &mut W,
) -> Result<Option<BreedSlice<'a>>>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed before a breed was chosen");
            return Ok(None);
        }

        let name = normalize_breed_name(&line);
        match lookup_breed(table, &name) {
            Ok(slice) => return Ok(Some(slice)),
            Err(e) if e.is_recoverable() => {
                debug!("Rejected breed {:?}", name);
                writeln!(output, "{}", e)?;
            }
            Err(e) => return Err(e),
        }
    }
}
