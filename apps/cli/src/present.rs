//! Interactive question/answer loop.
//!
//! One card at a time: print the question, block until the user acknowledges
//! with a line of input, then render the answer. The answer field holds HTML
//! as stored in the collection; it is converted to markdown and laid out by
//! the terminal skin with a little padding around it.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use deck_core::Card;
use termimad::MadSkin;

/// Present the sampled cards on stdin/stdout.
pub fn present(cards: &[Card]) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    present_with(cards, &mut stdin.lock(), &mut stdout.lock())
}

/// Presentation loop over explicit input/output handles.
pub fn present_with<R, W>(cards: &[Card], input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let skin = MadSkin::default();

    for card in cards {
        writeln!(output)?;
        writeln!(
            output,
            "{}",
            skin.inline(&format!("**Question: {}**", card.question()))
        )?;

        write!(output, "reveal? [ENTER] ")?;
        output.flush()?;

        let mut ack = String::new();
        let read = input
            .read_line(&mut ack)
            .context("failed reading acknowledgment")?;
        if read == 0 {
            bail!("input closed while waiting for reveal");
        }

        let markdown = html2md::parse_html(card.answer());
        let rendered = skin.text(&markdown, None).to_string();

        writeln!(output)?;
        for line in rendered.lines() {
            writeln!(output, "  {line}")?;
        }
        writeln!(output)?;
        writeln!(output)?;
    }

    Ok(())
}
