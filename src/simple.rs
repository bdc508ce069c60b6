//! Plain line-oriented front end
//!
//! Prints each round to a normal terminal stream and reads answers line
//! by line. Useful where an alternate screen is unavailable, and easy to
//! drive from scripted input.

use std::io::{BufRead, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};

use crate::flags::flag_or_placeholder;
use crate::quiz::{Phase, QuizSession, RoundSource, OPTIONS_PER_ROUND};
use crate::{error, Result};

const FLAG_WIDTH: u16 = 18;
const FLAG_HEIGHT: u16 = 4;

/// Play until the user quits or input ends
pub fn run_plain<S, R, W>(session: &mut QuizSession<S>, mut input: R, mut out: W) -> Result<()>
where
    S: RoundSource,
    R: BufRead,
    W: Write,
{
    loop {
        print_round(session, &mut out)?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        if is_quit(&line) {
            return Ok(());
        }

        let choice = match line.parse::<usize>() {
            Ok(n) if (1..=OPTIONS_PER_ROUND).contains(&n) => n - 1,
            _ => {
                writeln!(out, "Please enter a number from 1 to {}.", OPTIONS_PER_ROUND)?;
                continue;
            }
        };

        let feedback = match session.submit_answer(choice) {
            Ok(feedback) => feedback,
            Err(err) if error::is_usage_error(&err) => {
                writeln!(out, "{}", error::user_friendly_message(&err))?;
                continue;
            }
            Err(err) => return Err(err),
        };

        writeln!(out)?;
        writeln!(out, "{}", feedback.title())?;
        writeln!(out, "{}", feedback.message())?;
        write!(out, "[Enter] {} ", feedback.action_label())?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            return Ok(());
        };
        if is_quit(&line) {
            return Ok(());
        }
        session.acknowledge_feedback()?;
        writeln!(out)?;
    }
}

fn print_round<S: RoundSource, W: Write>(session: &QuizSession<S>, out: &mut W) -> Result<()> {
    debug_assert_eq!(session.phase(), Phase::AwaitingAnswer);

    writeln!(
        out,
        "Score: {}/{}",
        session.score(),
        session.rounds_per_session()
    )?;
    writeln!(out, "Tap the flag of {}", session.target_country())?;

    for (index, country) in session.round().options().iter().enumerate() {
        writeln!(out, "{})", index + 1)?;
        print_flag(country, out)?;
    }

    write!(out, "Your choice (1-{}, q to quit): ", OPTIONS_PER_ROUND)?;
    out.flush()?;
    Ok(())
}

fn print_flag<W: Write>(country: &str, out: &mut W) -> Result<()> {
    let art = flag_or_placeholder(country);
    for row in art.grid(FLAG_WIDTH, FLAG_HEIGHT) {
        queue!(out, Print("   "))?;
        for (r, g, b) in row {
            queue!(out, SetBackgroundColor(Color::Rgb { r, g, b }), Print(" "))?;
        }
        queue!(out, ResetColor, Print("\n"))?;
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn is_quit(line: &str) -> bool {
    line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit")
}
