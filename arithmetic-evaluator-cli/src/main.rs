use anyhow::{bail, Context, Result};
use arithmetic_evaluator::interpreter::{evaluate, to_postfix, tokens_to_string};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{debug, info};
use std::io;
use std::io::{BufRead, Write};

/// Evaluates arithmetic expressions
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate. Expressions are read from standard input,
    /// one per line, when this is left out.
    expression: Option<String>,

    /// Print the expression in postfix notation instead of its value
    #[clap(short, long)]
    postfix: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match &args.expression {
        Some(expression) => {
            let answer = answer(expression, args.postfix)
                .with_context(|| format!("Could not evaluate {:?}", expression))?;
            println!("{}", answer);
        }
        None => {
            info!("reading expressions from standard input");
            let rejected = answer_lines(
                io::stdin().lock(),
                &mut io::stdout(),
                &mut io::stderr(),
                args.postfix,
            )?;
            if rejected > 0 {
                bail!("{} expression(s) were rejected", rejected);
            }
        }
    }

    Ok(())
}

/// The value of the expression, or its postfix form.
fn answer(expression: &str, postfix: bool) -> Result<String> {
    if postfix {
        let postfix_tokens = to_postfix(expression)?;
        tokens_to_string(&postfix_tokens)
    } else {
        Ok(evaluate(expression)?.to_string())
    }
}

/// Answers every non-blank line of `input`, reporting rejected lines to
/// `errors` without stopping. Returns the number of rejected lines.
fn answer_lines(
    input: impl BufRead,
    output: &mut impl Write,
    errors: &mut impl Write,
    postfix: bool,
) -> Result<usize> {
    let mut rejected = 0;

    for (index, line) in input.lines().enumerate() {
        let line = line.context("Failed to read expression")?;
        if line.trim().is_empty() {
            continue;
        }

        let line_number = index + 1;
        match answer(&line, postfix) {
            Ok(answer) => writeln!(output, "{}", answer)?,
            Err(error) => {
                debug!("rejected line {}: {:?}", line_number, line);
                writeln!(errors, "line {}: {}", line_number, error)?;
                rejected += 1;
            }
        }
    }

    Ok(rejected)
}
