//! Turns an argument vector into a `SelectionRecord`

use super::lexer::{self, Token};
use super::selection::{SelectionBuilder, SelectionRecord};
use crate::error::{ResolveError, Result, UsageError};
use std::ffi::OsString;

/// Resolve an argument vector (program name excluded).
///
/// Nothing outside `args` is consulted, so the same input always yields
/// the same record.
pub fn resolve<I, T>(args: I) -> Result<SelectionRecord>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let tokens = lexer::lex(args)?;

    if tokens.iter().any(|t| matches!(t, Token::Help)) {
        return Err(ResolveError::HelpRequested);
    }

    let tokens = adopt_separated_values(tokens);

    let mut builder = SelectionBuilder::new();
    let mut positionals = Vec::new();
    for token in tokens {
        match token {
            Token::Toggle { toggle, value } => builder = builder.observe(toggle, value),
            Token::Positional { value, .. } => positionals.push(value),
            Token::Help => {}
        }
    }

    let target = single_target(positionals)?;
    Ok(builder.finish(target))
}

/// Let a valueless toggle take the following positional as its config
/// path, left to right, while that still leaves a target behind.
///
/// `-e cfg app` reads as `-ecfg app`; `-e app` keeps `app` as the target.
fn adopt_separated_values(tokens: Vec<Token>) -> Vec<Token> {
    let mut spare = tokens
        .iter()
        .filter(|t| matches!(t, Token::Positional { .. }))
        .count()
        .saturating_sub(1);

    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if spare > 0 {
            if let Token::Positional {
                value,
                escaped: false,
            } = &token
            {
                if let Some(Token::Toggle { value: slot, .. }) = out.last_mut() {
                    if slot.is_none() {
                        *slot = Some(value.clone());
                        spare -= 1;
                        continue;
                    }
                }
            }
        }
        out.push(token);
    }
    out
}

fn single_target(positionals: Vec<String>) -> std::result::Result<String, UsageError> {
    let count = positionals.len();
    let mut iter = positionals.into_iter();
    match (iter.next(), count) {
        (None, _) => Err(UsageError::MissingTarget),
        (Some(target), 1) => {
            let trimmed = target.trim();
            if trimmed.is_empty() {
                Err(UsageError::EmptyTarget)
            } else {
                Ok(trimmed.to_string())
            }
        }
        (Some(first), _) => Err(UsageError::ExtraTargets {
            count,
            found: std::iter::once(first).chain(iter).collect(),
        }),
    }
}
