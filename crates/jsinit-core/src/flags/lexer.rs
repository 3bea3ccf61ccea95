//! Argument lexing into typed tokens

use super::grammar::{self, Flag};
use super::toggle::FeatureToggle;
use crate::error::UsageError;
use clap_lex::RawArgs;
use std::ffi::{OsStr, OsString};

/// One lexed argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Help,
    /// Toggle flag with its inline value, if one was attached
    Toggle {
        toggle: FeatureToggle,
        value: Option<String>,
    },
    /// Non-flag argument. `escaped` is set for arguments after `--`.
    Positional { value: String, escaped: bool },
}

/// Lex an argument vector (program name excluded)
pub fn lex<I, T>(args: I) -> Result<Vec<Token>, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw = RawArgs::new(args);
    let mut cursor = raw.cursor();
    let mut tokens = Vec::new();

    while let Some(arg) = raw.next(&mut cursor) {
        if arg.is_escape() {
            for rest in raw.remaining(&mut cursor) {
                tokens.push(Token::Positional {
                    value: to_utf8(rest)?,
                    escaped: true,
                });
            }
            break;
        }

        if let Some((name, value)) = arg.to_long() {
            let name = name.map_err(invalid_unicode)?;
            let flag = grammar::lookup_long(name)?;
            let value = value.map(to_utf8).transpose()?;
            tokens.push(flag_token(flag, value)?);
            continue;
        }

        if let Some(mut shorts) = arg.to_short() {
            while let Some(c) = shorts.next_flag() {
                let c = c.map_err(invalid_unicode)?;
                let flag = grammar::lookup_short(c).ok_or_else(|| unknown_short(c))?;

                if flag.takes_value() {
                    // The rest of the cluster is the value: `-ecfg`, or `-e=cfg`
                    let value = shorts
                        .next_value_os()
                        .map(to_utf8)
                        .transpose()?
                        .map(strip_equals);
                    tokens.push(flag_token(flag, value)?);
                    break;
                }
                tokens.push(flag_token(flag, None)?);
            }
            continue;
        }

        tokens.push(Token::Positional {
            value: to_utf8(arg.to_value_os())?,
            escaped: false,
        });
    }

    Ok(tokens)
}

fn flag_token(flag: Flag, value: Option<String>) -> Result<Token, UsageError> {
    match flag {
        Flag::Help if value.is_some() => Err(UsageError::UnexpectedValue {
            flag: flag.long_name().to_string(),
        }),
        Flag::Help => Ok(Token::Help),
        Flag::Toggle(toggle) => Ok(Token::Toggle { toggle, value }),
    }
}

fn strip_equals(value: String) -> String {
    match value.strip_prefix('=') {
        Some(rest) => rest.to_string(),
        None => value,
    }
}

fn to_utf8(raw: &OsStr) -> Result<String, UsageError> {
    match raw.to_str() {
        Some(s) => Ok(s.to_string()),
        None => Err(invalid_unicode(raw)),
    }
}

fn unknown_short(c: char) -> UsageError {
    UsageError::UnknownFlag {
        flag: format!("-{}", c),
    }
}

fn invalid_unicode(raw: &OsStr) -> UsageError {
    UsageError::InvalidUnicode {
        arg: raw.to_string_lossy().into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toggle(toggle: FeatureToggle, value: Option<&str>) -> Token {
        Token::Toggle {
            toggle,
            value: value.map(str::to_string),
        }
    }

    fn positional(value: &str) -> Token {
        Token::Positional {
            value: value.to_string(),
            escaped: false,
        }
    }

    #[test]
    fn test_short_flag_with_attached_value() {
        let tokens = lex(["-epath/to/cfg", "app"]).unwrap();
        assert_eq!(
            tokens,
            vec![
                toggle(FeatureToggle::Eslint, Some("path/to/cfg")),
                positional("app")
            ]
        );
    }

    #[test]
    fn test_short_flag_with_equals_value() {
        let tokens = lex(["-j=jest.config.js"]).unwrap();
        assert_eq!(
            tokens,
            vec![toggle(FeatureToggle::Jest, Some("jest.config.js"))]
        );
    }

    #[test]
    fn test_short_flag_separated_value_is_positional() {
        let tokens = lex(["-e", "cfg", "app"]).unwrap();
        assert_eq!(
            tokens,
            vec![
                toggle(FeatureToggle::Eslint, None),
                positional("cfg"),
                positional("app")
            ]
        );
    }

    #[test]
    fn test_long_flag_with_value() {
        let tokens = lex(["--prettier=.prettierrc", "--hu"]).unwrap();
        assert_eq!(
            tokens,
            vec![
                toggle(FeatureToggle::Prettier, Some(".prettierrc")),
                toggle(FeatureToggle::Husky, None)
            ]
        );
    }

    #[test]
    fn test_help_cluster_continues_with_flags() {
        let tokens = lex(["-hp"]).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Help, toggle(FeatureToggle::Prettier, None)]
        );
    }

    #[test]
    fn test_hu_is_not_a_husky_short_form() {
        assert_eq!(
            lex(["-hu", "app"]),
            Err(UsageError::UnknownFlag {
                flag: "-u".to_string()
            })
        );
    }

    #[test]
    fn test_help_rejects_value() {
        assert_eq!(
            lex(["--help=yes"]),
            Err(UsageError::UnexpectedValue {
                flag: "help".to_string()
            })
        );
    }

    #[test]
    fn test_escape_makes_everything_positional() {
        let tokens = lex(["--", "-e"]).unwrap();
        assert_eq!(
            tokens,
            vec![Token::Positional {
                value: "-e".to_string(),
                escaped: true
            }]
        );
    }

    #[test]
    fn test_lone_dash_is_positional() {
        assert_eq!(lex(["-"]).unwrap(), vec![positional("-")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument_is_rejected() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(vec![b'a', 0xff]);
        assert!(matches!(lex([bad]), Err(UsageError::InvalidUnicode { .. })));
    }
}
