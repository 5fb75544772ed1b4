use crate::args::{ArgValue, ArgumentMap};
use crate::error::{Error, Result};

pub const USERNAME_ENV: &str = "ARGOT_USERNAME";
pub const PASSWORD_ENV: &str = "ARGOT_PASSWORD";

/// Arguments shared by every command that talks to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    /// Enables debug logging.
    pub debug: bool,
    pub username: String,
    /// `None` means the caller has to prompt for it.
    ///
    /// Only possible when stdin is a terminal.
    pub password: Option<String>,
}

impl CommonArgs {
    /// Reads `--debug`, `--username` and `--password`, falling back to
    /// `ARGOT_USERNAME` / `ARGOT_PASSWORD` from `env`.
    pub fn from_args<F>(args: &ArgumentMap, env: F, stdin_is_tty: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = match args.get("--debug") {
            Some(ArgValue::Flag(on)) => *on,
            Some(ArgValue::Text(value)) => !value.is_empty(),
            None => false,
        };

        let username = non_empty(args.text("--username"))
            .or_else(|| env(USERNAME_ENV))
            .ok_or_else(|| Error::missing(&format!("-u/--username or ${USERNAME_ENV}")))?;

        let password = non_empty(args.text("--password")).or_else(|| env(PASSWORD_ENV));
        if password.is_none() && !stdin_is_tty {
            return Err(Error::missing(&format!("-p/--password or ${PASSWORD_ENV}")));
        }

        Ok(Self {
            debug,
            username,
            password,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn flags_take_precedence_over_env() {
        let mut args = ArgumentMap::new();
        args.insert_flag("--debug", true);
        args.insert_text("--username", "alice");
        args.insert_text("--password", "secret");

        let env = |key: &str| Some(format!("env-{key}"));
        let common = CommonArgs::from_args(&args, env, false).unwrap();
        assert!(common.debug);
        assert_eq!(common.username, "alice");
        assert_eq!(common.password.as_deref(), Some("secret"));
    }

    #[test]
    fn env_fallback() {
        let args = ArgumentMap::new();
        let env = |key: &str| match key {
            USERNAME_ENV => Some("bob".to_string()),
            PASSWORD_ENV => Some("hunter2".to_string()),
            _ => None,
        };

        let common = CommonArgs::from_args(&args, env, false).unwrap();
        assert!(!common.debug);
        assert_eq!(common.username, "bob");
        assert_eq!(common.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn missing_username() {
        let err = CommonArgs::from_args(&ArgumentMap::new(), no_env, true).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { .. }));
        assert!(err.to_string().contains("--username"));
    }

    #[test]
    fn password_may_be_prompted_only_on_a_terminal() {
        let args: ArgumentMap = [("--username", "carol")].into_iter().collect();

        let interactive = CommonArgs::from_args(&args, no_env, true).unwrap();
        assert_eq!(interactive.password, None);

        let err = CommonArgs::from_args(&args, no_env, false).unwrap_err();
        assert!(err.to_string().contains(PASSWORD_ENV));
    }
}
