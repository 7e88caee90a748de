//! Parsing of interactive terminal commands.

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Register {
        username: String,
        email: String,
        password: String,
        confirm_password: String,
    },
    Logout,
    Home,
    Watchlist,
    Add(u64),
    Remove(u64),
    Subscribe { email: String },
    /// Dismiss one notification by id.
    Dismiss(u64),
    /// Dismiss every active notification.
    ClearNotices,
    /// Print the active notifications.
    Notices,
    Config,
    Help,
    Quit,
}

/// Usage text printed on `help` and on parse errors.
pub const USAGE: &str = "\
Commands:
  home                                  show the movie catalog
  watchlist                             show your watchlist
  add <movie-id>                        add a movie to the watchlist
  remove <movie-id>                     remove a movie from the watchlist
  login <username> <password>           sign in
  register <user> <email> <pass> <confirm>  create an account
  logout                                sign out
  subscribe <email>                     subscribe to the weekly digest
  notices                               list active notifications
  dismiss <id>                          dismiss one notification
  clear                                 dismiss all notifications
  config                                show the loaded configuration
  help                                  show this text
  quit                                  exit";

fn parse_id(token: &str) -> Result<u64, String> {
    token
        .parse()
        .map_err(|_| format!("'{token}' is not a numeric movie id"))
}

/// Parses one input line into a [`Command`]. The caller skips blank input.
pub fn parse(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["login", username, password] => Ok(Command::Login {
            username: (*username).to_string(),
            password: (*password).to_string(),
        }),
        ["login", ..] => Err("usage: login <username> <password>".to_string()),
        ["register", username, email, password, confirm] => Ok(Command::Register {
            username: (*username).to_string(),
            email: (*email).to_string(),
            password: (*password).to_string(),
            confirm_password: (*confirm).to_string(),
        }),
        ["register", ..] => {
            Err("usage: register <username> <email> <password> <confirm>".to_string())
        }
        ["logout"] => Ok(Command::Logout),
        ["home"] => Ok(Command::Home),
        ["watchlist"] => Ok(Command::Watchlist),
        ["add", id] => parse_id(id).map(Command::Add),
        ["remove", id] => parse_id(id).map(Command::Remove),
        ["subscribe", email] => Ok(Command::Subscribe {
            email: (*email).to_string(),
        }),
        ["dismiss", id] => parse_id(id).map(Command::Dismiss),
        ["clear"] => Ok(Command::ClearNotices),
        ["notices"] => Ok(Command::Notices),
        ["config"] => Ok(Command::Config),
        ["help"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        [unknown, ..] => Err(format!("unknown command '{unknown}', try 'help'")),
        [] => Err("empty command".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_auth_commands() {
        assert_eq!(
            parse("login alice hunter22"),
            Ok(Command::Login {
                username: "alice".to_string(),
                password: "hunter22".to_string(),
            })
        );
        assert!(parse("login alice").is_err());
        assert_eq!(parse("logout"), Ok(Command::Logout));
    }

    #[test]
    fn parses_watchlist_commands_with_numeric_ids() {
        assert_eq!(parse("add 3"), Ok(Command::Add(3)));
        assert_eq!(parse("remove 14"), Ok(Command::Remove(14)));
        assert!(parse("add three").is_err());
    }

    #[test]
    fn rejects_unknown_commands() {
        let err = parse("dance").unwrap_err();
        assert!(err.contains("unknown command"));
    }
}
