//! Line commands accepted by the shell

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate to a path
    Go(String),
    /// Navigate to the default path
    Default,
    /// Show the error page for a status
    Error(u16),
    /// List registered pages
    Pages,
    /// Toggle dark mode and save settings
    ToggleDark,
    /// Set the landing page and save settings
    Landing(String),
    Help,
    Quit,
}

/// Parse an input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    if !line.starts_with(':') {
        return Ok(Some(Command::Go(line.to_string())));
    }

    let mut parts = line[1..].split_whitespace();
    let command = match (parts.next(), parts.next(), parts.next()) {
        (Some("default"), None, None) => Command::Default,
        (Some("error"), Some(status), None) => Command::Error(
            status
                .parse()
                .map_err(|_| format!("invalid status code `{status}`"))?,
        ),
        (Some("pages"), None, None) => Command::Pages,
        (Some("dark"), None, None) => Command::ToggleDark,
        (Some("landing"), Some(path), None) => Command::Landing(path.to_string()),
        (Some("help"), None, None) => Command::Help,
        (Some("quit") | Some("q"), None, None) => Command::Quit,
        _ => return Err(format!("unknown command `{line}`, try :help")),
    };
    Ok(Some(command))
}

pub const HELP: &str = "\
<path>            navigate to a page
:default          navigate to the default page
:error <status>   show the error page for a status
:pages            list registered pages
:dark             toggle dark mode
:landing <path>   open <path> on startup
:quit             exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_navigates() {
        assert_eq!(parse(" courses/42 ").unwrap(), Some(Command::Go("courses/42".to_string())));
        assert_eq!(parse("   ").unwrap(), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse(":default").unwrap(), Some(Command::Default));
        assert_eq!(parse(":error 403").unwrap(), Some(Command::Error(403)));
        assert_eq!(parse(":landing results").unwrap(), Some(Command::Landing("results".to_string())));
        assert_eq!(parse(":q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_bad_commands() {
        assert!(parse(":error teapot").is_err());
        assert!(parse(":error").is_err());
        assert!(parse(":frobnicate").is_err());
    }

    #[test]
    fn test_extra_arguments_are_rejected() {
        assert!(parse(":error 404 extra").is_err());
        assert!(parse(":landing a b").is_err());
        assert!(parse(":pages all").is_err());
    }
}
