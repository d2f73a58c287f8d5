//! Cloud CLI command lines

/// A fully prepared cloud CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl CliCommand {
    /// Prepare `program <args> --output json`, whose stdout is parsed as JSON
    pub fn json<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args: Vec<String> = args.into_iter().map(Into::into).collect();
        args.push("--output".to_string());
        args.push("json".to_string());

        Self {
            program: program.to_string(),
            args,
        }
    }
}

impl std::fmt::Display for CliCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}
