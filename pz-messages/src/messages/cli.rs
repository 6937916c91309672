//! Invocation messages

pub struct CliMessages {
    pub usage: &'static str,
    pub error_generic: &'static str,
}

pub const CLI_MESSAGES: CliMessages = CliMessages {
    usage: "Usage:\n  {prog} <config_file> <key> [<value>]\n  {prog} --bulk-from-env <config_file>\n",
    error_generic: "Error: {error}",
};
