use std::env;

/// Requested execution mode, as given on the command line.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Auto,
    Cli,
    Web,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Cli,
    /// `cgi` is set when a web server invoked us and expects response headers.
    Web { cgi: bool },
}

const CGI_MARKER: &str = "GATEWAY_INTERFACE";

pub fn detect(requested: ModeArg) -> Mode {
    resolve(requested, env::var_os(CGI_MARKER).is_some())
}

fn resolve(requested: ModeArg, under_cgi: bool) -> Mode {
    match requested {
        ModeArg::Cli => Mode::Cli,
        ModeArg::Web => Mode::Web { cgi: under_cgi },
        ModeArg::Auto if under_cgi => Mode::Web { cgi: true },
        ModeArg::Auto => Mode::Cli,
    }
}
