use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// State file holding the desired commands.
    /// Defaults to $SHELLBRIDGE_STATE_PATH or ~/.shellbridge/commands.json.
    #[clap(short = 's', long, help = "state file path")]
    state: Option<String>,

    #[clap(long, help = "keep desired commands in memory only")]
    no_persist: bool,

    /// Commands that exist in the registry before the bridge starts.
    #[clap(short = 'b', long = "builtin", help = "pre-existing command id")]
    builtins: Vec<String>,

    #[clap(long, help = "version reported by the front-end")]
    app_version: Option<String>,

    #[clap(short = 'v', long, help = "enable debug logging")]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    state: Option<String>,
    no_persist: bool,
    builtins: Vec<String>,
    app_version: Option<String>,
    verbose: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            state: args.state,
            no_persist: args.no_persist,
            builtins: args.builtins,
            app_version: args.app_version,
            verbose: args.verbose,
        }
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn no_persist(&self) -> bool {
        self.no_persist
    }

    pub fn builtins(&self) -> &[String] {
        &self.builtins
    }

    pub fn app_version(&self) -> Option<&str> {
        self.app_version.as_deref()
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
