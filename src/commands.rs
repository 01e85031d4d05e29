// Command handlers. Each one receives its collaborators explicitly (the
// config store, the API client and an output sink) so the whole pipeline
// can be driven from tests without touching the real config directory or
// the real endpoint.

use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::debug;

use crate::api::ApiClient;
use crate::cli::{Cli, Commands, InitArgs, LookupArgs};
use crate::config::{ConfigStore, CredentialProvider, Credentials};
use crate::error::Error;
use crate::report::{self, RenderOptions};
use crate::ui;

/// Collaborators shared by the commands of one invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: ConfigStore,
    pub api: ApiClient,
}

impl Context {
    /// Default config location and the public endpoint.
    pub fn new() -> Result<Self> {
        Ok(Context {
            config: ConfigStore::default_location()?,
            api: ApiClient::new()?,
        })
    }
}

/// Dispatch a parsed command line.
pub fn run<W: Write + ?Sized>(cli: Cli, ctx: &Context, out: &mut W) -> Result<()> {
    match cli.command {
        Commands::Lookup(args) => lookup(&args, &ctx.config, &ctx.api, out),
        Commands::Init(args) => init(args, &ctx.config, out),
    }
}

/// Load credentials, check the arguments, perform the request and print
/// the result. No request is made unless every check passes.
pub fn lookup<W: Write + ?Sized>(
    args: &LookupArgs,
    provider: &dyn CredentialProvider,
    api: &ApiClient,
    out: &mut W,
) -> Result<()> {
    let credentials = provider.credentials()?;
    if !credentials.is_complete() {
        return Err(Error::MissingCredentials.into());
    }

    let number = args.number.as_deref().ok_or(Error::MissingNumber)?;

    let fields = args.fields();
    if fields.is_empty() && !args.all {
        return Err(Error::NoFields.into());
    }
    debug!(fields = %fields.joined(), all = args.all, "field selection");

    let spinner = ui::spinner(format!("Looking up {number}..."));
    let result = api.lookup(&credentials, number, &fields);
    spinner.finish_and_clear();
    let result = result?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        let opts = RenderOptions {
            pricing_breakdown: args.pricing_breakdown,
        };
        report::render(&result, &opts, out)?;
    }
    Ok(())
}

/// Persist credentials, prompting for whichever flag was left out.
pub fn init<W: Write + ?Sized>(args: InitArgs, store: &ConfigStore, out: &mut W) -> Result<()> {
    let account_sid = match args.accountsid {
        Some(sid) => sid,
        None => ui::prompt_account_sid()?,
    };
    let auth_token = match args.authtoken {
        Some(token) => token,
        None => ui::prompt_auth_token()?,
    };

    store
        .save(&Credentials::new(account_sid, auth_token))
        .with_context(|| format!("failed to write config to {}", store.path().display()))?;

    writeln!(out, "Config successfully written to {}", store.path().display())?;
    Ok(())
}
