// Command-line definitions (clap derive). Pure data: the handlers live
// in `commands`, and `LookupArgs::fields` maps the flags onto a `FieldSet`.

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::fields::{Field, FieldSet};

/// Phone number lookup via EveryoneAPI
#[derive(Parser, Debug)]
#[command(name = "whatphone", version, about = "Phone number lookup via EveryoneAPI")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Perform a phone number lookup
    Lookup(LookupArgs),

    /// Initialize the app with your EveryoneAPI credentials
    Init(InitArgs),
}

#[derive(Args, Debug, Default)]
pub struct LookupArgs {
    /// Phone number to look up, passed to the service as written
    #[arg(value_name = "PHONE_NUMBER")]
    pub number: Option<String>,

    /// Output the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Include pricing breakdown of request
    #[arg(short = 'b', long)]
    pub pricing_breakdown: bool,

    /// Request all data points
    #[arg(long)]
    pub all: bool,

    /// Request name data
    #[arg(short = 'n', long)]
    pub name: bool,

    /// Request profile data
    #[arg(short = 'p', long)]
    pub profile: bool,

    /// Request CNAM data
    #[arg(short = 'i', long)]
    pub cnam: bool,

    /// Request gender data
    #[arg(short = 'g', long)]
    pub gender: bool,

    /// Request image data
    #[arg(short = 'm', long)]
    pub image: bool,

    /// Request address data
    #[arg(short = 'a', long)]
    pub address: bool,

    /// Request location data
    #[arg(short = 'l', long)]
    pub location: bool,

    /// Request line provider data
    #[arg(short = 'r', long)]
    pub line_provider: bool,

    /// Request carrier data
    #[arg(short = 'c', long)]
    pub carrier: bool,

    /// Request original carrier data
    #[arg(short = 'o', long)]
    pub original_carrier: bool,

    /// Request linetype data
    #[arg(short = 't', long)]
    pub linetype: bool,
}

impl LookupArgs {
    /// Selected fields in canonical order, regardless of flag order.
    pub fn fields(&self) -> FieldSet {
        let toggles = [
            (self.name, Field::Name),
            (self.profile, Field::Profile),
            (self.cnam, Field::Cnam),
            (self.gender, Field::Gender),
            (self.image, Field::Image),
            (self.address, Field::Address),
            (self.location, Field::Location),
            (self.line_provider, Field::LineProvider),
            (self.carrier, Field::Carrier),
            (self.original_carrier, Field::OriginalCarrier),
            (self.linetype, Field::Linetype),
        ];
        toggles
            .into_iter()
            .filter_map(|(on, field)| on.then_some(field))
            .collect()
    }
}

#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// EveryoneAPI Account SID (prompted for when omitted)
    #[arg(short = 's', long)]
    pub accountsid: Option<String>,

    /// EveryoneAPI Auth Token (prompted for when omitted)
    #[arg(short = 't', long)]
    pub authtoken: Option<String>,
}
