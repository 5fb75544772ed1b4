mod commands;
mod terminal;

use anyhow::Context;
use argot_protocols::ServicesDb;
use commands::{CommandLine, Commands, convert, validate};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.debug);

    match commands.command {
        Commands::Bool { value } => {
            print::header("boolean");
            validate::boolean(value.as_deref())
        }
        Commands::Int { value, min, max } => {
            print::header("integer");
            validate::integer(value.as_deref(), min, max)
        }
        Commands::Size { value, unit, min, max } => {
            print::header("size");
            validate::size(value.as_deref(), unit, min, max)
        }
        Commands::Interval { value, unit, min, max } => {
            print::header("interval");
            validate::interval(value.as_deref(), unit, min, max)
        }
        Commands::Enum { value, choices, no_query } => {
            print::header("choice");
            validate::choice(value.as_deref(), &choices, !no_query)
        }
        Commands::Network { value } => {
            print::header("network");
            validate::network(value.as_deref())
        }
        Commands::Service { value } => {
            print::header("service");
            let services = match &commands.services {
                Some(path) => ServicesDb::load(path)
                    .with_context(|| format!("loading services from {}", path.display()))?,
                None => ServicesDb::system(),
            };
            validate::service(value.as_deref(), services)
        }
        Commands::Multival { value, count } => {
            print::header("multival");
            validate::multival(value.as_deref(), count)
        }
        Commands::Name { prefix, existing } => {
            print::header("unique name");
            validate::name(&prefix, existing)
        }
        Commands::InetAton { addr } => convert::inet_aton(&addr),
        Commands::InetNtoa { value } => convert::inet_ntoa(value),
        Commands::MacAton { mac } => convert::mac_aton(&mac),
        Commands::MacNtoa { value } => convert::mac_ntoa(value),
    }
}
