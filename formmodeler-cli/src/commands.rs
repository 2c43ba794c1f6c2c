//! Command handlers. Each writes its result as JSON to the given writer.

use std::io::Write;

use formmodeler_config::ConfigLoader;
use formmodeler_fields::{FieldRegistry, FieldTypeInfo};
use serde::Serialize;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::error::CliError;

/// Load configuration, build the registry and run the parsed command.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), CliError> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    let config = loader.load()?;
    let registry = FieldRegistry::builder().with_config(config).build()?;
    debug!(providers = registry.len(), "registry ready");

    execute(&registry, &cli.command, out)
}

/// Run a command against an already built registry.
pub fn execute(
    registry: &FieldRegistry,
    command: &Commands,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match command {
        Commands::Types => write_json(out, &registry.base_field_types()),
        Commands::Field { code } => write_json(out, &registry.definition_by_type_code(code)),
        Commands::Resolve { type_name, list } => {
            let info = FieldTypeInfo::new(type_name, *list);
            write_json(out, &registry.definition_by_value_type(&info))
        }
        Commands::CompatibleTypes { type_name } => {
            write_json(out, &registry.compatible_types(type_name))
        }
        Commands::Compatible {
            code,
            type_name,
            list,
            standalone,
        } => {
            let info = FieldTypeInfo::new(type_name, *list);
            let Some(mut field) =
                registry.field_from_provider_with_type(Some(code.as_str()), Some(&info))?
            else {
                return write_json(out, &None::<Vec<String>>);
            };
            if *standalone {
                field.standalone_class_name = Some(type_name.clone());
            }
            write_json(out, &registry.compatible_fields(&field)?)
        }
        Commands::Create {
            type_name,
            code,
            list,
        } => {
            let info = FieldTypeInfo::new(type_name, *list);
            write_json(
                out,
                &registry.field_from_provider(code.as_deref(), Some(&info))?,
            )
        }
    }
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
