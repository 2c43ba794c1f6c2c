//! CLI definition for the FormModeler command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// FormModeler - pick and inspect form field kinds for value types
#[derive(Parser, Debug)]
#[command(name = "formmodeler")]
#[command(version)]
#[command(about = "Field provider registry for form modeling")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Extra configuration file merged over the discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every registered field kind
    Types,
    /// Show the default field of a field kind
    Field {
        /// Provider code, e.g. TextBox
        code: String,
    },
    /// Pick the field kind for a value type
    Resolve {
        /// Value type, e.g. java.lang.String
        type_name: String,
        /// The value is a list of this type
        #[arg(long)]
        list: bool,
    },
    /// List basic field kinds able to edit a value type, by priority
    CompatibleTypes {
        /// Value type, e.g. int
        type_name: String,
    },
    /// List field kinds an existing field could be switched to
    Compatible {
        /// Provider code of the existing field
        code: String,
        /// Value type of the existing field
        type_name: String,
        /// The value is a list of this type
        #[arg(long)]
        list: bool,
        /// Treat the field as derived from the type rather than bound to a property
        #[arg(long)]
        standalone: bool,
    },
    /// Build a field, with a given provider or resolved from the type
    Create {
        /// Value type of the field
        type_name: String,
        /// Provider code to build with
        #[arg(long)]
        code: Option<String>,
        /// The value is a list of this type
        #[arg(long)]
        list: bool,
    },
}
