use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the current step and the answers so far.
    Status,
    /// List what can be chosen at a step.
    Options(OptionsArgs),
    /// Answer the current step.
    Choose(ChooseArgs),
    /// Forget every answer and start over.
    Reset,
    /// Show the estimate and the filtered roadmap.
    Report,
    /// Show the learning-time estimate.
    Estimate,
    /// List every option in the catalog.
    Catalog,
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct OptionsArgs {
    /// Step name or number (defaults to the current step).
    #[arg(long)]
    pub step: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ChooseArgs {
    /// A level name at the level step, an option id afterwards.
    pub value: String,
    /// Time budget in hours for the custom level.
    #[arg(long)]
    pub hours: Option<f64>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name: selection_state, snapshot, report, estimate, catalog, option_view.
    #[arg(value_name = "TYPE")]
    pub type_name: String,
}
