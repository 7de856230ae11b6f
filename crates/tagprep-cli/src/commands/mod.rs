mod prepare;
mod resources;
mod vectorize;

/// Subcommands for tagprep
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Download, parse, split and store a dataset.
    Prepare(prepare::PrepareArgs),

    /// Prepare a dataset and vectorize every split.
    Vectorize(vectorize::VectorizeArgs),

    /// List known datasets and embedding tables.
    Resources(resources::ResourcesArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Prepare(cmd) => cmd.run(),
            Commands::Vectorize(cmd) => cmd.run(),
            Commands::Resources(cmd) => cmd.run(),
        }
    }
}
