use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive order board (default)")]
    Board,

    #[command(about = "Fetch and print the order list")]
    List {
        /// Keep only orders with this exact status
        #[arg(long)]
        status: Option<String>,

        /// Keep only orders with this exact salesperson
        #[arg(long)]
        vendor: Option<String>,
    },

    #[command(about = "Check whether the order API is reachable")]
    Health,

    #[command(about = "Write a starter config file")]
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
