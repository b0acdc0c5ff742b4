use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::convert::DEFAULT_OUTPUT;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/chat";

#[derive(Parser, Debug)]
#[command(name = "plauder", version, about = "Terminal client for a Plauder chat endpoint")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the version.
    Version,

    /// Chat line by line: every line read from stdin is one submission.
    Chat {
        /// Absolute URL of the chat endpoint.
        #[arg(long, env = "PLAUDER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Convert a Scratch 3 project (.sb3) into a Pygame project using AI.
    Convert {
        /// Path to the input .sb3 file.
        sb3_file: PathBuf,

        /// Output directory for the generated project.
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// API key of the completion provider.
        #[arg(long, env = "API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Base URL of an OpenAI-compatible API.
        #[arg(long, env = "API_BASE")]
        api_base: Option<String>,

        /// Model used for the conversion.
        #[arg(long, env = "MODEL")]
        model: Option<String>,
    },
}
