use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tangent_baker::cli::{self, Shape};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bake tangents into a face stream
    Bake {
        /// Input face stream (packed 96-byte faces)
        input: PathBuf,

        /// Output path, defaults to the input with a `.baked` extension
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a built-in primitive as a face stream
    Primitive {
        #[arg(value_enum)]
        shape: Shape,

        #[arg(short, long)]
        output: PathBuf,

        /// Write the baked stream instead of the raw input faces
        #[arg(long)]
        bake: bool,
    },

    /// Summarize a baked stream
    Inspect {
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Bake { input, output } => {
            let (output, count) = cli::bake_file(&input, output.as_deref())?;
            println!("Baked {} faces into {}", count, output.display());
        }
        Command::Primitive { shape, output, bake } => {
            let count = cli::write_primitive(shape, &output, bake)?;
            println!("Wrote {:?} ({} faces) to {}", shape, count, output.display());
        }
        Command::Inspect { input } => {
            let inspection = cli::inspect_file(&input)?;
            println!("{}", input.display());
            println!("  faces: {}", inspection.faces);
            println!("  non-finite faces: {}", inspection.non_finite);
            if let Some(tangent) = inspection.first_tangent {
                println!("  face 0 tangent: {:?}", tangent.to_array());
            }
            if let Some(bitangent) = inspection.first_bitangent {
                println!("  face 0 bitangent: {:?}", bitangent.to_array());
            }
        }
    }

    Ok(())
}
