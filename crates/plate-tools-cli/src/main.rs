mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use logger::CliLogger;
use plate_layout::{
    Converter, PaperPlate, PlateFormat, PlateParams, PresetOptions, ToolLookup, WellFill,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pplate", about = "Printable paper microplates", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a plate as SVG
    Svg {
        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        plate: PlateArgs,
    },

    /// Draw a plate and convert it to PDF with Inkscape
    Pdf {
        /// Output PDF file (the SVG is written next to it)
        #[arg(short, long)]
        output: PathBuf,

        /// Extra Inkscape locations, tried after PATH and the default install path
        #[arg(long)]
        inkscape: Vec<PathBuf>,

        #[command(flatten)]
        plate: PlateArgs,
    },

    /// Print the plate geometry without writing anything
    Info {
        #[command(flatten)]
        plate: PlateArgs,
    },
}

#[derive(Args)]
struct PlateArgs {
    /// Standard plate format
    #[arg(long, default_value = "96", value_enum)]
    format: FormatArg,

    /// Well barrier thickness in mm
    #[arg(long, default_value = "0.5")]
    barrier: f32,

    /// Well diameter in mm [default: 6 for 96-well, 3.5 for 384-well]
    #[arg(long)]
    diameter: Option<f32>,

    /// Blank margin around the plate in mm
    #[arg(long, default_value = "5.0")]
    margin: f32,

    /// Edge line thickness in mm
    #[arg(long, default_value = "0.75")]
    edge_thickness: f32,

    /// Distance between outer and inner edge in mm
    #[arg(long, default_value = "1.0")]
    edge_distance: f32,

    /// Fill color for every well (any SVG color)
    #[arg(long, conflicts_with = "fill_csv")]
    fill: Option<String>,

    /// CSV file with one color per well (one line per plate row, no header)
    #[arg(long)]
    fill_csv: Option<PathBuf>,

    /// JSON file with a complete custom layout (replaces the preset options)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    #[value(name = "96")]
    Wells96,
    #[value(name = "384")]
    Wells384,
}

impl From<FormatArg> for PlateFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Wells96 => Self::Standard96,
            FormatArg::Wells384 => Self::Standard384,
        }
    }
}

impl PlateArgs {
    fn default_diameter(&self) -> f32 {
        match self.format {
            FormatArg::Wells96 => 6.0,
            FormatArg::Wells384 => 3.5,
        }
    }

    async fn params(&self) -> Result<PlateParams> {
        let fill = if let Some(csv) = &self.fill_csv {
            let matrix = plate_layout::load_fill_csv(csv)
                .await
                .with_context(|| format!("Failed to read colors from {}", csv.display()))?;
            Some(WellFill::PerWell(matrix))
        } else {
            self.fill.as_deref().map(WellFill::from)
        };

        if let Some(config) = &self.config {
            let mut params = PlateParams::load(config)
                .await
                .with_context(|| format!("Failed to load layout from {}", config.display()))?;
            if let Some(fill) = fill {
                params.well_fill = fill;
            }
            return Ok(params);
        }

        let mut options = PresetOptions::new(
            self.barrier,
            self.diameter.unwrap_or_else(|| self.default_diameter()),
            self.margin,
        )
        .with_edge_thickness(self.edge_thickness)
        .with_edge_distance(self.edge_distance);
        if let Some(fill) = fill {
            options = options.with_well_fill(fill);
        }

        Ok(PlateFormat::from(self.format).params(&options))
    }

    async fn build(&self) -> Result<PaperPlate> {
        let params = self.params().await?;
        Ok(PaperPlate::new(params)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    CliLogger::new(cli.verbose).init()?;

    match cli.command {
        Commands::Svg { output, plate } => {
            let plate = plate.build().await?;
            plate.save_svg(&output).await?;
            println!(
                "Drew {}x{} plate → {}",
                plate.rows(),
                plate.cols(),
                output.display()
            );
        }

        Commands::Pdf {
            output,
            inkscape,
            plate,
        } => {
            let plate = plate.build().await?;
            let converter = inkscape
                .into_iter()
                .fold(Converter::inkscape(), |converter, path| {
                    converter.with_lookup(ToolLookup::At(path))
                });
            let pdf_path = plate.to_pdf(&output, &converter).await?;
            println!(
                "Drew {}x{} plate → {}",
                plate.rows(),
                plate.cols(),
                pdf_path.display()
            );
        }

        Commands::Info { plate } => {
            let plate = plate.build().await?;
            let (width, height) = plate.viewport_size();
            println!("Plate Geometry:");
            println!("  Wells: {}x{}", plate.rows(), plate.cols());
            println!("  Figure: {:.2} x {:.2} mm", width, height);
            if let (Some(first), Some(last)) = (
                plate.well_center(0, 0),
                plate.well_center(plate.rows() - 1, plate.cols() - 1),
            ) {
                println!("  First well center: ({:.2}, {:.2}) mm", first.x, first.y);
                println!("  Last well center: ({:.2}, {:.2}) mm", last.x, last.y);
            }
            println!("  Primitives: {}", plate.primitives().len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn plate_args(args: &[&str]) -> PlateArgs {
        let mut argv = vec!["pplate", "info"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Info { plate } => plate,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[tokio::test]
    async fn test_format_defaults() {
        let params = plate_args(&[]).params().await.unwrap();
        assert_eq!((params.rows, params.cols), (8, 12));
        assert_eq!(params.well_diameter_mm, 6.0);

        let params = plate_args(&["--format", "384"]).params().await.unwrap();
        assert_eq!((params.rows, params.cols), (16, 24));
        assert_eq!(params.well_diameter_mm, 3.5);
        assert!(params.validate().is_ok());
    }

    #[tokio::test]
    async fn test_fill_and_edges() {
        let args = ["--fill", "gold", "--edge-distance", "2", "--margin", "1"];
        let params = plate_args(&args).params().await.unwrap();
        assert_eq!(params.well_fill, WellFill::Uniform("gold".to_string()));
        assert_eq!(params.edges_distance_mm, 2.0);
        assert_eq!(params.margin_mm, 1.0);
    }

    #[test]
    fn test_fill_conflicts_with_csv() {
        let argv = ["pplate", "info", "--fill", "red", "--fill-csv", "x.csv"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
