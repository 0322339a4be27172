use anyhow::{anyhow, bail, Context};
use babel::{Layout, LayoutConfig, LayoutRenderer, RenderConfig};
use config::{Config, File};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for generating hex library layouts via the Babel generation kit.
#[derive(Debug, StructOpt)]
#[structopt(name = "babel")]
struct Opt {
    /// Path to a config file that defines the layout to be generated.
    /// Supported formats: JSON, TOML. If not given, the default config is
    /// used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// If given, the generated layout will be saved to this directory. The
    /// exact files that appear in the directory are defined by the output
    /// formats. See `--output-formats` for more info
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format(s) to output the layout in. Supported formats:
    ///
    /// cfg - The full config object used for the layout, in TOML format
    ///
    /// json - The placement records plus config, in JSON. This is the
    ///   format an instancing engine would consume
    ///
    /// svg - 2D floor plan of one layer (see --layer)
    #[structopt(short = "f", long)]
    output_formats: Vec<OutputFormat>,

    /// The floor to draw in rendered output formats, such as SVG.
    #[structopt(long, default_value = "0")]
    layer: u32,

    /// Hide vestibule markers? Only relevant for rendered output formats,
    /// such as SVG.
    #[structopt(long)]
    hide_vestibules: bool,

    /// The logging level to use during layout generation. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-formats`!
    /// Export the layout's full config in a human-readable file
    Cfg,
    /// Export the layout (config plus placement records) as JSON, which can
    /// be deserialized later to recover the layout
    Json,
    /// Render one layer of the layout as a 2D SVG floor plan
    Svg,
    /* If you change this, make sure to update the help text for
     * `--output-formats`! */
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Cfg => "toml",
            Self::Json => "json",
            Self::Svg => "svg",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<LayoutConfig> {
    // Load config
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Generate an output form of the layout in the given format.
fn gen_output(
    output_dir: &Path,
    output_format: OutputFormat,
    layout: &Layout,
    renderer: &LayoutRenderer,
) -> anyhow::Result<()> {
    fn generate_bytes(
        output_format: OutputFormat,
        layout: &Layout,
        renderer: &LayoutRenderer,
    ) -> Vec<u8> {
        match output_format {
            OutputFormat::Cfg => {
                // Serialize just the layout config via toml
                toml::to_string_pretty(layout.config())
                    // Panics only if config format isn't serializable (a bug)
                    .expect("error serializing config")
                    .into_bytes()
            }
            OutputFormat::Json => {
                // Serialize the entire layout via JSON
                layout.to_json().into()
            }
            OutputFormat::Svg => {
                // Render one floor as a 2D plan
                renderer.render_as_svg(layout).into_bytes()
            }
        }
    }

    let output_file_path = output_dir
        .join("layout")
        .with_extension(output_format.file_ext());

    babel::timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, &output_file_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, layout, renderer);
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&output_file_path)
                .with_context(|| {
                    format!("error opening output file {:?}", &output_file_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", &output_file_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => {
            info!("No config given, using the default layout config");
            LayoutConfig::default()
        }
    };
    let layout = Layout::generate(config)?;
    info!("Generated {} placement records", layout.records().len());

    // If an output dir was specified, write out output format(s) there
    if let Some(output_dir) = opt.output {
        if opt.output_formats.is_empty() {
            bail!("output dir was specified, but no output formats were given")
        }
        fs::create_dir_all(&output_dir)?;

        let renderer = LayoutRenderer::new(RenderConfig {
            layer: opt.layer,
            show_vestibules: !opt.hide_vestibules,
        })
        .context("invalid render config")?;
        for output_format in opt.output_formats {
            gen_output(&output_dir, output_format, &layout, &renderer)?;
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
