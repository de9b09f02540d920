use solvis::ViewerConfig;

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;

#[derive(Parser, Debug)]
struct Args {
    /// Optional viewer settings file (YAML); defaults apply without one
    #[arg(short)]
    file_name: Option<String>,
}

// load here to keep main clean
fn load_viewer_config() -> Result<ViewerConfig> {
    let args = Args::parse();

    let Some(file_name) = args.file_name else {
        return Ok(ViewerConfig::default());
    };

    match File::open(&file_name) {
        Ok(file) => {
            let reader = BufReader::new(file);
            let config: ViewerConfig = serde_yaml::from_reader(reader)?;
            Ok(config)
        }
        Err(err) => {
            eprintln!("viewer config {file_name} not readable ({err}), using defaults");
            Ok(ViewerConfig::default())
        }
    }
}

fn main() -> Result<()> {
    let config = load_viewer_config()?;
    solvis::run(config);
    Ok(())
}
