use cgs::project::{ApiVersion, ProjectInfo};
use clap::Parser;
use cgs::renderer::{renderer_main_with_config, RendererConfig, Validation};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Name of the application reported to the renderer.
    #[clap(short, long, default_value = "RendererMain")]
    name: String,
    /// Version of the application, as `major.minor.patch` or `variant.major.minor.patch`.
    #[clap(long = "app-version", default_value = "0.0.1")]
    app_version: ApiVersion,
    /// Validation layers: auto, on or off.
    #[clap(long, default_value = "auto")]
    validation: Validation,
    /// Id of the device to use (vendor id in the high 32 bits, device id in the low ones).
    #[clap(long = "device-id")]
    device_id: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let info = ProjectInfo::new(args.name, args.app_version);
    let config = RendererConfig {
        validation: args.validation,
        device_id: args.device_id,
        ..Default::default()
    };
    match renderer_main_with_config(&info, config) {
        Ok(result) => println!("result: {}", result),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
