use anyhow::anyhow;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let (config_path, input_path) = match args.as_slice() {
        [input] => (DEFAULT_CONFIG_PATH, input.as_str()),
        [config, input] => (config.as_str(), input.as_str()),
        _ => {
            return Err(anyhow!(
                "usage: telemetry-values [config.toml] <common_values.json>"
            ));
        }
    };

    telemetry_values::run_app(config_path, input_path)
}
