//! Configuration management commands.

use scan2prism::ConverterConfig;

/// Print default configuration in YAML format
///
/// The output is plain text so it can be redirected straight into a file
/// and passed back with `--config`.
pub fn print_default_config() -> anyhow::Result<()> {
    println!("# Default scan2prism configuration");
    println!("# Save this to a file and customize as needed");
    println!("# Usage: scan2prism --config your-config.yml <input>");
    println!();

    let yaml_output = ConverterConfig::default().to_yaml_string()?;
    println!("{}", yaml_output);

    Ok(())
}
