use envreadr::{EnvReader, EnvRecord};
use std::process::ExitCode;

#[derive(Debug, Default, EnvRecord)]
pub struct ServerConfig {
    #[field(env = "LISTEN_HOST", default = "127.0.0.1")]
    pub listen_host: String,

    #[field(env = "LISTEN_PORT", default = "5000")]
    pub listen_port: String,

    #[field(env = "ENABLE_DEBUG")]
    pub debug: bool,

    #[field(env = "NUMBERS", default = "1,2,3,4")]
    pub numbers: Vec<i64>,
}

#[derive(Debug, Default, EnvRecord)]
pub struct CustomTagConfig {
    #[field(environ = "LISTEN_HOST", fallback = "0.0.0.0")]
    pub listen_host: String,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    match std::env::args().nth(1).as_deref() {
        Some("basic") | None => basic(),
        Some("custom-tags") => custom_tags(),
        Some(arg) => {
            println!("unknown arg: {}. Available: basic, custom-tags", arg);
            ExitCode::FAILURE
        }
    }
}

fn basic() -> ExitCode {
    let mut config = ServerConfig::default();
    let reader = EnvReader::new();

    if let Err(error) = reader.read(&mut config) {
        eprintln!("Failed to read configuration:");
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    println!("Configuration loaded:");
    println!("  listen_host: {}", config.listen_host);
    println!("  listen_port: {}", config.listen_port);
    println!("  debug: {}", config.debug);
    println!("  numbers: {:?}", config.numbers);
    ExitCode::SUCCESS
}

fn custom_tags() -> ExitCode {
    let mut config = CustomTagConfig::default();

    let mut reader = EnvReader::new();
    reader.set_key_tag("environ");
    reader.set_default_tag("fallback");

    if let Err(error) = reader.read(&mut config) {
        eprintln!("Failed to read configuration:");
        eprintln!("{}", error);
        return ExitCode::FAILURE;
    }

    println!("Configuration loaded with tags '{}'/'{}':", reader.key_tag(), reader.default_tag());
    println!("  listen_host: {}", config.listen_host);
    ExitCode::SUCCESS
}
