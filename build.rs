use std::env;
use std::fs;
use std::path::Path;

/// Variables leídas con `option_env!` en src/config.rs
const CONFIG_KEYS: [&str; 6] = [
    "SUPABASE_URL",
    "SUPABASE_ANON_KEY",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "NOTIFICATION_ICON",
    "NOTIFICATION_BADGE",
];

/// `KEY=VALUE`, `export KEY=VALUE`, valores entre comillas
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some((key.trim(), value))
}

fn main() {
    let env_file = Path::new(".env");

    match fs::read_to_string(env_file) {
        Ok(contents) => {
            println!("cargo:rerun-if-changed=.env");
            for (key, value) in contents.lines().filter_map(parse_line) {
                if !CONFIG_KEYS.contains(&key) {
                    println!("cargo:warning=.env: variable desconocida '{}' ignorada", key);
                    continue;
                }
                // El entorno real tiene prioridad sobre .env
                if env::var(key).is_err() {
                    println!("cargo:rustc-env={}={}", key, value);
                }
            }
        }
        Err(_) => {
            println!("cargo:warning=No se encontró .env. Usando valores por defecto (copiar .env.example a .env para configurar Supabase).");
        }
    }

    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
