// Build script that bakes the client configuration into the binary.
// Values come from the build environment first, then from a `.env` file
// in the crate root.

const KEYS: [&str; 4] = [
    "LICENSEGATE_API_URL",
    "LICENSEGATE_APP_SECRET",
    "LICENSEGATE_APP_NAME",
    "LICENSEGATE_VERSION",
];

fn main() {
    for key in KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let mut found: Vec<(String, String)> = Vec::new();

    if let Ok(dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let env_path = std::path::Path::new(&dir).join(".env");
        if env_path.exists() {
            println!("cargo:rerun-if-changed={}", env_path.display());

            // Read .env file manually (avoid extra dependencies in build script)
            if let Ok(contents) = std::fs::read_to_string(&env_path) {
                for line in contents.lines() {
                    let line = line.trim();
                    if line.is_empty() || line.starts_with('#') {
                        continue;
                    }

                    if let Some((key, value)) = line.split_once('=') {
                        let key = key.trim();
                        let value = value.trim().trim_matches('"').trim_matches('\'');
                        if KEYS.contains(&key) {
                            found.push((key.to_string(), value.to_string()));
                        }
                    }
                }
            }
        }
    }

    for key in KEYS {
        let value = std::env::var(key)
            .ok()
            .or_else(|| found.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()));

        if let Some(value) = value {
            println!("cargo:rustc-env={}={}", key, value);
            if key == "LICENSEGATE_API_URL" {
                println!("cargo:warning=Building with API URL: {}", value);
            }
        }
    }
}
