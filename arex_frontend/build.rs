// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    syntax: SyntaxLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_identifier_length: usize,
    max_string_size: usize,
    max_token_count: usize,
}

#[derive(serde::Deserialize)]
struct SyntaxLimits {
    max_pending_operators: usize,
    max_diagnostics: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=AREX_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=AREX_CONFIG_DIR");

    let profile = env::var("AREX_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("AREX_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of the arex_frontend directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_security_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_security_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_STRING_SIZE: usize = 100_000_000;
    const ABSOLUTE_MAX_TOKEN_COUNT: usize = 100_000_000;

    if config.lexical.max_string_size > ABSOLUTE_MAX_STRING_SIZE {
        panic!("SECURITY: max_string_size exceeds absolute maximum");
    }

    if config.lexical.max_token_count > ABSOLUTE_MAX_TOKEN_COUNT {
        panic!("SECURITY: max_token_count exceeds absolute maximum");
    }

    if config.lexical.max_identifier_length == 0 {
        panic!("SECURITY: max_identifier_length must be non-zero");
    }

    if profile == "production" {
        if config.lexical.max_string_size > 1_048_576 {
            panic!("PRODUCTION: max_string_size too high for production");
        }
        if config.syntax.max_diagnostics > 10_000 {
            panic!("PRODUCTION: max_diagnostics too high for production");
        }
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_IDENTIFIER_LENGTH: usize = {};
        pub const MAX_STRING_SIZE: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
    }}

    pub mod syntax {{
        pub const MAX_PENDING_OPERATORS: usize = {};
        pub const MAX_DIAGNOSTICS: usize = {};
    }}
}}
"#,
        profile,
        // Lexical
        config.lexical.max_identifier_length,
        config.lexical.max_string_size,
        config.lexical.max_token_count,
        // Syntax
        config.syntax.max_pending_operators,
        config.syntax.max_diagnostics,
    );

    fs::write(output_path, constants_code).unwrap();
}
