use arex_frontend::pipeline::{self, PipelineError, PipelineResult};
use arex_frontend::utils::SourceMap;
use std::env;
use std::fs;
use std::path::Path;
use std::process;

/// Output options parsed from the command line
#[derive(Default)]
struct CliOptions {
    /// Inline source passed with --expr instead of a file path
    expr: Option<String>,
    input_path: Option<String>,
    dump_tokens: bool,
    json_output: bool,
    quiet: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input.arex> [options]", args[0]);
        eprintln!("       {} --expr <source> [options]", args[0]);
        eprintln!("       {} --help", args[0]);
        process::exit(1);
    }

    if args[1] == "--help" || args[1] == "-h" {
        print_help(&args[0]);
        return;
    }

    let options = match parse_cli_options(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    let source = match read_source(&options) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    if !process_input(&source, &options) {
        process::exit(1);
    }
}

fn print_help(program_name: &str) {
    println!("Arex front end v{}", env!("CARGO_PKG_VERSION"));
    println!("Scans and parses Arex expression source");
    println!();
    println!("USAGE:");
    println!("    {} <input.arex> [options]", program_name);
    println!("    {} --expr <source> [options]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <input.arex>   Path to the source file to process");
    println!();
    println!("OPTIONS:");
    println!("    --help, -h     Show this help message");
    println!("    --expr SRC     Process SRC directly instead of a file");
    println!("    --tokens       Print the token sequence");
    println!("    --json         Emit the pipeline result as JSON");
    println!("    --quiet        Suppress the summary line");
    println!();
    println!("EXAMPLES:");
    println!("    {} program.arex", program_name);
    println!("    {} --expr \"1 + 2\" --tokens", program_name);
    println!("    {} program.arex --json", program_name);
    println!();
    println!(
        "Compile-time limits: {}",
        arex_frontend::config::build_info::source_info()
    );
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--expr" => {
                if i + 1 < args.len() {
                    options.expr = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    return Err("--expr requires a source argument".to_string());
                }
            }
            "--tokens" => {
                options.dump_tokens = true;
            }
            "--json" => {
                options.json_output = true;
            }
            "--quiet" => {
                options.quiet = true;
            }
            other if other.starts_with("--") => {
                eprintln!("Warning: Unknown option '{}'", other);
            }
            path => {
                if options.input_path.is_some() {
                    return Err(format!("Unexpected extra argument '{}'", path));
                }
                options.input_path = Some(path.to_string());
            }
        }
        i += 1;
    }

    if options.expr.is_none() && options.input_path.is_none() {
        return Err("No input given; pass a file path or --expr".to_string());
    }
    if options.expr.is_some() && options.input_path.is_some() {
        return Err("Pass either a file path or --expr, not both".to_string());
    }

    Ok(options)
}

fn read_source(options: &CliOptions) -> Result<String, String> {
    if let Some(expr) = &options.expr {
        return Ok(expr.clone());
    }

    let path = options.input_path.as_deref().expect("validated in parsing");
    if !Path::new(path).is_file() {
        return Err(format!("Input must be a readable file: {}", path));
    }

    fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))
}

/// Run the pipeline and print results; returns false on failure
fn process_input(source: &str, options: &CliOptions) -> bool {
    match pipeline::process_source(source) {
        Ok(result) => {
            print_result(&result, options);
            true
        }
        Err(error) => {
            print_failure(source, &error);
            false
        }
    }
}

fn print_result(result: &PipelineResult, options: &CliOptions) {
    if options.json_output {
        match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: Failed to serialize result: {}", e),
        }
        return;
    }

    if options.dump_tokens {
        for token in &result.tokens {
            println!("{}:{} {}", token.line, token.column, token);
        }
    }

    for root in &result.roots {
        println!("{}", root);
    }

    for diagnostic in &result.diagnostics {
        eprintln!("{}", diagnostic);
    }

    if !options.quiet {
        println!(
            "ok: {} token(s), {} expression(s), {} diagnostic(s)",
            result.token_count(),
            result.roots.len(),
            result.diagnostics.len()
        );
    }
}

fn print_failure(source: &str, error: &PipelineError) {
    eprintln!("FAILED: {}", error);

    let source_map = SourceMap::new(source.to_string());

    match error {
        PipelineError::Lexical { diagnostics } => {
            for diagnostic in diagnostics {
                match &diagnostic.span {
                    Some(span) => {
                        eprint!("{}", source_map.format_error(span, &diagnostic.message))
                    }
                    None => eprintln!("{}", diagnostic),
                }
                eprintln!("  = help: {}", diagnostic.recommended_action());
            }
        }
        PipelineError::Syntax(parse_error) => {
            eprintln!("error[{}]: {}", parse_error.error_code(), parse_error);
        }
    }
}
