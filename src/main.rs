use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use frontend::{format_error, parser::parser::parse};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("frontend");
        eprintln!("usage: {} <file>", program);
        return ExitCode::from(2);
    }

    let file_path: &str = &args[1];
    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.to_string());

    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::from(2);
        }
    };

    let start = Instant::now();
    let (program, errors) = parse(source.clone(), Some(file_name));
    eprintln!("Parsed in {:?}", start.elapsed());

    if !errors.is_empty() {
        for error in &errors {
            eprint!("{}", format_error(error, &source));
        }
        eprintln!("{} error(s)", errors.len());
        return ExitCode::from(1);
    }

    println!("{}", program);
    ExitCode::SUCCESS
}
