use clap::Parser;
use spi::{
    ast::{AstPrinter, Program},
    frontend::tokenize,
    read,
    runtime::{Environment, Interpreter, Number},
    semantic::{SymbolTable, SymbolTableBuilder},
    utils::config::cli::{REPL_PROMPT, SOURCE_EXTENSION},
    utils::errors::SpiResult,
};
use std::io::{self, BufRead, Write};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Interpreter for a small Pascal subset",
    long_about = "Interpreter for a small Pascal subset.\n\
                 Source text is scanned, parsed into a syntax tree, checked for\n\
                 undeclared names and then evaluated. The final value of every\n\
                 variable is printed, sorted by name.\n\
                 \n\
                 Example usage:\n\
                 spi program.pas                   # Run a program\n\
                 spi program.pas --show-symbols    # Also print the symbol table\n\
                 spi program.pas --show-ast        # Display abstract syntax tree\n\
                 spi program.pas --timing          # Show per-phase timing\n\
                 spi                               # Interactive mode, one program per line"
)]
struct Cli {
    /// The program to run; starts an interactive session when omitted
    path: Option<PathBuf>,

    /// Print the token stream before parsing
    #[arg(long)]
    show_tokens: bool,

    /// Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    /// Print the symbol table after the declaration check
    #[arg(short = 's', long)]
    show_symbols: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show per-phase timing
    #[arg(short, long)]
    timing: bool,
}

// Run statistics for performance analysis
#[derive(Debug, Default)]
struct RunStats {
    lexer_time: f64,
    parser_time: f64,
    analysis_time: f64,
    interpret_time: f64,
    total_time: f64,
    token_count: usize,
    symbol_count: usize,
    variable_count: usize,
}

fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Scan the whole source up front; only needed for --show-tokens and --timing.
fn lexical_analysis(source: &str, args: &Cli, stats: &mut RunStats) -> SpiResult<()> {
    let lexer_start = Instant::now();
    let tokens = tokenize(source)?;
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if args.verbose {
        println!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens", stats.token_count);
    }
    if args.show_tokens {
        println!("\n Tokens:");
        for token in &tokens {
            println!("  {}", token);
        }
    }
    Ok(())
}

fn parsing_phase(source: &str, stats: &mut RunStats, verbose: bool) -> SpiResult<Program> {
    let parser_start = Instant::now();
    let program = spi::parse(source)?;
    stats.parser_time = parser_start.elapsed().as_secs_f64();

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
    }
    Ok(program)
}

fn analysis_phase(program: &Program, stats: &mut RunStats, verbose: bool) -> SpiResult<SymbolTable> {
    let analysis_start = Instant::now();
    let symbols = SymbolTableBuilder::new().build(program)?;
    stats.analysis_time = analysis_start.elapsed().as_secs_f64();
    stats.symbol_count = symbols.len();

    if verbose {
        println!("Declaration check completed in {:.3}s", stats.analysis_time);
        println!("  Defined {} symbols", stats.symbol_count);
    }
    Ok(symbols)
}

fn interpretation_phase(
    program: &Program,
    stats: &mut RunStats,
    verbose: bool,
) -> SpiResult<(Option<Number>, Environment)> {
    let interpret_start = Instant::now();
    let mut interpreter = Interpreter::new();
    let result = interpreter.interpret(program)?;
    let environment = interpreter.into_environment();
    stats.interpret_time = interpret_start.elapsed().as_secs_f64();
    stats.variable_count = environment.len();

    if verbose {
        println!("Evaluation completed in {:.3}s", stats.interpret_time);
        println!("  Assigned {} variables", stats.variable_count);
    }
    Ok((result, environment))
}

fn execute(source: &str, args: &Cli) -> SpiResult<(Option<Number>, Environment, RunStats)> {
    let start_time = Instant::now();
    let mut stats = RunStats::default();

    if args.show_tokens || args.timing {
        lexical_analysis(source, args, &mut stats)?;
    }

    let program = parsing_phase(source, &mut stats, args.verbose)?;
    if args.show_ast {
        println!("\n Abstract Syntax Tree:");
        print!("{}", AstPrinter::new().render(&program)?);
    }

    let symbols = analysis_phase(&program, &mut stats, args.verbose)?;
    if args.show_symbols {
        println!("\n Symbol Table:");
        println!("{}", symbols);
    }

    let (result, environment) = interpretation_phase(&program, &mut stats, args.verbose)?;
    stats.total_time = start_time.elapsed().as_secs_f64();

    if args.verbose {
        println!("Run completed in {:.3}s", stats.total_time);
    }
    Ok((result, environment, stats))
}

fn print_environment(environment: &Environment) {
    for (name, value) in environment {
        println!("{} = {}", name, value);
    }
}

// Print per-phase timings and run metrics
fn print_stats(stats: &RunStats) {
    println!("\n Run Statistics:");
    println!("+---------------------+-----------+");
    println!("| Phase               | Time (s)  |");
    println!("+---------------------+-----------+");
    println!("| Lexical Analysis    | {:>9.3} |", stats.lexer_time);
    println!("| Parsing             | {:>9.3} |", stats.parser_time);
    println!("| Declaration Check   | {:>9.3} |", stats.analysis_time);
    println!("| Evaluation          | {:>9.3} |", stats.interpret_time);
    println!("+---------------------+-----------+");
    println!("| Total Time          | {:>9.3} |", stats.total_time);
    println!("+---------------------+-----------+");

    println!("\n Metrics:");
    println!("  - Tokens:     {}", stats.token_count);
    println!("  - Symbols:    {}", stats.symbol_count);
    println!("  - Variables:  {}", stats.variable_count);
}

// One program per line until end of input. Errors are reported and the
// session goes on.
fn repl(args: &Cli) -> SpiResult<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", REPL_PROMPT);
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim().is_empty() {
            continue;
        }
        match execute(&line, args) {
            Ok((result, environment, stats)) => {
                match result {
                    Some(value) => println!("{}", value),
                    None => println!("(no value)"),
                }
                print_environment(&environment);
                if args.timing {
                    print_stats(&stats);
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }
    println!();
    Ok(())
}

fn main() {
    let args = Cli::parse();

    let path = match &args.path {
        Some(path) => path.clone(),
        None => {
            if let Err(e) = repl(&args) {
                fatal(&format!("Interactive session failed: {}", e));
            }
            return;
        }
    };

    // Validate input file extension
    if path.extension().map_or(true, |ext| ext != SOURCE_EXTENSION) {
        eprintln!("Warning: Input file does not have .{} extension", SOURCE_EXTENSION);
    }

    let source = match read(&path) {
        Ok(source) => source,
        Err(e) => fatal(&e.to_string()),
    };
    if args.verbose {
        println!("Read {} bytes from {}", source.len(), path.display());
    }

    match execute(&source, &args) {
        Ok((_, environment, stats)) => {
            print_environment(&environment);
            if args.timing {
                print_stats(&stats);
            }
        }
        Err(e) => fatal(&format!("Run failed: {}", e)),
    }
}
