use std::fmt::Write as _;

use bytespan_compiler::{CompileResult, Compiler, CompilerBuilder, PrintTracer as CompileTracer};
use bytespan_core::{Colors, Encoding};
use bytespan_vm::{Matcher, PrintTracer as MatchTracer};

pub struct MatchArgs {
    pub low: u64,
    pub high: u64,
    pub values: Vec<u64>,
    pub encoding: Encoding,
    pub memoize: bool,
    pub trace: bool,
    pub color: bool,
}

pub fn run(args: MatchArgs) {
    let colors = Colors::new(args.color);
    let result = if args.trace {
        run_traced(&args, colors)
    } else {
        render(&args, colors).map(|output| print!("{output}"))
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// One `<value> match|no match` line per value.
pub fn render(args: &MatchArgs, colors: Colors) -> CompileResult<String> {
    let automaton = builder(args).build().compile(args.low, args.high)?;
    let mut matcher = Matcher::new(&automaton);

    let mut out = String::new();
    for &value in &args.values {
        let matched = matcher.matches(value);
        writeln!(out, "{}", verdict(value, matched, colors)).unwrap();
    }
    Ok(out)
}

/// Compile trace, then each value's walk followed by its verdict.
fn run_traced(args: &MatchArgs, colors: Colors) -> CompileResult<()> {
    let mut compiler = builder(args).tracer(CompileTracer::new(colors)).build();
    let automaton = compiler.compile(args.low, args.high)?;
    compiler.tracer().print();

    for &value in &args.values {
        let mut matcher = Matcher::with_tracer(&automaton, MatchTracer::new(colors));
        let matched = matcher.matches(value);
        matcher.tracer().print();
        println!("{}", verdict(value, matched, colors));
    }
    Ok(())
}

fn builder(args: &MatchArgs) -> CompilerBuilder {
    Compiler::builder()
        .encoding(args.encoding)
        .memoize(args.memoize)
}

fn verdict(value: u64, matched: bool, colors: Colors) -> String {
    let word = if matched {
        colors.paint(colors.green, "match")
    } else {
        colors.paint(colors.red, "no match")
    };
    format!("{value:#x} {word}")
}
